use crate::hal::console::Console;
use crate::hal::host::Host;
use crate::hal::storage::Storage;

pub mod console;
pub mod host;
pub mod storage;

pub trait Platform {
    fn console(&self) -> &(dyn Console + '_);
    fn host(&self) -> &(dyn Host + '_);
    fn storage(&self) -> &(dyn Storage + '_);
}
