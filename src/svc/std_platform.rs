use crate::config::Config;
use crate::hal::console::Console;
use crate::hal::host::Host;
use crate::hal::storage::Storage;
use crate::hal::Platform;
use crate::svc::{ConfigFile, StdConsole, StdHost};

pub struct StdPlatform {
    console: StdConsole,
    host: StdHost,
    storage: ConfigFile,
}

impl StdPlatform {
    pub fn new(config: &Config) -> Self {
        Self {
            console: StdConsole,
            host: StdHost,
            storage: ConfigFile::new(&config.output_path),
        }
    }
}

impl Platform for StdPlatform {
    fn console(&self) -> &(dyn Console + '_) {
        &self.console
    }

    fn host(&self) -> &(dyn Host + '_) {
        &self.host
    }

    fn storage(&self) -> &(dyn Storage + '_) {
        &self.storage
    }
}
