pub use config_file::ConfigFile;
pub use std_console::StdConsole;
pub use std_host::StdHost;
pub use std_platform::StdPlatform;

pub mod address;
mod config_file;
mod std_console;
mod std_host;
mod std_platform;
