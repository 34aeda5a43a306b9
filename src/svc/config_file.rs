use std::path::PathBuf;

use anyhow::Context;

use crate::hal::storage::Storage;

pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for ConfigFile {
    fn persist(&self, text: &str) -> anyhow::Result<()> {
        log::info!("Writing {}", self.path.display());
        std::fs::write(&self.path, text)
            .with_context(|| format!("Cannot write {}", self.path.display()))
    }
}
