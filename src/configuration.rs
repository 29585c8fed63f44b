use std::path::{Path, PathBuf};

pub struct Configuration {
    database_path: PathBuf,
}

impl Configuration {
    pub fn new(database_path: PathBuf) -> Configuration {
        Configuration { database_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}
