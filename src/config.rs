use crate::error::{Result, TrackerError};
use std::path::PathBuf;

pub const DATA_FILE_NAME: &str = "applications.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub page_size: usize,
}

impl Settings {
    /// Uses `data_file` when given, otherwise `~/applications.json`.
    pub fn resolve(data_file: Option<PathBuf>, page_size: usize) -> Result<Self> {
        let data_file = match data_file {
            Some(path) => path,
            None => default_data_file()?,
        };

        Ok(Self {
            data_file,
            page_size: page_size.max(1),
        })
    }
}

pub fn default_data_file() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(TrackerError::HomeDirNotFound)?;
    Ok(home.join(DATA_FILE_NAME))
}
