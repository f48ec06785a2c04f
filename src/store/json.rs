use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

pub const STORAGE_PATH: &str = "contacts.json";

pub struct JsonStore {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Pretty printer indents with two spaces.
        let json_contacts = serde_json::to_string_pretty(contacts)?;

        // Written beside the target and renamed over it, so a crash never
        // leaves a half-written file behind.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json_contacts.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
