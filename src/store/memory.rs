use super::*;

use std::sync::Mutex;

/// Keeps the last saved snapshot in memory. Used where no file is wanted.
#[derive(Default)]
pub struct MemStore {
    data: Mutex<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let data = self
            .data
            .lock()
            .map_err(|_| AppError::Persistence("memory store lock poisoned".to_string()))?;
        Ok(data.clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::Persistence("memory store lock poisoned".to_string()))?;
        *data = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
