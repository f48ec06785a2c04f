pub mod json;
pub mod memory;
pub mod writer;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::prelude::{AppError, Contact};

pub use json::JsonStore;
pub use memory::MemStore;
pub use writer::WriteBehind;

pub trait ContactStore: Send + Sync {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

/// How a mutation reaches the backing store.
pub enum Persistence {
    /// Written before the request returns; failures reach the caller.
    Immediate(Arc<dyn ContactStore>),
    /// Handed to a write-behind task; failures are only logged.
    Background(WriteBehind),
}

impl Persistence {
    pub fn immediate<S: ContactStore + 'static>(store: S) -> Self {
        Persistence::Immediate(Arc::new(store))
    }

    pub fn medium(&self) -> &str {
        match self {
            Persistence::Immediate(store) => store.get_medium(),
            Persistence::Background(writer) => writer.medium(),
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
