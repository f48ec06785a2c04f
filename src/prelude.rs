pub use crate::config::{Config, IdPolicy, PersistMode};
pub use crate::domain::{
    contact::{self, Contact, ContactForm},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::server::{AppState, build_router};
pub use crate::store::{self, ContactStore, JsonStore, MemStore, Persistence, WriteBehind};
