pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod server;
pub mod store;
pub mod telemetry;

use std::sync::Arc;

use crate::prelude::{Config, ContactManager, JsonStore, PersistMode, Persistence, WriteBehind};

/// Builds the contact manager described by `config`, loading the backing file.
/// Background persistence spawns its writer, so this must run inside a tokio runtime.
pub fn open_manager(config: &Config) -> ContactManager {
    let store = Arc::new(JsonStore::new(&config.storage_path));

    let persistence = match config.persist_mode {
        PersistMode::Immediate => Persistence::Immediate(store.clone()),
        PersistMode::Background => Persistence::Background(WriteBehind::spawn(store.clone())),
    };

    ContactManager::load(store.as_ref(), persistence, config.id_policy)
}
