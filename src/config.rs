use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::store::json::STORAGE_PATH;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Parser, Debug, Clone)]
#[command(name = "rusty-contacts", version, about = "Contact list HTTP service")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "CONTACTS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "CONTACTS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file holding the contact list
    #[arg(long, env = "CONTACTS_STORAGE_PATH", default_value = STORAGE_PATH)]
    pub storage_path: PathBuf,

    /// When mutations are written to the storage file
    #[arg(long, env = "CONTACTS_PERSIST_MODE", value_enum, default_value_t = PersistMode::Immediate)]
    pub persist_mode: PersistMode,

    /// How new contact ids are assigned
    #[arg(long, env = "CONTACTS_ID_POLICY", value_enum, default_value_t = IdPolicy::Monotonic)]
    pub id_policy: IdPolicy,

    /// Emit logs as JSON lines
    #[arg(long, env = "CONTACTS_LOG_JSON")]
    pub log_json: bool,
}

/// Supported persistence modes
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PersistMode {
    /// Write before responding; a failed write is reported and undone
    Immediate,
    /// Queue the write and respond at once; failures are only logged
    Background,
}

/// Supported id assignment schemes
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdPolicy {
    /// One past the highest id seen, never reused while running
    Monotonic,
    /// Current number of contacts plus one (may repeat after deletes)
    Sequential,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            storage_path: PathBuf::from(STORAGE_PATH),
            persist_mode: PersistMode::Immediate,
            id_policy: IdPolicy::Monotonic,
            log_json: false,
        }
    }
}
