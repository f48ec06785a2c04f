pub mod contact;
pub mod manager;
pub mod search;

pub use contact::{Contact, ContactForm};
pub use manager::ContactManager;
