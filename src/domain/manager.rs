use crate::config::IdPolicy;
use crate::domain::search::{conflicts_with, find_index, matches_any_field, matches_name};
use crate::prelude::{AppError, Contact, ContactForm};
use crate::store::{ContactStore, Persistence};
use tracing::{debug, error, info, warn};

/// Owns the ordered contact list and pushes every mutation to storage.
pub struct ContactManager {
    mem: Vec<Contact>,
    persistence: Persistence,
    id_policy: IdPolicy,
    last_issued_id: u64,
}

impl ContactManager {
    pub fn new(contacts: Vec<Contact>, persistence: Persistence, id_policy: IdPolicy) -> Self {
        Self {
            mem: contacts,
            persistence,
            id_policy,
            last_issued_id: 0,
        }
    }

    /// Reads the initial list from `source`. A failed load is logged and the
    /// manager starts empty.
    pub fn load(source: &dyn ContactStore, persistence: Persistence, id_policy: IdPolicy) -> Self {
        let contacts = match source.load() {
            Ok(contacts) => {
                info!(
                    medium = source.get_medium(),
                    contacts = contacts.len(),
                    "contacts loaded"
                );
                contacts
            }
            Err(e) => {
                error!(error = %e, "Error loading contacts");
                Vec::new()
            }
        };

        Self::new(contacts, persistence, id_policy)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    /// First contact whose first name, last name or phone equals `param`.
    pub fn search(&self, param: &str) -> Result<&Contact, AppError> {
        self.mem
            .iter()
            .find(|contact| matches_any_field(contact, param))
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    pub fn add_contact(&mut self, form: ContactForm) -> Result<u64, AppError> {
        if self.mem.iter().any(|contact| conflicts_with(contact, &form)) {
            return Err(AppError::AlreadyExists("properties".to_string()));
        }

        let previous = self.mem.clone();
        let id = self.next_id()?;
        self.mem.push(Contact::new(id, form));
        self.commit(previous)?;

        self.last_issued_id = self.last_issued_id.max(id);
        debug!(id, "contact added");
        Ok(id)
    }

    /// Removes the first contact whose first or last name equals `name`.
    pub fn delete_contact(&mut self, name: &str) -> Result<Contact, AppError> {
        let index = find_index(&self.mem, |contact| matches_name(contact, name))
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        let previous = self.mem.clone();
        let deleted = self.mem.remove(index);
        self.commit(previous)?;

        debug!(id = deleted.id, "contact deleted");
        Ok(deleted)
    }

    /// Replaces the fields of the first contact whose first or last name
    /// equals `name`, keeping its id. The new phone may not belong to any
    /// other contact.
    pub fn update_contact(&mut self, name: &str, form: ContactForm) -> Result<&Contact, AppError> {
        let index = find_index(&self.mem, |contact| matches_name(contact, name))
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        let phone_taken = self
            .mem
            .iter()
            .enumerate()
            .any(|(idx, contact)| idx != index && contact.phone == form.phone);
        if phone_taken {
            return Err(AppError::AlreadyExists("phone number".to_string()));
        }

        let previous = self.mem.clone();
        self.mem[index].apply(form);
        self.commit(previous)?;

        debug!(id = self.mem[index].id, "contact updated");
        Ok(&self.mem[index])
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn medium(&self) -> &str {
        self.persistence.medium()
    }

    /// Flushes queued background writes. Immediate persistence has nothing pending.
    pub async fn close(&mut self) {
        if let Persistence::Background(writer) = &mut self.persistence {
            writer.close().await;
        }
    }

    fn next_id(&self) -> Result<u64, AppError> {
        let last = match self.id_policy {
            IdPolicy::Sequential => self.mem.len() as u64,
            IdPolicy::Monotonic => {
                let highest = self.mem.iter().map(|c| c.id).max().unwrap_or(0);
                highest.max(self.last_issued_id)
            }
        };

        last.checked_add(1)
            .ok_or_else(|| AppError::Validation("no contact ids left to assign".to_string()))
    }

    /// Hands the current list to storage. When an immediate write fails the
    /// list is put back to `previous` so memory and disk stay in step.
    /// Immediate writes run on the calling task while the write lock is held.
    fn commit(&mut self, previous: Vec<Contact>) -> Result<(), AppError> {
        match &self.persistence {
            Persistence::Immediate(store) => {
                if let Err(e) = store.save(&self.mem) {
                    error!(error = %e, "Error saving contacts");
                    self.mem = previous;
                    return Err(AppError::Persistence(e.to_string()));
                }
                info!(contacts = self.mem.len(), "Contacts saved to file.");
            }
            Persistence::Background(writer) => {
                if let Err(e) = writer.enqueue(self.mem.clone()) {
                    warn!(error = %e, "contacts not queued for saving");
                }
            }
        }
        Ok(())
    }
}
