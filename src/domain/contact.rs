use serde::{Deserialize, Serialize};

/// A stored contact. Field order matches the backing file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub id: u64,
}

/// Body of add and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(id: u64, form: ContactForm) -> Self {
        Contact {
            first_name: form.first_name,
            last_name: form.last_name,
            phone: form.phone,
            id,
        }
    }

    /// Replaces every field except `id`.
    pub fn apply(&mut self, form: ContactForm) {
        self.first_name = form.first_name;
        self.last_name = form.last_name;
        self.phone = form.phone;
    }

    pub fn has_full_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

impl ContactForm {
    pub fn new(first_name: &str, last_name: &str, phone: &str) -> Self {
        ContactForm {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
        }
    }
}
