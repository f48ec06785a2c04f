use crate::prelude::{Contact, ContactForm};

/// Exact, case-sensitive match on first name, last name or phone.
pub fn matches_any_field(contact: &Contact, param: &str) -> bool {
    contact.first_name == param || contact.last_name == param || contact.phone == param
}

/// Exact, case-sensitive match on first or last name.
pub fn matches_name(contact: &Contact, name: &str) -> bool {
    contact.first_name == name || contact.last_name == name
}

/// Duplicate rule for new contacts: same full name, or same phone.
pub fn conflicts_with(contact: &Contact, form: &ContactForm) -> bool {
    contact.has_full_name(&form.first_name, &form.last_name) || contact.phone == form.phone
}

pub fn find_index<F>(contacts: &[Contact], predicate: F) -> Option<usize>
where
    F: Fn(&Contact) -> bool,
{
    contacts.iter().position(predicate)
}
