use serde::Serialize;

use crate::prelude::Contact;

const SUCCESS: &str = "success";
const ERROR: &str = "error";

/// `{ "data": ... }` envelope for read endpoints.
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AddedBody {
    pub status: &'static str,
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedBody {
    pub status: &'static str,
    pub message: &'static str,
    pub deleted_contact: Contact,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl ErrorBody {
    pub fn new(message: String) -> Self {
        Self {
            status: ERROR,
            message,
        }
    }
}

impl AddedBody {
    pub fn new(id: u64) -> Self {
        Self {
            status: SUCCESS,
            id,
        }
    }
}

impl MessageBody {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: SUCCESS,
            message,
        }
    }
}

impl DeletedBody {
    pub fn new(deleted_contact: Contact) -> Self {
        Self {
            status: SUCCESS,
            message: "Contact deleted successfully",
            deleted_contact,
        }
    }
}
