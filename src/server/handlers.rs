use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use super::AppState;
use super::response::{AddedBody, DataBody, DeletedBody, MessageBody};
use crate::prelude::{AppError, Contact, ContactForm};

fn read_form(payload: Result<Json<ContactForm>, JsonRejection>) -> Result<ContactForm, AppError> {
    payload
        .map(|Json(form)| form)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

pub async fn list_contacts(State(state): State<AppState>) -> Json<DataBody<Vec<Contact>>> {
    let manager = state.contacts.read().await;
    Json(DataBody::new(manager.contact_list().to_vec()))
}

pub async fn search_contact(
    State(state): State<AppState>,
    Path(param): Path<String>,
) -> Result<Json<DataBody<Contact>>, AppError> {
    let manager = state.contacts.read().await;
    let contact = manager.search(&param)?;
    Ok(Json(DataBody::new(contact.clone())))
}

pub async fn add_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<AddedBody>, AppError> {
    let form = read_form(payload)?;
    let mut manager = state.contacts.write().await;
    let id = manager.add_contact(form)?;
    Ok(Json(AddedBody::new(id)))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeletedBody>, AppError> {
    let mut manager = state.contacts.write().await;
    let deleted = manager.delete_contact(&name)?;
    Ok(Json(DeletedBody::new(deleted)))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<MessageBody>, AppError> {
    let form = read_form(payload)?;
    let mut manager = state.contacts.write().await;
    manager.update_contact(&name, form)?;
    Ok(Json(MessageBody::success("Contact updated successfully")))
}
