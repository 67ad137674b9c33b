//! Contact endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error_response, paginate, PageQuery};
use crate::mock_server::state::SharedState;
use crate::{
    ContactUpdate, DataEnvelope, DeleteContact, EmptyEnvelope, NewContact, PagedEnvelope,
    MAX_CONTACT_BATCH,
};

fn invalid_email(email: &str) -> bool {
    !email.contains('@')
}

/// POST /contacts
pub async fn create_contact(
    State(state): State<SharedState>,
    Json(params): Json<NewContact>,
) -> Response {
    if invalid_email(&params.email) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid email address");
    }

    let mut state = state.write().await;

    if state.get_contact(&params.email).is_some() {
        return error_response(StatusCode::CONFLICT, "Contact already exists");
    }

    let contact = state.insert_contact(params);
    (StatusCode::OK, Json(DataEnvelope::new(contact))).into_response()
}

/// POST /contacts/batch
pub async fn create_contacts_batch(
    State(state): State<SharedState>,
    Json(batch): Json<Vec<NewContact>>,
) -> Response {
    if batch.len() > MAX_CONTACT_BATCH {
        return error_response(
            StatusCode::BAD_REQUEST,
            &format!("A batch may hold at most {MAX_CONTACT_BATCH} contacts"),
        );
    }
    if batch.iter().any(|c| invalid_email(&c.email)) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid email address");
    }

    let mut state = state.write().await;

    if let Some(existing) = batch.iter().find(|c| state.get_contact(&c.email).is_some()) {
        return error_response(
            StatusCode::CONFLICT,
            &format!("Contact {} already exists", existing.email),
        );
    }

    for contact in batch {
        state.insert_contact(contact);
    }

    (StatusCode::OK, Json(EmptyEnvelope::ok())).into_response()
}

/// PATCH /contacts/{email}
pub async fn update_contact(
    State(state): State<SharedState>,
    Path(email): Path<String>,
    Json(params): Json<ContactUpdate>,
) -> Response {
    let mut state = state.write().await;

    match state.update_contact(&email, params) {
        Some(contact) => (StatusCode::OK, Json(DataEnvelope::new(contact))).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Contact not found"),
    }
}

/// POST /contacts/delete
pub async fn delete_contact(
    State(state): State<SharedState>,
    Json(params): Json<DeleteContact>,
) -> Response {
    let mut state = state.write().await;

    match state.remove_contact(&params.email) {
        Some(_) => (StatusCode::OK, Json(EmptyEnvelope::ok())).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Contact not found"),
    }
}

/// GET /contacts
pub async fn list_contacts(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let Some((page, per)) = query.resolve() else {
        return error_response(StatusCode::BAD_REQUEST, "Page numbers start at 1");
    };

    let state = state.read().await;
    let all_contacts = state.list_contacts();
    let total = all_contacts.len() as u64;

    let data = paginate(&all_contacts, page, per);
    (
        StatusCode::OK,
        Json(PagedEnvelope::new(data, page, per, total)),
    )
        .into_response()
}
