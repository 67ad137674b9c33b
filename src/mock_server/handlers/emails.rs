//! E-mail endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error_response;
use crate::mock_server::state::{SentEmail, SharedState};
use crate::{ContactEmail, EmptyEnvelope, ListEmail, TransactionalEmail};

/// POST /emails/transactional
pub async fn send_transactional(
    State(state): State<SharedState>,
    Json(email): Json<TransactionalEmail>,
) -> Response {
    if email.subject.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Subject is required");
    }

    state
        .write()
        .await
        .sent_emails
        .push(SentEmail::Transactional(email));

    (StatusCode::OK, Json(EmptyEnvelope::ok())).into_response()
}

/// POST /emails/contacts
pub async fn send_to_contacts(
    State(state): State<SharedState>,
    Json(email): Json<ContactEmail>,
) -> Response {
    if email.emails.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "At least one recipient is required");
    }

    let mut state = state.write().await;

    if let Some(missing) = email.emails.iter().find(|e| state.get_contact(e).is_none()) {
        return error_response(
            StatusCode::NOT_FOUND,
            &format!("Contact {missing} not found"),
        );
    }

    state.sent_emails.push(SentEmail::Contacts(email));
    (StatusCode::OK, Json(EmptyEnvelope::ok())).into_response()
}

/// POST /emails/list
pub async fn send_to_list(
    State(state): State<SharedState>,
    Json(email): Json<ListEmail>,
) -> Response {
    let mut state = state.write().await;

    if !state.lists.contains_key(&email.list_id) {
        return error_response(StatusCode::NOT_FOUND, "List not found");
    }

    state.sent_emails.push(SentEmail::List(email));
    (StatusCode::OK, Json(EmptyEnvelope::ok())).into_response()
}
