//! Preference portal endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use super::error_response;
use crate::mock_server::state::SharedState;
use crate::{DataEnvelope, PortalSession, PortalSessionRequest};

/// POST /portal/sessions
pub async fn create_portal_session(
    State(state): State<SharedState>,
    Json(params): Json<PortalSessionRequest>,
) -> Response {
    if url::Url::parse(&params.return_url).is_err() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid return URL");
    }

    let mut state = state.write().await;

    if state.get_contact(&params.email).is_none() {
        return error_response(StatusCode::NOT_FOUND, "Contact not found");
    }

    let token = state.next_id();
    let session = PortalSession::starting_at(
        format!("https://portal.postlane.com/session/ps_{token}"),
        Utc::now(),
    );
    state.portal_sessions.push(session.clone());

    (StatusCode::OK, Json(DataEnvelope::new(session))).into_response()
}
