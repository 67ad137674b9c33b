//! HTTP request handlers for the mock server.

pub mod contacts;
pub mod emails;
pub mod lists;
pub mod portal;

pub use contacts::*;
pub use emails::*;
pub use lists::*;
pub use portal::*;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::mock_server::state::SharedState;
use crate::ErrorEnvelope;

/// Query parameters shared by the paginated endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per: Option<u32>,
}

impl PageQuery {
    /// Resolve defaults; `None` for page 0.
    pub fn resolve(&self) -> Option<(u32, u32)> {
        let page = self.page.unwrap_or(1);
        let per = self.per.unwrap_or(20);
        (page >= 1).then_some((page, per))
    }
}

/// Build an error envelope response.
pub fn error_response(status: StatusCode, reason: &str) -> Response {
    (status, Json(ErrorEnvelope::new(reason))).into_response()
}

/// Slice one 1-indexed page out of `items`.
pub fn paginate<T: Clone>(items: &[T], page: u32, per: u32) -> Vec<T> {
    let start = (page as usize - 1).saturating_mul(per as usize);
    items
        .iter()
        .skip(start)
        .take(per as usize)
        .cloned()
        .collect()
}

/// Reject requests without the configured bearer token.
pub async fn require_token(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let required = state.read().await.required_token.clone();

    if let Some(token) = required {
        let expected = format!("Bearer {token}");
        let provided = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if provided != Some(expected.as_str()) {
            return error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
        }
    }

    next.run(request).await
}
