//! Contact list endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error_response, paginate, PageQuery};
use crate::mock_server::state::SharedState;
use crate::PagedEnvelope;

/// GET /lists
pub async fn list_lists(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let Some((page, per)) = query.resolve() else {
        return error_response(StatusCode::BAD_REQUEST, "Page numbers start at 1");
    };

    let state = state.read().await;
    let all_lists = state.list_lists();
    let total = all_lists.len() as u64;

    let data = paginate(&all_lists, page, per);
    (
        StatusCode::OK,
        Json(PagedEnvelope::new(data, page, per, total)),
    )
        .into_response()
}
