use crate::{
    dto::{BoardDto, ErrorDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

pub async fn departures(State(state): State<Arc<AppState>>) -> Response {
    match state.fetcher.fetch_board().await {
        Ok(board) => {
            let dto = BoardDto::from(&board);
            *state.last_good.write().await = Some(board);
            Json(dto).into_response()
        }
        Err(err) => {
            error!("Failed to fetch departures: {err}");
            match state.last_good.read().await.as_ref() {
                Some(board) => Json(BoardDto::stale(board, err.to_string())).into_response(),
                None => (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new(err.to_string())),
                )
                    .into_response(),
            }
        }
    }
}
