use crate::{dto::WeatherDto, state::AppState};
use axum::{Json, extract::State};
use std::sync::Arc;

pub async fn weather(State(state): State<Arc<AppState>>) -> Json<WeatherDto> {
    let report = state.weather.fetch_report().await;
    Json(WeatherDto::from(&report))
}
