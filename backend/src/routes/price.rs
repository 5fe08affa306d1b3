use crate::{models::Dataset, state::AppState};
use axum::{extract::State, Json};

pub async fn get_prices(State(state): State<AppState>) -> Json<Dataset> {
    Json(state.dataset.as_ref().clone())
}
