use axum::{extract::{Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    indicators::MAX_PERIOD,
    models::{DashboardReport, IndicatorParams, IndicatorSelection},
    services::analytics_service,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct IndicatorQuery {
    pub metrics: Option<String>,   // comma-separated: "movingAverage,volatility,rsi"
    pub ma_period: Option<usize>,
    pub rsi_period: Option<usize>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

fn check_period(name: &str, period: usize) -> Result<(), ApiError> {
    if period == 0 || period > MAX_PERIOD {
        return Err(bad_request(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_PERIOD, period
        )));
    }
    Ok(())
}

pub async fn get_indicators(
    State(state): State<AppState>,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<DashboardReport>, ApiError> {
    // No metrics param means the default dashboard view (everything)
    let selection = match query.metrics.as_deref() {
        Some(metrics) => metrics
            .parse::<IndicatorSelection>()
            .map_err(|e| bad_request(e.to_string()))?,
        None => IndicatorSelection::all(),
    };

    let params = IndicatorParams {
        ma_period: query.ma_period.unwrap_or(state.default_params.ma_period),
        rsi_period: query.rsi_period.unwrap_or(state.default_params.rsi_period),
    };

    // Only periods of metrics that will actually be computed matter
    if selection.moving_average {
        check_period("ma_period", params.ma_period)?;
    }
    if selection.rsi {
        check_period("rsi_period", params.rsi_period)?;
    }

    let report = analytics_service::compute_dashboard(&state.dataset, selection, params);
    Ok(Json(report))
}
