use crate::models::{Dataset, IndicatorParams};
use std::sync::Arc;

/// Shared, read-only request state
/// The dataset is injected once at startup and never mutated
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub default_params: IndicatorParams,
}

impl AppState {
    pub fn new(dataset: Dataset, default_params: IndicatorParams) -> Self {
        Self {
            dataset: Arc::new(dataset),
            default_params,
        }
    }
}
