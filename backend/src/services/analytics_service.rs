use crate::indicators::{self, rsi::align_to_series, IndicatorError};
use crate::models::*;
use tracing::{debug, warn};

/// Compute every selected metric over the dataset
/// A failing metric is reported as unavailable; the others are unaffected
pub fn compute_dashboard(
    dataset: &Dataset,
    selection: IndicatorSelection,
    params: IndicatorParams,
) -> DashboardReport {
    let prices = dataset.prices();

    debug!(
        "Computing {:?} over {} prices (ma_period={}, rsi_period={})",
        selection,
        prices.len(),
        params.ma_period,
        params.rsi_period
    );

    let moving_average = selection.moving_average.then(|| {
        outcome(
            "moving average",
            indicators::moving_average(prices, params.ma_period).map(|values| {
                MovingAverageSeries {
                    period: params.ma_period,
                    values,
                }
            }),
        )
    });

    let volatility = selection
        .volatility
        .then(|| outcome("volatility", indicators::volatility(prices)));

    let rsi = selection.rsi.then(|| {
        outcome(
            "rsi",
            indicators::rsi(prices, params.rsi_period).map(|values| RsiSeries {
                period: params.rsi_period,
                aligned: align_to_series(&values, prices.len()),
                values,
            }),
        )
    });

    let summary = summarize(moving_average.as_ref(), volatility.as_ref(), rsi.as_ref());

    DashboardReport {
        dates: dataset.dates().to_vec(),
        prices: prices.to_vec(),
        selection,
        moving_average,
        volatility,
        rsi,
        summary,
    }
}

fn outcome<T>(metric: &str, result: Result<T, IndicatorError>) -> MetricOutcome<T> {
    match result {
        Ok(value) => MetricOutcome::Available { value },
        Err(e) => {
            warn!("{} unavailable: {}", metric, e);
            MetricOutcome::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

fn summarize(
    moving_average: Option<&MetricOutcome<MovingAverageSeries>>,
    volatility: Option<&MetricOutcome<f64>>,
    rsi: Option<&MetricOutcome<RsiSeries>>,
) -> MetricSummary {
    MetricSummary {
        moving_average: moving_average
            .and_then(MetricOutcome::value)
            .and_then(|ma| ma.values.iter().rev().find_map(|v| *v))
            .map(|v| v.to_string()),
        volatility: volatility
            .and_then(MetricOutcome::value)
            .map(|v| format!("{:.4}", v)),
        rsi: rsi
            .and_then(MetricOutcome::value)
            .and_then(|series| series.values.last())
            .map(|v| format!("{:.2}", v)),
    }
}
