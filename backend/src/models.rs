use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::indicators::{DEFAULT_MA_PERIOD, DEFAULT_RSI_PERIOD};

const SAMPLE_START: (i32, u32, u32) = (2025, 3, 1);
const SAMPLE_PRICES: [f64; 10] = [
    100.0, 102.0, 101.0, 104.0, 106.0, 108.0, 107.0, 110.0, 112.0, 115.0,
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has {dates} dates but {prices} prices")]
    LengthMismatch { dates: usize, prices: usize },
    #[error("dataset is empty")]
    Empty,
    #[error("price at index {index} is not finite")]
    NonFinitePrice { index: usize },
    #[error("invalid sample date")]
    InvalidDate,
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Chronological price series with one date per price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
}

#[derive(Deserialize)]
struct DatasetFile {
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
}

impl Dataset {
    pub fn new(dates: Vec<NaiveDate>, prices: Vec<f64>) -> Result<Self, DatasetError> {
        if dates.len() != prices.len() {
            return Err(DatasetError::LengthMismatch {
                dates: dates.len(),
                prices: prices.len(),
            });
        }
        if prices.is_empty() {
            return Err(DatasetError::Empty);
        }
        if let Some(index) = prices.iter().position(|p| !p.is_finite()) {
            return Err(DatasetError::NonFinitePrice { index });
        }
        Ok(Self { dates, prices })
    }

    /// Ten daily prices starting 2025-03-01
    pub fn sample() -> Result<Self, DatasetError> {
        let (year, month, day) = SAMPLE_START;
        let start = NaiveDate::from_ymd_opt(year, month, day).ok_or(DatasetError::InvalidDate)?;
        let dates = start.iter_days().take(SAMPLE_PRICES.len()).collect();
        Self::new(dates, SAMPLE_PRICES.to_vec())
    }

    /// Load `{ "dates": [...], "prices": [...] }` from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(content)?;
        Self::new(file.dates, file.prices)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }
}

/// Which metrics the dashboard asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSelection {
    pub moving_average: bool,
    pub volatility: bool,
    pub rsi: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric: {0}")]
pub struct SelectionError(pub String);

impl IndicatorSelection {
    pub fn all() -> Self {
        Self {
            moving_average: true,
            volatility: true,
            rsi: true,
        }
    }

    pub fn none() -> Self {
        Self {
            moving_average: false,
            volatility: false,
            rsi: false,
        }
    }
}

impl FromStr for IndicatorSelection {
    type Err = SelectionError;

    /// Comma-separated metric names, e.g. "movingAverage,rsi"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut selection = Self::none();

        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name {
                "movingAverage" | "moving_average" | "ma" => selection.moving_average = true,
                "volatility" => selection.volatility = true,
                "rsi" => selection.rsi = true,
                other => return Err(SelectionError(other.to_string())),
            }
        }

        Ok(selection)
    }
}

/// Window sizes for the windowed indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub ma_period: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_period: DEFAULT_MA_PERIOD,
            rsi_period: DEFAULT_RSI_PERIOD,
        }
    }
}

/// Result of one metric: either a value or the reason it can't be shown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome<T> {
    Available { value: T },
    Unavailable { reason: String },
}

impl<T> MetricOutcome<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            MetricOutcome::Available { value } => Some(value),
            MetricOutcome::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsiSeries {
    pub period: usize,
    /// One value per price from index `period` onward
    pub values: Vec<f64>,
    /// Same values padded with leading nulls to match the date axis
    pub aligned: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverageSeries {
    pub period: usize,
    pub values: Vec<Option<f64>>,
}

/// Latest value of each available metric, formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub moving_average: Option<String>,
    pub volatility: Option<String>,
    pub rsi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    pub selection: IndicatorSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<MetricOutcome<MovingAverageSeries>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<MetricOutcome<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<MetricOutcome<RsiSeries>>,
    pub summary: MetricSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.prices()[9], 115.0);
        assert_eq!(dataset.dates()[0].to_string(), "2025-03-01");
        assert_eq!(dataset.dates()[9].to_string(), "2025-03-10");
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let dates = Dataset::sample().unwrap().dates()[..3].to_vec();
        let err = Dataset::new(dates, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DatasetError::LengthMismatch { dates: 3, prices: 2 }));
    }

    #[test]
    fn test_dataset_rejects_empty_and_nan() {
        assert!(matches!(Dataset::new(vec![], vec![]), Err(DatasetError::Empty)));

        let dates = Dataset::sample().unwrap().dates()[..2].to_vec();
        let err = Dataset::new(dates, vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, DatasetError::NonFinitePrice { index: 1 }));
    }

    #[test]
    fn test_dataset_from_json() {
        let dataset = Dataset::from_json_str(
            r#"{ "dates": ["2024-01-01", "2024-01-02"], "prices": [10.0, 11.5] }"#,
        )
        .unwrap();
        assert_eq!(dataset.prices(), &[10.0, 11.5]);

        assert!(matches!(
            Dataset::from_json_str(r#"{ "dates": ["not-a-date"], "prices": [1.0] }"#),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_dataset_missing_file() {
        let err = Dataset::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_selection_parse() {
        let selection: IndicatorSelection = "movingAverage, rsi".parse().unwrap();
        assert!(selection.moving_average);
        assert!(!selection.volatility);
        assert!(selection.rsi);

        let selection: IndicatorSelection = "volatility".parse().unwrap();
        assert_eq!(
            selection,
            IndicatorSelection {
                moving_average: false,
                volatility: true,
                rsi: false
            }
        );

        assert_eq!("".parse::<IndicatorSelection>().unwrap(), IndicatorSelection::none());
    }

    #[test]
    fn test_selection_unknown_metric() {
        let err = "rsi,macd".parse::<IndicatorSelection>().unwrap_err();
        assert_eq!(err, SelectionError("macd".to_string()));
    }

    #[test]
    fn test_metric_outcome_json() {
        let ok: MetricOutcome<f64> = MetricOutcome::Available { value: 0.5 };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["value"], 0.5);

        let bad: MetricOutcome<f64> = MetricOutcome::Unavailable {
            reason: "nope".to_string(),
        };
        let json = serde_json::to_value(&bad).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["reason"], "nope");
    }
}
