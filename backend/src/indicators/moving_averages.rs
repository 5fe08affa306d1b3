use super::{validate_period, validate_prices, IndicatorError};

/// Simple Moving Average (SMA)
/// Calculates the arithmetic mean of the last N prices
pub struct SMA {
    period: usize,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate SMA for a price series
    /// Returns a vector of the same length as input
    /// First (period - 1) values are None (warmup period, rendered as a gap)
    pub fn calculate(&self, prices: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
        validate_period(self.period)?;
        validate_prices(prices)?;

        let mut result = vec![None; prices.len()];

        if prices.len() < self.period {
            return Ok(result);
        }

        for i in (self.period - 1)..prices.len() {
            let window_start = i + 1 - self.period;
            let window = &prices[window_start..=i];
            let sum: f64 = window.iter().sum();
            result[i] = Some(sum / self.period as f64);
        }

        Ok(result)
    }
}

/// Free-function form of [`SMA::calculate`]
pub fn moving_average(prices: &[f64], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    SMA::new(period).calculate(prices)
}
