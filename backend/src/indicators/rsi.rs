use super::{validate_period, validate_prices, IndicatorError};

/// Relative Strength Index (RSI)
/// Measures momentum by comparing magnitude of recent gains to recent losses
/// Returns values between 0-100:
/// - Below 30: Oversold (potentially undervalued)
/// - Above 70: Overbought (potentially overvalued)
pub struct RSI {
    period: usize,
}

impl RSI {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate RSI for a price series using Wilder's smoothing method
    ///
    /// The first value is seeded from the simple average of the first
    /// `period` gains/losses (prices 1..=period); every later gain/loss is
    /// folded in with Wilder's smoothing. The output is NOT padded: it holds
    /// `prices.len() - period` values, the k-th one belonging to price index
    /// `period + k`. Use [`align_to_series`] to line it up with the input.
    ///
    /// A zero average loss yields 100 (including a completely flat window).
    pub fn calculate(&self, prices: &[f64]) -> Result<Vec<f64>, IndicatorError> {
        validate_period(self.period)?;
        validate_prices(prices)?;

        if prices.len() <= self.period {
            return Err(IndicatorError::InsufficientData {
                required: self.period.saturating_add(1),
                actual: prices.len(),
            });
        }

        // Calculate price changes
        let mut gains = Vec::with_capacity(prices.len() - 1);
        let mut losses = Vec::with_capacity(prices.len() - 1);

        for (i, pair) in prices.windows(2).enumerate() {
            let change = pair[1] - pair[0];
            if !change.is_finite() {
                return Err(IndicatorError::DegenerateInput(format!(
                    "price change at index {} overflows",
                    i + 1
                )));
            }
            gains.push(change.max(0.0));
            losses.push((-change).max(0.0));
        }

        let period_f = self.period as f64;

        // Calculate first average gain and loss (simple average)
        let mut avg_gain = gains[..self.period].iter().sum::<f64>() / period_f;
        let mut avg_loss = losses[..self.period].iter().sum::<f64>() / period_f;
        check_averages(avg_gain, avg_loss, self.period)?;

        let mut result = Vec::with_capacity(prices.len() - self.period);
        result.push(rsi_from_averages(avg_gain, avg_loss));

        // avg = ((prev_avg * (period - 1)) + current) / period
        for i in self.period..gains.len() {
            avg_gain = (avg_gain * (period_f - 1.0) + gains[i]) / period_f;
            avg_loss = (avg_loss * (period_f - 1.0) + losses[i]) / period_f;
            check_averages(avg_gain, avg_loss, i + 1)?;
            result.push(rsi_from_averages(avg_gain, avg_loss));
        }

        Ok(result)
    }
}

/// Free-function form of [`RSI::calculate`]
pub fn rsi(prices: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    RSI::new(period).calculate(prices)
}

/// Pad unpadded RSI output with leading `None`s so it lines up index-for-index
/// with a series of `series_len` prices
pub fn align_to_series(values: &[f64], series_len: usize) -> Vec<Option<f64>> {
    let padding = series_len.saturating_sub(values.len());
    std::iter::repeat(None)
        .take(padding)
        .chain(values.iter().copied().map(Some))
        .collect()
}

fn check_averages(avg_gain: f64, avg_loss: f64, price_index: usize) -> Result<(), IndicatorError> {
    if avg_gain.is_finite() && avg_loss.is_finite() {
        return Ok(());
    }
    Err(IndicatorError::DegenerateInput(format!(
        "average gain/loss overflows at price index {}",
        price_index
    )))
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
