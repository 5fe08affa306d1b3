use super::{validate_prices, IndicatorError};

/// Simple period-over-period returns: (p[i] - p[i-1]) / p[i-1]
/// A zero previous price is rejected rather than producing Infinity
pub fn simple_returns(prices: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    validate_prices(prices)?;

    prices
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            if pair[0] == 0.0 {
                return Err(IndicatorError::DegenerateInput(format!(
                    "zero price at index {} makes the next return undefined",
                    i
                )));
            }
            let simple_return = (pair[1] - pair[0]) / pair[0];
            if !simple_return.is_finite() {
                return Err(IndicatorError::DegenerateInput(format!(
                    "return at index {} overflows",
                    i + 1
                )));
            }
            Ok(simple_return)
        })
        .collect()
}

/// Volatility as the population standard deviation of simple returns
///
/// Needs at least two prices. Two prices give a single return, which has
/// zero deviation from its own mean, so the result is 0.0.
pub fn volatility(prices: &[f64]) -> Result<f64, IndicatorError> {
    if prices.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            actual: prices.len(),
        });
    }

    let returns = simple_returns(prices)?;
    let count = returns.len() as f64;

    let mean_return = returns.iter().sum::<f64>() / count;
    let variance = returns
        .iter()
        .map(|r| (r - mean_return).powi(2))
        .sum::<f64>()
        / count;

    let volatility = variance.sqrt();
    if !volatility.is_finite() {
        return Err(IndicatorError::DegenerateInput(
            "returns too large to measure volatility".to_string(),
        ));
    }

    Ok(volatility)
}
