// Technical indicators module
// Pure calculation functions over a chronological price series

pub mod error;
pub mod moving_averages;
pub mod rsi;
pub mod volatility;

pub use error::IndicatorError;
pub use moving_averages::moving_average;
pub use rsi::rsi;
pub use volatility::volatility;

/// Default window for the dashboard moving average
pub const DEFAULT_MA_PERIOD: usize = 3;

/// Default window for RSI (Wilder's classic 14)
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Largest window accepted from requests and config
pub const MAX_PERIOD: usize = 200;

/// Reject a zero-length window
pub(crate) fn validate_period(period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "period must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Reject NaN / infinite prices before they leak into results
pub(crate) fn validate_prices(prices: &[f64]) -> Result<(), IndicatorError> {
    match prices.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(IndicatorError::InvalidParameter(format!(
            "price at index {} is not finite ({})",
            index, prices[index]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_period_zero() {
        assert!(matches!(
            validate_period(0),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(validate_period(1).is_ok());
    }

    #[test]
    fn test_validate_prices_reports_index() {
        let err = validate_prices(&[100.0, f64::NAN, 101.0]).unwrap_err();
        assert!(err.to_string().contains("index 1"), "got: {}", err);

        assert!(validate_prices(&[100.0, f64::INFINITY]).is_err());
        assert!(validate_prices(&[]).is_ok());
    }
}
