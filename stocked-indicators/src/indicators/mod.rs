//! Built-in indicator implementations provided by the crate.
//!
//! Each indicator is a small validated configuration implementing
//! [`Indicator`](crate::Indicator); the `compute_*` functions construct and run
//! one in a single call.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{BollingerBands, BollingerPoint};
pub use ema::Ema;
pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use sma::Sma;

use stocked_core::DerivedPoint;

use crate::core::{Indicator, IndicatorError, Input};

/// Simple moving average of `series` over `period` samples.
pub fn compute_sma<I: Input>(
    series: &[I],
    period: usize,
) -> Result<Vec<DerivedPoint>, IndicatorError> {
    Ok(Sma::new(period)?.compute(series))
}

/// Exponential moving average of `series`, one point per input sample.
pub fn compute_ema<I: Input>(
    series: &[I],
    period: usize,
) -> Result<Vec<DerivedPoint>, IndicatorError> {
    Ok(Ema::new(period)?.compute(series))
}

/// Wilder's relative strength index of `series`.
pub fn compute_rsi<I: Input>(
    series: &[I],
    period: usize,
) -> Result<Vec<DerivedPoint>, IndicatorError> {
    Ok(Rsi::new(period)?.compute(series))
}

/// MACD line, signal line and histogram of `series`.
pub fn compute_macd<I: Input>(
    series: &[I],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput, IndicatorError> {
    Ok(Macd::new(fast_period, slow_period, signal_period)?.compute(series))
}

/// Bollinger bands of `series` at `std_multiplier` standard deviations.
pub fn compute_bollinger<I: Input>(
    series: &[I],
    period: usize,
    std_multiplier: f64,
) -> Result<Vec<BollingerPoint>, IndicatorError> {
    Ok(BollingerBands::new(period, std_multiplier)?.compute(series))
}
