//! Simple Moving Average (SMA).

use stocked_core::DerivedPoint;

use crate::core::{window_mean, Indicator, IndicatorError, Input};

/// Computes the arithmetic mean over a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Creates a new SMA with the provided period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::invalid_period("SMA", period));
        }
        Ok(Self { period })
    }

    /// Returns the configured lookback period.
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Sma {
    type Output = Vec<DerivedPoint>;

    fn output_len(&self, input_len: usize) -> usize {
        input_len
            .checked_sub(self.period)
            .map_or(0, |surplus| surplus + 1)
    }

    fn compute<I: Input>(&self, series: &[I]) -> Self::Output {
        // Each window is summed afresh so results do not depend on a running total.
        series
            .windows(self.period)
            .map(|window| {
                let last = &window[self.period - 1];
                DerivedPoint::new(last.date(), window_mean(window))
            })
            .collect()
    }
}
