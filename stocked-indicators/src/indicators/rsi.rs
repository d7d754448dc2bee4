//! Relative Strength Index (RSI).

use stocked_core::DerivedPoint;

use crate::core::{f64_from_usize, Indicator, IndicatorError, Input};

/// Computes Wilder's RSI oscillator scaled between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Creates a new RSI with the provided period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::invalid_period("RSI", period));
        }
        Ok(Self { period })
    }

    /// Returns the configured lookback period.
    pub fn period(&self) -> usize {
        self.period
    }

    fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            100.0
        } else if avg_gain == 0.0 {
            0.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        }
    }
}

impl Indicator for Rsi {
    type Output = Vec<DerivedPoint>;

    fn output_len(&self, input_len: usize) -> usize {
        input_len.saturating_sub(self.period)
    }

    fn compute<I: Input>(&self, series: &[I]) -> Self::Output {
        if series.len() <= self.period {
            return Vec::new();
        }

        let divisor = f64_from_usize(self.period);
        let decay = f64_from_usize(self.period - 1);

        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        for pair in series[..=self.period].windows(2) {
            let change = pair[1].value() - pair[0].value();
            if change > 0.0 {
                gain_sum += change;
            } else {
                loss_sum -= change;
            }
        }
        let mut avg_gain = gain_sum / divisor;
        let mut avg_loss = loss_sum / divisor;

        // Smoothing starts at the last seed transition, so that move is counted twice.
        let mut output = Vec::with_capacity(self.output_len(series.len()));
        for pair in series[self.period - 1..].windows(2) {
            let change = pair[1].value() - pair[0].value();
            if change > 0.0 {
                avg_gain = (avg_gain * decay + change) / divisor;
                avg_loss = (avg_loss * decay) / divisor;
            } else {
                avg_gain = (avg_gain * decay) / divisor;
                avg_loss = (avg_loss * decay - change) / divisor;
            }
            output.push(DerivedPoint::new(
                pair[1].date(),
                Self::compute_rsi(avg_gain, avg_loss),
            ));
        }
        output
    }
}
