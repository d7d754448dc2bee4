//! Exponential Moving Average (EMA).

use stocked_core::DerivedPoint;

use crate::core::{f64_from_usize, window_mean, Indicator, IndicatorError, Input};

/// Computes an exponentially-weighted moving average seeded with the SMA of the
/// first `period` samples.
///
/// Unlike [`Sma`](crate::indicators::Sma), the EMA emits a point for every input
/// sample once the series is at least `period` long. Samples before
/// [`first_smoothed_index`](Ema::first_smoothed_index) carry the seed unchanged,
/// which keeps MACD subtraction index-aligned but draws a flat line if plotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ema {
    period: usize,
    alpha: f64,
}

impl Ema {
    /// Creates a new EMA with the provided period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::invalid_period("EMA", period));
        }

        Ok(Self {
            period,
            alpha: 2.0 / f64_from_usize(period + 1),
        })
    }

    /// Returns the configured lookback period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Index of the first output point produced by the recurrence rather than the seed.
    pub fn first_smoothed_index(&self) -> usize {
        self.period - 1
    }
}

impl Indicator for Ema {
    type Output = Vec<DerivedPoint>;

    fn output_len(&self, input_len: usize) -> usize {
        if input_len < self.period {
            0
        } else {
            input_len
        }
    }

    fn compute<I: Input>(&self, series: &[I]) -> Self::Output {
        if series.len() < self.period {
            return Vec::new();
        }

        let retain = 1.0 - self.alpha;
        let first_smoothed = self.first_smoothed_index();
        let mut current = window_mean(&series[..self.period]);
        series
            .iter()
            .enumerate()
            .map(|(idx, sample)| {
                if idx >= first_smoothed {
                    current = sample.value() * self.alpha + current * retain;
                }
                DerivedPoint::new(sample.date(), current)
            })
            .collect()
    }
}
