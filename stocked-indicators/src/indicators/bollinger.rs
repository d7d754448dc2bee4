//! Bollinger Bands built on a rolling mean and population standard deviation.

use serde::{Deserialize, Serialize};

use crate::core::{f64_from_usize, window_mean, Indicator, IndicatorError, Input};

/// One point of the Bollinger Bands indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    /// Date of the last sample in the window.
    pub date: String,
    /// Upper band (mean + k * std dev).
    pub upper: f64,
    /// Middle band (rolling mean).
    pub middle: f64,
    /// Lower band (mean - k * std dev).
    pub lower: f64,
}

/// Produces Bollinger Bands from a trailing window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    period: usize,
    std_multiplier: f64,
}

impl BollingerBands {
    /// Creates a new Bollinger Bands indicator.
    pub fn new(period: usize, std_multiplier: f64) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::invalid_period("BollingerBands", period));
        }
        if !std_multiplier.is_finite() || std_multiplier.is_sign_negative() {
            return Err(IndicatorError::invalid_parameter(
                "BollingerBands",
                "std_multiplier",
                std_multiplier,
            ));
        }

        Ok(Self {
            period,
            std_multiplier,
        })
    }

    /// Returns the configured lookback period.
    pub fn period(&self) -> usize {
        self.period
    }

    fn compute_bands<I: Input>(&self, window: &[I]) -> BollingerPoint {
        let mean = window_mean(window);
        let n = f64_from_usize(self.period);
        // Deviations are taken from the first sample so a flat window has exactly zero spread.
        let origin = window[0].value();
        let (shifted_sum, shifted_squares) =
            window.iter().fold((0.0, 0.0), |(sum, squares), sample| {
                let shifted = sample.value() - origin;
                (sum + shifted, squares + shifted * shifted)
            });
        let variance = ((shifted_squares - shifted_sum * shifted_sum / n) / n).max(0.0);
        let std_dev = variance.sqrt();

        BollingerPoint {
            date: window[self.period - 1].date().to_string(),
            upper: mean + std_dev * self.std_multiplier,
            middle: mean,
            lower: mean - std_dev * self.std_multiplier,
        }
    }
}

impl Indicator for BollingerBands {
    type Output = Vec<BollingerPoint>;

    fn output_len(&self, input_len: usize) -> usize {
        input_len
            .checked_sub(self.period)
            .map_or(0, |surplus| surplus + 1)
    }

    fn compute<I: Input>(&self, series: &[I]) -> Self::Output {
        series
            .windows(self.period)
            .map(|window| self.compute_bands(window))
            .collect()
    }
}
