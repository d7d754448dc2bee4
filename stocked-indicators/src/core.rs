//! Core traits shared by every indicator implementation.

use stocked_core::{DerivedPoint, PricePoint};
use thiserror::Error;

/// Errors produced when an indicator is configured with invalid parameters.
///
/// Insufficient data is never an error; indicators return shorter output instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// A lookback period of zero was supplied.
    #[error("{indicator} period must be greater than zero (got {period})")]
    InvalidPeriod {
        /// Name of the indicator that rejected the period.
        indicator: &'static str,
        /// The rejected period.
        period: usize,
    },
    /// Any other parameter outside its documented domain.
    #[error("{indicator} parameter `{name}` is invalid: {value}")]
    InvalidParameter {
        /// Name of the indicator that rejected the parameter.
        indicator: &'static str,
        /// Name of the offending parameter.
        name: &'static str,
        /// Rendered value of the offending parameter.
        value: String,
    },
}

impl IndicatorError {
    /// Helper to construct an invalid period error.
    pub fn invalid_period(indicator: &'static str, period: usize) -> Self {
        Self::InvalidPeriod { indicator, period }
    }

    /// Helper to construct an invalid parameter error.
    pub fn invalid_parameter(
        indicator: &'static str,
        name: &'static str,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidParameter {
            indicator,
            name,
            value: value.to_string(),
        }
    }
}

/// A dated sample that indicators can consume.
///
/// Implemented for raw prices and for derived points, so one indicator can be
/// run over the output of another.
pub trait Input {
    /// Date label the sample belongs to.
    fn date(&self) -> &str;
    /// Numeric value of the sample.
    fn value(&self) -> f64;
}

impl Input for PricePoint {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> f64 {
        self.price
    }
}

impl Input for DerivedPoint {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// A configured, stateless transform from a series to a derived output.
pub trait Indicator {
    /// Output produced for a whole series.
    type Output;

    /// Number of points produced for an input of `input_len` samples.
    fn output_len(&self, input_len: usize) -> usize;

    /// Runs the indicator over `series`.
    fn compute<I: Input>(&self, series: &[I]) -> Self::Output;
}

pub(crate) fn f64_from_usize(value: usize) -> f64 {
    value as f64
}

/// Sums sample values strictly in index order.
pub(crate) fn window_sum<I: Input>(window: &[I]) -> f64 {
    window.iter().fold(0.0, |acc, sample| acc + sample.value())
}

pub(crate) fn window_mean<I: Input>(window: &[I]) -> f64 {
    window_sum(window) / f64_from_usize(window.len())
}
