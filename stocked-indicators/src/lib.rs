#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//! Stateless technical indicators and series alignment for price charts.

/// Chart overlay assembly from a set of enabled indicators.
pub mod chart;
/// Percentage rebasing of two series onto a common baseline.
pub mod compare;
/// Serializable indicator configuration and boundary validation.
pub mod config;
/// Foundational traits and shared abstractions.
pub mod core;
/// Built-in indicator implementations.
pub mod indicators;
/// Point-to-point direction classification used for bar colouring.
pub mod trend;

/// Re-export of the chart overlay entry point and its output types.
pub use crate::chart::{analyze, ChartAnalysis, ChartRow};
/// Re-export of the comparison alignment routine.
pub use crate::compare::{align_for_comparison, AlignedPoint};
/// Re-export of the indicator configuration records.
pub use crate::config::{IndicatorKind, IndicatorSettings};
/// Re-export of the core traits and error type to make the crate easy to consume.
pub use crate::core::{Indicator, IndicatorError, Input};
/// Re-export of the one-shot indicator functions and their output types.
pub use crate::indicators::{
    compute_bollinger, compute_ema, compute_macd, compute_rsi, compute_sma, BollingerPoint,
    MacdOutput,
};
/// Re-export of step direction helpers.
pub use crate::trend::{step_directions, Direction};
