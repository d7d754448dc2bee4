//! Moving Average Convergence Divergence indicator implementation.

use serde::{Deserialize, Serialize};
use stocked_core::DerivedPoint;

use crate::core::{Indicator, IndicatorError, Input};
use crate::indicators::ema::Ema;

/// MACD output: three series sharing the input's date axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA, one point per input sample.
    pub macd_line: Vec<DerivedPoint>,
    /// EMA of the MACD line; empty when the series is shorter than the signal period.
    pub signal_line: Vec<DerivedPoint>,
    /// MACD line minus signal line, treating a missing signal point as zero.
    pub histogram: Vec<DerivedPoint>,
}

impl MacdOutput {
    /// Whether the series was too short to produce any MACD output.
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }
}

/// Moving Average Convergence Divergence indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a MACD indicator with custom fast/slow/signal periods.
    ///
    /// The fast period must be strictly shorter than the slow one.
    pub fn new(
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
    ) -> Result<Self, IndicatorError> {
        if fast_period == 0 {
            return Err(IndicatorError::invalid_period("MACD", fast_period));
        }
        if slow_period == 0 {
            return Err(IndicatorError::invalid_period("MACD", slow_period));
        }
        if signal_period == 0 {
            return Err(IndicatorError::invalid_period("MACD", signal_period));
        }
        if fast_period >= slow_period {
            return Err(IndicatorError::invalid_parameter(
                "MACD",
                "fast_period",
                format!("{fast_period} is not below slow_period {slow_period}"),
            ));
        }
        Ok(Self {
            fast: Ema::new(fast_period)?,
            slow: Ema::new(slow_period)?,
            signal: Ema::new(signal_period)?,
        })
    }

    /// Length of the signal line for an input of `input_len` samples.
    pub fn signal_len(&self, input_len: usize) -> usize {
        let macd_len = self.output_len(input_len);
        self.signal.output_len(macd_len)
    }
}

impl Indicator for Macd {
    type Output = MacdOutput;

    fn output_len(&self, input_len: usize) -> usize {
        self.slow.output_len(input_len)
    }

    fn compute<I: Input>(&self, series: &[I]) -> Self::Output {
        if series.len() < self.slow.period() {
            return MacdOutput::default();
        }

        let fast = self.fast.compute(series);
        let slow = self.slow.compute(series);
        let macd_line: Vec<DerivedPoint> = fast
            .iter()
            .zip(&slow)
            .map(|(fast, slow)| {
                DerivedPoint::new(fast.date.as_str(), fast.value - slow.value)
            })
            .collect();

        let signal_line = self.signal.compute(&macd_line);
        let histogram = macd_line
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let signal = signal_line.get(idx).map_or(0.0, |signal| signal.value);
                DerivedPoint::new(point.date.as_str(), point.value - signal)
            })
            .collect();

        MacdOutput {
            macd_line,
            signal_line,
            histogram,
        }
    }
}
