//! Per-indicator configuration records as toggled from a chart's indicator menu.
//!
//! Records deserialize with defaults for every missing field, so a partial TOML
//! table such as `[indicators.rsi] enabled = true` is enough. Parameters are
//! checked by [`IndicatorSettings::validate`] before any computation runs.

use serde::{Deserialize, Serialize};

use crate::core::IndicatorError;
use crate::indicators::{BollingerBands, Ema, Macd, Rsi, Sma};

/// Simple moving average overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaConfig {
    /// Whether the overlay is drawn.
    pub enabled: bool,
    /// Lookback window in samples.
    pub period: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 20,
        }
    }
}

impl SmaConfig {
    /// Builds the configured indicator.
    pub fn indicator(&self) -> Result<Sma, IndicatorError> {
        Sma::new(self.period)
    }
}

/// Exponential moving average overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmaConfig {
    /// Whether the overlay is drawn.
    pub enabled: bool,
    /// Lookback window in samples.
    pub period: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 20,
        }
    }
}

impl EmaConfig {
    /// Builds the configured indicator.
    pub fn indicator(&self) -> Result<Ema, IndicatorError> {
        Ema::new(self.period)
    }
}

/// Relative strength index panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiConfig {
    /// Whether the panel is drawn.
    pub enabled: bool,
    /// Smoothing period in samples.
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 14,
        }
    }
}

impl RsiConfig {
    /// Builds the configured indicator.
    pub fn indicator(&self) -> Result<Rsi, IndicatorError> {
        Rsi::new(self.period)
    }
}

/// MACD panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdConfig {
    /// Whether the panel is drawn.
    pub enabled: bool,
    /// Fast EMA period; must be below `slow_period`.
    pub fast_period: usize,
    /// Slow EMA period.
    pub slow_period: usize,
    /// Signal line EMA period.
    pub signal_period: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl MacdConfig {
    /// Builds the configured indicator.
    pub fn indicator(&self) -> Result<Macd, IndicatorError> {
        Macd::new(self.fast_period, self.slow_period, self.signal_period)
    }
}

/// Bollinger bands overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    /// Whether the overlay is drawn.
    pub enabled: bool,
    /// Window used for the mean and standard deviation.
    pub period: usize,
    /// Band width in standard deviations.
    #[serde(alias = "std_dev")]
    pub std_dev_multiplier: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Builds the configured indicator.
    pub fn indicator(&self) -> Result<BollingerBands, IndicatorError> {
        BollingerBands::new(self.period, self.std_dev_multiplier)
    }
}

/// Indicator families that can be toggled on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Relative strength index.
    Rsi,
    /// Moving average convergence divergence.
    Macd,
    /// Bollinger bands.
    Bollinger,
}

/// Configuration of every indicator family a chart can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Simple moving average overlay.
    pub sma: SmaConfig,
    /// Exponential moving average overlay.
    pub ema: EmaConfig,
    /// Relative strength index panel.
    pub rsi: RsiConfig,
    /// MACD panel.
    pub macd: MacdConfig,
    /// Bollinger bands overlay.
    pub bollinger: BollingerConfig,
}

impl IndicatorSettings {
    /// Checks every record, enabled or not, so toggling one on later cannot fail.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        self.sma.indicator()?;
        self.ema.indicator()?;
        self.rsi.indicator()?;
        self.macd.indicator()?;
        self.bollinger.indicator()?;
        Ok(())
    }

    /// Turns on the given indicator family.
    pub fn enable(&mut self, kind: IndicatorKind) {
        match kind {
            IndicatorKind::Sma => self.sma.enabled = true,
            IndicatorKind::Ema => self.ema.enabled = true,
            IndicatorKind::Rsi => self.rsi.enabled = true,
            IndicatorKind::Macd => self.macd.enabled = true,
            IndicatorKind::Bollinger => self.bollinger.enabled = true,
        }
    }

    /// Whether the given indicator family is turned on.
    pub fn is_enabled(&self, kind: IndicatorKind) -> bool {
        match kind {
            IndicatorKind::Sma => self.sma.enabled,
            IndicatorKind::Ema => self.ema.enabled,
            IndicatorKind::Rsi => self.rsi.enabled,
            IndicatorKind::Macd => self.macd.enabled,
            IndicatorKind::Bollinger => self.bollinger.enabled,
        }
    }
}
