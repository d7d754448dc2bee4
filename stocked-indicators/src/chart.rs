//! Assembles one chart frame: the price rows with their overlays plus the
//! oscillator panels that are drawn separately.

use serde::{Deserialize, Serialize};
use stocked_core::DerivedPoint;
use tracing::debug;

use crate::config::IndicatorSettings;
use crate::core::{Indicator, IndicatorError, Input};
use crate::indicators::MacdOutput;
use crate::trend::{step_directions, Direction};

/// A price sample with every enabled overlay value for its date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Date of the sample.
    pub date: String,
    /// Raw price.
    pub price: f64,
    /// Simple moving average, once its window is full.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma: Option<f64>,
    /// Exponential moving average.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema: Option<f64>,
    /// Upper Bollinger band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_upper: Option<f64>,
    /// Middle Bollinger band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_middle: Option<f64>,
    /// Lower Bollinger band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_lower: Option<f64>,
    /// Move against the previous row (or the reference close for the first row).
    pub direction: Direction,
}

/// Everything a chart needs to render one price series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    /// One row per input sample, in input order.
    pub rows: Vec<ChartRow>,
    /// RSI panel, empty when disabled or not yet computable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rsi: Vec<DerivedPoint>,
    /// MACD panel when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdOutput>,
}

/// Computes every enabled indicator for `series` and joins the overlays onto
/// the price rows.
///
/// Overlays are joined by position: the `j`-th output of a windowed indicator
/// belongs to input `j + period - 1`. `previous_close` seeds the direction of
/// the first row.
pub fn analyze<I: Input>(
    series: &[I],
    settings: &IndicatorSettings,
    previous_close: Option<f64>,
) -> Result<ChartAnalysis, IndicatorError> {
    settings.validate()?;

    let directions = step_directions(
        series.iter().map(|sample| Some(sample.value())),
        previous_close,
    );
    let mut rows: Vec<ChartRow> = series
        .iter()
        .zip(directions)
        .map(|(sample, direction)| ChartRow {
            date: sample.date().to_string(),
            price: sample.value(),
            sma: None,
            ema: None,
            bb_upper: None,
            bb_middle: None,
            bb_lower: None,
            direction,
        })
        .collect();

    if settings.sma.enabled {
        let sma = settings.sma.indicator()?;
        let values = sma.compute(series);
        note_if_pending("sma", sma.period(), series.len(), values.len());
        for (row, point) in rows.iter_mut().skip(sma.period() - 1).zip(&values) {
            row.sma = Some(point.value);
        }
    }

    if settings.ema.enabled {
        let ema = settings.ema.indicator()?;
        let values = ema.compute(series);
        note_if_pending("ema", ema.period(), series.len(), values.len());
        for (row, point) in rows.iter_mut().zip(&values) {
            row.ema = Some(point.value);
        }
    }

    if settings.bollinger.enabled {
        let bands = settings.bollinger.indicator()?;
        let values = bands.compute(series);
        note_if_pending("bollinger", bands.period(), series.len(), values.len());
        for (row, point) in rows.iter_mut().skip(bands.period() - 1).zip(&values) {
            row.bb_upper = Some(point.upper);
            row.bb_middle = Some(point.middle);
            row.bb_lower = Some(point.lower);
        }
    }

    let rsi = if settings.rsi.enabled {
        let rsi = settings.rsi.indicator()?;
        let values = rsi.compute(series);
        note_if_pending("rsi", rsi.period(), series.len(), values.len());
        values
    } else {
        Vec::new()
    };

    let macd = if settings.macd.enabled {
        let macd = settings.macd.indicator()?.compute(series);
        note_if_pending(
            "macd",
            settings.macd.slow_period,
            series.len(),
            macd.macd_line.len(),
        );
        Some(macd)
    } else {
        None
    };

    Ok(ChartAnalysis { rows, rsi, macd })
}

fn note_if_pending(indicator: &str, period: usize, samples: usize, produced: usize) {
    if produced == 0 {
        debug!(indicator, period, samples, "not enough samples to render indicator yet");
    }
}
