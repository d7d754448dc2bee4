//! Time-ordered price samples and the single-valued points derived from them.

use serde::{Deserialize, Serialize};

/// One observation of a price series.
///
/// Points within a series are ordered by non-decreasing `date`. The label is
/// opaque to the analytics code; it is only cloned onto derived output and
/// compared for equality when two series are aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Date label, typically `YYYY-MM-DD`.
    pub date: String,
    /// Closing price for the date.
    pub price: f64,
}

impl PricePoint {
    /// Creates a sample.
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }

    /// Whether the sample is usable market data (finite and strictly positive).
    ///
    /// Upstream feeds report missing closes as zero, so those are rejected too.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// Output of a single-valued indicator, keyed by the input date it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedPoint {
    /// Date of the input sample the value belongs to.
    pub date: String,
    /// Indicator value.
    pub value: f64,
}

impl DerivedPoint {
    /// Creates a derived point.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Drops samples that fail [`PricePoint::is_valid`], returning how many were removed.
///
/// Analytics functions assume pre-filtered input; callers run this once after loading.
pub fn retain_valid(series: &mut Vec<PricePoint>) -> usize {
    let before = series.len();
    series.retain(PricePoint::is_valid);
    before - series.len()
}
