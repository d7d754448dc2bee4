//! Quote snapshots and day-over-day change figures.

use serde::{Deserialize, Serialize};

use crate::symbol::display_name;

/// Absolute and relative move of a price against a reference close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Price minus the reference close.
    pub change: f64,
    /// Change as a percentage of the reference close.
    pub change_percent: f64,
}

impl PriceChange {
    /// Change of `price` relative to `previous_close`.
    ///
    /// A non-positive reference yields a zero percentage rather than an infinite one.
    pub fn between(price: f64, previous_close: f64) -> Self {
        let change = price - previous_close;
        let change_percent = if previous_close > 0.0 {
            (change / previous_close) * 100.0
        } else {
            0.0
        };
        Self {
            change,
            change_percent,
        }
    }
}

/// Latest price of a symbol together with its move since the previous close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Normalized ticker.
    pub symbol: String,
    /// Human-readable name, or the ticker when none is known.
    pub name: String,
    /// Latest regular-market price.
    pub price: f64,
    /// Price minus the previous close.
    pub change: f64,
    /// Change as a percentage of the previous close.
    pub change_percent: f64,
    /// Close of the previous session.
    pub previous_close: f64,
}

impl Quote {
    /// Builds a quote from the raw market fields a feed reports.
    ///
    /// Feeds report absent fields as zero, so a zero is treated like `None`. The
    /// price falls back to the previous close (then zero) and the previous close
    /// falls back to the price.
    pub fn from_market(
        symbol: impl Into<String>,
        price: Option<f64>,
        previous_close: Option<f64>,
    ) -> Self {
        let symbol = symbol.into();
        let price = price.filter(|value| *value != 0.0);
        let previous_close = previous_close.filter(|value| *value != 0.0);
        let price = price.or(previous_close).unwrap_or(0.0);
        let previous_close = previous_close.unwrap_or(price);
        let PriceChange {
            change,
            change_percent,
        } = PriceChange::between(price, previous_close);
        Self {
            name: display_name(&symbol).to_string(),
            symbol,
            price,
            change,
            change_percent,
            previous_close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_percentage_move() {
        let change = PriceChange::between(110.0, 100.0);
        assert_eq!(change.change, 10.0);
        assert!((change.change_percent - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_reference_gives_zero_percent() {
        let change = PriceChange::between(5.0, 0.0);
        assert_eq!(change.change, 5.0);
        assert_eq!(change.change_percent, 0.0);
    }

    #[test]
    fn missing_fields_fall_back() {
        let quote = Quote::from_market("AAPL", None, Some(185.0));
        assert_eq!(quote.price, 185.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.name, "Apple Inc.");

        let quote = Quote::from_market("XYZ", Some(12.0), None);
        assert_eq!(quote.previous_close, 12.0);
        assert_eq!(quote.change_percent, 0.0);
        assert_eq!(quote.name, "XYZ");

        let quote = Quote::from_market("XYZ", None, None);
        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.change_percent, 0.0);
    }

    #[test]
    fn zero_previous_close_counts_as_missing() {
        let quote = Quote::from_market("AAPL", Some(185.0), Some(0.0));
        assert_eq!(quote.previous_close, 185.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);
    }

    #[test]
    fn zero_price_falls_back_to_previous_close() {
        let quote = Quote::from_market("AAPL", Some(0.0), Some(180.0));
        assert_eq!(quote.price, 180.0);
        assert_eq!(quote.previous_close, 180.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);

        let quote = Quote::from_market("XYZ", Some(0.0), Some(0.0));
        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.previous_close, 0.0);
    }
}
