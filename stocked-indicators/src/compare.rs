//! Rebasing of a primary and a secondary series onto a shared 100 baseline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Input;

/// One row of a comparison overlay.
///
/// `p1` and `p2` are the primary and secondary prices rebased to 100 at the
/// anchor date. When no anchor exists, `p1` is the raw primary price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Date of the primary sample.
    pub date: String,
    /// Rebased (or raw, without an anchor) primary value.
    pub p1: f64,
    /// Rebased secondary value; absent when the secondary has no sample on `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2: Option<f64>,
}

/// Aligns `secondary` onto the dates of `primary` for a percentage-return overlay.
///
/// The anchor is the first primary sample whose date also appears in `secondary`;
/// both series equal exactly 100 there. A secondary sample missing on a primary
/// date leaves `p2` empty rather than zero. If `secondary` is empty or shares no
/// date with `primary`, the primary prices are returned unscaled.
///
/// Duplicate dates resolve to their first occurrence. A shared date whose price is
/// not strictly positive in either series is skipped as an anchor.
pub fn align_for_comparison<P, S>(primary: &[P], secondary: &[S]) -> Vec<AlignedPoint>
where
    P: Input,
    S: Input,
{
    if primary.is_empty() {
        return Vec::new();
    }

    let mut secondary_by_date: HashMap<&str, f64> = HashMap::with_capacity(secondary.len());
    for sample in secondary {
        secondary_by_date
            .entry(sample.date())
            .or_insert_with(|| sample.value());
    }

    let anchor = primary.iter().find_map(|sample| {
        let base2 = *secondary_by_date.get(sample.date())?;
        let base1 = sample.value();
        (is_usable_base(base1) && is_usable_base(base2)).then_some((base1, base2))
    });

    let Some((base1, base2)) = anchor else {
        debug!(
            primary = primary.len(),
            secondary = secondary.len(),
            "no shared anchor date; showing primary series only"
        );
        return primary
            .iter()
            .map(|sample| AlignedPoint {
                date: sample.date().to_string(),
                p1: sample.value(),
                p2: None,
            })
            .collect();
    };

    primary
        .iter()
        .map(|sample| AlignedPoint {
            date: sample.date().to_string(),
            p1: (sample.value() / base1) * 100.0,
            p2: secondary_by_date
                .get(sample.date())
                .map(|price| (price / base2) * 100.0),
        })
        .collect()
}

fn is_usable_base(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

#[cfg(test)]
mod tests {
    use stocked_core::PricePoint;

    use super::*;

    fn series(points: &[(&str, f64)]) -> Vec<PricePoint> {
        points
            .iter()
            .map(|(date, price)| PricePoint::new(*date, *price))
            .collect()
    }

    #[test]
    fn rebases_both_series_at_first_shared_date() {
        let primary = series(&[("d0", 90.0), ("d1", 100.0), ("d2", 120.0)]);
        let secondary = series(&[("d1", 50.0), ("d2", 40.0)]);
        let aligned = align_for_comparison(&primary, &secondary);

        assert_eq!(aligned.len(), 3);
        assert_eq!(aligned[0].p2, None);
        assert_eq!(aligned[1].p1, 100.0);
        assert_eq!(aligned[1].p2, Some(100.0));
        assert!((aligned[2].p1 - 120.0).abs() < 1e-9);
        assert!((aligned[2].p2.unwrap() - 80.0).abs() < 1e-9);
        assert!((aligned[0].p1 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn gaps_in_secondary_stay_empty() {
        let primary = series(&[("d1", 10.0), ("d2", 11.0), ("d3", 12.0)]);
        let secondary = series(&[("d1", 20.0), ("d3", 26.0)]);
        let aligned = align_for_comparison(&primary, &secondary);
        assert_eq!(aligned[1].p2, None);
        assert!((aligned[2].p2.unwrap() - 130.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_series_fall_back_to_raw_primary() {
        let primary = series(&[("d1", 10.0), ("d2", 11.0)]);
        let secondary = series(&[("x1", 20.0)]);
        let aligned = align_for_comparison(&primary, &secondary);
        assert_eq!(
            aligned,
            vec![
                AlignedPoint {
                    date: "d1".into(),
                    p1: 10.0,
                    p2: None
                },
                AlignedPoint {
                    date: "d2".into(),
                    p1: 11.0,
                    p2: None
                },
            ]
        );
    }

    #[test]
    fn empty_primary_yields_nothing() {
        let secondary = series(&[("d1", 20.0)]);
        assert!(align_for_comparison::<PricePoint, _>(&[], &secondary).is_empty());
    }

    #[test]
    fn zero_priced_shared_date_is_not_an_anchor() {
        let primary = series(&[("d1", 10.0), ("d2", 20.0)]);
        let secondary = series(&[("d1", 0.0), ("d2", 5.0)]);
        let aligned = align_for_comparison(&primary, &secondary);
        assert_eq!(aligned[1].p1, 100.0);
        assert_eq!(aligned[1].p2, Some(100.0));
        assert!((aligned[0].p1 - 50.0).abs() < 1e-9);
        assert_eq!(aligned[0].p2, Some(0.0));
    }

    #[test]
    fn missing_secondary_is_not_serialized() {
        let point = AlignedPoint {
            date: "d1".into(),
            p1: 10.0,
            p2: None,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert!(json.get("p2").is_none());
    }
}
