use approx::assert_relative_eq;
use proptest::prelude::*;
use stocked_core::PricePoint;
use stocked_indicators::indicators::{BollingerBands, Ema, Macd, Rsi, Sma};
use stocked_indicators::{
    align_for_comparison, compute_bollinger, compute_ema, compute_macd, compute_rsi, compute_sma,
    Indicator,
};

fn series(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(idx, price)| PricePoint::new(format!("day-{idx:03}"), *price))
        .collect()
}

fn price_series(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..1_000.0, 0..max_len)
}

proptest! {
    #[test]
    fn sma_over_exact_window_is_the_mean(
        prices in prop::collection::vec(1.0f64..1_000.0, 1..40),
    ) {
        let input = series(&prices);
        let output = compute_sma(&input, prices.len()).unwrap();
        prop_assert_eq!(output.len(), 1);
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;
        assert_relative_eq!(output[0].value, mean, max_relative = 1e-12);
        prop_assert_eq!(&output[0].date, &input[input.len() - 1].date);
    }

    #[test]
    fn output_lengths_are_closed_form(prices in price_series(60), period in 1usize..30) {
        let input = series(&prices);
        let len = input.len();

        let sma = Sma::new(period).unwrap();
        prop_assert_eq!(sma.compute(&input).len(), sma.output_len(len));
        prop_assert_eq!(sma.output_len(len), if len >= period { len - period + 1 } else { 0 });

        let ema = Ema::new(period).unwrap();
        prop_assert_eq!(ema.compute(&input).len(), if len >= period { len } else { 0 });

        let rsi = Rsi::new(period).unwrap();
        prop_assert_eq!(rsi.compute(&input).len(), rsi.output_len(len));
        prop_assert_eq!(rsi.output_len(len), if len > period { len - period } else { 0 });

        let bands = BollingerBands::new(period, 2.0).unwrap();
        prop_assert_eq!(bands.compute(&input).len(), bands.output_len(len));
    }

    #[test]
    fn ema_keeps_the_seed_before_the_window(
        prices in prop::collection::vec(1.0f64..1_000.0, 1..40),
        period in 1usize..20,
    ) {
        prop_assume!(prices.len() >= period);
        let output = compute_ema(&series(&prices), period).unwrap();
        let seed = prices[..period].iter().fold(0.0, |acc, price| acc + price) / period as f64;
        for point in &output[..period - 1] {
            prop_assert_eq!(point.value, seed);
        }
        let alpha = 2.0 / (period as f64 + 1.0);
        let expected = prices[period - 1] * alpha + seed * (1.0 - alpha);
        assert_relative_eq!(output[period - 1].value, expected, max_relative = 1e-12);
    }

    #[test]
    fn rsi_stays_within_bounds(prices in price_series(60), period in 1usize..20) {
        let output = compute_rsi(&series(&prices), period).unwrap();
        for point in output {
            prop_assert!(point.value.is_finite());
            prop_assert!((0.0..=100.0).contains(&point.value));
        }
    }

    #[test]
    fn macd_histogram_is_line_minus_signal(
        prices in price_series(80),
        fast in 1usize..10,
        extra in 1usize..20,
        signal in 1usize..12,
    ) {
        let slow = fast + extra;
        let input = series(&prices);
        let macd = Macd::new(fast, slow, signal).unwrap();
        let output = compute_macd(&input, fast, slow, signal).unwrap();

        prop_assert_eq!(output.macd_line.len(), macd.output_len(input.len()));
        prop_assert_eq!(output.histogram.len(), output.macd_line.len());
        prop_assert_eq!(output.signal_line.len(), macd.signal_len(input.len()));
        for (idx, hist) in output.histogram.iter().enumerate() {
            let signal = output.signal_line.get(idx).map_or(0.0, |point| point.value);
            prop_assert_eq!(hist.value, output.macd_line[idx].value - signal);
            prop_assert_eq!(&hist.date, &input[idx].date);
        }
    }

    #[test]
    fn constant_prices_collapse_bollinger_bands(
        level in 0.01f64..10_000.0,
        len in 1usize..40,
        period in 1usize..20,
    ) {
        prop_assume!(len >= period);
        let prices = vec![level; len];
        let output = compute_bollinger(&series(&prices), period, 2.0).unwrap();
        prop_assert_eq!(output.len(), len - period + 1);
        for point in output {
            prop_assert_eq!(point.upper, point.middle);
            prop_assert_eq!(point.lower, point.middle);
        }
    }

    #[test]
    fn aligned_series_meet_at_one_hundred(primary in price_series(30), secondary in price_series(30)) {
        let primary = series(&primary);
        let secondary = series(&secondary);
        let aligned = align_for_comparison(&primary, &secondary);
        prop_assert_eq!(aligned.len(), primary.len());

        let shared = primary.len().min(secondary.len());
        if shared > 0 {
            // Both series use the same date labels, so the first point is the anchor.
            prop_assert_eq!(aligned[0].p1, 100.0);
            prop_assert_eq!(aligned[0].p2, Some(100.0));
            for point in &aligned[shared..] {
                prop_assert!(point.p2.is_none());
            }
        } else {
            for (point, sample) in aligned.iter().zip(&primary) {
                prop_assert_eq!(point.p1, sample.price);
                prop_assert!(point.p2.is_none());
            }
        }
    }
}

#[test]
fn twenty_one_day_linear_series() {
    let prices: Vec<f64> = (100..=120).map(f64::from).collect();
    let output = compute_sma(&series(&prices), 20).unwrap();
    assert_eq!(output.len(), 2);
    assert_eq!(output[0].value, 109.5);
    assert_eq!(output[1].value, 110.5);
}

#[test]
fn short_series_produce_nothing() {
    let input = series(&[1.0, 2.0, 3.0]);
    assert!(compute_sma(&input, 4).unwrap().is_empty());
    assert!(compute_bollinger(&input, 4, 2.0).unwrap().is_empty());
    assert!(compute_rsi(&input, 3).unwrap().is_empty());
    assert!(compute_ema(&input, 4).unwrap().is_empty());
    assert!(compute_macd(&input, 2, 4, 2).unwrap().is_empty());
}

#[test]
fn rising_seed_window_gives_rsi_of_one_hundred() {
    let input = series(&[10.0, 11.0, 12.5, 13.0, 15.0, 14.0]);
    let output = compute_rsi(&input, 4).unwrap();
    assert_eq!(output[0].value, 100.0);
    assert!(output[1].value < 100.0);
}

#[test]
fn zero_period_is_a_configuration_error() {
    let input = series(&[1.0, 2.0]);
    assert!(compute_sma(&input, 0).is_err());
    assert!(compute_ema(&input, 0).is_err());
    assert!(compute_rsi(&input, 0).is_err());
    assert!(compute_bollinger(&input, 0, 2.0).is_err());
    assert!(compute_macd(&input, 0, 26, 9).is_err());
}

#[test]
fn matching_ten_percent_moves_align() {
    let primary = vec![PricePoint::new("d1", 100.0), PricePoint::new("d2", 110.0)];
    let secondary = vec![PricePoint::new("d1", 50.0), PricePoint::new("d2", 55.0)];
    let aligned = align_for_comparison(&primary, &secondary);

    assert_eq!(aligned.len(), 2);
    assert_eq!(aligned[0].date, "d1");
    assert_eq!(aligned[0].p1, 100.0);
    assert_eq!(aligned[0].p2, Some(100.0));
    assert_eq!(aligned[1].date, "d2");
    assert_relative_eq!(aligned[1].p1, 110.0, max_relative = 1e-12);
    assert_relative_eq!(aligned[1].p2.unwrap(), 110.0, max_relative = 1e-12);
}

#[test]
fn empty_secondary_shows_raw_primary() {
    let primary = vec![PricePoint::new("d1", 100.0), PricePoint::new("d2", 110.0)];
    let aligned = align_for_comparison::<_, PricePoint>(&primary, &[]);
    let json = serde_json::to_value(&aligned).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "date": "d1", "p1": 100.0 },
            { "date": "d2", "p1": 110.0 },
        ])
    );
}
