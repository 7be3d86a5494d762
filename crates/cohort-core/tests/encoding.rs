//! Integration tests for the feature encoder and scaler contract.

use cohort_core::encoding::FeatureEncoder;
use cohort_core::preprocessing::Scaler;
use cohort_core::schema::{trained_columns, RawRow, CHANNELS, FEATURE_WIDTH, REGIONS};

fn row(minutes: f32, clv: f32, region: &str, channel: &str) -> RawRow {
    RawRow {
        minutes_watched: minutes,
        clv_wins: clv,
        region: region.to_string(),
        channel: channel.to_string(),
    }
}

fn identity_encoder() -> FeatureEncoder {
    FeatureEncoder::new(Scaler {
        mean: vec![0.0, 0.0],
        std: vec![1.0, 1.0],
    })
}

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

#[test]
fn feature_width_is_eleven() {
    assert_eq!(FEATURE_WIDTH, 11);
    assert_eq!(trained_columns().len(), 11);
}

#[test]
fn column_order_is_fixed_regardless_of_batch() {
    let enc = identity_encoder();

    // Two batches touching disjoint category values must still agree on
    // shape; the indicator a batch never sets is present and zero.
    let a = enc.encode(&[row(1.0, 2.0, "West_EU", "Twitter")]);
    let b = enc.encode(&[row(1.0, 2.0, "USA/Canada/As", "Friend")]);
    assert_eq!(a.shape(), (1, FEATURE_WIDTH));
    assert_eq!(b.shape(), (1, FEATURE_WIDTH));

    // West_EU is the second region column, Twitter the sixth channel column.
    assert_eq!(&a.row_slice(0)[2..4], &[0.0, 1.0]);
    assert_eq!(a.row_slice(0)[2 + REGIONS.len() + 5], 1.0);
    assert_eq!(&b.row_slice(0)[2..4], &[1.0, 0.0]);
    assert_eq!(b.row_slice(0)[2 + REGIONS.len()], 1.0);
}

// ---------------------------------------------------------------------------
// Indicator blocks
// ---------------------------------------------------------------------------

#[test]
fn every_known_value_sets_exactly_one_indicator() {
    let enc = identity_encoder();

    for (i, region) in REGIONS.iter().enumerate() {
        let x = enc.encode(&[row(0.0, 0.0, region, "Google")]);
        let block = &x.row_slice(0)[2..2 + REGIONS.len()];
        assert_eq!(block.iter().sum::<f32>(), 1.0, "region block for {}", region);
        assert_eq!(block[i], 1.0);
    }

    for (i, channel) in CHANNELS.iter().enumerate() {
        let x = enc.encode(&[row(0.0, 0.0, "West_EU", channel)]);
        let block = &x.row_slice(0)[2 + REGIONS.len()..];
        assert_eq!(block.iter().sum::<f32>(), 1.0, "channel block for {}", channel);
        assert_eq!(block[i], 1.0);
    }
}

#[test]
fn unknown_values_fill_zero_without_error() {
    let enc = identity_encoder();
    let x = enc.encode(&[row(5.0, 20.0, "Mars", "Carrier Pigeon")]);

    assert_eq!(x.shape(), (1, FEATURE_WIDTH));
    assert!(
        x.row_slice(0)[2..].iter().all(|&v| v == 0.0),
        "both indicator blocks must be all-zero for unknown values"
    );
}

#[test]
fn vocabulary_match_is_exact_not_fuzzy() {
    let enc = identity_encoder();
    // Case and whitespace differences are unknown values, not matches.
    let x = enc.encode(&[row(0.0, 0.0, "west_eu", " Google")]);
    assert!(x.row_slice(0)[2..].iter().all(|&v| v == 0.0));
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

#[test]
fn numeric_columns_are_standardized_in_place() {
    let enc = FeatureEncoder::new(Scaler {
        mean: vec![10.0, 100.0],
        std: vec![2.0, 50.0],
    });
    let x = enc.encode(&[row(12.0, 300.0, "USA/Canada/As", "Google")]);

    assert!((x[(0, 0)] - 1.0).abs() < 1e-6, "minutes scaled: {}", x[(0, 0)]);
    assert!((x[(0, 1)] - 4.0).abs() < 1e-6, "clv scaled: {}", x[(0, 1)]);
    // Indicator columns are untouched by the scaler.
    assert_eq!(&x.row_slice(0)[2..4], &[1.0, 0.0]);
}

#[test]
fn scaling_preserves_row_order() {
    let enc = FeatureEncoder::new(Scaler {
        mean: vec![0.0, 0.0],
        std: vec![1.0, 1.0],
    });
    let x = enc.encode(&[
        row(9.0, 110.0, "USA/Canada/As", "Google"),
        row(29.0, 55.0, "West_EU", "Friend"),
    ]);

    assert_eq!(x.shape(), (2, FEATURE_WIDTH));
    assert_eq!(x[(0, 0)], 9.0);
    assert_eq!(x[(1, 0)], 29.0);
}
