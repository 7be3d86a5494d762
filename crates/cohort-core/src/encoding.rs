//! Feature encoder: raw rows -> fixed-order 11-column feature matrix.
//!
//! The output layout is `[scaled numerics][region indicators][channel
//! indicators]` with the indicator blocks laid out in vocabulary order.
//! Column count and order never depend on which category values appear in
//! a batch: an indicator column a batch never sets is still present,
//! explicitly zero. A value outside the vocabulary leaves its whole block
//! zero rather than failing the request.

use crate::math::Array2;
use crate::preprocessing::Scaler;
use crate::schema::{RawRow, CHANNELS, FEATURE_WIDTH, REGIONS};

/// Stateless except for the injected, already-fit scaler.
#[derive(Clone, Debug)]
pub struct FeatureEncoder {
    scaler: Scaler,
}

impl FeatureEncoder {
    pub fn new(scaler: Scaler) -> Self {
        Self { scaler }
    }

    /// Encode a batch of rows into an `n x 11` matrix in trained column
    /// order. An empty batch yields a `0 x 11` matrix.
    pub fn encode(&self, rows: &[RawRow]) -> Array2<f32> {
        let mut buf = Vec::with_capacity(rows.len() * FEATURE_WIDTH);
        for row in rows {
            buf.push(row.minutes_watched);
            buf.push(row.clv_wins);
            push_indicators(&mut buf, &row.region, &REGIONS);
            push_indicators(&mut buf, &row.channel, &CHANNELS);
        }

        let mut x = Array2::from_flat_rows(FEATURE_WIDTH, buf)
            .expect("encode: row width is FEATURE_WIDTH by construction");
        self.scaler.transform(&mut x);
        x
    }
}

/// Append one indicator column per vocabulary entry: 1.0 where `value`
/// matches, 0.0 elsewhere. An unknown value leaves every column 0.0,
/// mirroring the training-time "reindex with fill_value=0" behavior.
fn push_indicators(buf: &mut Vec<f32>, value: &str, vocabulary: &[&str]) {
    for &known in vocabulary {
        buf.push(if value == known { 1.0 } else { 0.0 });
    }
}
