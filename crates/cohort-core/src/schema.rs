//! Trained input schema: field order, category vocabularies, and the
//! boundary conversion from dynamic JSON rows into typed [`RawRow`]s.
//!
//! The vocabularies and column order below are fixed at training time. The
//! model was fit against this exact layout; any permutation silently
//! produces wrong predictions, so nothing here may depend on which values
//! happen to appear in a given batch.

use serde_json::Value;

use crate::error::EncodeError;

/// Raw fields per input row, in wire order.
pub const RAW_FIELDS: [&str; 4] = ["minutes_watched", "clv_wins", "region", "channel"];

/// Known region values, in trained column order.
pub const REGIONS: [&str; 2] = ["USA/Canada/As", "West_EU"];

/// Known acquisition channel values, in trained column order.
pub const CHANNELS: [&str; 7] = [
    "Friend",
    "Google",
    "Instagram",
    "LinkedIn",
    "Other",
    "Twitter",
    "YouTube",
];

/// Number of numeric columns preceding the indicator blocks.
pub const NUMERIC_WIDTH: usize = 2;

/// Total width of the trained feature vector:
/// `[minutes_watched, clv_wins][region block][channel block]`.
pub const FEATURE_WIDTH: usize = NUMERIC_WIDTH + REGIONS.len() + CHANNELS.len();

/// Trained feature column names, in the exact order the model was fit on.
pub fn trained_columns() -> Vec<String> {
    let mut cols = Vec::with_capacity(FEATURE_WIDTH);
    cols.push("minutes_watched".to_string());
    cols.push("clv_wins".to_string());
    cols.extend(REGIONS.iter().map(|r| format!("region_{}", r)));
    cols.extend(CHANNELS.iter().map(|c| format!("channel_{}", c)));
    cols
}

/// One validated input row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub minutes_watched: f32,
    pub clv_wins: f32,
    pub region: String,
    pub channel: String,
}

impl RawRow {
    /// Convert one 4-element JSON array into a typed row.
    ///
    /// `row` is the position of this row within the request batch and is
    /// only used for error reporting. Numeric fields accept any JSON
    /// number (integer or float); categorical fields must be strings.
    /// Unknown *values* for region/channel are accepted here; they are
    /// handled by the encoder, not the schema.
    pub fn from_values(row: usize, values: &[Value]) -> Result<Self, EncodeError> {
        if values.len() != RAW_FIELDS.len() {
            return Err(EncodeError::MalformedInput {
                row,
                n_fields: values.len(),
            });
        }

        let minutes_watched = number_field(row, RAW_FIELDS[0], &values[0])?;
        let clv_wins = number_field(row, RAW_FIELDS[1], &values[1])?;
        let region = string_field(row, RAW_FIELDS[2], &values[2])?;
        let channel = string_field(row, RAW_FIELDS[3], &values[3])?;

        Ok(Self {
            minutes_watched,
            clv_wins,
            region,
            channel,
        })
    }
}

fn number_field(row: usize, field: &'static str, value: &Value) -> Result<f32, EncodeError> {
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or(EncodeError::TypeConversion { row, field })
}

fn string_field(row: usize, field: &'static str, value: &Value) -> Result<String, EncodeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(EncodeError::TypeConversion { row, field })
}
