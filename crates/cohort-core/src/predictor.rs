//! The inference pipeline: raw rows -> feature matrix -> cluster ids.
//!
//! A `Predictor` is built once at startup from the loaded artifacts and
//! shared read-only afterwards. It has no interior mutability, so any
//! number of concurrent callers may use it without locking.

use std::path::Path;

use crate::artifacts::{load_kmeans, load_scaler, MODEL_FILE, SCALER_FILE};
use crate::encoding::FeatureEncoder;
use crate::error::{ArtifactError, EncodeError};
use crate::model::ClusterModel;
use crate::preprocessing::Scaler;
use crate::schema::{RawRow, FEATURE_WIDTH, NUMERIC_WIDTH};

pub struct Predictor {
    encoder: FeatureEncoder,
    model: Box<dyn ClusterModel + Send + Sync>,
}

impl Predictor {
    /// Wire a predictor from already-loaded artifacts. The artifacts are
    /// injected here rather than read from ambient globals so tests and
    /// the server construct the pipeline the same way.
    pub fn new(scaler: Scaler, model: Box<dyn ClusterModel + Send + Sync>) -> Self {
        assert_eq!(
            scaler.width(),
            NUMERIC_WIDTH,
            "scaler covers {} columns, the trained schema has {} numeric columns",
            scaler.width(),
            NUMERIC_WIDTH
        );
        assert_eq!(
            model.n_features(),
            FEATURE_WIDTH,
            "model '{}' expects {} features, the trained schema has {}",
            model.name(),
            model.n_features(),
            FEATURE_WIDTH
        );
        Self {
            encoder: FeatureEncoder::new(scaler),
            model,
        }
    }

    /// Load both artifacts from `dir` and build the pipeline. Fails with
    /// the first artifact error; the caller is expected to treat that as
    /// fatal and not serve.
    pub fn from_artifact_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();
        let scaler = load_scaler(dir.join(SCALER_FILE))?;
        let model = load_kmeans(dir.join(MODEL_FILE))?;
        Ok(Self::new(scaler, Box::new(model)))
    }

    /// Encode a batch and assign one cluster id per row, in input order.
    /// The whole batch succeeds or the whole batch fails.
    pub fn predict_rows(&self, rows: &[RawRow]) -> Vec<i64> {
        let x = self.encoder.encode(rows);
        let ids = self.model.predict(&x);
        debug_assert_eq!(ids.len(), rows.len());
        log::debug!("predicted {} rows with {}", ids.len(), self.model.name());
        ids
    }

    /// Parse a dynamic JSON batch, then predict. This is the whole
    /// request-to-response pipeline minus HTTP.
    pub fn predict_values(&self, batch: &[Vec<serde_json::Value>]) -> Result<Vec<i64>, EncodeError> {
        let rows = batch
            .iter()
            .enumerate()
            .map(|(i, values)| RawRow::from_values(i, values))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.predict_rows(&rows))
    }
}
