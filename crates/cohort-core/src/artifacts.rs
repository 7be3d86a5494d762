//! Loading and validation of the two externally-trained artifacts.
//!
//! The original training step owns the artifact contents; this module only
//! cares about the behavioral contract (`transform`, `predict`). Artifacts
//! are JSON documents: `scale.json` holds the numeric scaler's per-column
//! mean/std, `kmeans_model.json` holds the centroid table. Any failure
//! here is fatal at startup; the process must refuse to serve rather than
//! serve with missing or malformed artifacts.

use std::path::Path;

use crate::error::ArtifactError;
use crate::model::{ClusterModel, KMeans};
use crate::preprocessing::Scaler;
use crate::schema::{FEATURE_WIDTH, NUMERIC_WIDTH};

/// File name of the fitted scaler artifact.
pub const SCALER_FILE: &str = "scale.json";

/// File name of the fitted clustering model artifact.
pub const MODEL_FILE: &str = "kmeans_model.json";

/// Load and validate the fitted numeric scaler.
pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<Scaler, ArtifactError> {
    let path = path.as_ref();
    let scaler: Scaler = read_json(path)?;

    if scaler.mean.len() != NUMERIC_WIDTH || scaler.std.len() != NUMERIC_WIDTH {
        return Err(invalid(
            path,
            format!(
                "scaler must cover {} numeric columns, got mean/std of {}/{}",
                NUMERIC_WIDTH,
                scaler.mean.len(),
                scaler.std.len()
            ),
        ));
    }
    if let Some(bad) = scaler.std.iter().find(|s| !s.is_finite() || **s <= 0.0) {
        return Err(invalid(path, format!("scaler std must be positive, got {}", bad)));
    }

    log::info!("loaded scaler from {}", path.display());
    Ok(scaler)
}

/// Load and validate the fitted clustering model.
pub fn load_kmeans<P: AsRef<Path>>(path: P) -> Result<KMeans, ArtifactError> {
    let path = path.as_ref();
    let model: KMeans = read_json(path)?;

    if model.centroids.is_empty() {
        return Err(invalid(path, "model has no centroids".to_string()));
    }
    if let Some(c) = model.centroids.iter().find(|c| c.len() != FEATURE_WIDTH) {
        return Err(invalid(
            path,
            format!(
                "centroid width {} does not match the trained feature width {}",
                c.len(),
                FEATURE_WIDTH
            ),
        ));
    }

    log::info!(
        "loaded {} model with {} clusters from {}",
        model.name(),
        model.centroids.len(),
        path.display()
    );
    Ok(model)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(path: &Path, reason: String) -> ArtifactError {
    ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    }
}
