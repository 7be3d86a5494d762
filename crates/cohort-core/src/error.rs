use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Request-level failures while turning raw rows into feature vectors.
///
/// Unknown `region`/`channel` values are deliberately absent here: they
/// degrade to an all-zero indicator block instead of failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// A row did not have exactly the four expected fields.
    MalformedInput { row: usize, n_fields: usize },
    /// A field had the wrong JSON type (numeric fields must be numbers,
    /// categorical fields must be strings).
    TypeConversion { row: usize, field: &'static str },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::MalformedInput { row, n_fields } => write!(
                f,
                "row {}: expected 4 fields [minutes_watched, clv_wins, region, channel], got {}",
                row, n_fields
            ),
            EncodeError::TypeConversion { row, field } => {
                write!(f, "row {}: field '{}' has an invalid type", row, field)
            }
        }
    }
}

impl Error for EncodeError {}

/// Fatal artifact-loading failures. Any of these at startup means the
/// process must refuse to serve.
#[derive(Debug)]
pub enum ArtifactError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact parsed but does not match the trained schema.
    Invalid { path: PathBuf, reason: String },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io { path, source } => {
                write!(f, "failed to read artifact {}: {}", path.display(), source)
            }
            ArtifactError::Parse { path, source } => {
                write!(f, "failed to parse artifact {}: {}", path.display(), source)
            }
            ArtifactError::Invalid { path, reason } => {
                write!(f, "invalid artifact {}: {}", path.display(), reason)
            }
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactError::Io { source, .. } => Some(source),
            ArtifactError::Parse { source, .. } => Some(source),
            ArtifactError::Invalid { .. } => None,
        }
    }
}
