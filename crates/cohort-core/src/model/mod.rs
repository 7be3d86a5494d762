//! Cluster model abstraction and the k-means implementation backing the
//! segmentation artifact.
pub mod kmeans;

pub use kmeans::KMeans;

use crate::math::Array2;

/// Contract for a pre-trained clustering model. The predictor only needs
/// the assignment call; training never happens in this process.
pub trait ClusterModel {
    /// Width of the feature vectors the model was fit on.
    fn n_features(&self) -> usize;

    /// Assign one cluster id per row of `x`, in row order.
    fn predict(&self, x: &Array2<f32>) -> Vec<i64>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "cluster"
    }
}
