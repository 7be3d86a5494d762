use serde::Deserialize;

use crate::math::Array2;
use crate::model::ClusterModel;

/// Pre-trained k-means model: a centroid table, nothing else. Prediction
/// is nearest-centroid assignment under squared Euclidean distance; ties
/// resolve to the lower centroid index.
#[derive(Clone, Debug, Deserialize)]
pub struct KMeans {
    pub centroids: Vec<Vec<f32>>,
}

impl ClusterModel for KMeans {
    fn n_features(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }

    fn predict(&self, x: &Array2<f32>) -> Vec<i64> {
        debug_assert_eq!(x.ncols(), self.n_features());

        let mut assignments = Vec::with_capacity(x.nrows());
        for point in x.rows_iter() {
            let mut best = 0usize;
            let mut best_dist = f32::MAX;
            for (j, centroid) in self.centroids.iter().enumerate() {
                let dist = distance_sq(point, centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best = j;
                }
            }
            assignments.push(best as i64);
        }
        assignments
    }

    fn name(&self) -> &str {
        "kmeans"
    }
}

fn distance_sq(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> KMeans {
        KMeans {
            centroids: vec![vec![0.0, 0.0], vec![10.0, 10.0], vec![-5.0, 5.0]],
        }
    }

    #[test]
    fn assigns_nearest_centroid() {
        let x = Array2::from_shape_vec(
            (3, 2),
            vec![1.0, 1.0, 9.0, 11.0, -4.0, 4.0],
        )
        .unwrap();

        let pred = model().predict(&x);
        assert_eq!(pred, vec![0, 1, 2]);
    }

    #[test]
    fn output_length_and_order_match_input() {
        let x = Array2::from_shape_vec((2, 2), vec![10.0, 10.0, 0.1, -0.1]).unwrap();
        let pred = model().predict(&x);
        assert_eq!(pred, vec![1, 0]);
    }

    #[test]
    fn tie_resolves_to_lower_index() {
        let m = KMeans {
            centroids: vec![vec![-1.0], vec![1.0]],
        };
        let x = Array2::from_shape_vec((1, 1), vec![0.0]).unwrap();
        assert_eq!(m.predict(&x), vec![0]);
    }

    #[test]
    fn empty_batch_gives_empty_predictions() {
        let x = Array2::from_shape_vec((0, 2), vec![]).unwrap();
        assert!(model().predict(&x).is_empty());
    }
}
