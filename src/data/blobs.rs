use rand::Rng;
use rand_distr::StandardNormal;

use crate::data::dataset::Dataset;
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Isotropic Gaussian clusters, one per class.
///
/// Class `c` gets `per_class` points drawn from `N(centers[c], spread² I)`.
/// Rows come out grouped by class; shuffle before splitting.
pub fn make_blobs<R: Rng + ?Sized>(
    centers: &[Vec<f64>],
    per_class: usize,
    spread: f64,
    rng: &mut R,
) -> Result<Dataset> {
    if centers.is_empty() {
        return Err(NetError::InvalidDimension { name: "centers" });
    }
    if !spread.is_finite() || spread < 0.0 {
        return Err(NetError::InvalidHyperparameter { name: "spread", value: spread });
    }
    let dim = centers[0].len();
    if let Some((row, bad)) = centers.iter().enumerate().find(|(_, c)| c.len() != dim) {
        return Err(NetError::RaggedRows { row, expected: dim, got: bad.len() });
    }

    let mut rows = Vec::with_capacity(centers.len() * per_class);
    let mut labels = Vec::with_capacity(centers.len() * per_class);
    for (class, center) in centers.iter().enumerate() {
        for _ in 0..per_class {
            let point: Vec<f64> = center.iter()
                .map(|&m| {
                    let z: f64 = rng.sample(StandardNormal);
                    m + spread * z
                })
                .collect();
            rows.push(point);
            labels.push(class);
        }
    }

    let features = if rows.is_empty() { Matrix::zeros(0, dim) } else { Matrix::from_data(rows)? };
    Dataset::new(features, labels)
}
