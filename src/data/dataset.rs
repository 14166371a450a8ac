use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Feature rows paired with integer class labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// N × D feature matrix.
    pub features: Matrix,
    /// One class index per row.
    pub labels: Vec<usize>,
}

impl Dataset {
    /// Fails unless there is exactly one label per feature row.
    pub fn new(features: Matrix, labels: Vec<usize>) -> Result<Dataset> {
        if labels.len() != features.rows {
            return Err(NetError::LabelCount { expected: features.rows, got: labels.len() });
        }
        Ok(Dataset { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_features(&self) -> usize {
        self.features.cols
    }

    /// Rows and labels at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select_rows(indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    /// Shuffles rows (and their labels) in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(rng);
        *self = self.select(&order);
    }

    /// Splits into the first `n` rows and the rest. `n` is clamped to `len()`.
    pub fn split_at(&self, n: usize) -> (Dataset, Dataset) {
        let n = n.min(self.len());
        let head: Vec<usize> = (0..n).collect();
        let tail: Vec<usize> = (n..self.len()).collect();
        (self.select(&head), self.select(&tail))
    }
}
