use crate::error::Result;
use crate::math::matrix::Matrix;

/// L2 weight penalty `reg * Σ W²` (no ½ factor), applied to weight matrices only.
pub struct L2Penalty;

impl L2Penalty {
    pub fn loss(reg: f64, weights: &[&Matrix]) -> f64 {
        reg * weights.iter().map(|w| w.sum_squares()).sum::<f64>()
    }

    /// Adds the penalty gradient `2 * reg * W` into `grad`.
    pub fn accumulate_grad(reg: f64, weights: &Matrix, grad: &mut Matrix) -> Result<()> {
        grad.scaled_add_assign(weights, 2.0 * reg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_and_gradient() {
        let w = Matrix::from_data(vec![vec![1.0, -2.0]]).unwrap();
        let v = Matrix::from_data(vec![vec![3.0]]).unwrap();
        assert_eq!(L2Penalty::loss(0.5, &[&w, &v]), 0.5 * 14.0);

        let mut g = Matrix::from_data(vec![vec![0.1, 0.1]]).unwrap();
        L2Penalty::accumulate_grad(0.5, &w, &mut g).unwrap();
        assert_eq!(g.data, vec![vec![1.1, -1.9]]);
    }
}
