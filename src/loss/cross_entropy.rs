use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Softmax cross-entropy over a batch of raw class scores with integer labels.
pub struct SoftmaxCrossEntropy;

impl SoftmaxCrossEntropy {
    /// Mean negative log-likelihood of the true classes and its gradient with
    /// respect to the scores.
    ///
    /// Each row is shifted by its maximum before exponentiating (log-sum-exp),
    /// so the result stays finite for arbitrarily large scores:
    ///   L_i = -s[i, y_i] + ln Σ_c exp(s[i, c]),   s = scores - max_c scores
    ///
    /// The gradient is `(softmax(s) - onehot(y)) / N`, shape N × C.
    pub fn loss_and_grad(scores: &Matrix, labels: &[usize]) -> Result<(f64, Matrix)> {
        check_labels(labels, scores.rows, scores.cols)?;
        if scores.rows == 0 {
            return Err(NetError::EmptyBatch);
        }

        let n = scores.rows as f64;
        let mut total = 0.0;
        let mut dscores = Matrix::zeros(scores.rows, scores.cols);

        for (i, (row, &y)) in scores.data.iter().zip(labels.iter()).enumerate() {
            let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let exps: Vec<f64> = row.iter().map(|&s| (s - max).exp()).collect();
            let sum_exp: f64 = exps.iter().sum();

            total += -(row[y] - max) + sum_exp.ln();

            for (d, e) in dscores.data[i].iter_mut().zip(exps.iter()) {
                *d = e / sum_exp / n;
            }
            dscores.data[i][y] -= 1.0 / n;
        }

        Ok((total / n, dscores))
    }
}

/// Validates that there is one label per row and that each label names a class.
pub fn check_labels(labels: &[usize], rows: usize, num_classes: usize) -> Result<()> {
    if labels.len() != rows {
        return Err(NetError::LabelCount { expected: rows, got: labels.len() });
    }
    if let Some((row, &label)) = labels.iter().enumerate().find(|(_, &l)| l >= num_classes) {
        return Err(NetError::LabelOutOfRange { row, label, num_classes });
    }
    Ok(())
}
