use crate::error::Result;
use crate::math::matrix::Matrix;

/// Element-wise `max(x, 0)`.
pub fn relu(pre_activation: &Matrix) -> Matrix {
    pre_activation.map(|x| if x > 0.0 { x } else { 0.0 })
}

/// Gates the upstream gradient with the ReLU derivative.
///
/// `activated` is the forward output `h = relu(a)`; the gradient passes
/// wherever `h > 0` and is blocked elsewhere. Since `relu(a) > 0` exactly when
/// `a > 0`, the pre-activation is not needed.
pub fn relu_backward(upstream: &Matrix, activated: &Matrix) -> Result<Matrix> {
    upstream.zip_map(activated, "relu_backward", |g, h| if h > 0.0 { g } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_negatives() {
        let a = Matrix::from_data(vec![vec![-1.0, 0.0, 2.5]]).unwrap();
        assert_eq!(relu(&a).data, vec![vec![0.0, 0.0, 2.5]]);
    }

    #[test]
    fn backward_blocks_clamped_units() {
        let h = Matrix::from_data(vec![vec![0.0, 3.0], vec![1.0, 0.0]]).unwrap();
        let g = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let da = relu_backward(&g, &h).unwrap();
        assert_eq!(da.data, vec![vec![0.0, 6.0], vec![7.0, 0.0]]);
    }
}
