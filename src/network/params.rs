use std::fmt;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Names of the four learnable tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    W1,
    B1,
    W2,
    B2,
}

impl ParamName {
    pub const ALL: [ParamName; 4] = [ParamName::W1, ParamName::B1, ParamName::W2, ParamName::B2];
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamName::W1 => "W1",
            ParamName::B1 => "b1",
            ParamName::W2 => "W2",
            ParamName::B2 => "b2",
        };
        f.write_str(name)
    }
}

/// Weights and biases of the two affine layers.
///
/// Shapes: `w1` D×H, `b1` 1×H, `w2` H×C, `b2` 1×C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    w1: Matrix,
    b1: Matrix,
    w2: Matrix,
    b2: Matrix,
}

impl Params {
    /// Small random weights (`std * N(0, 1)`) and zero biases.
    pub fn init<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        std: f64,
        rng: &mut R,
    ) -> Result<Params> {
        for (name, size) in [
            ("input_size", input_size),
            ("hidden_size", hidden_size),
            ("output_size", output_size),
        ] {
            if size == 0 {
                return Err(NetError::InvalidDimension { name });
            }
        }
        if !std.is_finite() {
            return Err(NetError::InvalidHyperparameter { name: "std", value: std });
        }

        Ok(Params {
            w1: Matrix::randn(input_size, hidden_size, std, rng),
            b1: Matrix::zero_row(hidden_size),
            w2: Matrix::randn(hidden_size, output_size, std, rng),
            b2: Matrix::zero_row(output_size),
        })
    }

    /// Assembles parameters from explicit tensors, checking that the shapes chain.
    pub fn from_parts(w1: Matrix, b1: Matrix, w2: Matrix, b2: Matrix) -> Result<Params> {
        let params = Params { w1, b1, w2, b2 };
        params.validate()?;
        Ok(params)
    }

    /// Checks the shape invariant and returns `(D, H, C)`.
    pub fn validate(&self) -> Result<(usize, usize, usize)> {
        let (d, h) = self.w1.shape();
        let c = self.w2.cols;
        if d == 0 {
            return Err(NetError::InvalidDimension { name: "input_size" });
        }
        if h == 0 {
            return Err(NetError::InvalidDimension { name: "hidden_size" });
        }
        if c == 0 {
            return Err(NetError::InvalidDimension { name: "output_size" });
        }
        self.b1.expect_shape((1, h), "b1")?;
        self.w2.expect_shape((h, c), "W2")?;
        self.b2.expect_shape((1, c), "b2")?;
        Ok((d, h, c))
    }

    pub fn input_size(&self) -> usize {
        self.w1.rows
    }

    pub fn hidden_size(&self) -> usize {
        self.w1.cols
    }

    pub fn output_size(&self) -> usize {
        self.w2.cols
    }

    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    pub fn b1(&self) -> &Matrix {
        &self.b1
    }

    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    pub fn b2(&self) -> &Matrix {
        &self.b2
    }

    pub fn get(&self, name: ParamName) -> &Matrix {
        match name {
            ParamName::W1 => &self.w1,
            ParamName::B1 => &self.b1,
            ParamName::W2 => &self.w2,
            ParamName::B2 => &self.b2,
        }
    }

    /// Mutable access to one tensor of an owned copy. Shapes must be kept intact.
    pub fn get_mut(&mut self, name: ParamName) -> &mut Matrix {
        match name {
            ParamName::W1 => &mut self.w1,
            ParamName::B1 => &mut self.b1,
            ParamName::W2 => &mut self.w2,
            ParamName::B2 => &mut self.b2,
        }
    }

    /// Pairs every parameter with its gradient so updates can treat all four uniformly.
    pub fn with_grads_mut<'a>(&'a mut self, grads: &'a Gradients) -> [(&'a mut Matrix, &'a Matrix); 4] {
        [
            (&mut self.w1, &grads.w1),
            (&mut self.b1, &grads.b1),
            (&mut self.w2, &grads.w2),
            (&mut self.b2, &grads.b2),
        ]
    }
}

/// Gradient of the loss with respect to each parameter, shaped like `Params`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}

impl Gradients {
    pub fn get(&self, name: ParamName) -> &Matrix {
        match name {
            ParamName::W1 => &self.w1,
            ParamName::B1 => &self.b1,
            ParamName::W2 => &self.w2,
            ParamName::B2 => &self.b2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn init_shapes_and_zero_biases() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let p = Params::init(4, 10, 3, 1e-4, &mut rng).unwrap();
        assert_eq!(p.w1().shape(), (4, 10));
        assert_eq!(p.b1().shape(), (1, 10));
        assert_eq!(p.w2().shape(), (10, 3));
        assert_eq!(p.b2().shape(), (1, 3));
        assert!(p.b1().data.iter().flatten().all(|&b| b == 0.0));
        assert!(p.b2().data.iter().flatten().all(|&b| b == 0.0));
        assert_eq!(p.validate().unwrap(), (4, 10, 3));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            Params::init(4, 0, 3, 1e-4, &mut rng),
            Err(NetError::InvalidDimension { name: "hidden_size" })
        ));
    }

    #[test]
    fn from_parts_checks_chain() {
        let err = Params::from_parts(
            Matrix::zeros(2, 3),
            Matrix::zero_row(3),
            Matrix::zeros(4, 2),
            Matrix::zero_row(2),
        )
        .unwrap_err();
        assert!(matches!(err, NetError::ShapeMismatch { op: "W2", .. }));
    }

    #[test]
    fn names_display_like_the_conventional_keys() {
        let names: Vec<String> = ParamName::ALL.iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["W1", "b1", "W2", "b2"]);
    }
}
