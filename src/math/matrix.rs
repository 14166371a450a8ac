use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Serialize, Deserialize};
use std::ops::{Index, IndexMut};

use crate::error::{NetError, Result};

/// Dense row-major matrix of `f64`.
///
/// Bias vectors are stored as `1 × n` row matrices so that every parameter
/// and gradient shares one type.
///
/// Deserialization goes through `RawMatrix`, so a decoded matrix always
/// holds exactly `rows` rows of `cols` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

/// Serialized form of a [`Matrix`], checked before it becomes one.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = NetError;

    fn try_from(raw: RawMatrix) -> Result<Matrix> {
        if raw.data.len() != raw.rows {
            return Err(NetError::ShapeMismatch {
                op: "decoded matrix rows",
                expected: (raw.rows, raw.cols),
                got: (raw.data.len(), raw.cols),
            });
        }
        if let Some((row, bad)) = raw.data.iter().enumerate().find(|(_, r)| r.len() != raw.cols) {
            return Err(NetError::RaggedRows { row, expected: raw.cols, got: bad.len() });
        }
        Ok(Matrix { rows: raw.rows, cols: raw.cols, data: raw.data })
    }
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// A `1 × len` row of zeros.
    pub fn zero_row(len: usize) -> Matrix {
        Matrix::zeros(1, len)
    }

    /// Builds a matrix from nested rows. Fails if the rows have unequal lengths.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(NetError::RaggedRows { row, expected: cols, got: bad.len() });
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    /// Entries drawn independently from N(0, 1), scaled by `std`.
    pub fn randn<R: Rng + ?Sized>(rows: usize, cols: usize, std: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                let z: f64 = rng.sample(StandardNormal);
                *x = std * z;
            }
        }
        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise combination of two same-shape matrices.
    pub fn zip_map<F>(&self, other: &Matrix, op: &'static str, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.expect_shape(other.shape(), op)?;
        let data = self.data.iter().zip(other.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
            })
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Matrix product `self · rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(NetError::ShapeMismatch {
                op: "matmul",
                expected: (self.cols, rhs.cols),
                got: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for (i, out_row) in res.data.iter_mut().enumerate() {
            for (k, &a) in self.data[i].iter().enumerate() {
                for (out, &b) in out_row.iter_mut().zip(rhs.data[k].iter()) {
                    *out += a * b;
                }
            }
        }

        Ok(res)
    }

    /// Adds a `1 × cols` row to every row of `self`.
    pub fn add_row(&self, bias: &Matrix) -> Result<Matrix> {
        if bias.rows != 1 || bias.cols != self.cols {
            return Err(NetError::ShapeMismatch {
                op: "add_row",
                expected: (1, self.cols),
                got: bias.shape(),
            });
        }
        let mut res = self.clone();
        for row in res.data.iter_mut() {
            for (x, b) in row.iter_mut().zip(bias.data[0].iter()) {
                *x += b;
            }
        }
        Ok(res)
    }

    /// Column sums as a `1 × cols` row.
    pub fn sum_rows(&self) -> Matrix {
        let mut res = Matrix::zero_row(self.cols);
        for row in &self.data {
            for (acc, x) in res.data[0].iter_mut().zip(row.iter()) {
                *acc += x;
            }
        }
        res
    }

    pub fn sum_squares(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }

    /// In-place `self += alpha * other`.
    pub fn scaled_add_assign(&mut self, other: &Matrix, alpha: f64) -> Result<()> {
        self.expect_shape(other.shape(), "scaled_add_assign")?;
        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (x, o) in row.iter_mut().zip(other_row.iter()) {
                *x += alpha * o;
            }
        }
        Ok(())
    }

    /// Gathers the given rows, in order, into a new matrix.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        Matrix {
            rows: indices.len(),
            cols: self.cols,
            data: indices.iter().map(|&i| self.data[i].clone()).collect(),
        }
    }

    /// Index of the largest entry in each row; ties go to the first maximum.
    pub fn argmax_rows(&self) -> Vec<usize> {
        self.data.iter().map(|row| argmax(row)).collect()
    }

    pub fn expect_shape(&self, shape: (usize, usize), op: &'static str) -> Result<()> {
        if self.shape() != shape {
            return Err(NetError::ShapeMismatch { op, expected: shape, got: self.shape() });
        }
        Ok(())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i][j]
    }
}

/// Index of the maximum element in a slice. Strict `>` keeps the first of equal maxima.
fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > v[best] {
            best = i;
        }
    }
    best
}
