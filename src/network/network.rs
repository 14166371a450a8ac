use std::path::Path;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::relu::{relu, relu_backward};
use crate::error::{NetError, Result};
use crate::loss::cross_entropy::{check_labels, SoftmaxCrossEntropy};
use crate::loss::l2::L2Penalty;
use crate::math::matrix::Matrix;
use crate::network::params::{Gradients, Params};
use crate::train::history::TrainHistory;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Scale applied to the standard-normal initial weights when none is given.
pub const DEFAULT_INIT_STD: f64 = 1e-4;

/// Result of [`TwoLayerNet::compute_loss_and_gradients`].
#[derive(Debug, Clone)]
pub enum LossOutput {
    /// No labels were given: raw class scores, N × C.
    Scores(Matrix),
    /// Labels were given: regularized loss and the gradient of every parameter.
    LossAndGradients { loss: f64, grads: Gradients },
}

/// Intermediate values of one forward pass that the backward pass reuses.
struct Forward {
    hidden: Matrix,
    scores: Matrix,
}

/// Two-layer fully-connected classifier:
/// input → affine → ReLU → affine → softmax.
///
/// The parameters are owned by the network and only mutated by [`TwoLayerNet::train`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoLayerNet {
    params: Params,
}

impl TwoLayerNet {
    /// Builds a network with weights drawn from the thread-local RNG.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, std: f64) -> Result<TwoLayerNet> {
        TwoLayerNet::from_rng(input_size, hidden_size, output_size, std, &mut rand::thread_rng())
    }

    /// Builds a network with weights drawn from `rng`; use a seeded RNG for reproducible runs.
    pub fn from_rng<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        std: f64,
        rng: &mut R,
    ) -> Result<TwoLayerNet> {
        let params = Params::init(input_size, hidden_size, output_size, std, rng)?;
        Ok(TwoLayerNet { params })
    }

    pub fn from_params(params: Params) -> Result<TwoLayerNet> {
        params.validate()?;
        Ok(TwoLayerNet { params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub(crate) fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn input_size(&self) -> usize {
        self.params.input_size()
    }

    pub fn hidden_size(&self) -> usize {
        self.params.hidden_size()
    }

    pub fn output_size(&self) -> usize {
        self.params.output_size()
    }

    /// Forward pass; when `labels` is given, also the loss and the backward pass.
    ///
    /// `x` is N × D. Each label must lie in `[0, C)`. `reg` scales the L2
    /// penalty on both weight matrices (biases are not penalized).
    pub fn compute_loss_and_gradients(
        &self,
        x: &Matrix,
        labels: Option<&[usize]>,
        reg: f64,
    ) -> Result<LossOutput> {
        match labels {
            Some(labels) => {
                let (loss, grads) = self.loss(x, labels, reg)?;
                Ok(LossOutput::LossAndGradients { loss, grads })
            }
            None => Ok(LossOutput::Scores(self.scores(x)?)),
        }
    }

    /// Class scores (N × C) for every row of `x`.
    pub fn scores(&self, x: &Matrix) -> Result<Matrix> {
        Ok(self.forward(x)?.scores)
    }

    /// Loss and gradients for a labelled batch.
    pub fn loss(&self, x: &Matrix, labels: &[usize], reg: f64) -> Result<(f64, Gradients)> {
        if !reg.is_finite() || reg < 0.0 {
            return Err(NetError::InvalidHyperparameter { name: "reg", value: reg });
        }
        check_labels(labels, x.rows, self.output_size())?;

        let Forward { hidden, scores } = self.forward(x)?;
        let p = &self.params;

        let (data_loss, dscores) = SoftmaxCrossEntropy::loss_and_grad(&scores, labels)?;
        let loss = data_loss + L2Penalty::loss(reg, &[p.w1(), p.w2()]);

        // Second layer.
        let mut dw2 = hidden.transpose().matmul(&dscores)?;
        L2Penalty::accumulate_grad(reg, p.w2(), &mut dw2)?;
        let db2 = dscores.sum_rows();

        // Back through the ReLU into the first layer.
        let dhidden = dscores.matmul(&p.w2().transpose())?;
        let da1 = relu_backward(&dhidden, &hidden)?;

        let mut dw1 = x.transpose().matmul(&da1)?;
        L2Penalty::accumulate_grad(reg, p.w1(), &mut dw1)?;
        let db1 = da1.sum_rows();

        Ok((loss, Gradients { w1: dw1, b1: db1, w2: dw2, b2: db2 }))
    }

    /// Most likely class for each row of `x`.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<usize>> {
        Ok(self.scores(x)?.argmax_rows())
    }

    /// Fraction of rows whose predicted class equals the label. An empty set scores 0.
    pub fn accuracy(&self, x: &Matrix, labels: &[usize]) -> Result<f64> {
        if labels.len() != x.rows {
            return Err(NetError::LabelCount { expected: x.rows, got: labels.len() });
        }
        if labels.is_empty() {
            return Ok(0.0);
        }
        let correct = self.predict(x)?
            .iter()
            .zip(labels.iter())
            .filter(|(p, y)| p == y)
            .count();
        Ok(correct as f64 / labels.len() as f64)
    }

    /// Minibatch SGD on `(x, labels)`, checking accuracy on `(x_val, val_labels)`
    /// at every epoch boundary. See [`train_loop`].
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        x: &Matrix,
        labels: &[usize],
        x_val: &Matrix,
        val_labels: &[usize],
        config: &TrainConfig,
        rng: &mut R,
    ) -> Result<TrainHistory> {
        train_loop(self, x, labels, x_val, val_labels, config, rng)
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network previously written by `save_json`, rejecting inconsistent shapes.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TwoLayerNet> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let net: TwoLayerNet = serde_json::from_reader(reader)?;
        net.params.validate()?;
        Ok(net)
    }

    fn forward(&self, x: &Matrix) -> Result<Forward> {
        let p = &self.params;
        if x.cols != self.input_size() {
            return Err(NetError::ShapeMismatch {
                op: "input features",
                expected: (x.rows, self.input_size()),
                got: x.shape(),
            });
        }

        let hidden = relu(&x.matmul(p.w1())?.add_row(p.b1())?);
        let scores = hidden.matmul(p.w2())?.add_row(p.b2())?;
        Ok(Forward { hidden, scores })
    }
}
