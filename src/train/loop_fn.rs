use log::{debug, info};
use rand::Rng;

use crate::error::{NetError, Result};
use crate::loss::cross_entropy::check_labels;
use crate::math::matrix::Matrix;
use crate::network::network::TwoLayerNet;
use crate::optim::sgd::Sgd;
use crate::train::history::TrainHistory;
use crate::train::sampler::sample_without_replacement;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` in place with minibatch SGD and returns what it observed.
///
/// # Arguments
/// - `network`:             parameters are updated in place
/// - `x`, `labels`:         training rows (N × D) and their classes
/// - `x_val`, `val_labels`: validation rows, scored at every epoch boundary
/// - `config`:              hyperparameters
/// - `rng`:                 source of the minibatch draws; seed it for reproducible runs
///
/// # Epoch boundaries
/// An epoch lasts `max(N / batch_size, 1)` iterations, computed as a real
/// number. Iteration `it` ends an epoch when `it % iterations_per_epoch == 0`
/// in floating point, so when `batch_size` does not divide `N` the boundaries
/// only land on iterations that are exact multiples of the ratio. At each
/// boundary the minibatch and validation accuracies are recorded and the
/// learning rate is multiplied by `learning_rate_decay`.
///
/// # Errors
/// Fails before touching the parameters if the config is invalid, the data
/// shapes or labels are inconsistent, or `batch_size > N`.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut TwoLayerNet,
    x: &Matrix,
    labels: &[usize],
    x_val: &Matrix,
    val_labels: &[usize],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainHistory> {
    config.validate()?;
    check_dataset(network, x, labels)?;
    check_dataset(network, x_val, val_labels)?;

    let num_train = x.rows;
    if config.batch_size > num_train {
        return Err(NetError::BatchTooLarge { batch_size: config.batch_size, available: num_train });
    }

    let iterations_per_epoch = (num_train as f64 / config.batch_size as f64).max(1.0);
    let mut optimizer = Sgd::new(config.learning_rate);
    let mut history = TrainHistory::with_capacity(config.num_iters);

    for it in 0..config.num_iters {
        // ── Minibatch ─────────────────────────────────────────────────────
        let indices = sample_without_replacement(num_train, config.batch_size, rng)?;
        let x_batch = x.select_rows(&indices);
        let y_batch: Vec<usize> = indices.iter().map(|&i| labels[i]).collect();

        // ── Loss, gradients, update ───────────────────────────────────────
        let (loss, grads) = network.loss(&x_batch, &y_batch, config.reg)?;
        history.loss_history.push(loss);
        optimizer.step(network.params_mut(), &grads)?;

        if config.verbose && it % 100 == 0 {
            info!("iteration {} / {}: loss {:.6}", it, config.num_iters, loss);
        }

        // ── Epoch boundary ────────────────────────────────────────────────
        if (it as f64) % iterations_per_epoch == 0.0 {
            let train_acc = network.accuracy(&x_batch, &y_batch)?;
            let val_acc = network.accuracy(x_val, val_labels)?;
            history.train_acc_history.push(train_acc);
            history.val_acc_history.push(val_acc);

            optimizer.decay(config.learning_rate_decay);
            debug!(
                "epoch {} at iteration {}: train acc {:.4}, val acc {:.4}, lr {:.3e}",
                history.epochs(),
                it,
                train_acc,
                val_acc,
                optimizer.learning_rate
            );
        }
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Feature count must match the network input; labels must be one per row and in range.
fn check_dataset(network: &TwoLayerNet, x: &Matrix, labels: &[usize]) -> Result<()> {
    if x.cols != network.input_size() {
        return Err(NetError::ShapeMismatch {
            op: "input features",
            expected: (x.rows, network.input_size()),
            got: x.shape(),
        });
    }
    check_labels(labels, x.rows, network.output_size())
}
