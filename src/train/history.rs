use serde::{Serialize, Deserialize};

/// What a `train_loop` run observed.
///
/// `loss_history` has one entry per iteration; the two accuracy series have one
/// entry per epoch boundary. The loop only appends to these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainHistory {
    /// Regularized minibatch loss, one per iteration.
    pub loss_history: Vec<f64>,
    /// Accuracy on the minibatch of the iteration where the epoch ended, in [0, 1].
    pub train_acc_history: Vec<f64>,
    /// Accuracy on the full validation set at each epoch boundary, in [0, 1].
    pub val_acc_history: Vec<f64>,
}

impl TrainHistory {
    pub fn with_capacity(num_iters: usize) -> Self {
        TrainHistory {
            loss_history: Vec::with_capacity(num_iters),
            ..TrainHistory::default()
        }
    }

    /// Number of epoch boundaries crossed.
    pub fn epochs(&self) -> usize {
        self.train_acc_history.len()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }

    pub fn final_train_accuracy(&self) -> Option<f64> {
        self.train_acc_history.last().copied()
    }

    pub fn final_val_accuracy(&self) -> Option<f64> {
        self.val_acc_history.last().copied()
    }
}
