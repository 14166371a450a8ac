use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `learning_rate`:       initial SGD step size
/// - `learning_rate_decay`: multiplied into the step size at every epoch boundary
/// - `reg`:                 L2 regularization strength on both weight matrices
/// - `num_iters`:           number of minibatch updates
/// - `batch_size`:          rows sampled (without replacement) per update
/// - `verbose`:             log the loss every 100 iterations
///
/// Missing fields in a JSON config fall back to `TrainConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub learning_rate_decay: f64,
    pub reg: f64,
    pub num_iters: usize,
    pub batch_size: usize,
    pub verbose: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 1e-3,
            learning_rate_decay: 0.95,
            reg: 5e-6,
            num_iters: 100,
            batch_size: 200,
            verbose: false,
        }
    }
}

impl TrainConfig {
    /// Creates a config with the given schedule and default decay / regularization.
    pub fn new(num_iters: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            num_iters,
            batch_size,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    /// Rejects a zero batch size and negative or non-finite rates.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(NetError::InvalidHyperparameter { name: "batch_size", value: 0.0 });
        }
        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("learning_rate_decay", self.learning_rate_decay),
            ("reg", self.reg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NetError::InvalidHyperparameter { name, value });
            }
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config from a JSON file and validates it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
