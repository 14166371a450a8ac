use std::path::Path;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::network::{TwoLayerNet, DEFAULT_INIT_STD};

fn default_std() -> f64 {
    DEFAULT_INIT_STD
}

/// A serializable description of the network architecture.
///
/// `NetSpec` can be saved to / loaded from JSON independently of the trained
/// weights, so an architecture can be fixed before training starts.
///
/// Fields:
/// - `input_size`:  feature dimension D
/// - `hidden_size`: ReLU units H
/// - `output_size`: number of classes C
/// - `std`:         scale of the initial standard-normal weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSpec {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    #[serde(default = "default_std")]
    pub std: f64,
}

impl NetSpec {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        NetSpec { input_size, hidden_size, output_size, std: DEFAULT_INIT_STD }
    }

    /// Initializes a fresh network with this architecture.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TwoLayerNet> {
        TwoLayerNet::from_rng(self.input_size, self.hidden_size, self.output_size, self.std, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetSpec` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
