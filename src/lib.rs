pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use network::network::{LossOutput, TwoLayerNet, DEFAULT_INIT_STD};
pub use network::params::{Gradients, ParamName, Params};
pub use network::spec::NetSpec;
pub use optim::sgd::Sgd;
pub use train::{TrainConfig, TrainHistory};
pub use data::{make_blobs, Dataset};
