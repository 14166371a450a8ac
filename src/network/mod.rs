pub mod network;
pub mod params;
pub mod spec;

pub use network::{LossOutput, TwoLayerNet, DEFAULT_INIT_STD};
pub use params::{Gradients, ParamName, Params};
pub use spec::NetSpec;
