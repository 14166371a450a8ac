pub mod cross_entropy;
pub mod l2;

pub use cross_entropy::SoftmaxCrossEntropy;
pub use l2::L2Penalty;
