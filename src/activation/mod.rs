pub mod relu;

pub use relu::{relu, relu_backward};
