pub mod blobs;
pub mod dataset;

pub use blobs::make_blobs;
pub use dataset::Dataset;
