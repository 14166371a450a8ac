pub mod history;
pub mod loop_fn;
pub mod sampler;
pub mod train_config;

pub use history::TrainHistory;
pub use loop_fn::train_loop;
pub use sampler::sample_without_replacement;
pub use train_config::TrainConfig;
