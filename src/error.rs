use thiserror::Error;

/// Errors raised by the classifier, its training loop and its persistence helpers.
#[derive(Debug, Error)]
pub enum NetError {
    /// Two operands disagree on a dimension (e.g. X has the wrong column count).
    #[error("shape mismatch in {op}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("expected {expected} labels (one per row), got {got}")]
    LabelCount { expected: usize, got: usize },

    #[error("label {label} at row {row} is outside [0, {num_classes})")]
    LabelOutOfRange {
        row: usize,
        label: usize,
        num_classes: usize,
    },

    #[error("cannot compute a loss over an empty batch")]
    EmptyBatch,

    /// Sampling without replacement cannot draw more rows than exist.
    #[error("batch size {batch_size} exceeds the {available} available training examples")]
    BatchTooLarge { batch_size: usize, available: usize },

    #[error("{name} must be positive, got 0")]
    InvalidDimension { name: &'static str },

    #[error("invalid hyperparameter {name} = {value}")]
    InvalidHyperparameter { name: &'static str, value: f64 },

    #[error("rows have unequal lengths: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
