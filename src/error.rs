use thiserror::Error;

/// Failures that abort a palette build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("pixel set is empty")]
    EmptyInput,

    #[error(
        "round {round}: every remaining color is too close to one of the {selected} already selected"
    )]
    InputExhausted { round: usize, selected: usize },

    #[error("pixel budget must be positive, got {0}")]
    InvalidBudget(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported input {name}: {reason}")]
    UnsupportedInput { name: String, reason: String },

    #[error("cancelled after {completed} rounds")]
    Cancelled { completed: usize },
}

pub type Result<T> = std::result::Result<T, PaletteError>;
