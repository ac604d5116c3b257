use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("error model parameter vector must contain at least {expected} value(s), got {got}")]
    InsufficientParams { expected: usize, got: usize },
    #[error("unknown error model tag {tag}")]
    UnknownModelTag { tag: String },
    #[error("{model} error model supports exactly {expected} states, got {states}")]
    UnsupportedStates {
        model: &'static str,
        expected: usize,
        states: usize,
    },
}
