use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("expected at least {expected} elements, got {actual}")]
    TooFewElements { expected: usize, actual: usize },

    #[error("cannot normalize a vector of length zero")]
    ZeroLength,

    #[error("malformed vector `{input}`: expected `(x, y)`")]
    Parse { input: String },
}
