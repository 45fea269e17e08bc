use std::fmt;

use thiserror::Error;

/// The four inputs every integration run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Interval,
    Precision,
    Function,
    Derivative
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Interval => "interval",
            InputKind::Precision => "precision",
            InputKind::Function => "function",
            InputKind::Derivative => "derivative"
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("missing required input: {0}")]
    MissingInput(InputKind),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid interval [{lo}, {hi}]: bounds must be finite with lo < hi")]
    InvalidInterval { lo: f64, hi: f64 },

    #[error("invalid precision {0}: must be finite and > 0")]
    InvalidPrecision(f64)
}
