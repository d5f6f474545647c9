use crate::responsive::Tier;

/// Errors produced while building a breakpoint configuration.
#[derive(Debug, thiserror::Error)]
pub enum SeuilError {
    #[error("threshold `{tier}` must be a finite, non-negative width, got {value}")]
    InvalidThreshold { tier: Tier, value: f64 },
    #[error(
        "threshold `{upper}` ({upper_value}) must be greater than threshold `{lower}` ({lower_value})"
    )]
    NonAscending {
        lower: Tier,
        lower_value: f64,
        upper: Tier,
        upper_value: f64,
    },
    #[error("unknown breakpoint name `{0}`")]
    UnknownTier(String),
    #[cfg(feature = "serde")]
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Why a [`Viewport`](crate::window::Viewport) refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("no viewport is attached")]
    Unavailable,
}
