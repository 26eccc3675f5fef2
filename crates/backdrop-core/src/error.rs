use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackdropError {
    #[error("grid spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),

    #[error("interaction radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("displacement damping must lie in [0, 1], got {0}")]
    InvalidDamping(f32),

    #[error("ease-back rate must lie in (0, 1], got {0}")]
    InvalidEaseBack(f32),

    #[error("snap epsilon must be positive and finite, got {0}")]
    InvalidSnapEpsilon(f32),

    #[error("pointer move threshold must be non-negative and finite, got {0}")]
    InvalidMoveThreshold(f32),

    #[error("gallery needs at least one image")]
    EmptyGallery,

    #[error("gallery transition ({transition_ms} ms) must be shorter than its interval ({interval_ms} ms)")]
    InvalidTiming { interval_ms: u64, transition_ms: u64 },

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}
