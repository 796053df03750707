use thiserror::Error;

/// Reasons a hit-test request can be rejected. None of them are retried
/// internally; a request that fails returns no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XRHitTestError {
    /// Malformed numeric input, e.g. a non-positive near plane or field of view.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The sensing method cannot service requests expressed in this frame.
    #[error("Unsupported coordinate system: {0}")]
    UnsupportedCoordinateSystem(String),

    #[error("Underlying hit test failed: {0}")]
    ProviderFailure(String),

    #[error("Could not resolve frame of reference: {0}")]
    FrameResolutionFailure(String),
}
