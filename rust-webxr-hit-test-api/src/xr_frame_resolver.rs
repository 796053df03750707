use async_trait::async_trait;
use crate::xr_frame_of_reference::{XRFrameOfReference, XRFrameOfReferenceType};

/// Resolves a frame of reference to its current transform relative to the
/// shared root, sampled at call time.
#[async_trait]
pub trait XRFrameOfReferenceResolver: Send + Sync {
    /// Fails with a reason if the frame is unknown or currently unavailable.
    async fn resolve(&self, kind: &XRFrameOfReferenceType) -> Result<XRFrameOfReference, String>;
}
