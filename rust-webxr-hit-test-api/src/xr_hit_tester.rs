use async_trait::async_trait;
use crate::xr_frame_of_reference::XRFrameOfReference;
use crate::xr_hit_result::XRHitResult;
use crate::xr_hit_test_error::XRHitTestError;

/// Capability of a session that can hit test against real-world surfaces.
#[async_trait]
pub trait XRHitTester: Send + Sync {
    /// Casts the ray `origin`/`direction`, both expressed in
    /// `coordinate_system`, and returns the hits in that same frame.
    ///
    /// There is no timeout: a provider that never answers leaves the
    /// returned future pending. Callers wanting bounded latency wrap it.
    async fn request_hit_test(&self,
                              origin: [f32; 3],
                              direction: [f32; 3],
                              coordinate_system: &XRFrameOfReference)
                              -> Result<Vec<XRHitResult>, XRHitTestError>;
}
