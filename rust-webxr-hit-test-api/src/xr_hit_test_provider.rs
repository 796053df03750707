use async_trait::async_trait;
use crate::xr_hit_result::XRRawHit;
use crate::xr_hit_test_mode::XRHitTestMode;

/// The sensing subsystem that answers screen-space hit tests.
///
/// Poses come back in the provider's native tracking frame, in the order
/// the provider chose (typically nearest first). An empty list is a valid
/// answer, distinct from an error.
#[async_trait]
pub trait XRHitTestProvider: Send + Sync {
    async fn perform_hit_test(&self, screen_x: f32, screen_y: f32, mode: XRHitTestMode)
                              -> Result<Vec<XRRawHit>, String>;
}
