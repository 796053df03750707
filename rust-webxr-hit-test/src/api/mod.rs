#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use self::mock::{MockFrameResolver, MockHitTestCall, MockHitTestProvider, MockXRBackend, MockXRState};
