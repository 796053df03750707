macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

#[macro_use]
extern crate log;

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod mock;
pub mod utils;

pub mod xr_frame_of_reference;
pub mod xr_frame_resolver;
pub mod xr_future_hit_results;
pub mod xr_hit_result;
pub mod xr_hit_test_config;
pub mod xr_hit_test_error;
pub mod xr_hit_test_mode;
pub mod xr_hit_test_provider;
pub mod xr_hit_tester;
pub mod xr_screen_projector;
pub mod xr_transform;
pub mod xr_viewport;

pub use xr_frame_of_reference::{XRCoordinateSystem, XRFrameOfReference, XRFrameOfReferenceType};
pub use xr_frame_resolver::XRFrameOfReferenceResolver;
pub use xr_future_hit_results::{XRFutureHitResults, XRResolveHitResults};
pub use xr_hit_result::{XRHitResult, XRHitType, XRRawHit};
pub use xr_hit_test_config::XRHitTestConfig;
pub use xr_hit_test_error::XRHitTestError;
pub use xr_hit_test_mode::XRHitTestMode;
pub use xr_hit_test_provider::XRHitTestProvider;
pub use xr_hit_tester::XRHitTester;
pub use xr_screen_projector::{convert_ray_origin_to_screen_coordinates, XRScreenPoint};
pub use xr_transform::{get_transform_to, XRTransform};
pub use xr_viewport::XRViewport;
