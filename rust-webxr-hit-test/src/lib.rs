#[macro_use]
extern crate log;
extern crate rust_webxr_hit_test_api;

pub mod api;
mod xr_session;

pub use rust_webxr_hit_test_api::*;
pub use xr_session::XRHitTestSession;
