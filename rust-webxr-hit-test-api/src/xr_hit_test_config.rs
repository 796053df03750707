use crate::xr_frame_of_reference::XRFrameOfReferenceType;
use crate::xr_hit_test_error::XRHitTestError;
use crate::xr_hit_test_mode::XRHitTestMode;

pub const DEFAULT_NEAR: f64 = 0.1;
pub const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_4;
pub const DEFAULT_MAX_SAMPLE_SKEW_MS: f64 = 50.0;

/// Parameters of a hit-test session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde-serialization", serde(default))]
pub struct XRHitTestConfig {
    // Distance to the near plane rays are projected onto, in meters
    pub near: f64,
    // Field of view in radians
    pub fov: f64,
    pub mode: XRHitTestMode,
    // Frame the provider reports poses in. Assumed, not queried from the provider.
    pub native_frame: XRFrameOfReferenceType,
    // Frame samples further apart than this are logged as stale
    pub max_sample_skew_ms: f64,
}

impl Default for XRHitTestConfig {
    fn default() -> XRHitTestConfig {
        XRHitTestConfig {
            near: DEFAULT_NEAR,
            fov: DEFAULT_FOV,
            mode: XRHitTestMode::default(),
            native_frame: XRFrameOfReferenceType::EyeLevel,
            max_sample_skew_ms: DEFAULT_MAX_SAMPLE_SKEW_MS,
        }
    }
}

impl XRHitTestConfig {
    pub fn with_near(mut self, near: f64) -> XRHitTestConfig {
        self.near = near;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> XRHitTestConfig {
        self.fov = fov;
        self
    }

    pub fn with_mode(mut self, mode: XRHitTestMode) -> XRHitTestConfig {
        self.mode = mode;
        self
    }

    pub fn with_native_frame(mut self, native_frame: XRFrameOfReferenceType) -> XRHitTestConfig {
        self.native_frame = native_frame;
        self
    }

    pub fn with_max_sample_skew_ms(mut self, max_sample_skew_ms: f64) -> XRHitTestConfig {
        self.max_sample_skew_ms = max_sample_skew_ms;
        self
    }

    pub fn validate(&self) -> Result<(), XRHitTestError> {
        if !(self.near.is_finite() && self.near > 0.0) {
            return Err(XRHitTestError::InvalidArgument(format!("near plane must be positive, got {}", self.near)));
        }
        if !(self.fov.is_finite() && self.fov > 0.0) {
            return Err(XRHitTestError::InvalidArgument(format!("field of view must be positive, got {}", self.fov)));
        }
        if self.max_sample_skew_ms.is_nan() || self.max_sample_skew_ms < 0.0 {
            return Err(XRHitTestError::InvalidArgument(format!(
                "sample skew tolerance must not be negative, got {}", self.max_sample_skew_ms)));
        }
        Ok(())
    }
}
