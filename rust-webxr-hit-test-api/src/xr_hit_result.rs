use crate::xr_transform::XRTransform;

/// What kind of surface a raw hit landed on, as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRHitType {
    FeaturePoint,
    EstimatedHorizontalPlane,
    EstimatedVerticalPlane,
    ExistingPlane,
    ExistingPlaneUsingExtent,
    ExistingPlaneUsingGeometry,
}

impl XRHitType {
    /// True for surfaces the tracker had recognized before the hit test ran.
    pub fn is_existing_plane(&self) -> bool {
        match *self {
            XRHitType::ExistingPlane |
            XRHitType::ExistingPlaneUsingExtent |
            XRHitType::ExistingPlaneUsingGeometry => true,
            _ => false,
        }
    }
}

// A hit as the provider reports it, in the provider's native tracking frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRRawHit {
    pub world_transform: XRTransform,
    pub hit_type: XRHitType,
    // Distance from the camera along the ray, in meters.
    // May be None if the provider does not report it.
    pub distance: Option<f32>,
    pub anchor_id: Option<String>,
}

impl XRRawHit {
    pub fn new(world_transform: XRTransform, hit_type: XRHitType) -> XRRawHit {
        XRRawHit {
            world_transform,
            hit_type,
            distance: None,
            anchor_id: None,
        }
    }

    pub fn with_distance(mut self, distance: f32) -> XRRawHit {
        self.distance = Some(distance);
        self
    }

    pub fn with_anchor(mut self, anchor_id: impl Into<String>) -> XRRawHit {
        self.anchor_id = Some(anchor_id.into());
        self
    }
}

// A raw hit re-expressed in the frame the caller asked for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRHitResult {
    pub hit_matrix: XRTransform,
    pub hit_type: XRHitType,
    pub distance: Option<f32>,
    pub anchor_id: Option<String>,
}

impl XRHitResult {
    /// Re-expresses `raw` by composing its pose with the native-to-requested
    /// frame transform: `raw.world_transform · native_to_requested`.
    pub fn from_raw(raw: XRRawHit, native_to_requested: &XRTransform) -> XRHitResult {
        XRHitResult {
            hit_matrix: raw.world_transform.multiply(native_to_requested),
            hit_type: raw.hit_type,
            distance: raw.distance,
            anchor_id: raw.anchor_id,
        }
    }
}
