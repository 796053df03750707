use crate::xr_hit_test_error::XRHitTestError;
use crate::xr_viewport::XRViewport;

/// A ray projected onto the near plane, in normalized screen coordinates.
/// Each axis is nominally in [-1, 1]; values outside it lie outside the
/// visible frustum, and a provider may legitimately return no hits for them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl XRScreenPoint {
    pub fn is_on_screen(&self) -> bool {
        self.x.abs() <= 1.0 && self.y.abs() <= 1.0
    }
}

/// Projects a head-relative ray origin onto the near plane.
///
/// This is a linear projection: the origin is divided by the near plane's
/// half extent rather than perspective-divided by its depth, so the ray is
/// taken to start on (or very close to) the near plane along the view axis.
/// The ray direction plays no part. The shorter viewport axis is then
/// stretched so both axes share one normalized scale.
pub fn convert_ray_origin_to_screen_coordinates(origin: &[f32; 3],
                                                near: f64,
                                                fov: f64,
                                                viewport: XRViewport)
                                                -> Result<XRScreenPoint, XRHitTestError> {
    if !(near.is_finite() && near > 0.0) {
        return Err(XRHitTestError::InvalidArgument(format!("near plane must be positive, got {}", near)));
    }
    if !(fov.is_finite() && fov > 0.0) {
        return Err(XRHitTestError::InvalidArgument(format!("field of view must be positive, got {}", fov)));
    }
    if viewport.is_empty() {
        return Err(XRHitTestError::InvalidArgument(format!(
            "viewport must not be empty, got {}x{}", viewport.width, viewport.height)));
    }
    if !origin.iter().all(|v| v.is_finite()) {
        return Err(XRHitTestError::InvalidArgument(format!("ray origin must be finite, got {:?}", origin)));
    }

    let half_extent = near * (fov / 2.0).tan();
    let mut x = origin[0] as f64 / half_extent;
    let mut y = origin[1] as f64 / half_extent;

    let width = viewport.width as f64;
    let height = viewport.height as f64;
    if viewport.is_portrait() {
        x *= height / width;
    } else {
        y *= width / height;
    }

    Ok(XRScreenPoint { x: x as f32, y: y as f32 })
}
