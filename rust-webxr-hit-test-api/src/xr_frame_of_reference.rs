use crate::utils;
use crate::xr_transform::{self, XRTransform};
use std::fmt;

/// The kinds of frame of reference a session can resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRFrameOfReferenceType {
    // Head-relative, tied 1:1 to the device screen
    HeadModel,
    // Tracker origin at eye height, the frame ARKit-style trackers report hits in
    EyeLevel,
    Stage,
    Tracker,
    // An anchor or other application-defined frame
    Named(String),
}

impl XRFrameOfReferenceType {
    pub fn as_str(&self) -> &str {
        match *self {
            XRFrameOfReferenceType::HeadModel => "head-model",
            XRFrameOfReferenceType::EyeLevel => "eye-level",
            XRFrameOfReferenceType::Stage => "stage",
            XRFrameOfReferenceType::Tracker => "tracker",
            XRFrameOfReferenceType::Named(ref name) => name.as_str(),
        }
    }
}

impl<'a> From<&'a str> for XRFrameOfReferenceType {
    fn from(name: &'a str) -> XRFrameOfReferenceType {
        match name {
            "head-model" => XRFrameOfReferenceType::HeadModel,
            "eye-level" => XRFrameOfReferenceType::EyeLevel,
            "stage" => XRFrameOfReferenceType::Stage,
            "tracker" => XRFrameOfReferenceType::Tracker,
            other => XRFrameOfReferenceType::Named(other.to_owned()),
        }
    }
}

impl fmt::Display for XRFrameOfReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that knows its own transform relative to the shared root can
/// express poses in any other such frame.
pub trait XRCoordinateSystem {
    /// Transform of this frame relative to the shared root.
    fn transform(&self) -> &XRTransform;

    /// Returns the transform that maps a pose expressed in this frame into `other`.
    fn get_transform_to(&self, other: &dyn XRCoordinateSystem) -> XRTransform {
        xr_transform::get_transform_to(self.transform(), other.transform())
    }
}

/// A frame of reference sampled at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRFrameOfReference {
    kind: XRFrameOfReferenceType,
    transform: XRTransform,
    // Milliseconds, when `transform` was sampled
    timestamp: f64,
}

impl XRFrameOfReference {
    /// A sample taken now.
    pub fn new(kind: XRFrameOfReferenceType, transform: XRTransform) -> XRFrameOfReference {
        XRFrameOfReference::sampled_at(kind, transform, utils::timestamp())
    }

    pub fn sampled_at(kind: XRFrameOfReferenceType, transform: XRTransform, timestamp: f64) -> XRFrameOfReference {
        XRFrameOfReference { kind, transform, timestamp }
    }

    pub fn kind(&self) -> &XRFrameOfReferenceType {
        &self.kind
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

impl XRCoordinateSystem for XRFrameOfReference {
    fn transform(&self) -> &XRTransform {
        &self.transform
    }
}
