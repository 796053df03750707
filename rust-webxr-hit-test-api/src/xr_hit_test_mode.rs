use std::fmt;

/// Which surfaces the provider may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRHitTestMode {
    // Only planes the tracker has already recognized
    ExistingPlanes,
    // Anything, including feature points and estimated planes
    AnySurface,
}

impl Default for XRHitTestMode {
    fn default() -> XRHitTestMode {
        XRHitTestMode::ExistingPlanes
    }
}

impl fmt::Display for XRHitTestMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            XRHitTestMode::ExistingPlanes => f.write_str("existing-planes"),
            XRHitTestMode::AnySurface => f.write_str("any-surface"),
        }
    }
}
