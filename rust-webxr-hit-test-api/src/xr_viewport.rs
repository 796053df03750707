/// Pixel dimensions of the surface hit tests are issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRViewport {
    pub width: u32,
    pub height: u32,
}

impl XRViewport {
    pub fn new(width: u32, height: u32) -> XRViewport {
        XRViewport { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}

impl Default for XRViewport {
    fn default() -> XRViewport {
        XRViewport::new(1, 1)
    }
}
