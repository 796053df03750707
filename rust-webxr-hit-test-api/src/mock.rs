use crate::{XRFrameOfReferenceType, XRRawHit, XRTransform};

/// Messages that drive a mock hit-test backend.
#[derive(Debug, Clone)]
pub enum MockXRControlMsg {
    // Hits returned by the next provider calls, in order
    SetHits(Vec<XRRawHit>),
    // Make every provider call fail with the given reason
    FailHitTests(String),
    ClearFailure,
    // Hold provider answers until the test resolves them
    DeferHitTests(bool),
    SetFrameTransform(XRFrameOfReferenceType, XRTransform),
    RemoveFrame(XRFrameOfReferenceType),
}
