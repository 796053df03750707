use async_trait::async_trait;
use rust_webxr_hit_test_api::{XRFrameOfReference, XRFrameOfReferenceResolver, XRFrameOfReferenceType};
use std::sync::{Arc, Mutex};
use super::{lock, MockXRState};

pub struct MockFrameResolver {
    state: Arc<Mutex<MockXRState>>,
}

impl MockFrameResolver {
    pub(super) fn new(state: Arc<Mutex<MockXRState>>) -> MockFrameResolver {
        MockFrameResolver { state }
    }
}

#[async_trait]
impl XRFrameOfReferenceResolver for MockFrameResolver {
    async fn resolve(&self, kind: &XRFrameOfReferenceType) -> Result<XRFrameOfReference, String> {
        let mut state = lock(&self.state);
        state.resolve_calls.push(kind.clone());
        match state.frames.get(kind) {
            Some(transform) => Ok(XRFrameOfReference::new(kind.clone(), *transform)),
            None => Err(format!("unknown or unavailable frame {}", kind)),
        }
    }
}
