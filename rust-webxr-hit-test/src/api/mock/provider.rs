use async_trait::async_trait;
use rust_webxr_hit_test_api::{XRFutureHitResults, XRHitTestMode, XRHitTestProvider, XRRawHit};
use std::sync::{Arc, Mutex};
use super::{lock, MockHitTestCall, MockPendingHitTest, MockXRState};

pub struct MockHitTestProvider {
    state: Arc<Mutex<MockXRState>>,
}

impl MockHitTestProvider {
    pub(super) fn new(state: Arc<Mutex<MockXRState>>) -> MockHitTestProvider {
        MockHitTestProvider { state }
    }
}

#[async_trait]
impl XRHitTestProvider for MockHitTestProvider {
    async fn perform_hit_test(&self, screen_x: f32, screen_y: f32, mode: XRHitTestMode)
                              -> Result<Vec<XRRawHit>, String> {
        let call = MockHitTestCall { screen_x, screen_y, mode };
        let future = {
            let mut state = lock(&self.state);
            state.hit_test_calls.push(call);
            if let Some(reason) = state.failure.clone() {
                XRFutureHitResults::resolved(Err(reason))
            } else if state.defer {
                let (resolver, future) = XRFutureHitResults::blocked();
                state.pending.push(MockPendingHitTest { call, resolver });
                future
            } else {
                XRFutureHitResults::resolved(Ok(state.hits_for(mode)))
            }
        };
        future.wait().await
    }
}
