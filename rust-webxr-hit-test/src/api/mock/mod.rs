mod provider;
mod resolver;

pub use self::provider::MockHitTestProvider;
pub use self::resolver::MockFrameResolver;

use rust_webxr_hit_test_api::mock::MockXRControlMsg;
use rust_webxr_hit_test_api::{XRFrameOfReferenceType, XRHitTestMode, XRRawHit, XRResolveHitResults, XRTransform};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

/// A provider call as the mock saw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockHitTestCall {
    pub screen_x: f32,
    pub screen_y: f32,
    pub mode: XRHitTestMode,
}

// A provider call held back until the test answers it
struct MockPendingHitTest {
    call: MockHitTestCall,
    resolver: XRResolveHitResults,
}

pub struct MockXRState {
    hits: Vec<XRRawHit>,
    failure: Option<String>,
    defer: bool,
    pending: Vec<MockPendingHitTest>,
    frames: HashMap<XRFrameOfReferenceType, XRTransform>,
    hit_test_calls: Vec<MockHitTestCall>,
    resolve_calls: Vec<XRFrameOfReferenceType>,
}

impl Default for MockXRState {
    fn default() -> MockXRState {
        // Every standard frame starts out at the root.
        let frames = vec![
            XRFrameOfReferenceType::HeadModel,
            XRFrameOfReferenceType::EyeLevel,
            XRFrameOfReferenceType::Stage,
            XRFrameOfReferenceType::Tracker,
        ].into_iter().map(|kind| (kind, XRTransform::identity())).collect();

        MockXRState {
            hits: Vec::new(),
            failure: None,
            defer: false,
            pending: Vec::new(),
            frames,
            hit_test_calls: Vec::new(),
            resolve_calls: Vec::new(),
        }
    }
}

impl MockXRState {
    pub fn handle_msg(&mut self, msg: MockXRControlMsg) {
        match msg {
            MockXRControlMsg::SetHits(hits) => self.hits = hits,
            MockXRControlMsg::FailHitTests(reason) => self.failure = Some(reason),
            MockXRControlMsg::ClearFailure => self.failure = None,
            MockXRControlMsg::DeferHitTests(defer) => self.defer = defer,
            MockXRControlMsg::SetFrameTransform(kind, transform) => {
                self.frames.insert(kind, transform);
            }
            MockXRControlMsg::RemoveFrame(kind) => {
                self.frames.remove(&kind);
            }
        }
    }

    // The hits a real tracker would report for `mode`, in stored order
    fn hits_for(&self, mode: XRHitTestMode) -> Vec<XRRawHit> {
        self.hits
            .iter()
            .filter(|hit| mode == XRHitTestMode::AnySurface || hit.hit_type.is_existing_plane())
            .cloned()
            .collect()
    }
}

/// An in-process hit-test backend. The provider and resolver it hands out
/// share one state, driven by `MockXRControlMsg`.
#[derive(Clone, Default)]
pub struct MockXRBackend {
    state: Arc<Mutex<MockXRState>>,
}

impl MockXRBackend {
    pub fn new() -> MockXRBackend {
        MockXRBackend::default()
    }

    /// A backend whose state is also driven by messages sent from another thread.
    pub fn new_with_remote() -> (MockXRBackend, Sender<MockXRControlMsg>) {
        let (send, rcv) = channel();
        let backend = MockXRBackend::new();
        backend.listen(rcv);
        (backend, send)
    }

    fn listen(&self, rcv: Receiver<MockXRControlMsg>) {
        let state = self.state_handle();
        thread::spawn(move || {
            while let Ok(msg) = rcv.recv() {
                lock(&state).handle_msg(msg);
            }
        });
    }

    pub fn state_handle(&self) -> Arc<Mutex<MockXRState>> {
        self.state.clone()
    }

    pub fn provider(&self) -> MockHitTestProvider {
        MockHitTestProvider::new(self.state_handle())
    }

    pub fn resolver(&self) -> MockFrameResolver {
        MockFrameResolver::new(self.state_handle())
    }

    pub fn handle_msg(&self, msg: MockXRControlMsg) {
        lock(&self.state).handle_msg(msg);
    }

    pub fn hit_test_calls(&self) -> Vec<MockHitTestCall> {
        lock(&self.state).hit_test_calls.clone()
    }

    pub fn resolve_calls(&self) -> Vec<XRFrameOfReferenceType> {
        lock(&self.state).resolve_calls.clone()
    }

    /// Calls currently held back by `DeferHitTests(true)`, oldest first.
    pub fn pending_calls(&self) -> Vec<MockHitTestCall> {
        lock(&self.state).pending.iter().map(|pending| pending.call).collect()
    }

    /// Answers the held back call at `index` with `outcome`.
    /// Returns false if there is no such call.
    pub fn resolve_pending(&self, index: usize, outcome: Result<Vec<XRRawHit>, String>) -> bool {
        let pending = {
            let mut state = lock(&self.state);
            if index >= state.pending.len() {
                return false;
            }
            state.pending.remove(index)
        };
        let mut resolver = pending.resolver;
        resolver.resolve(outcome).is_ok()
    }
}

fn lock(state: &Mutex<MockXRState>) -> MutexGuard<MockXRState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
