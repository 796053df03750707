use crate::xr_hit_result::XRRawHit;
use futures::channel::oneshot::{channel, Receiver, Sender};
use futures::executor;

pub type XRHitTestOutcome = Result<Vec<XRRawHit>, String>;

enum State<T, U> {
    Resolved(T),
    Blocked(U),
}

/// The answer to a provider hit test, either already known or still
/// waiting on a transport (a native bridge callback, another thread).
pub struct XRFutureHitResults(State<XRHitTestOutcome, Receiver<XRHitTestOutcome>>);

/// The sending half of a blocked `XRFutureHitResults`. Resolves at most once.
pub struct XRResolveHitResults(State<(), Sender<XRHitTestOutcome>>);

impl XRFutureHitResults {
    pub fn resolved(outcome: XRHitTestOutcome) -> XRFutureHitResults {
        XRFutureHitResults(State::Resolved(outcome))
    }

    pub fn blocked() -> (XRResolveHitResults, XRFutureHitResults) {
        let (send, recv) = channel();
        (
            XRResolveHitResults(State::Blocked(send)),
            XRFutureHitResults(State::Blocked(recv)),
        )
    }

    /// Suspends until the outcome is available. A resolver dropped without
    /// answering counts as a failed hit test.
    pub async fn wait(self) -> XRHitTestOutcome {
        match self {
            XRFutureHitResults(State::Resolved(outcome)) => outcome,
            XRFutureHitResults(State::Blocked(recv)) => match recv.await {
                Ok(outcome) => outcome,
                Err(_) => Err("hit test was dropped before it resolved".to_owned()),
            },
        }
    }

    /// Blocks the current thread until the outcome is available.
    pub fn block(self) -> XRHitTestOutcome {
        executor::block_on(self.wait())
    }
}

impl XRResolveHitResults {
    pub fn resolve(&mut self, outcome: XRHitTestOutcome) -> Result<(), ()> {
        let send = match std::mem::replace(&mut self.0, State::Resolved(())) {
            State::Resolved(()) => return Err(()),
            State::Blocked(send) => send,
        };
        if send.send(outcome).is_err() {
            debug!("Hit test resolved after its receiver went away");
        }
        Ok(())
    }

    pub fn is_resolved(&self) -> bool {
        match self.0 {
            State::Resolved(()) => true,
            State::Blocked(_) => false,
        }
    }
}
