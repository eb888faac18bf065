//! One-shot "data ready" signal.
//!
//! The loader owns a [`ReadyNotifier`] and the UI owns the matching
//! [`ReadySignal`]. `notify` consumes the notifier, so the store can be
//! delivered at most once. The signal reports the delivery exactly once and
//! stays quiet afterwards.

use crate::model::{EventStore, InputError};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

type Delivery = Result<EventStore, InputError>;

/// Create a connected notifier/signal pair.
pub fn channel() -> (ReadyNotifier, ReadySignal) {
    let (tx, rx) = mpsc::channel();
    (ReadyNotifier { tx }, ReadySignal::new(rx))
}

/// Sending half, consumed on delivery.
#[derive(Debug)]
pub struct ReadyNotifier {
    tx: Sender<Delivery>,
}

impl ReadyNotifier {
    /// Deliver the load result.
    ///
    /// A signal that was already dropped is not an error: nobody is waiting.
    pub fn notify(self, result: Delivery) {
        let _ = self.tx.send(result);
    }
}

/// What a poll of the signal observed.
#[derive(Debug)]
pub enum Readiness {
    /// Nothing delivered yet.
    Pending,
    /// The store arrived. Reported once.
    Ready(Arc<EventStore>),
    /// Loading failed. Reported once.
    Failed(InputError),
    /// A delivery was already reported by an earlier poll.
    Settled,
}

#[derive(Debug)]
enum SignalState {
    Waiting(Receiver<Delivery>),
    Done,
}

/// Receiving half, polled by the event loop.
#[derive(Debug)]
pub struct ReadySignal {
    state: SignalState,
}

impl ReadySignal {
    fn new(rx: Receiver<Delivery>) -> Self {
        Self {
            state: SignalState::Waiting(rx),
        }
    }

    /// A signal whose store is available on the first poll.
    pub fn ready(store: EventStore) -> Self {
        let (notifier, signal) = channel();
        notifier.notify(Ok(store));
        signal
    }

    /// Non-blocking check for the delivery.
    pub fn poll(&mut self) -> Readiness {
        let SignalState::Waiting(rx) = &self.state else {
            return Readiness::Settled;
        };

        let received = match rx.try_recv() {
            Ok(delivery) => delivery,
            Err(TryRecvError::Empty) => return Readiness::Pending,
            Err(TryRecvError::Disconnected) => Err(InputError::LoaderGone),
        };

        self.state = SignalState::Done;
        into_readiness(received)
    }

    /// Block until the delivery arrives or `timeout` elapses.
    ///
    /// Returns `Readiness::Pending` on timeout.
    pub fn wait(&mut self, timeout: Duration) -> Readiness {
        let SignalState::Waiting(rx) = &self.state else {
            return Readiness::Settled;
        };

        let received = match rx.recv_timeout(timeout) {
            Ok(delivery) => delivery,
            Err(RecvTimeoutError::Timeout) => return Readiness::Pending,
            Err(RecvTimeoutError::Disconnected) => Err(InputError::LoaderGone),
        };

        self.state = SignalState::Done;
        into_readiness(received)
    }

    /// True once a delivery has been reported.
    pub fn is_settled(&self) -> bool {
        matches!(self.state, SignalState::Done)
    }
}

fn into_readiness(delivery: Delivery) -> Readiness {
    match delivery {
        Ok(store) => Readiness::Ready(Arc::new(store)),
        Err(err) => Readiness::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::record;

    #[test]
    fn pending_until_notified() {
        let (notifier, mut signal) = channel();
        assert!(matches!(signal.poll(), Readiness::Pending));

        notifier.notify(Ok(EventStore::from_records(vec![record(
            1,
            "A",
            "2025-01-01",
        )])));

        match signal.poll() {
            Readiness::Ready(store) => assert_eq!(store.len(), 1),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn delivery_is_reported_once() {
        let mut signal = ReadySignal::ready(EventStore::default());
        assert!(matches!(signal.poll(), Readiness::Ready(_)));
        assert!(matches!(signal.poll(), Readiness::Settled));
        assert!(matches!(signal.poll(), Readiness::Settled));
        assert!(signal.is_settled());
    }

    #[test]
    fn failure_is_reported() {
        let (notifier, mut signal) = channel();
        notifier.notify(Err(InputError::NoInput));
        assert!(matches!(
            signal.poll(),
            Readiness::Failed(InputError::NoInput)
        ));
        assert!(matches!(signal.poll(), Readiness::Settled));
    }

    #[test]
    fn dropped_notifier_is_a_failure() {
        let (notifier, mut signal) = channel();
        drop(notifier);
        assert!(matches!(
            signal.poll(),
            Readiness::Failed(InputError::LoaderGone)
        ));
    }

    #[test]
    fn wait_times_out_while_pending() {
        let (_notifier, mut signal) = channel();
        assert!(matches!(
            signal.wait(Duration::from_millis(10)),
            Readiness::Pending
        ));
        assert!(!signal.is_settled());
    }

    #[test]
    fn wait_receives_from_other_thread() {
        let (notifier, mut signal) = channel();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            notifier.notify(Ok(EventStore::default()));
        });

        assert!(matches!(
            signal.wait(Duration::from_secs(5)),
            Readiness::Ready(_)
        ));
        handle.join().unwrap();
    }
}
