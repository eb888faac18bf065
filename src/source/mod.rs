//! Event store sources.
//!
//! The store arrives asynchronously: a loader thread reads and parses the
//! data file and delivers the result through a one-shot [`ReadySignal`]. The
//! UI never blocks on it; it polls the signal on each tick.

use crate::model::error::InputError;
use crate::model::EventStore;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, info};

pub mod file;
pub mod readiness;

pub use file::read_store_file;
pub use readiness::{ReadyNotifier, ReadySignal, Readiness};

/// Background loader for the event store.
#[derive(Debug)]
pub struct StoreLoader {
    handle: Option<JoinHandle<()>>,
}

impl StoreLoader {
    /// Start loading `path` on a background thread.
    ///
    /// `delay` is slept before reading, simulating a slow data script.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the thread cannot be spawned.
    pub fn spawn(path: PathBuf, delay: Duration) -> Result<(Self, ReadySignal), InputError> {
        let (notifier, signal) = readiness::channel();

        let handle = thread::Builder::new()
            .name("eventboard-loader".to_string())
            .spawn(move || {
                if !delay.is_zero() {
                    debug!(delay_ms = delay.as_millis() as u64, "Delaying event data load");
                    thread::sleep(delay);
                }
                let result = read_store_file(&path).map(|parsed| parsed.store);
                match &result {
                    Ok(store) => info!(records = store.len(), "Event data loaded"),
                    Err(err) => error!(path = %path.display(), "Event data failed to load: {err}"),
                }
                notifier.notify(result);
            })?;

        Ok((
            Self {
                handle: Some(handle),
            },
            signal,
        ))
    }

    /// Deliver an in-memory store with no thread involved.
    pub fn preloaded(store: EventStore) -> (Self, ReadySignal) {
        (Self { handle: None }, ReadySignal::ready(store))
    }
}

impl Drop for StoreLoader {
    /// Join a finished loader thread. A thread still sleeping through its
    /// load delay is detached so quitting never waits on it.
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if !handle.is_finished() {
            debug!("Loader still running at shutdown, detaching");
            return;
        }
        if handle.join().is_err() {
            error!("Loader thread panicked");
        }
    }
}

/// Resolve the store file path.
///
/// # Errors
///
/// Returns `InputError::NoInput` when no path is configured.
pub fn resolve_data_file(path: Option<PathBuf>) -> Result<PathBuf, InputError> {
    path.ok_or(InputError::NoInput)
}
