//! Screen bootstrapping against a store that may not have arrived yet.
//!
//! A screen that needs the store tries to consume it on three triggers: when
//! the screen becomes active, when the readiness signal fires, and once more
//! after a fallback delay. Whichever trigger finds the store first renders;
//! every later trigger is a no-op until the screen is activated again.

use crate::model::EventStore;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay before the fallback attempt.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// What prompted an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The screen just became active.
    PageReady,
    /// The readiness signal fired.
    DataReady,
    /// The fallback delay elapsed.
    Fallback,
}

/// Result of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// The store was available and the render closure ran.
    Rendered,
    /// An earlier attempt already rendered; nothing ran.
    AlreadySettled,
    /// The store is not available yet; try again later.
    NotReady,
}

/// Per-activation bootstrap state for one screen.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    fallback_delay: Duration,
    fallback_at: Option<Instant>,
    settled: bool,
    renders: usize,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_DELAY)
    }
}

impl Bootstrap {
    /// A bootstrap that has not been activated.
    pub fn new(fallback_delay: Duration) -> Self {
        Self {
            fallback_delay,
            fallback_at: None,
            settled: false,
            renders: 0,
        }
    }

    /// Start a new activation: forget earlier renders and arm the fallback.
    pub fn activate(&mut self, now: Instant) {
        self.settled = false;
        self.renders = 0;
        self.fallback_at = Some(now + self.fallback_delay);
    }

    /// Try to render with `store`.
    ///
    /// `render` runs at most once per activation, and only when `store` is
    /// available.
    pub fn attempt<F>(&mut self, trigger: Trigger, store: Option<&EventStore>, render: F) -> Attempt
    where
        F: FnOnce(&EventStore),
    {
        if self.settled {
            debug!(?trigger, "Bootstrap already settled");
            return Attempt::AlreadySettled;
        }
        let Some(store) = store else {
            debug!(?trigger, "Store not ready");
            return Attempt::NotReady;
        };

        render(store);
        self.settled = true;
        self.renders += 1;
        debug!(?trigger, records = store.len(), "Screen rendered from store");
        Attempt::Rendered
    }

    /// True exactly once per activation, when the fallback delay has
    /// elapsed at `now`.
    pub fn fallback_due(&mut self, now: Instant) -> bool {
        match self.fallback_at {
            Some(at) if now >= at => {
                self.fallback_at = None;
                true
            }
            _ => false,
        }
    }

    /// True once a render happened in this activation.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Renders in this activation. Never more than one.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}
