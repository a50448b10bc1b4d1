// web_app/state/fetch.rs - Shared fetch lifecycle with stale-response discard
//
// Each fetch takes a sequence number when it starts. When it settles, its
// result is applied only if no newer fetch has started since; otherwise the
// result is dropped and the newer request keeps `loading = true` until it
// settles itself.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::web_app::error::FetchError;
use crate::web_app::model::FetchState;

#[derive(Debug)]
struct Tracked<T> {
    state: FetchState<T>,
    latest: u64,
}

/// FetchState shared between a provider and its readers
#[derive(Debug)]
pub struct SharedFetchState<T> {
    inner: Arc<Mutex<Tracked<T>>>,
}

impl<T> Clone for SharedFetchState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedFetchState<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Tracked {
                state: FetchState::default(),
                latest: 0,
            })),
        }
    }
}

impl<T: Clone> SharedFetchState<T> {
    /// Copy of the current state
    pub fn snapshot(&self) -> FetchState<T> {
        self.lock().state.clone()
    }
}

impl<T> SharedFetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch: loading on, error cleared, new sequence number taken
    pub fn begin(&self) -> InFlight<T> {
        let mut tracked = self.lock();
        tracked.latest += 1;
        tracked.state.begin();
        InFlight {
            shared: self.clone(),
            seq: tracked.latest,
            settled: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lock().state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().state.error.clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        f(&self.lock().state)
    }

    // The lock is never held across an await; poisoning can only come from
    // a panicking reader closure and leaves the state consistent.
    fn lock(&self) -> MutexGuard<'_, Tracked<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One started fetch
///
/// Dropping it without calling [`InFlight::settle`] (the caller's future was
/// cancelled) still turns `loading` off if this was the latest fetch.
#[derive(Debug)]
pub struct InFlight<T> {
    shared: SharedFetchState<T>,
    seq: u64,
    settled: bool,
}

impl<T> InFlight<T> {
    /// Sequence number of this fetch
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Applies the result if this is still the latest fetch
    ///
    /// Returns false when the result was discarded as stale.
    pub fn settle(mut self, result: Result<Vec<T>, FetchError>, fallback: &str) -> bool {
        self.settled = true;
        let mut tracked = self.shared.lock();
        if tracked.latest != self.seq {
            tracing::debug!(
                "Discarding stale response #{} (latest is #{})",
                self.seq,
                tracked.latest
            );
            return false;
        }

        match result {
            Ok(data) => tracked.state.succeed(data),
            Err(e) => tracked.state.fail(e.user_message(fallback)),
        }
        true
    }
}

impl<T> Drop for InFlight<T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut tracked = self.shared.lock();
        if tracked.latest == self.seq {
            tracked.state.loading = false;
        }
    }
}
