// view.rs
use crate::templates::components::volunteer_list;
use crate::volunteers::{FetchFailure, VolunteerRecord, VolunteerSource};
use maud::Markup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

/// Where a single fetch-and-render cycle currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<VolunteerRecord>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

impl From<Result<Vec<VolunteerRecord>, FetchFailure>> for ViewState {
    fn from(result: Result<Vec<VolunteerRecord>, FetchFailure>) -> Self {
        match result {
            Ok(records) => ViewState::Loaded(records),
            Err(err) => ViewState::Error(err.to_string()),
        }
    }
}

/// State shared between a view and its fetch worker.
struct Shared {
    state: Mutex<ViewState>,
    settled: Condvar,
    alive: AtomicBool,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a settled result, unless the view is gone or already settled.
    fn settle(&self, next: ViewState) -> bool {
        let mut state = self.lock();

        if !self.alive.load(Ordering::Acquire) {
            return false;
        }
        if !state.is_loading() {
            return false;
        }

        *state = next;
        self.settled.notify_all();
        true
    }
}

/// Stateful container for one fetch of the volunteer collection.
///
/// Starts in [`ViewState::Loading`]; [`mount`](Self::mount) issues the one
/// request; the worker moves the state to `Loaded` or `Error` exactly once.
/// After [`unmount`](Self::unmount) (or drop) a late result is discarded.
pub struct VolunteerListView {
    shared: Arc<Shared>,
    mounted: bool,
    worker: Option<JoinHandle<()>>,
}

impl VolunteerListView {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ViewState::Loading),
                settled: Condvar::new(),
                alive: AtomicBool::new(true),
            }),
            mounted: false,
            worker: None,
        }
    }

    /// Start the single fetch on a worker thread. Later calls are ignored.
    pub fn mount(&mut self, source: Arc<dyn VolunteerSource>) {
        if self.mounted {
            log::debug!("volunteer list already mounted, not fetching again");
            return;
        }
        self.mounted = true;

        let shared = Arc::clone(&self.shared);
        let spawned = std::thread::Builder::new()
            .name("volunteer-fetch".into())
            .spawn(move || {
                let result = source.fetch_volunteers();

                match &result {
                    Ok(records) => log::info!("fetched {} volunteers", records.len()),
                    Err(e) => log::warn!("volunteer fetch failed: {e}"),
                }

                if !shared.settle(ViewState::from(result)) {
                    log::debug!("discarding volunteer fetch result for unmounted view");
                }
            });

        match spawned {
            Ok(handle) => self.worker = Some(handle),
            Err(e) => {
                log::error!("could not start volunteer fetch: {e}");
                let failure = FetchFailure::new(format!("Could not start request: {e}"));
                self.shared.settle(ViewState::Error(failure.to_string()));
            }
        }
    }

    /// Stop accepting results. Does not wait for the outstanding request.
    pub fn unmount(&mut self) {
        // Flip under the lock so no result lands after this returns.
        let _state = self.shared.lock();
        self.shared.alive.store(false, Ordering::Release);
        self.shared.settled.notify_all();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted && self.shared.alive.load(Ordering::Acquire)
    }

    pub fn state(&self) -> ViewState {
        self.shared.lock().clone()
    }

    /// Block until the fetch settles or the view unmounts. With a `deadline`
    /// also give up once it runs out; `None` waits as long as the request does.
    /// Returns whether the state is settled.
    pub fn wait_settled(&self, deadline: Option<Duration>) -> bool {
        let pending = |state: &mut ViewState| {
            state.is_loading() && self.shared.alive.load(Ordering::Acquire)
        };
        let guard = self.shared.lock();

        let guard = match deadline {
            Some(timeout) => {
                self.shared
                    .settled
                    .wait_timeout_while(guard, timeout, pending)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0
            }
            None => self
                .shared
                .settled
                .wait_while(guard, pending)
                .unwrap_or_else(PoisonError::into_inner),
        };

        !guard.is_loading()
    }

    pub fn render(&self) -> Markup {
        volunteer_list(&self.shared.lock())
    }
}

impl Default for VolunteerListView {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VolunteerListView {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}
