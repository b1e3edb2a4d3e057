//! Request Lifecycle Helpers
//!
//! Load state machine, stale-response guard and the busy flag that keeps a
//! mutation from being submitted twice.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::AppError;

/// Per-fetch state: `Idle -> Loading -> Success | Failed`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic ticket counter for one state slot.
///
/// A response may only be written if its ticket is still the latest one
/// issued; `invalidate` retires every outstanding ticket.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    /// Start a request; supersedes every earlier ticket
    pub fn issue(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.load(Ordering::SeqCst) == ticket
    }

    /// Retire all outstanding tickets (screen teardown)
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    /// Generation that is invalidated when the current reactive owner is cleaned up
    pub fn scoped() -> StoredValue<RequestGeneration> {
        let generation = RequestGeneration::default();
        let on_teardown = generation.clone();
        on_cleanup(move || on_teardown.invalidate());
        StoredValue::new(generation)
    }
}

/// Ticket check that also treats a disposed owner as stale
pub fn ticket_is_current(generation: StoredValue<RequestGeneration>, ticket: u64) -> bool {
    generation
        .try_with_value(|generation| generation.is_current(ticket))
        .unwrap_or(false)
}

/// Busy flag guarding duplicate submissions
#[derive(Clone, Copy)]
pub struct BusyFlag {
    busy: RwSignal<bool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self { busy: RwSignal::new(false) }
    }

    /// Reactive read, for `disabled=` bindings
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Take the flag; `None` while another submission holds it
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        if self.busy.get_untracked() {
            return None;
        }
        self.busy.set(true);
        Some(BusyGuard { busy: self.busy })
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the busy flag when dropped, on every exit path
pub struct BusyGuard {
    busy: RwSignal<bool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        // Owner may already be gone if the screen closed mid-request
        let _ = self.busy.try_set(false);
    }
}

/// Single fetched value (detail view, selector options) with its own
/// load state and stale-response guard.
pub struct FetchSlot<T: Send + Sync + 'static> {
    pub value: RwSignal<Option<T>>,
    pub state: RwSignal<LoadState>,
    generation: StoredValue<RequestGeneration>,
}

impl<T: Send + Sync + 'static> Clone for FetchSlot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchSlot<T> {}

impl<T: Send + Sync + 'static> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(None),
            state: RwSignal::new(LoadState::Idle),
            generation: RequestGeneration::scoped(),
        }
    }

    /// Run `request`; a failure leaves the previous value in place
    pub fn load<Fut>(self, request: Fut, on_error: impl FnOnce(AppError) + 'static)
    where
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        let Some(ticket) = self.generation.try_with_value(|generation| generation.issue()) else {
            return;
        };
        self.state.set(LoadState::Loading);
        spawn_local(async move {
            let result = request.await;
            if !ticket_is_current(self.generation, ticket) {
                log::debug!("discarding stale response (ticket {})", ticket);
                return;
            }
            match result {
                Ok(value) => {
                    let _ = self.value.try_set(Some(value));
                    let _ = self.state.try_set(LoadState::Success);
                }
                Err(err) => {
                    log::warn!("fetch failed: {}", err);
                    let _ = self.state.try_set(LoadState::Failed(err.user_message()));
                    on_error(err);
                }
            }
        });
    }
}

impl<T: Send + Sync + 'static> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_latest_ticket_wins() {
        let generation = RequestGeneration::default();
        let first = generation.issue();
        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_retires_outstanding_ticket() {
        let generation = RequestGeneration::default();
        let ticket = generation.issue();
        generation.clone().invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_scoped_generation_goes_stale_on_owner_cleanup() {
        let owner = Owner::new();
        owner.set();

        let generation = RequestGeneration::scoped();
        let ticket = generation.with_value(|generation| generation.issue());
        let shared = generation.get_value();
        assert!(ticket_is_current(generation, ticket));

        owner.cleanup();
        assert!(!shared.is_current(ticket));
        assert!(!ticket_is_current(generation, ticket));
    }

    #[test]
    fn test_newer_ticket_makes_older_stale_through_stored_value() {
        let owner = Owner::new();
        owner.set();

        let generation = RequestGeneration::scoped();
        let first = generation.with_value(|generation| generation.issue());
        let second = generation.with_value(|generation| generation.issue());
        assert!(!ticket_is_current(generation, first));
        assert!(ticket_is_current(generation, second));
    }

    #[test]
    fn test_load_state_helpers() {
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Success.is_loading());
        assert_eq!(LoadState::Failed("DB unavailable".into()).error_message(), Some("DB unavailable"));
        assert_eq!(LoadState::default(), LoadState::Idle);
    }

    #[test]
    fn test_busy_flag_blocks_second_acquire_until_released() {
        let owner = Owner::new();
        owner.set();

        let flag = BusyFlag::new();
        let guard = flag.try_acquire();
        assert!(guard.is_some());
        assert!(flag.busy.get_untracked());
        assert!(flag.try_acquire().is_none());

        drop(guard);
        assert!(!flag.busy.get_untracked());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn test_busy_flag_released_on_early_return() {
        let owner = Owner::new();
        owner.set();

        let flag = BusyFlag::new();
        let submit = |fail: bool| -> Result<(), AppError> {
            let _guard = flag.try_acquire().ok_or_else(|| AppError::validation("form", "busy"))?;
            if fail {
                return Err(AppError::Business("rejected".into()));
            }
            Ok(())
        };
        assert!(submit(true).is_err());
        assert!(!flag.busy.get_untracked());
        assert!(submit(false).is_ok());
        assert!(!flag.busy.get_untracked());
    }
}
