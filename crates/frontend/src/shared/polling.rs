//! Browser binding for the status poll loop.
//!
//! [`PollController`] runs `contracts::shared::polling::run_poll` on
//! `gloo-timers`, mirrors every state change into a signal, and cancels the
//! loop when the owning view is disposed.

use contracts::shared::api_error::ApiError;
use contracts::shared::polling::{run_poll, JobProgress, PollHandle, PollPolicy, PollState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct PollController {
    policy: PollPolicy,
    /// `None` until the first `start`
    pub state: RwSignal<Option<PollState>>,
    handle: StoredValue<Option<PollHandle>>,
}

impl PollController {
    /// Must be created inside a component; the loop stops on cleanup.
    pub fn new(policy: PollPolicy) -> Self {
        let controller = Self {
            policy,
            state: RwSignal::new(None),
            handle: StoredValue::new(None),
        };
        on_cleanup(move || controller.cancel());
        controller
    }

    /// Start polling, replacing any loop already running
    pub fn start<F, Fut>(&self, fetch: F)
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = Result<JobProgress, ApiError>> + 'static,
    {
        self.cancel();
        let handle = PollHandle::new();
        if self.handle.try_set_value(Some(handle.clone())).is_some() {
            log::debug!("poll not started: owner already disposed");
            return;
        }

        let state = self.state;
        let policy = self.policy;
        state.try_set(Some(PollState::Waiting));

        spawn_local(async move {
            let last = run_poll(
                policy,
                handle,
                fetch,
                TimeoutFuture::new,
                move |s: &PollState| {
                    state.try_set(Some(s.clone()));
                },
            )
            .await;
            log::debug!("poll loop ended in {:?}", last);
        });
    }

    /// Stop the loop. An unfinished state settles on `Cancelled`; the loop
    /// itself publishes nothing once its handle is cancelled.
    pub fn cancel(&self) {
        if let Some(handle) = self.handle.try_get_value().flatten() {
            handle.cancel();
        }
        self.state.try_update(|s| {
            if s.as_ref().is_some_and(|st| !st.is_finished()) {
                *s = Some(PollState::Cancelled);
            }
        });
    }

    /// Cancel and forget the last run, e.g. when the page switches to another job
    pub fn reset(&self) {
        self.cancel();
        self.state.try_set(None);
    }

    pub fn is_active(&self) -> bool {
        self.state
            .with(|s| s.as_ref().map(|s| !s.is_finished()).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::polling::JobStatus;

    fn running() -> PollState {
        PollState::Running(JobProgress::new(JobStatus::InProgress))
    }

    fn controller_in(state: PollState) -> (PollController, PollHandle) {
        let handle = PollHandle::new();
        let controller = PollController {
            policy: PollPolicy::short_running(),
            state: RwSignal::new(Some(state)),
            handle: StoredValue::new(Some(handle.clone())),
        };
        (controller, handle)
    }

    #[test]
    fn test_cancel_settles_unfinished_state() {
        let (controller, handle) = controller_in(running());
        assert!(controller.is_active());

        controller.cancel();

        assert!(handle.is_cancelled());
        assert_eq!(controller.state.get_untracked(), Some(PollState::Cancelled));
        assert!(!controller.is_active());
    }

    #[test]
    fn test_cancel_keeps_finished_state() {
        let done = PollState::Succeeded(JobProgress::new(JobStatus::Succeeded));
        let (controller, _) = controller_in(done.clone());
        controller.cancel();
        assert_eq!(controller.state.get_untracked(), Some(done));
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let (controller, handle) = controller_in(running());
        controller.reset();
        assert!(handle.is_cancelled());
        assert_eq!(controller.state.get_untracked(), None);
        assert!(!controller.is_active());
    }
}
