//! Status polling for long-running server jobs (schema sync, sample-data
//! migration, task runs).
//!
//! [`PollWatcher`] is the synchronous state machine: feed it the result of
//! each status call and it decides whether and when to poll again.
//! [`run_poll`] drives it with any fetch future and any sleep future, so the
//! browser uses `gloo-timers` while tests use an immediate sleep.

use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Job status sentinel. Only `SUCCEEDED` and `FAILED` are terminal; any
/// other string the backend sends keeps the job running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    InProgress,
    Succeeded,
    Failed,
    Other(String),
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Failed => "FAILED",
            JobStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN_PROGRESS" => JobStatus::InProgress,
            "SUCCEEDED" => JobStatus::Succeeded,
            "FAILED" => JobStatus::Failed,
            _ => JobStatus::Other(s),
        }
    }
}

impl From<&str> for JobStatus {
    fn from(s: &str) -> Self {
        JobStatus::from(s.to_string())
    }
}

impl From<JobStatus> for String {
    fn from(s: JobStatus) -> Self {
        s.as_str().to_string()
    }
}

/// One observation of a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProgress {
    pub status: JobStatus,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl JobProgress {
    pub fn new(status: impl Into<JobStatus>) -> Self {
        Self {
            status: status.into(),
            percentage: None,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before the first status call
    pub initial_delay_ms: u32,
    pub interval_ms: u32,
    /// Upper bound for the backoff delay after failed polls
    pub max_interval_ms: u32,
    /// Transient failures in a row before the watcher gives up
    pub max_consecutive_failures: u32,
}

impl PollPolicy {
    /// Migration and schema sync jobs run for minutes; poll every two.
    pub const fn long_running() -> Self {
        Self {
            initial_delay_ms: 120_000,
            interval_ms: 120_000,
            max_interval_ms: 600_000,
            max_consecutive_failures: 3,
        }
    }

    /// Task runs and compliance jobs, polled right away and then every 5s
    pub const fn short_running() -> Self {
        Self {
            initial_delay_ms: 0,
            interval_ms: 5_000,
            max_interval_ms: 60_000,
            max_consecutive_failures: 3,
        }
    }

    fn backoff_ms(&self, failures: u32) -> u32 {
        let factor = 1u64 << failures.min(16);
        let delay = (self.interval_ms as u64).saturating_mul(factor);
        delay.min(self.max_interval_ms as u64) as u32
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::long_running()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollState {
    /// No status call has completed yet
    Waiting,
    Running(JobProgress),
    /// The last poll failed and another will follow
    Retrying {
        failures: u32,
        last_error: ApiError,
        last_progress: Option<JobProgress>,
    },
    Succeeded(JobProgress),
    Failed(JobProgress),
    /// Polling stopped because of errors; the job state is unknown
    Aborted(ApiError),
    Cancelled,
}

impl PollState {
    /// Final state for a job observed outside a poll loop; `None` while any
    /// non-terminal status says the job still runs
    pub fn settled(progress: JobProgress) -> Option<PollState> {
        match progress.status {
            JobStatus::Succeeded => Some(PollState::Succeeded(progress)),
            JobStatus::Failed => Some(PollState::Failed(progress)),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            PollState::Succeeded(_)
                | PollState::Failed(_)
                | PollState::Aborted(_)
                | PollState::Cancelled
        )
    }

    pub fn progress(&self) -> Option<&JobProgress> {
        match self {
            PollState::Running(p) | PollState::Succeeded(p) | PollState::Failed(p) => Some(p),
            PollState::Retrying { last_progress, .. } => last_progress.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    Continue { delay_ms: u32 },
    Stop,
}

#[derive(Debug, Clone)]
pub struct PollWatcher {
    policy: PollPolicy,
    state: PollState,
    polls: u32,
    failures: u32,
}

impl PollWatcher {
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            policy,
            state: PollState::Waiting,
            polls: 0,
            failures: 0,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn into_state(self) -> PollState {
        self.state
    }

    /// Number of status results observed
    pub fn polls(&self) -> u32 {
        self.polls
    }

    /// Record the outcome of one status call.
    ///
    /// Once finished the watcher ignores further results and always answers
    /// `Stop`.
    pub fn observe(&mut self, result: Result<JobProgress, ApiError>) -> PollDecision {
        if self.state.is_finished() {
            return PollDecision::Stop;
        }
        self.polls += 1;

        match result {
            Ok(progress) => {
                self.failures = 0;
                match progress.status {
                    JobStatus::Succeeded => {
                        self.state = PollState::Succeeded(progress);
                        PollDecision::Stop
                    }
                    JobStatus::Failed => {
                        self.state = PollState::Failed(progress);
                        PollDecision::Stop
                    }
                    _ => {
                        self.state = PollState::Running(progress);
                        PollDecision::Continue {
                            delay_ms: self.policy.interval_ms,
                        }
                    }
                }
            }
            Err(err) if !err.is_transient() => {
                log::warn!("status poll failed permanently: {}", err);
                self.state = PollState::Aborted(err);
                PollDecision::Stop
            }
            Err(err) => {
                self.failures += 1;
                if self.failures >= self.policy.max_consecutive_failures {
                    log::warn!(
                        "status poll gave up after {} failures: {}",
                        self.failures,
                        err
                    );
                    self.state = PollState::Aborted(err);
                    return PollDecision::Stop;
                }
                let delay_ms = self.policy.backoff_ms(self.failures);
                log::info!(
                    "status poll failed ({}), retrying in {}ms: {}",
                    self.failures,
                    delay_ms,
                    err
                );
                let last_progress = self.state.progress().cloned();
                self.state = PollState::Retrying {
                    failures: self.failures,
                    last_error: err,
                    last_progress,
                };
                PollDecision::Continue { delay_ms }
            }
        }
    }

    pub fn cancel(&mut self) {
        if !self.state.is_finished() {
            self.state = PollState::Cancelled;
        }
    }
}

/// Shared cancellation flag for one poll loop
#[derive(Debug, Clone, Default)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Poll until the job finishes, the watcher aborts, or `handle` is cancelled.
///
/// `on_update` runs after every observed result, never after cancellation.
pub async fn run_poll<F, Fut, S, SFut, U>(
    policy: PollPolicy,
    handle: PollHandle,
    mut fetch: F,
    mut sleep: S,
    mut on_update: U,
) -> PollState
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<JobProgress, ApiError>>,
    S: FnMut(u32) -> SFut,
    SFut: Future<Output = ()>,
    U: FnMut(&PollState),
{
    let mut watcher = PollWatcher::new(policy);
    let mut delay_ms = policy.initial_delay_ms;

    loop {
        if delay_ms > 0 {
            sleep(delay_ms).await;
        }
        if handle.is_cancelled() {
            watcher.cancel();
            break;
        }

        let result = fetch().await;
        if handle.is_cancelled() {
            watcher.cancel();
            break;
        }

        let decision = watcher.observe(result);
        on_update(watcher.state());
        match decision {
            PollDecision::Continue { delay_ms: next } => delay_ms = next,
            PollDecision::Stop => break,
        }
    }

    log::debug!("poll loop finished after {} polls", watcher.polls());
    watcher.into_state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    fn policy() -> PollPolicy {
        PollPolicy {
            initial_delay_ms: 0,
            interval_ms: 1_000,
            max_interval_ms: 3_000,
            max_consecutive_failures: 3,
        }
    }

    fn ok(status: &str) -> Result<JobProgress, ApiError> {
        Ok(JobProgress::new(status))
    }

    fn net_err() -> Result<JobProgress, ApiError> {
        Err(ApiError::Network("connection reset".into()))
    }

    /// Runs the loop against a scripted sequence of status results and
    /// returns (final state, number of fetches, sleeps, updates).
    fn drive(
        script: Vec<Result<JobProgress, ApiError>>,
        handle: PollHandle,
        cancel_after: Option<u32>,
    ) -> (PollState, u32, Vec<u32>, u32) {
        let script = RefCell::new(VecDeque::from(script));
        let fetches = Cell::new(0u32);
        let sleeps = RefCell::new(Vec::new());
        let updates = Cell::new(0u32);
        let cancel_handle = handle.clone();

        let state = block_on(run_poll(
            policy(),
            handle,
            || {
                fetches.set(fetches.get() + 1);
                if cancel_after == Some(fetches.get()) {
                    cancel_handle.cancel();
                }
                let next = script
                    .borrow_mut()
                    .pop_front()
                    .expect("polled past the end of the script");
                async move { next }
            },
            |ms| {
                sleeps.borrow_mut().push(ms);
                std::future::ready(())
            },
            |_| updates.set(updates.get() + 1),
        ));
        (state, fetches.get(), sleeps.into_inner(), updates.get())
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(JobStatus::from("SUCCEEDED"), JobStatus::Succeeded);
        assert_eq!(JobStatus::from("failed"), JobStatus::Failed);
        assert_eq!(JobStatus::from("IN_PROGRESS"), JobStatus::InProgress);
        assert_eq!(JobStatus::from("QUEUED"), JobStatus::Other("QUEUED".into()));
        assert!(!JobStatus::from("QUEUED").is_terminal());

        let p: JobProgress = serde_json::from_str(r#"{"status":"SUCCEEDED","percentage":100}"#).unwrap();
        assert_eq!(p.status, JobStatus::Succeeded);
        assert_eq!(p.percentage, Some(100.0));
    }

    #[test]
    fn test_stops_right_after_success() {
        let (state, fetches, sleeps, updates) = drive(
            vec![ok("IN_PROGRESS"), ok("IN_PROGRESS"), ok("SUCCEEDED")],
            PollHandle::new(),
            None,
        );
        assert!(matches!(state, PollState::Succeeded(_)));
        assert_eq!(fetches, 3);
        assert_eq!(updates, 3);
        assert_eq!(sleeps, vec![1_000, 1_000]);
    }

    #[test]
    fn test_failed_job_is_terminal() {
        let (state, fetches, _, _) = drive(vec![ok("IN_PROGRESS"), ok("FAILED")], PollHandle::new(), None);
        assert!(matches!(state, PollState::Failed(_)));
        assert_eq!(fetches, 2);
    }

    #[test]
    fn test_watcher_termination_is_idempotent() {
        let mut watcher = PollWatcher::new(policy());
        assert_eq!(watcher.observe(ok("SUCCEEDED")), PollDecision::Stop);
        assert_eq!(watcher.observe(ok("IN_PROGRESS")), PollDecision::Stop);
        assert_eq!(watcher.observe(net_err()), PollDecision::Stop);
        watcher.cancel();
        assert!(matches!(watcher.state(), PollState::Succeeded(_)));
        assert_eq!(watcher.polls(), 1);
    }

    #[test]
    fn test_network_error_retries_with_backoff() {
        let (state, fetches, sleeps, _) = drive(
            vec![ok("IN_PROGRESS"), net_err(), net_err(), ok("IN_PROGRESS"), ok("SUCCEEDED")],
            PollHandle::new(),
            None,
        );
        assert!(matches!(state, PollState::Succeeded(_)));
        assert_eq!(fetches, 5);
        // interval, 2x backoff, 4x capped at max, then back to the interval
        assert_eq!(sleeps, vec![1_000, 2_000, 3_000, 1_000]);
    }

    #[test]
    fn test_retrying_keeps_last_progress() {
        let mut watcher = PollWatcher::new(policy());
        let mut running = JobProgress::new("IN_PROGRESS");
        running.percentage = Some(40.0);
        watcher.observe(Ok(running.clone()));
        watcher.observe(net_err());
        match watcher.state() {
            PollState::Retrying { failures, last_progress, .. } => {
                assert_eq!(*failures, 1);
                assert_eq!(last_progress.as_ref(), Some(&running));
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_repeated_network_errors_abort_and_report() {
        let (state, fetches, _, updates) =
            drive(vec![net_err(), net_err(), net_err()], PollHandle::new(), None);
        assert_eq!(state, PollState::Aborted(ApiError::Network("connection reset".into())));
        assert_eq!(fetches, 3);
        assert_eq!(updates, 3);
    }

    #[test]
    fn test_permanent_error_aborts_immediately() {
        let (state, fetches, _, _) = drive(
            vec![Err(ApiError::from_status(404, "job not found"))],
            PollHandle::new(),
            None,
        );
        assert!(matches!(state, PollState::Aborted(ApiError::Validation { status: 404, .. })));
        assert_eq!(fetches, 1);
    }

    #[test]
    fn test_cancelled_before_start_never_polls() {
        let handle = PollHandle::new();
        handle.cancel();
        let (state, fetches, _, updates) = drive(vec![], handle, None);
        assert_eq!(state, PollState::Cancelled);
        assert_eq!(fetches, 0);
        assert_eq!(updates, 0);
    }

    #[test]
    fn test_cancel_during_fetch_drops_the_response() {
        let (state, fetches, _, updates) = drive(
            vec![ok("IN_PROGRESS"), ok("SUCCEEDED")],
            PollHandle::new(),
            Some(1),
        );
        assert_eq!(state, PollState::Cancelled);
        assert_eq!(fetches, 1);
        assert_eq!(updates, 0);
    }

    #[test]
    fn test_long_running_policy_defaults() {
        let p = PollPolicy::default();
        assert_eq!(p.interval_ms, 120_000);
        assert_eq!(p.initial_delay_ms, 120_000);
        assert_eq!(p.backoff_ms(1), 240_000);
        assert_eq!(p.backoff_ms(10), 600_000);
    }
}
