//! Drives one generation attempt from submit to a terminal state

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{AttemptId, OrderingPolicy, RequestState};
use crate::backend::{GeneratedMap, GenerationService, HttpBackend, MapRequest};
use crate::config::Settings;
use crate::error::{AppError, Result, FALLBACK_MESSAGE};
use crate::form::Draft;

/// State shared between the controller and its in-flight attempts
struct Shared {
    state: watch::Sender<RequestState>,
    latest_attempt: AtomicU64,
    ordering: OrderingPolicy,
}

/// Owns the [`RequestState`] and is the only thing that transitions it.
///
/// `submit` must be called from within a Tokio runtime. The network call runs
/// on a spawned task, and its outcome is written back when it resolves.
/// Dropping the controller discards the state; attempts still in flight finish
/// their call but no longer write anything.
pub struct SubmissionController {
    shared: Arc<Shared>,
    service: Arc<dyn GenerationService>,
    next_attempt: AtomicU64,
}

/// Handle to an accepted submission
#[must_use = "dropping a Submission detaches it; the attempt still settles"]
#[derive(Debug)]
pub struct Submission {
    attempt: AttemptId,
    handle: JoinHandle<()>,
}

impl Submission {
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Wait until this attempt's outcome has been reconciled into the state
    pub async fn settled(self) {
        if let Err(e) = self.handle.await {
            warn!(attempt = %self.attempt, error = %e, "Settle task ended abnormally");
        }
    }
}

impl SubmissionController {
    /// Create a controller with the default (arrival order) policy
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self::with_ordering(service, OrderingPolicy::default())
    }

    pub fn with_ordering(service: Arc<dyn GenerationService>, ordering: OrderingPolicy) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            shared: Arc::new(Shared {
                state,
                latest_attempt: AtomicU64::new(0),
                ordering,
            }),
            service,
            next_attempt: AtomicU64::new(0),
        }
    }

    /// Build a controller talking HTTP to the configured service
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let backend = HttpBackend::new(&settings.service)?;
        Ok(Self::with_ordering(
            Arc::new(backend),
            settings.controller.ordering,
        ))
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.shared.state.subscribe()
    }

    pub fn ordering(&self) -> OrderingPolicy {
        self.shared.ordering
    }

    /// Start a generation attempt for `draft`.
    ///
    /// A blank prompt is refused with [`AppError::InvalidRequest`] and leaves
    /// the state untouched. Otherwise the state is `Submitting` by the time
    /// this returns. A submission already in flight is not guarded against.
    pub fn submit(&self, draft: &Draft) -> Result<Submission> {
        if draft.prompt.trim().is_empty() {
            debug!("Rejected submission with empty prompt");
            return Err(AppError::InvalidRequest("prompt is empty".to_string()));
        }

        let attempt = AttemptId::new(self.next_attempt.fetch_add(1, Ordering::Relaxed) + 1);

        let request = MapRequest {
            prompt: draft.prompt.clone(),
            style: draft.style,
        };

        // Publishing the latest attempt under the channel lock keeps it in
        // step with the state that settle() compares against.
        let mut was_submitting = false;
        let latest_attempt = &self.shared.latest_attempt;
        self.shared.state.send_modify(|state| {
            latest_attempt.store(attempt.seq(), Ordering::Release);
            was_submitting = state.is_submitting();
            *state = RequestState::Submitting {
                prompt: request.prompt.clone(),
                style: request.style,
            };
        });
        if was_submitting {
            debug!(attempt = %attempt, "Submitting while another attempt is in flight");
        }

        info!(
            attempt = %attempt,
            correlation = %attempt.correlation(),
            backend = %self.service.name(),
            style = %request.style,
            "Submission started"
        );

        let shared = Arc::downgrade(&self.shared);
        let service = self.service.clone();
        let handle = tokio::spawn(async move {
            // The call runs on its own task so a panicking service still
            // yields a terminal transition.
            let outcome = match tokio::spawn(async move { service.generate(request).await }).await
            {
                Ok(outcome) => outcome,
                Err(e) => Err(AppError::Internal(format!("Generation task failed: {}", e))),
            };
            settle(&shared, attempt, outcome);
        });

        Ok(Submission { attempt, handle })
    }
}

/// Reconcile the outcome of `attempt` into the state
fn settle(shared: &Weak<Shared>, attempt: AttemptId, outcome: Result<GeneratedMap>) {
    let Some(shared) = shared.upgrade() else {
        debug!(attempt = %attempt, "Controller dropped, discarding outcome");
        return;
    };

    let next = match outcome {
        Ok(map) if !map.url.trim().is_empty() => RequestState::Succeeded {
            result_url: map.url,
        },
        Ok(_) => {
            warn!(attempt = %attempt, "Service returned an empty url");
            RequestState::Failed {
                message: FALLBACK_MESSAGE.to_string(),
            }
        }
        Err(e) => {
            warn!(attempt = %attempt, error = %e, "Map generation failed");
            RequestState::Failed {
                message: e.user_message(),
            }
        }
    };

    // Check and write under the channel lock so a concurrent submit cannot
    // slip in between them.
    let ordering = shared.ordering;
    let latest_attempt = &shared.latest_attempt;
    let mut latest = attempt.seq();
    let applied = shared.state.send_if_modified(|state| {
        if ordering == OrderingPolicy::LatestIssued {
            latest = latest_attempt.load(Ordering::Acquire);
            if latest != attempt.seq() {
                return false;
            }
        }
        *state = next;
        true
    });

    if applied {
        info!(attempt = %attempt, "Attempt settled");
    } else {
        info!(
            attempt = %attempt,
            latest = latest,
            "Discarding outcome of superseded attempt"
        );
    }
}
