//! Phase of the current generation attempt

use std::fmt;

use crate::backend::MapStyle;

/// Discriminant of [`RequestState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The single source of truth for a generation attempt.
///
/// Each variant carries only the payload that is meaningful in that phase, so
/// a stale result or error can never coexist with an in-flight attempt.
/// Values are produced by [`SubmissionController`](super::SubmissionController);
/// everything else only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No attempt made yet
    #[default]
    Idle,
    /// An attempt is in flight
    Submitting { prompt: String, style: MapStyle },
    /// The service produced an image; `result_url` is never empty
    Succeeded { result_url: String },
    /// The attempt failed; `message` is never empty
    Failed { message: String },
}

impl RequestState {
    pub fn phase(&self) -> Phase {
        match self {
            RequestState::Idle => Phase::Idle,
            RequestState::Submitting { .. } => Phase::Submitting,
            RequestState::Succeeded { .. } => Phase::Succeeded,
            RequestState::Failed { .. } => Phase::Failed,
        }
    }

    /// The in-flight indicator
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestState::Succeeded { .. } | RequestState::Failed { .. }
        )
    }

    pub fn result_url(&self) -> Option<&str> {
        match self {
            RequestState::Succeeded { result_url } => Some(result_url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Prompt and style of the attempt in flight
    pub fn in_flight(&self) -> Option<(&str, MapStyle)> {
        match self {
            RequestState::Submitting { prompt, style } => Some((prompt, *style)),
            _ => None,
        }
    }
}
