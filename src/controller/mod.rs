//! Submission controller and the request lifecycle it drives

pub mod request_state;
pub mod submission;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub use request_state::{Phase, RequestState};
pub use submission::{Submission, SubmissionController};

/// How outcomes of overlapping submissions are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Every outcome is written as it arrives. With overlapping submissions the
    /// state reflects whichever response settles last, which may belong to an
    /// older attempt.
    #[default]
    #[serde(rename = "arrival")]
    ArrivalOrder,
    /// Outcomes of attempts superseded by a newer submission are dropped.
    LatestIssued,
}

/// Identity of one accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId {
    seq: u64,
    correlation: Uuid,
}

impl AttemptId {
    pub(crate) fn new(seq: u64) -> Self {
        Self {
            seq,
            correlation: Uuid::new_v4(),
        }
    }

    /// Monotonic sequence number, starting at 1 for each controller
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Random id for correlating log lines
    pub fn correlation(&self) -> Uuid {
        self.correlation
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.seq)
    }
}
