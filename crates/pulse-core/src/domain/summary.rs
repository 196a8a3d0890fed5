//! Round and run summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outcome::{CallKind, CallRecord};

/// What one round did.
///
/// `attempted` is the size of the sampled sequence, not the number of
/// successes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub completed_at: DateTime<Utc>,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub errored: usize,
    pub calls: Vec<CallRecord>,
}

impl RoundSummary {
    pub fn from_calls(round: u32, completed_at: DateTime<Utc>, calls: Vec<CallRecord>) -> Self {
        let count = |kind: CallKind| calls.iter().filter(|c| c.result.kind() == kind).count();
        Self {
            round,
            completed_at,
            attempted: calls.len(),
            succeeded: count(CallKind::Success),
            failed: count(CallKind::Failed),
            errored: count(CallKind::Error),
            calls,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.attempted
    }
}

/// Per-round entry of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundReport {
    Completed(RoundSummary),
    /// Authentication failed; no endpoint was called in this round.
    Skipped { round: u32, reason: String },
}

impl RoundReport {
    pub fn round(&self) -> u32 {
        match self {
            RoundReport::Completed(summary) => summary.round,
            RoundReport::Skipped { round, .. } => *round,
        }
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        match self {
            RoundReport::Completed(summary) => Some(summary),
            RoundReport::Skipped { .. } => None,
        }
    }
}

/// Everything a process invocation did. No counters carry across rounds;
/// totals here are derived for reporting only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub rounds: Vec<RoundReport>,
}

impl RunReport {
    pub fn completed_rounds(&self) -> usize {
        self.rounds.iter().filter(|r| r.summary().is_some()).count()
    }

    pub fn skipped_rounds(&self) -> usize {
        self.rounds.len() - self.completed_rounds()
    }

    pub fn total_attempted(&self) -> usize {
        self.rounds
            .iter()
            .filter_map(RoundReport::summary)
            .map(|s| s.attempted)
            .sum()
    }
}
