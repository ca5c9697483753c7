//! Contains the core logic for a single chore request, independent of any
//! Discord I/O. A `ChoreEvent` lives for exactly one invocation: it is rolled,
//! resolved once, and dropped.

use super::tables::{
    CHORE_TASKS, COMPLETION_REWARD, ChoreTask, FAILURE_EMOJI, NEGLECT_PENALTY, REQUEST_PHRASES,
    RequestPhrase,
};
use rand::{Rng, rng};
use serenity::model::id::UserId;

/// Terminal states of a chore request. Exactly one is reached per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoreOutcome {
    /// Still waiting on a reaction.
    Pending,
    /// Nobody responded in time.
    TimedOut,
    /// The member the chore was assigned to did it.
    CompletedByTarget,
    /// Someone else did the chore first and claimed the reward.
    CompletedByOther { responder: UserId },
}

/// One chore request from roll to resolution.
pub struct ChoreEvent {
    pub phrase: &'static RequestPhrase,
    pub task: &'static ChoreTask,
    pub target: UserId,
    pub outcome: ChoreOutcome,
}

impl ChoreEvent {
    /// Rolls a new request: one phrase and one task, selected uniformly and
    /// independently from the fixed tables.
    pub fn roll(target: UserId) -> Self {
        let phrase = &REQUEST_PHRASES[rng().random_range(0..REQUEST_PHRASES.len())];
        let task = &CHORE_TASKS[rng().random_range(0..CHORE_TASKS.len())];
        Self {
            phrase,
            task,
            target,
            outcome: ChoreOutcome::Pending,
        }
    }

    /// The message text posted to the channel.
    pub fn request_text(&self, mention: &str) -> String {
        format!(
            "{} {} {}.",
            mention, self.phrase.text, self.task.description
        )
    }

    /// Whether `emoji` counts as completing this request's task.
    pub fn accepts(&self, emoji: &str) -> bool {
        self.task.accepted.contains(&emoji)
    }

    /// Records a matching reaction. A missing responder id (the gateway can
    /// omit it) is credited to the target rather than treated as a snipe.
    pub fn complete(&mut self, responder: Option<UserId>) {
        self.outcome = match responder {
            Some(id) if id != self.target => ChoreOutcome::CompletedByOther { responder: id },
            _ => ChoreOutcome::CompletedByTarget,
        };
    }

    /// Records that the request expired with no matching reaction.
    pub fn expire(&mut self) {
        self.outcome = ChoreOutcome::TimedOut;
    }

    /// The emoji to attach to the request message for the resolved outcome.
    pub fn outcome_emoji(&self) -> Option<&'static str> {
        match self.outcome {
            ChoreOutcome::Pending => None,
            ChoreOutcome::TimedOut => Some(FAILURE_EMOJI),
            ChoreOutcome::CompletedByTarget | ChoreOutcome::CompletedByOther { .. } => {
                Some(self.phrase.reward)
            }
        }
    }

    /// The point mutations owed for the resolved outcome, as (member, delta)
    /// pairs. The two writes of the sniped branch are applied independently;
    /// the ledger does not group them transactionally.
    pub fn point_deltas(&self) -> Vec<(UserId, i64)> {
        match self.outcome {
            ChoreOutcome::Pending => Vec::new(),
            ChoreOutcome::TimedOut => vec![(self.target, NEGLECT_PENALTY)],
            ChoreOutcome::CompletedByTarget => vec![(self.target, COMPLETION_REWARD)],
            ChoreOutcome::CompletedByOther { responder } => vec![
                (responder, COMPLETION_REWARD),
                (self.target, NEGLECT_PENALTY),
            ],
        }
    }
}
