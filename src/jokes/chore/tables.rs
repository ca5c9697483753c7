//! Defines the fixed chore request data: how the bot phrases a request, which
//! tasks it can ask for, and which emoji count as doing them.

/// How the request is phrased, and the emoji attached when someone completes it.
pub struct RequestPhrase {
    pub text: &'static str,
    pub reward: &'static str,
}

/// A chore the bot can request, with the full set of emoji accepted as completing it.
pub struct ChoreTask {
    pub description: &'static str,
    pub accepted: &'static [&'static str],
}

pub const REQUEST_PHRASES: &[RequestPhrase] = &[
    RequestPhrase {
        text: "before dinner, please",
        reward: "👍",
    },
    RequestPhrase {
        text: "go",
        reward: "👍",
    },
    RequestPhrase {
        text: "help me",
        reward: "👍",
    },
    RequestPhrase {
        text: "if you want your allowance, ",
        reward: "💵",
    },
];

pub const CHORE_TASKS: &[ChoreTask] = &[
    ChoreTask {
        description: "clean up the yard",
        accepted: &["🧹", "🍂", "🍃", "🍁", "🚜"],
    },
    ChoreTask {
        description: "clean your room",
        accepted: &["🧹", "🧼", "🧽", "🧴"],
    },
    ChoreTask {
        description: "fold the laundry",
        accepted: &["👕", "🎽", "👚"],
    },
    ChoreTask {
        description: "mow the lawn",
        accepted: &["🪓", "🗡️", "⚔️", "✂️", "🌿", "🔪", "🪒", "🚜"],
    },
    ChoreTask {
        description: "rake the leaves",
        accepted: &["🧹", "🍂", "🍃", "🍁"],
    },
    ChoreTask {
        description: "walk the dog",
        accepted: &["🐶", "🐕", "🦮", "🐕‍🦺"],
    },
    ChoreTask {
        description: "wash the car",
        accepted: &["🚗", "🚙", "🧼", "🧽", "🧴"],
    },
];

/// Reaction attached when the request expires with nobody responding.
pub const FAILURE_EMOJI: &str = "👎";

/// How long members get to respond before the chore is considered ignored.
pub const RESPONSE_TIMEOUT_SECS: u64 = 600;

/// Points awarded to whoever completes the chore.
pub const COMPLETION_REWARD: i64 = 5;

/// Points taken from the target when the chore goes undone or gets sniped.
pub const NEGLECT_PENALTY: i64 = -10;
