use ai_goap::Goal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a compound task turns its subtasks into a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Policy {
    /// Subtasks in declaration order; the first one that decomposes wins.
    Selector,
    /// Every subtask in declaration order; plans are concatenated.
    Sequence,
    /// One uniformly drawn subtask, no alternatives.
    Random,
    /// The valid scoring subtask with the strictly greatest positive score.
    Utility,
    /// The first valid subtask, with success and failure swapped.
    InvertStatus,
    /// Selector that reports success with an empty plan when nothing decomposes.
    AlwaysSucceed,
    /// Sequence over the subtasks repeated `count` times.
    Repeat { count: RepeatCount, order: RepeatOrder },
    /// Cheapest ordered subset of primitive subtasks that reaches `goal`.
    Goap { goal: Goal },
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Selector => "selector",
            Policy::Sequence => "sequence",
            Policy::Random => "random",
            Policy::Utility => "utility",
            Policy::InvertStatus => "invert_status",
            Policy::AlwaysSucceed => "always_succeed",
            Policy::Repeat { .. } => "repeat",
            Policy::Goap { .. } => "goap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RepeatCount {
    Fixed(u32),
    /// Read the count from this world-state slot at decomposition time.
    WorldState(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RepeatOrder {
    /// `A,B,C => A,B,C,A,B,C`
    #[default]
    Interleaved,
    /// `A,B,C => A,A,B,B,C,C`
    Blockwise,
}
