use thiserror::Error;

/// Strict construction-time problems found by [`crate::Planner::validate`].
///
/// Decomposition never raises these: the affected policy fails closed instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("repeat task `{task}` has a fixed repetition count of 0")]
    ZeroRepetitions { task: String },

    #[error("repeat task `{task}` reads its count from slot {index}, world state has {len}")]
    RepeatIndexOutOfRange {
        task: String,
        index: usize,
        len: usize,
    },

    #[error("utility task `{task}` has subtask `{subtask}` without a score")]
    UnscoredUtilitySubtask { task: String, subtask: String },

    #[error("goap task `{task}` has compound subtask `{subtask}`; only primitive tasks are searched")]
    CompoundGoapSubtask { task: String, subtask: String },

    #[error("goap task `{task}` has a goal on slot {index}, world state has {len}")]
    GoalIndexOutOfRange {
        task: String,
        index: usize,
        len: usize,
    },

    #[error("task `{task}` has effect `{effect}` on slot {index}, world state has {len}")]
    EffectIndexOutOfRange {
        task: String,
        effect: String,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("world state has {depth} unresolved plan-time changes; trim to 0 before planning")]
    DirtyChangeStack { depth: usize },
}
