use std::sync::Arc;

use ai_core::Plan;

use crate::task::PrimitiveTask;

pub type TaskPlan = Plan<Arc<PrimitiveTask>>;

/// Outcome of decomposing one compound task.
#[derive(Debug, Clone)]
pub enum DecompositionStatus {
    Succeeded(TaskPlan),
    Failed,
    /// Plan so far; only meaningful to retry machinery outside the engine. Every policy here
    /// forwards it unchanged.
    Partial(TaskPlan),
    /// Abort the whole planning attempt; nothing else may be tried anywhere in the tree.
    Rejected,
}

impl DecompositionStatus {
    pub fn succeeded_empty() -> Self {
        DecompositionStatus::Succeeded(TaskPlan::default())
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, DecompositionStatus::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DecompositionStatus::Failed)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, DecompositionStatus::Rejected)
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, DecompositionStatus::Partial(_))
    }

    pub fn plan(&self) -> Option<&TaskPlan> {
        match self {
            DecompositionStatus::Succeeded(plan) | DecompositionStatus::Partial(plan) => Some(plan),
            DecompositionStatus::Failed | DecompositionStatus::Rejected => None,
        }
    }

    pub fn into_plan(self) -> Option<TaskPlan> {
        match self {
            DecompositionStatus::Succeeded(plan) | DecompositionStatus::Partial(plan) => Some(plan),
            DecompositionStatus::Failed | DecompositionStatus::Rejected => None,
        }
    }

    /// Swaps success and failure. An inverted failure carries an empty plan; `Rejected` and
    /// `Partial` pass through.
    pub fn inverted(self) -> Self {
        match self {
            DecompositionStatus::Succeeded(_) => DecompositionStatus::Failed,
            DecompositionStatus::Failed => DecompositionStatus::succeeded_empty(),
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DecompositionStatus::Succeeded(_) => "succeeded",
            DecompositionStatus::Failed => "failed",
            DecompositionStatus::Partial(_) => "partial",
            DecompositionStatus::Rejected => "rejected",
        }
    }

    /// Step names of the carried plan, mostly for assertions and logs.
    pub fn step_names(&self) -> Vec<&str> {
        self.plan()
            .map(|plan| plan.iter().map(|t| t.name()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_of(names: &[&'static str]) -> TaskPlan {
        Plan::new(
            names
                .iter()
                .map(|&n| Arc::new(PrimitiveTask::new(n)))
                .collect(),
        )
    }

    #[test]
    fn inversion_swaps_success_and_failure() {
        let inverted = DecompositionStatus::Succeeded(plan_of(&["a"])).inverted();
        assert!(inverted.is_failed());

        let inverted = DecompositionStatus::Failed.inverted();
        assert!(inverted.is_succeeded());
        assert!(inverted.plan().is_some_and(|p| p.is_empty()));
    }

    #[test]
    fn inversion_forwards_rejected_and_partial() {
        assert!(DecompositionStatus::Rejected.inverted().is_rejected());

        let partial = DecompositionStatus::Partial(plan_of(&["a", "b"])).inverted();
        assert!(partial.is_partial());
        assert_eq!(partial.step_names(), vec!["a", "b"]);
    }
}
