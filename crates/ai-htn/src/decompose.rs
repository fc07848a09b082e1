//! The recursive decomposition engine and the ordered policies.
//!
//! Every policy honours one contract: on `Failed` or `Rejected` the world-state change log is
//! back at the depth it had when the compound was entered. [`decompose`] enforces that for all
//! policies by trimming on the way out, so a policy only has to stop at the right time.

use std::sync::Arc;

use crate::context::PlanningContext;
use crate::policy::Policy;
use crate::selectors;
use crate::status::{DecompositionStatus, TaskPlan};
use crate::task::{CompoundTask, PrimitiveTask, Task};

/// Decomposes `task` from subtask `start_index` on.
///
/// The compound's own conditions are the caller's concern. On success the plan-time effects of
/// the returned plan stay applied to the world state.
pub fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
) -> DecompositionStatus {
    let entry_depth = ctx.world.change_depth();
    tracing::trace!(
        task = task.name(),
        policy = task.policy().name(),
        start_index,
        depth = ctx.depth(),
        "decompose"
    );

    ctx.enter();
    let status = match task.policy() {
        Policy::Selector => select_first(task.subtasks().get(start_index..).unwrap_or(&[]), ctx),
        Policy::Sequence => {
            run_sequence(ctx, task.subtasks().get(start_index..).unwrap_or(&[]))
        }
        Policy::Random => selectors::random::decompose(task, ctx, start_index),
        Policy::Utility => selectors::utility::decompose(task, ctx, start_index),
        Policy::InvertStatus => selectors::invert_status::decompose(task, ctx, start_index),
        Policy::AlwaysSucceed => selectors::always_succeed::decompose(task, ctx, start_index),
        Policy::Repeat { count, order } => {
            selectors::repeat::decompose(task, ctx, start_index, *count, *order)
        }
        Policy::Goap { goal } => selectors::goap::decompose(task, ctx, start_index, goal),
    };
    ctx.exit();

    match &status {
        DecompositionStatus::Failed | DecompositionStatus::Rejected => {
            ctx.world.trim_to_depth(entry_depth);
        }
        DecompositionStatus::Succeeded(_) | DecompositionStatus::Partial(_) => {}
    }

    ctx.log("outcome", task.label(), || {
        let len = status.plan().map_or(0, |p| p.len());
        format!("{} plan_len={len}", status.name())
    });
    tracing::trace!(task = task.name(), status = status.name(), "decomposed");
    status
}

/// Checks the abort condition and the subtask's conditions, then recurses into it (compound) or
/// accepts it (primitive).
pub(crate) fn decompose_subtask(task: &Task, ctx: &mut PlanningContext<'_>) -> DecompositionStatus {
    if ctx.should_abort() {
        ctx.log("abort", task.label(), String::new);
        return DecompositionStatus::Rejected;
    }
    if !task.is_valid(ctx.world) {
        ctx.log("invalid", task.label(), String::new);
        return DecompositionStatus::Failed;
    }
    ctx.log("valid", task.label(), String::new);

    match task {
        Task::Compound(compound) => decompose(compound, ctx, 0),
        Task::Primitive(primitive) => accept(primitive, ctx),
    }
}

/// Applies a primitive task's effects and starts a plan with it.
pub(crate) fn accept(task: &Arc<PrimitiveTask>, ctx: &mut PlanningContext<'_>) -> DecompositionStatus {
    task.apply_effects(ctx.world);
    ctx.log("accept", task.label(), String::new);
    DecompositionStatus::Succeeded(TaskPlan::new(vec![Arc::clone(task)]))
}

/// Ordered, first-valid policy.
///
/// Failed subtasks have already rolled themselves back, so the next one starts from the state
/// this selector was entered with.
pub(crate) fn select_first(subtasks: &[Task], ctx: &mut PlanningContext<'_>) -> DecompositionStatus {
    for subtask in subtasks {
        match decompose_subtask(subtask, ctx) {
            DecompositionStatus::Failed => continue,
            other => return other,
        }
    }
    DecompositionStatus::Failed
}

/// Decomposes every task in order and concatenates the plans.
///
/// Stops at the first failure or rejection; the caller's trim discards what earlier steps
/// applied.
pub(crate) fn run_sequence<'t, I>(ctx: &mut PlanningContext<'_>, tasks: I) -> DecompositionStatus
where
    I: IntoIterator<Item = &'t Task>,
{
    let mut plan = TaskPlan::default();
    for task in tasks {
        match decompose_subtask(task, ctx) {
            DecompositionStatus::Succeeded(mut sub) => plan.append(&mut sub),
            DecompositionStatus::Partial(mut sub) => {
                plan.append(&mut sub);
                return DecompositionStatus::Partial(plan);
            }
            DecompositionStatus::Failed => return DecompositionStatus::Failed,
            DecompositionStatus::Rejected => return DecompositionStatus::Rejected,
        }
    }
    DecompositionStatus::Succeeded(plan)
}
