use crate::context::PlanningContext;
use crate::decompose::decompose_subtask;
use crate::status::DecompositionStatus;
use crate::task::CompoundTask;

/// Decomposes the first valid subtask and swaps success and failure.
///
/// With no valid subtask the child outcome is `Failed`, which inverts to an empty success. A
/// child success inverts to `Failed`, and the engine's trim discards the effects it applied.
pub(crate) fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
) -> DecompositionStatus {
    let child = task
        .subtasks()
        .iter()
        .skip(start_index)
        .find(|subtask| subtask.is_valid(ctx.world));

    let status = match child {
        Some(child) => decompose_subtask(child, ctx),
        None => DecompositionStatus::Failed,
    };
    status.inverted()
}
