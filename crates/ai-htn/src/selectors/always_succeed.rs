use crate::context::PlanningContext;
use crate::decompose::select_first;
use crate::status::DecompositionStatus;
use crate::task::CompoundTask;

/// Ordered selector that never reports `Failed`.
///
/// The first subtask that decomposes contributes its plan; when none does the result is an
/// empty success. `Rejected` still aborts the whole attempt.
pub(crate) fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
) -> DecompositionStatus {
    let subtasks = task.subtasks().get(start_index..).unwrap_or(&[]);
    match select_first(subtasks, ctx) {
        DecompositionStatus::Failed => DecompositionStatus::succeeded_empty(),
        other => other,
    }
}
