use crate::context::PlanningContext;
use crate::decompose::decompose_subtask;
use crate::status::DecompositionStatus;
use crate::task::CompoundTask;

/// Draws one subtask uniformly from `[start_index, len)` and sticks with it.
///
/// No alternatives are tried when the pick fails, so there is no branching to account for.
pub(crate) fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
) -> DecompositionStatus {
    let Some(index) = ctx.rng.next_index(start_index, task.subtasks().len()) else {
        return DecompositionStatus::Failed;
    };

    let picked = &task.subtasks()[index];
    ctx.log("random.pick", picked.label(), || format!("index={index}"));
    decompose_subtask(picked, ctx)
}
