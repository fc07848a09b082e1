use crate::context::PlanningContext;
use crate::decompose::decompose_subtask;
use crate::status::DecompositionStatus;
use crate::task::{CompoundTask, Task};

/// Picks the valid subtask with the strictly greatest score and decomposes only that one.
///
/// The baseline is 0, so a winner must score above it; ties keep the earliest subtask.
/// Subtasks that do not offer a score never compete.
pub(crate) fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
) -> DecompositionStatus {
    let Some(best) = find_best(task, ctx, start_index) else {
        return DecompositionStatus::Failed;
    };
    decompose_subtask(best, ctx)
}

fn find_best<'t>(
    task: &'t CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
) -> Option<&'t Task> {
    let mut best_score = 0.0_f32;
    let mut best: Option<&Task> = None;

    for subtask in task.subtasks().iter().skip(start_index) {
        if !subtask.is_valid(ctx.world) {
            continue;
        }
        let Some(score) = subtask.score(ctx.world) else {
            ctx.log("utility.unscored", subtask.label(), String::new);
            continue;
        };
        let score = if score.is_nan() { f32::NEG_INFINITY } else { score };
        ctx.log("utility.score", subtask.label(), || format!("score={score}"));

        if score > best_score {
            best_score = score;
            best = Some(subtask);
        }
    }

    best
}
