use std::iter;

use crate::context::PlanningContext;
use crate::decompose::run_sequence;
use crate::policy::{RepeatCount, RepeatOrder};
use crate::status::DecompositionStatus;
use crate::task::CompoundTask;

/// Runs the subtasks as a sequence repeated `count` times.
///
/// The repetition pattern is walked by index rather than by copying subtasks, so the tree
/// stays immutable. A count below 1, an unreadable count slot or nothing to repeat all fail.
pub(crate) fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
    count: RepeatCount,
    order: RepeatOrder,
) -> DecompositionStatus {
    let repetitions = match count {
        RepeatCount::Fixed(n) => n as usize,
        RepeatCount::WorldState(index) => match ctx.world.try_get(index) {
            Some(n) => n as usize,
            None => {
                tracing::debug!(
                    task = task.name(),
                    index,
                    len = ctx.world.len(),
                    "repeat count slot out of range"
                );
                return DecompositionStatus::Failed;
            }
        },
    };

    let subtasks = task.subtasks().get(start_index..).unwrap_or(&[]);
    if repetitions < 1 || subtasks.is_empty() {
        return DecompositionStatus::Failed;
    }
    ctx.log("repeat", task.label(), || format!("repetitions={repetitions}"));

    match order {
        RepeatOrder::Interleaved => run_sequence(
            ctx,
            iter::repeat(subtasks).take(repetitions).flatten(),
        ),
        RepeatOrder::Blockwise => run_sequence(
            ctx,
            subtasks
                .iter()
                .flat_map(|subtask| iter::repeat(subtask).take(repetitions)),
        ),
    }
}
