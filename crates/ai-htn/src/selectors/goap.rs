use std::borrow::Cow;
use std::sync::Arc;

use ai_core::{EffectKind, WorldState};
use ai_goap::{GoapCandidate, GoapOutcome, Goal};

use crate::context::PlanningContext;
use crate::status::{DecompositionStatus, TaskPlan};
use crate::task::{CompoundTask, PrimitiveTask};

/// A primitive subtask seen as a search step.
struct Step<'t>(&'t Arc<PrimitiveTask>);

impl GoapCandidate for Step<'_> {
    fn is_valid(&self, world: &WorldState) -> bool {
        self.0.is_valid(world)
    }

    fn apply_effects(&self, world: &mut WorldState) {
        // Exploration is hypothetical even for permanent effects.
        self.0.apply_effects_as(world, EffectKind::PlanOnly);
    }

    fn cost(&self, world: &WorldState) -> f32 {
        self.0.cost(world)
    }

    fn label(&self) -> Cow<'static, str> {
        self.0.label()
    }
}

/// Cheapest ordered subset of the primitive subtasks that satisfies `goal`.
///
/// Compound subtasks are not search steps and are skipped. The abort condition is checked before
/// every candidate the search tries, and rejects the attempt once it holds. The search rolls
/// every branch back; the winning path's effects are then applied for real, in plan order, with
/// their declared write modes.
pub(crate) fn decompose(
    task: &CompoundTask,
    ctx: &mut PlanningContext<'_>,
    start_index: usize,
    goal: &Goal,
) -> DecompositionStatus {
    let steps: Vec<Step<'_>> = task
        .subtasks()
        .iter()
        .skip(start_index)
        .filter_map(|subtask| subtask.as_primitive())
        .map(Step)
        .collect();

    let abort = ctx.abort_condition();
    let aborts = |world: &WorldState| abort.is_some_and(|condition| condition.is_valid(world));

    let outcome = ctx
        .goap
        .search_until(ctx.world, &steps, goal, &aborts, ctx.trace.as_deref_mut());
    let path = match outcome {
        GoapOutcome::Found(path) => path,
        GoapOutcome::Unreachable => {
            tracing::debug!(task = task.name(), candidates = steps.len(), "goap found no plan");
            return DecompositionStatus::Failed;
        }
        GoapOutcome::Aborted => {
            ctx.log("abort", task.label(), String::new);
            return DecompositionStatus::Rejected;
        }
    };

    let mut plan = TaskPlan::default();
    for &index in path.plan.iter() {
        let primitive = steps[index].0;
        primitive.apply_effects(ctx.world);
        plan.push(Arc::clone(primitive));
    }

    ctx.log("goap.plan", task.label(), || {
        format!("steps={} cost={}", plan.len(), path.cost)
    });
    DecompositionStatus::Succeeded(plan)
}
