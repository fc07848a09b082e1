use std::sync::Arc;

use ai_core::{DeterministicRng, WorldState};
use ai_tools::TraceLog;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::context::PlanningContext;
use crate::decompose::decompose;
use crate::error::{DomainError, PlannerError};
use crate::policy::{Policy, RepeatCount};
use crate::status::{DecompositionStatus, TaskPlan};
use crate::task::{CompoundTask, Condition, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Record a decomposition trace and return it with the result.
    pub log_decomposition: bool,

    /// Roll the plan's plan-time effects back once planning finishes.
    ///
    /// When disabled the world state keeps the projected state of the returned plan, and the
    /// caller must `reset_changes` before the next planning call.
    pub restore_world_state: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            log_decomposition: false,
            restore_world_state: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanResult {
    pub status: DecompositionStatus,
    /// Present when `PlannerConfig::log_decomposition` is set.
    pub log: Option<TraceLog>,
}

impl PlanResult {
    pub fn is_succeeded(&self) -> bool {
        self.status.is_succeeded()
    }

    pub fn plan(&self) -> Option<&TaskPlan> {
        match &self.status {
            DecompositionStatus::Succeeded(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_plan(self) -> Option<TaskPlan> {
        match self.status {
            DecompositionStatus::Succeeded(plan) => Some(plan),
            _ => None,
        }
    }
}

/// Entry point: decomposes a root compound task against a world state.
#[derive(Debug, Clone)]
pub struct Planner {
    root: Arc<CompoundTask>,
    config: PlannerConfig,
    abort: Option<Condition>,
}

impl Planner {
    pub fn new(root: impl Into<Arc<CompoundTask>>) -> Self {
        Self {
            root: root.into(),
            config: PlannerConfig::default(),
            abort: None,
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Interrupts planning with `Rejected` once `condition` holds on the projected world state.
    pub fn with_abort(mut self, condition: Condition) -> Self {
        self.abort = Some(condition);
        self
    }

    pub fn root(&self) -> &CompoundTask {
        &self.root
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    pub fn find_plan(
        &self,
        world: &mut WorldState,
        rng: &mut dyn DeterministicRng,
    ) -> Result<PlanResult, PlannerError> {
        let depth = world.change_depth();
        if depth != 0 {
            return Err(PlannerError::DirtyChangeStack { depth });
        }

        let mut log = self.config.log_decomposition.then(TraceLog::default);
        let status = {
            let mut ctx = PlanningContext::new(world, rng);
            if let Some(log) = log.as_mut() {
                ctx = ctx.with_trace(log);
            }
            if let Some(abort) = self.abort.as_ref() {
                ctx = ctx.with_abort(abort);
            }
            if self.root.is_valid(ctx.world) {
                decompose(&self.root, &mut ctx, 0)
            } else {
                DecompositionStatus::Failed
            }
        };

        if self.config.restore_world_state {
            world.reset_changes();
        }

        tracing::debug!(
            root = self.root.name(),
            status = status.name(),
            plan_len = status.plan().map_or(0, |p| p.len()),
            "planning finished"
        );
        Ok(PlanResult { status, log })
    }

    /// Strict validation of the whole tree against a world state of `world_len` slots.
    pub fn validate(&self, world_len: usize) -> Result<(), DomainError> {
        validate_compound(&self.root, world_len)
    }
}

fn validate_compound(task: &CompoundTask, world_len: usize) -> Result<(), DomainError> {
    match task.policy() {
        Policy::Repeat { count, .. } => match *count {
            RepeatCount::Fixed(0) => {
                return Err(DomainError::ZeroRepetitions {
                    task: task.name().to_owned(),
                });
            }
            RepeatCount::WorldState(index) if index >= world_len => {
                return Err(DomainError::RepeatIndexOutOfRange {
                    task: task.name().to_owned(),
                    index,
                    len: world_len,
                });
            }
            _ => {}
        },
        Policy::Utility => {
            let unscored = task.subtasks().iter().find(|subtask| !subtask.has_score());
            if let Some(subtask) = unscored {
                return Err(DomainError::UnscoredUtilitySubtask {
                    task: task.name().to_owned(),
                    subtask: subtask.name().to_owned(),
                });
            }
        }
        Policy::Goap { goal } => {
            if let Some(subtask) = task.subtasks().iter().find(|s| s.as_compound().is_some()) {
                return Err(DomainError::CompoundGoapSubtask {
                    task: task.name().to_owned(),
                    subtask: subtask.name().to_owned(),
                });
            }
            if let Some((index, _)) = goal.iter().find(|&(index, _)| index >= world_len) {
                return Err(DomainError::GoalIndexOutOfRange {
                    task: task.name().to_owned(),
                    index,
                    len: world_len,
                });
            }
        }
        _ => {}
    }

    for subtask in task.subtasks() {
        match subtask {
            Task::Compound(compound) => validate_compound(compound, world_len)?,
            Task::Primitive(primitive) => {
                if let Some(effect) = primitive.effects().iter().find(|e| e.index() >= world_len) {
                    return Err(DomainError::EffectIndexOutOfRange {
                        task: primitive.name().to_owned(),
                        effect: effect.name().to_owned(),
                        index: effect.index(),
                        len: world_len,
                    });
                }
            }
        }
    }
    Ok(())
}
