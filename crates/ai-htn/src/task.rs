//! Task, condition and effect model.
//!
//! A tree is assembled once (by hand or by an external builder) and treated as immutable while
//! planning. Subtasks are reference counted so a plan can hand its primitive tasks to an
//! executor without borrowing the tree.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use ai_core::{ActionStatus, EffectKind, WorldState};

use crate::policy::{Policy, RepeatCount, RepeatOrder};
use ai_goap::Goal;

pub type Name = Cow<'static, str>;

type PredicateFn = dyn Fn(&WorldState) -> bool + Send + Sync;
type ValueFn = dyn Fn(&WorldState) -> u8 + Send + Sync;
type MeasureFn = dyn Fn(&WorldState) -> f32 + Send + Sync;

/// Named predicate over the world state.
#[derive(Clone)]
pub struct Condition {
    name: Name,
    predicate: Arc<PredicateFn>,
}

impl Condition {
    pub fn new(
        name: impl Into<Name>,
        predicate: impl Fn(&WorldState) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_valid(&self, world: &WorldState) -> bool {
        (self.predicate)(world)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").field("name", &self.name).finish()
    }
}

/// Writes one world-state slot when its task is accepted into a plan.
///
/// The new value is computed from the current state, so counters and toggles can be expressed
/// as well as plain assignments.
#[derive(Clone)]
pub struct Effect {
    name: Name,
    index: usize,
    kind: EffectKind,
    value: Arc<ValueFn>,
}

impl Effect {
    pub fn new(
        name: impl Into<Name>,
        index: usize,
        kind: EffectKind,
        value: impl Fn(&WorldState) -> u8 + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            index,
            kind,
            value: Arc::new(value),
        }
    }

    /// Effect assigning a constant.
    pub fn set(name: impl Into<Name>, index: usize, value: u8, kind: EffectKind) -> Self {
        Self::new(name, index, kind, move |_| value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn apply(&self, world: &mut WorldState) {
        self.apply_as(world, self.kind);
    }

    pub fn apply_as(&self, world: &mut WorldState, kind: EffectKind) {
        let value = (self.value)(world);
        world.set(self.index, value, kind);
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The executable part of a primitive task. Opaque to the planner.
pub trait Operator: Send + Sync {
    fn update(&self, world: &mut WorldState) -> ActionStatus;

    fn stop(&self, _world: &mut WorldState) {}
}

impl<F> Operator for F
where
    F: Fn(&mut WorldState) -> ActionStatus + Send + Sync,
{
    fn update(&self, world: &mut WorldState) -> ActionStatus {
        self(world)
    }
}

pub struct PrimitiveTask {
    name: Name,
    conditions: Vec<Condition>,
    effects: Vec<Effect>,
    operator: Option<Arc<dyn Operator>>,
    cost: Option<Arc<MeasureFn>>,
    score: Option<Arc<MeasureFn>>,
}

impl PrimitiveTask {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            effects: Vec::new(),
            operator: None,
            cost: None,
            score: None,
        }
    }

    pub fn with_condition(
        mut self,
        name: impl Into<Name>,
        predicate: impl Fn(&WorldState) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.conditions.push(Condition::new(name, predicate));
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_operator(mut self, operator: impl Operator + 'static) -> Self {
        self.operator = Some(Arc::new(operator));
        self
    }

    /// GOAP step cost. Tasks without one cost `1.0`.
    pub fn with_cost(mut self, cost: impl Fn(&WorldState) -> f32 + Send + Sync + 'static) -> Self {
        self.cost = Some(Arc::new(cost));
        self
    }

    /// Utility score; required to compete under a utility selector.
    pub fn with_score(
        mut self,
        score: impl Fn(&WorldState) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.score = Some(Arc::new(score));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn label(&self) -> Name {
        self.name.clone()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn operator(&self) -> Option<&Arc<dyn Operator>> {
        self.operator.as_ref()
    }

    /// All conditions hold, and every effect targets a slot that exists.
    pub fn is_valid(&self, world: &WorldState) -> bool {
        self.conditions.iter().all(|c| c.is_valid(world))
            && self.effects.iter().all(|e| e.index() < world.len())
    }

    /// Applies every effect in declared order with its own write mode.
    pub fn apply_effects(&self, world: &mut WorldState) {
        for effect in &self.effects {
            effect.apply(world);
        }
    }

    /// Applies every effect in declared order, forcing the write mode.
    pub fn apply_effects_as(&self, world: &mut WorldState, kind: EffectKind) {
        for effect in &self.effects {
            effect.apply_as(world, kind);
        }
    }

    pub fn has_cost(&self) -> bool {
        self.cost.is_some()
    }

    pub fn cost(&self, world: &WorldState) -> f32 {
        self.cost.as_ref().map_or(1.0, |cost| cost(world))
    }

    pub fn has_score(&self) -> bool {
        self.score.is_some()
    }

    pub fn score(&self, world: &WorldState) -> Option<f32> {
        self.score.as_ref().map(|score| score(world))
    }
}

impl fmt::Debug for PrimitiveTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveTask")
            .field("name", &self.name)
            .field("conditions", &self.conditions)
            .field("effects", &self.effects)
            .field("has_operator", &self.operator.is_some())
            .field("has_cost", &self.cost.is_some())
            .field("has_score", &self.score.is_some())
            .finish()
    }
}

pub struct CompoundTask {
    name: Name,
    conditions: Vec<Condition>,
    subtasks: Vec<Task>,
    policy: Policy,
    score: Option<Arc<MeasureFn>>,
}

impl CompoundTask {
    pub fn new(name: impl Into<Name>, policy: Policy) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            subtasks: Vec::new(),
            policy,
            score: None,
        }
    }

    /// Ordered, first valid subtask wins.
    pub fn selector(name: impl Into<Name>) -> Self {
        Self::new(name, Policy::Selector)
    }

    /// Every subtask, in order.
    pub fn sequence(name: impl Into<Name>) -> Self {
        Self::new(name, Policy::Sequence)
    }

    pub fn random(name: impl Into<Name>) -> Self {
        Self::new(name, Policy::Random)
    }

    pub fn utility(name: impl Into<Name>) -> Self {
        Self::new(name, Policy::Utility)
    }

    pub fn invert_status(name: impl Into<Name>) -> Self {
        Self::new(name, Policy::InvertStatus)
    }

    pub fn always_succeed(name: impl Into<Name>) -> Self {
        Self::new(name, Policy::AlwaysSucceed)
    }

    pub fn repeat(name: impl Into<Name>, count: RepeatCount, order: RepeatOrder) -> Self {
        Self::new(name, Policy::Repeat { count, order })
    }

    pub fn goap(name: impl Into<Name>, goal: Goal) -> Self {
        Self::new(name, Policy::Goap { goal })
    }

    pub fn with_condition(
        mut self,
        name: impl Into<Name>,
        predicate: impl Fn(&WorldState) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.conditions.push(Condition::new(name, predicate));
        self
    }

    pub fn with_subtask(mut self, task: impl Into<Task>) -> Self {
        self.subtasks.push(task.into());
        self
    }

    pub fn with_subtasks<I, T>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Task>,
    {
        self.subtasks.extend(tasks.into_iter().map(Into::into));
        self
    }

    pub fn with_score(
        mut self,
        score: impl Fn(&WorldState) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.score = Some(Arc::new(score));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn label(&self) -> Name {
        self.name.clone()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn subtasks(&self) -> &[Task] {
        &self.subtasks
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn is_valid(&self, world: &WorldState) -> bool {
        self.conditions.iter().all(|c| c.is_valid(world))
    }

    pub fn has_score(&self) -> bool {
        self.score.is_some()
    }

    pub fn score(&self, world: &WorldState) -> Option<f32> {
        self.score.as_ref().map(|score| score(world))
    }
}

impl fmt::Debug for CompoundTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundTask")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("conditions", &self.conditions)
            .field("subtasks", &self.subtasks)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum Task {
    Compound(Arc<CompoundTask>),
    Primitive(Arc<PrimitiveTask>),
}

impl Task {
    pub fn name(&self) -> &str {
        match self {
            Task::Compound(c) => c.name(),
            Task::Primitive(p) => p.name(),
        }
    }

    pub(crate) fn label(&self) -> Name {
        match self {
            Task::Compound(c) => c.label(),
            Task::Primitive(p) => p.label(),
        }
    }

    pub fn is_valid(&self, world: &WorldState) -> bool {
        match self {
            Task::Compound(c) => c.is_valid(world),
            Task::Primitive(p) => p.is_valid(world),
        }
    }

    pub fn has_score(&self) -> bool {
        match self {
            Task::Compound(c) => c.has_score(),
            Task::Primitive(p) => p.has_score(),
        }
    }

    /// `None` when the task does not offer a utility score.
    pub fn score(&self, world: &WorldState) -> Option<f32> {
        match self {
            Task::Compound(c) => c.score(world),
            Task::Primitive(p) => p.score(world),
        }
    }

    pub fn as_primitive(&self) -> Option<&Arc<PrimitiveTask>> {
        match self {
            Task::Primitive(p) => Some(p),
            Task::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Arc<CompoundTask>> {
        match self {
            Task::Compound(c) => Some(c),
            Task::Primitive(_) => None,
        }
    }
}

impl From<PrimitiveTask> for Task {
    fn from(value: PrimitiveTask) -> Self {
        Task::Primitive(Arc::new(value))
    }
}

impl From<CompoundTask> for Task {
    fn from(value: CompoundTask) -> Self {
        Task::Compound(Arc::new(value))
    }
}

impl From<Arc<PrimitiveTask>> for Task {
    fn from(value: Arc<PrimitiveTask>) -> Self {
        Task::Primitive(value)
    }
}

impl From<Arc<CompoundTask>> for Task {
    fn from(value: Arc<CompoundTask>) -> Self {
        Task::Compound(value)
    }
}
