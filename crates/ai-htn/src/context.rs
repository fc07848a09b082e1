use std::borrow::Cow;

use ai_core::{DeterministicRng, WorldState};
use ai_goap::GoapSearcher;
use ai_tools::{TraceEvent, TraceSink};

use crate::task::Condition;

/// Everything one decomposition call threads through the recursion.
///
/// A context is built per planning call and borrows the caller's world state and random source
/// for its duration; only one call may be in flight per world state.
pub struct PlanningContext<'a> {
    pub world: &'a mut WorldState,
    pub rng: &'a mut dyn DeterministicRng,
    pub(crate) trace: Option<&'a mut dyn TraceSink>,
    abort: Option<&'a Condition>,
    depth: u32,
    pub(crate) goap: GoapSearcher,
}

impl<'a> PlanningContext<'a> {
    pub fn new(world: &'a mut WorldState, rng: &'a mut dyn DeterministicRng) -> Self {
        Self {
            world,
            rng,
            trace: None,
            abort: None,
            depth: 0,
            goap: GoapSearcher::new(),
        }
    }

    /// Records decomposition events into `sink`.
    pub fn with_trace(mut self, sink: &'a mut dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Rejects the whole attempt as soon as `condition` holds on the projected world state.
    ///
    /// Checked before every subtask the engine tries.
    pub fn with_abort(mut self, condition: &'a Condition) -> Self {
        self.abort = Some(condition);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }

    pub(crate) fn abort_condition(&self) -> Option<&'a Condition> {
        self.abort
    }

    pub(crate) fn should_abort(&self) -> bool {
        self.abort.is_some_and(|condition| condition.is_valid(self.world))
    }

    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Emits an event when a sink is attached. `detail` is only evaluated in that case.
    pub(crate) fn log(
        &mut self,
        tag: &'static str,
        subject: Cow<'static, str>,
        detail: impl FnOnce() -> String,
    ) {
        let depth = self.depth;
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.emit(TraceEvent::new(depth, tag, subject).with_detail(detail()));
        }
    }
}
