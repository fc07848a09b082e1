//! Indexed byte world state with a LIFO change log.
//!
//! Planners explore hypotheses by writing through [`WorldState::set_plan_only`], which records
//! the previous value before mutating. Recording the [`WorldState::change_depth`] before a
//! speculative branch and calling [`WorldState::trim_to_depth`] afterwards restores exactly the
//! values the branch started from. Permanent writes describe facts already true of the world
//! and are never logged, so no trim can undo them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an effect writes into the world state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EffectKind {
    /// Ground truth: direct mutation, no log entry.
    Permanent,
    /// Hypothesis explored during planning: logged and reversible.
    PlanOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldStateError {
    #[error("cannot trim change log to depth {requested}: only {depth} changes recorded")]
    DepthOutOfRange { requested: usize, depth: usize },

    #[error("world state index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Change {
    index: usize,
    previous: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldState {
    values: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(skip))]
    changes: Vec<Change>,
}

impl WorldState {
    /// A zero-initialised world state with `len` slots.
    pub fn new(len: usize) -> Self {
        Self::from_values(vec![0; len])
    }

    pub fn from_values(values: Vec<u8>) -> Self {
        Self {
            values,
            changes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn get(&self, index: usize) -> u8 {
        self.values[index]
    }

    pub fn try_get(&self, index: usize) -> Option<u8> {
        self.values.get(index).copied()
    }

    /// Convenience for flag-style slots: any non-zero value reads as set.
    pub fn has(&self, index: usize) -> bool {
        self.get(index) != 0
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_permanent(&mut self, index: usize, value: u8) {
        self.values[index] = value;
    }

    /// Records `(index, previous)` on the change log, then writes `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_plan_only(&mut self, index: usize, value: u8) {
        let previous = self.values[index];
        self.changes.push(Change { index, previous });
        self.values[index] = value;
    }

    pub fn set(&mut self, index: usize, value: u8, kind: EffectKind) {
        match kind {
            EffectKind::Permanent => self.set_permanent(index, value),
            EffectKind::PlanOnly => self.set_plan_only(index, value),
        }
    }

    pub fn try_set(
        &mut self,
        index: usize,
        value: u8,
        kind: EffectKind,
    ) -> Result<(), WorldStateError> {
        if index >= self.values.len() {
            return Err(WorldStateError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.set(index, value, kind);
        Ok(())
    }

    /// Number of plan-time changes currently recorded.
    pub fn change_depth(&self) -> usize {
        self.changes.len()
    }

    /// Pops and restores changes until exactly `depth` remain.
    pub fn try_trim_to_depth(&mut self, depth: usize) -> Result<(), WorldStateError> {
        if depth > self.changes.len() {
            return Err(WorldStateError::DepthOutOfRange {
                requested: depth,
                depth: self.changes.len(),
            });
        }
        while self.changes.len() > depth {
            if let Some(change) = self.changes.pop() {
                self.values[change.index] = change.previous;
            }
        }
        Ok(())
    }

    /// Pops and restores changes until exactly `depth` remain.
    ///
    /// # Panics
    ///
    /// Panics if `depth` exceeds the current change depth. That can only happen when push/pop
    /// accounting is broken somewhere in the planner, and every later plan would be built on a
    /// corrupted state.
    pub fn trim_to_depth(&mut self, depth: usize) {
        if let Err(err) = self.try_trim_to_depth(depth) {
            panic!("world state change log corrupted: {err}");
        }
    }

    /// Rolls back every recorded change.
    pub fn reset_changes(&mut self) {
        self.trim_to_depth(0);
    }
}
