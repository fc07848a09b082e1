#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered plan data: the steps a planner selected, first step first.
///
/// Planners build a plan incrementally while they recurse and hand the finished value to the
/// caller, who owns it from then on. Steps are whatever the planner emits (task handles for
/// the HTN engine, candidate indices for a bare GOAP search).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan<S> {
    pub steps: Vec<S>,
}

impl<S> Default for Plan<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> Plan<S> {
    pub fn new(steps: Vec<S>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    /// Moves every step of `other` onto the end of this plan, leaving `other` empty.
    pub fn append(&mut self, other: &mut Plan<S>) {
        self.steps.append(&mut other.steps);
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> From<Vec<S>> for Plan<S> {
    fn from(steps: Vec<S>) -> Self {
        Self { steps }
    }
}

impl<S> IntoIterator for Plan<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Plan<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
