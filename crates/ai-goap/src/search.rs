use std::borrow::Cow;
use std::collections::BTreeMap;

use ai_core::{Plan, WorldState};
use ai_tools::{TraceEvent, TraceSink};

/// Something the forward search can take as one step.
pub trait GoapCandidate {
    fn is_valid(&self, world: &WorldState) -> bool;

    /// Applies the candidate's effects for exploration.
    ///
    /// Every write must go through the plan-time log (`WorldState::set_plan_only`) so the search
    /// can roll each branch back.
    fn apply_effects(&self, world: &mut WorldState);

    /// Step cost, evaluated after the candidate's effects were applied.
    fn cost(&self, _world: &WorldState) -> f32 {
        1.0
    }

    fn label(&self) -> Cow<'static, str> {
        Cow::Borrowed("candidate")
    }
}

/// Conjunction of `world[index] == value` constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goal {
    conditions: BTreeMap<usize, u8>,
}

impl Goal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, index: usize, value: u8) -> Self {
        self.conditions.insert(index, value);
        self
    }

    pub fn insert(&mut self, index: usize, value: u8) {
        self.conditions.insert(index, value);
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.conditions.iter().map(|(&i, &v)| (i, v))
    }

    /// An index outside the world state never matches.
    pub fn is_satisfied(&self, world: &WorldState) -> bool {
        self.conditions
            .iter()
            .all(|(&index, &value)| world.try_get(index) == Some(value))
    }
}

impl FromIterator<(usize, u8)> for Goal {
    fn from_iter<I: IntoIterator<Item = (usize, u8)>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoapNode {
    pub parent: Option<NodeId>,
    /// Candidate index taken to reach this node; `None` for the root.
    pub candidate: Option<usize>,
    pub running_cost: f32,
}

/// Bump arena for search nodes.
///
/// Handles are only meaningful for the search that allocated them. `clear` keeps the
/// allocation so a reused [`GoapSearcher`] does not reallocate per call.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<GoapNode>,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn alloc(&mut self, node: GoapNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &GoapNode {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// Cheapest ordered candidate sequence reaching the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoapPath {
    /// Candidate indices, first step first.
    pub plan: Plan<usize>,
    pub cost: f32,
}

/// Result of a search that can be interrupted.
#[derive(Debug, Clone, PartialEq)]
pub enum GoapOutcome {
    Found(GoapPath),
    Unreachable,
    /// The abort predicate held before some expansion; nothing was returned.
    Aborted,
}

impl GoapOutcome {
    pub fn into_path(self) -> Option<GoapPath> {
        match self {
            GoapOutcome::Found(path) => Some(path),
            GoapOutcome::Unreachable | GoapOutcome::Aborted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoapSearchStats {
    pub nodes: usize,
    pub leaves: usize,
}

/// Exhaustive branch-and-bound forward search.
///
/// Explores every ordering of valid candidates (no candidate twice on one path), records each
/// node where the goal holds as a leaf, and keeps the cheapest leaf; ties keep the first leaf
/// found. The world state is back at its entry depth when `search` returns, whatever the
/// result. Worst case is O(k!) in the number of candidates.
#[derive(Debug, Default)]
pub struct GoapSearcher {
    arena: NodeArena,
    leaves: Vec<NodeId>,
    stats: GoapSearchStats,
}

impl GoapSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_stats(&self) -> GoapSearchStats {
        self.stats
    }

    pub fn search<C: GoapCandidate>(
        &mut self,
        world: &mut WorldState,
        candidates: &[C],
        goal: &Goal,
        trace: Option<&mut (dyn TraceSink + '_)>,
    ) -> Option<GoapPath> {
        self.search_until(world, candidates, goal, &|_: &WorldState| false, trace)
            .into_path()
    }

    /// Like [`GoapSearcher::search`], but checks `abort` against the projected world state
    /// before every candidate it tries. Once it holds the search stops and rolls back.
    pub fn search_until<C: GoapCandidate>(
        &mut self,
        world: &mut WorldState,
        candidates: &[C],
        goal: &Goal,
        abort: &dyn Fn(&WorldState) -> bool,
        trace: Option<&mut (dyn TraceSink + '_)>,
    ) -> GoapOutcome {
        self.arena.clear();
        self.leaves.clear();
        self.stats = GoapSearchStats::default();

        if goal.is_satisfied(world) {
            tracing::trace!("goap goal already satisfied");
            return GoapOutcome::Found(GoapPath {
                plan: Plan::default(),
                cost: 0.0,
            });
        }

        let entry_depth = world.change_depth();
        let root = self.arena.alloc(GoapNode {
            parent: None,
            candidate: None,
            running_cost: 0.0,
        });
        let open: Vec<usize> = (0..candidates.len()).collect();

        let mut expansion = Expansion {
            arena: &mut self.arena,
            leaves: &mut self.leaves,
            candidates,
            goal,
            abort,
            aborted: false,
            trace,
        };
        let found = expansion.expand(world, root, &open, 0);
        let aborted = expansion.aborted;
        debug_assert_eq!(world.change_depth(), entry_depth);

        self.stats = GoapSearchStats {
            nodes: self.arena.len(),
            leaves: self.leaves.len(),
        };
        tracing::debug!(
            candidates = candidates.len(),
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            aborted,
            "goap search finished"
        );

        if aborted {
            return GoapOutcome::Aborted;
        }
        if !found {
            return GoapOutcome::Unreachable;
        }
        match self.cheapest_leaf() {
            Some(cheapest) => GoapOutcome::Found(self.reconstruct(cheapest)),
            None => GoapOutcome::Unreachable,
        }
    }

    fn cheapest_leaf(&self) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        for &leaf in &self.leaves {
            match best {
                Some(b) if self.arena.get(leaf).running_cost < self.arena.get(b).running_cost => {
                    best = Some(leaf);
                }
                None => best = Some(leaf),
                Some(_) => {}
            }
        }
        best
    }

    fn reconstruct(&self, leaf: NodeId) -> GoapPath {
        let cost = self.arena.get(leaf).running_cost;
        let mut steps = Vec::new();
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.arena.get(id);
            if let Some(candidate) = node.candidate {
                steps.push(candidate);
            }
            current = node.parent;
        }
        steps.reverse();
        GoapPath {
            plan: Plan::new(steps),
            cost,
        }
    }
}

/// Convenience wrapper around a fresh [`GoapSearcher`].
pub fn search<C: GoapCandidate>(
    world: &mut WorldState,
    candidates: &[C],
    goal: &Goal,
) -> Option<GoapPath> {
    GoapSearcher::new().search(world, candidates, goal, None)
}

struct Expansion<'s, 'c, 'tr, C> {
    arena: &'s mut NodeArena,
    leaves: &'s mut Vec<NodeId>,
    candidates: &'c [C],
    goal: &'c Goal,
    abort: &'c dyn Fn(&WorldState) -> bool,
    aborted: bool,
    trace: Option<&'s mut (dyn TraceSink + 'tr)>,
}

impl<C: GoapCandidate> Expansion<'_, '_, '_, C> {
    fn expand(&mut self, world: &mut WorldState, parent: NodeId, open: &[usize], depth: u32) -> bool {
        let mut found = false;

        for &index in open {
            if (self.abort)(world) {
                self.aborted = true;
                return found;
            }

            let candidate = &self.candidates[index];
            if !candidate.is_valid(world) {
                continue;
            }

            let change_depth = world.change_depth();
            candidate.apply_effects(world);

            let running_cost = self.arena.get(parent).running_cost + candidate.cost(world);
            let node = self.arena.alloc(GoapNode {
                parent: Some(parent),
                candidate: Some(index),
                running_cost,
            });

            if self.goal.is_satisfied(world) {
                if let Some(trace) = self.trace.as_deref_mut() {
                    trace.emit(
                        TraceEvent::new(depth, "goap.leaf", candidate.label())
                            .with_detail(format!("cost={running_cost}")),
                    );
                }
                self.leaves.push(node);
                found = true;
            } else {
                let remaining: Vec<usize> = open.iter().copied().filter(|&i| i != index).collect();
                if self.expand(world, node, &remaining, depth + 1) {
                    found = true;
                }
            }

            // Sibling branches must all start from the same state.
            world.trim_to_depth(change_depth);
            if self.aborted {
                return found;
            }
        }

        found
    }
}
