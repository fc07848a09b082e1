//! Deterministic HTN decomposition.
//!
//! A domain is a tree of [`CompoundTask`]s whose leaves are [`PrimitiveTask`]s. Each compound
//! carries a [`Policy`] deciding how its subtasks become a plan: ordered selection, sequences,
//! random or utility picks, decorators, repetition, or a GOAP search over its primitives.
//!
//! Decomposition explores hypotheses by writing plan-time effects into an
//! [`ai_core::WorldState`] and rolling them back through its change log. Whatever a policy
//! tries, a compound that reports `Failed` or `Rejected` leaves the change log at the depth it
//! was entered with.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod context;
mod decompose;
mod error;
mod planner;
mod policy;
mod selectors;
mod status;
mod task;

pub use ai_goap::Goal;
pub use context::PlanningContext;
pub use decompose::decompose;
pub use error::{DomainError, PlannerError};
pub use planner::{PlanResult, Planner, PlannerConfig};
pub use policy::{Policy, RepeatCount, RepeatOrder};
pub use status::{DecompositionStatus, TaskPlan};
pub use task::{CompoundTask, Condition, Effect, Name, Operator, PrimitiveTask, Task};
