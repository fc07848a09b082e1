//! Deterministic, engine-agnostic planning primitives.
//!
//! `ai-core` owns the pieces every planner shares: the indexed byte world state with its
//! rollback log, the injectable random source, the plan container and the status an operator
//! reports back to an executor.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod plan;
pub mod rng;
pub mod world_state;

pub use action::{ActionOutcome, ActionStatus};
pub use plan::Plan;
pub use rng::{DeterministicRng, SplitMix64};
pub use world_state::{EffectKind, WorldState, WorldStateError};
