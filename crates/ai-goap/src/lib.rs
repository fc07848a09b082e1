//! Deterministic GOAP forward search.
//!
//! The search finds the cheapest ordered subset of candidate actions whose effects, applied in
//! order, satisfy a goal. It explores by speculative writes into an `ai-core` world state and
//! rolls every branch back before trying the next one.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod search;

pub use search::{
    search, GoapCandidate, GoapNode, GoapOutcome, GoapPath, GoapSearchStats, GoapSearcher, Goal,
    NodeArena, NodeId,
};
