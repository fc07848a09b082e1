//! Tooling primitives for deterministic planning.
//!
//! This crate is intentionally lightweight and engine-agnostic. It carries the decomposition
//! trace a planner can record while it runs; rendering and inspectors belong elsewhere.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
