//! Umbrella crate that re-exports the `ai-*` planning building blocks.
//!
//! - [`core`]: world state with a rollback change log, random source contract, plans.
//! - [`goap`]: branch-and-bound GOAP search.
//! - [`htn`]: HTN decomposition engine and its policies.
//! - [`tools`]: decomposition tracing.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "goap")]
#[cfg_attr(docsrs, doc(cfg(feature = "goap")))]
pub use ai_goap as goap;

#[cfg(feature = "htn")]
#[cfg_attr(docsrs, doc(cfg(feature = "htn")))]
pub use ai_htn as htn;
