//! Decomposition policies beyond the ordered selector and sequence.

pub(crate) mod always_succeed;
pub(crate) mod goap;
pub(crate) mod invert_status;
pub(crate) mod random;
pub(crate) mod repeat;
pub(crate) mod utility;
