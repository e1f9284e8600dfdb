//! CLI command implementations.

pub(crate) mod estimate;
