//! CLI command implementations.

pub mod classify;
pub mod interactive;
pub mod lists;
