//! CLI command implementations

pub mod alias;
pub mod compose;
pub mod docker;
pub mod info;
