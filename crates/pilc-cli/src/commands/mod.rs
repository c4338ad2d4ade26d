//! CLI command implementations.

pub mod common;
pub mod design;
pub mod designs;
pub mod explain;
pub mod matching;
pub mod response;
