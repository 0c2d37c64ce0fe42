//! Shared utilities for the lomn-patcher CLI

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
