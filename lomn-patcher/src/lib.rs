//! LOMN patcher library
//!
//! Command-line definitions for applying the `lomn-patch` catalog.

pub mod cli;
pub mod commands;
pub mod utils;
