//! Binary patches for BIONICLE: The Legend of Mata Nui, build Alpha 0.006.
//!
//! This crate holds a fixed catalog of byte-level patches against the
//! game's executable and the machinery to select and apply them.
//!
//! # Examples
//!
//! ```no_run
//! use lomn_patch::{Progress, Selection, catalog, patch_file, select};
//! use std::path::Path;
//!
//! let selection = Selection::from_lists(["win10", "hvp"], [""; 0])?;
//! let patches = select(catalog(), &selection);
//!
//! patch_file(Path::new("LEGO Bionicle.exe"), &patches, &mut |p: Progress<'_>| {
//!     println!("{p}");
//! })?;
//! # Ok::<(), lomn_patch::PatchError>(())
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod fill;
pub mod patch;
pub mod patches;
pub mod runner;
pub mod selection;

pub use error::{PatchError, Result};
pub use fill::{FILLER_BYTE, fill, pad};
pub use patch::{Patch, PatchWrite, Payload};
pub use patches::{CATALOG, catalog, find};
pub use runner::{Progress, ProgressSink, patch_file, run};
pub use selection::{Selection, select};
