//! Patch application command

use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use std::path::PathBuf;

use lomn_patch::{Progress, Selection, catalog, patch_file, select};

#[derive(Args)]
pub struct ApplyArgs {
    /// File to be patched
    pub file: PathBuf,

    /// Only apply listed patches (can be repeated)
    #[arg(short, long, value_name = "PATCH", conflicts_with = "disabled")]
    pub enabled: Vec<String>,

    /// Do not apply listed patches (can be repeated)
    #[arg(short, long, value_name = "PATCH")]
    pub disabled: Vec<String>,

    /// Reject patch names that match no known patch
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: ApplyArgs) -> Result<()> {
    let ApplyArgs {
        file,
        enabled,
        disabled,
        strict,
    } = args;

    let selection =
        Selection::from_lists(enabled, disabled).context("Invalid patch selection")?;

    if strict {
        selection.check_known(catalog())?;
    } else {
        selection.warn_unknown(catalog());
    }

    let patches = select(catalog(), &selection);
    if patches.is_empty() {
        warn!("No patches selected, {} is left untouched", file.display());
    }

    patch_file(&file, &patches, &mut |progress: Progress<'_>| {
        println!("{progress}");
    })
    .with_context(|| format!("Failed to patch {}", file.display()))
}
