//! Sequential application of selected patches to a target

use std::fmt;
use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use log::info;

use crate::error::{PatchError, Result};
use crate::patch::Patch;

/// Progress of a patch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// A patch is about to be applied
    Patching {
        /// Name of the patch
        name: &'a str,
        /// Description of the patch
        description: &'a str,
    },
    /// Every selected patch was applied
    Done,
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patching { name, description } => {
                write!(f, "Patching: {}: {}", name, description)
            }
            Self::Done => f.write_str("Done"),
        }
    }
}

/// Receives progress events from [`run`]
pub trait ProgressSink {
    /// Called once per event, in order
    fn report(&mut self, progress: Progress<'_>);
}

impl<F: FnMut(Progress<'_>)> ProgressSink for F {
    fn report(&mut self, progress: Progress<'_>) {
        self(progress);
    }
}

/// Applies `patches` to `sink` one after another.
///
/// The sink is rewound to the start before each patch. The first failing
/// patch aborts the run: patches before it stay applied and patches after
/// it are never attempted. [`Progress::Done`] is only reported when every
/// patch succeeded.
pub fn run<S, P>(patches: &[&Patch], sink: &mut S, progress: &mut P) -> Result<()>
where
    S: Write + Seek,
    P: ProgressSink + ?Sized,
{
    info!("Applying {} patch(es)", patches.len());

    for patch in patches {
        sink.seek(SeekFrom::Start(0))?;
        progress.report(Progress::Patching {
            name: patch.name,
            description: patch.description,
        });
        patch.apply(sink)?;
    }

    sink.flush()?;
    info!("All patches applied");
    progress.report(Progress::Done);
    Ok(())
}

/// Opens the file at `path` for in-place modification and runs `patches`
/// against it.
///
/// The file must already exist; it is never created or truncated.
pub fn patch_file<P>(path: &Path, patches: &[&Patch], progress: &mut P) -> Result<()>
where
    P: ProgressSink + ?Sized,
{
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| PatchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Patching {}", path.display());
    run(patches, &mut file, progress)
}
