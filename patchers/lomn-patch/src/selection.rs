//! Choosing which catalog patches to apply

use std::collections::BTreeSet;

use log::warn;

use crate::error::{PatchError, Result};
use crate::patch::Patch;

/// Which patches of a catalog a run should apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every patch
    #[default]
    All,
    /// Only patches with one of these names
    Enabled(BTreeSet<String>),
    /// Every patch except those with one of these names
    Disabled(BTreeSet<String>),
}

impl Selection {
    /// Builds a selection from an enable list and a disable list.
    ///
    /// Empty lists count as absent. Giving both is rejected.
    pub fn from_lists<I, J>(enabled: I, disabled: J) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        let enabled: BTreeSet<String> = enabled.into_iter().map(Into::into).collect();
        let disabled: BTreeSet<String> = disabled.into_iter().map(Into::into).collect();

        match (enabled.is_empty(), disabled.is_empty()) {
            (true, true) => Ok(Self::All),
            (false, true) => Ok(Self::Enabled(enabled)),
            (true, false) => Ok(Self::Disabled(disabled)),
            (false, false) => Err(PatchError::ConflictingSelection),
        }
    }

    /// Names in this selection that match no patch in `catalog`
    pub fn unknown_names<'a>(&'a self, catalog: &[Patch]) -> Vec<&'a str> {
        let names = match self {
            Self::All => return Vec::new(),
            Self::Enabled(names) | Self::Disabled(names) => names,
        };

        names
            .iter()
            .map(String::as_str)
            .filter(|name| !catalog.iter().any(|patch| patch.name == *name))
            .collect()
    }

    /// Logs a warning for every name that matches nothing in `catalog`.
    pub fn warn_unknown(&self, catalog: &[Patch]) {
        for name in self.unknown_names(catalog) {
            warn!("No patch named '{}', ignoring", name);
        }
    }

    /// Fails with [`PatchError::UnknownPatch`] if any name matches nothing.
    pub fn check_known(&self, catalog: &[Patch]) -> Result<()> {
        let unknown = self.unknown_names(catalog);
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(PatchError::UnknownPatch {
                names: unknown.into_iter().map(str::to_string).collect(),
            })
        }
    }

    /// Whether `patch` is part of this selection
    pub fn includes(&self, patch: &Patch) -> bool {
        match self {
            Self::All => true,
            Self::Enabled(names) if names.is_empty() => true,
            Self::Enabled(names) => names.contains(patch.name),
            Self::Disabled(names) => !names.contains(patch.name),
        }
    }
}

/// Returns the patches of `catalog` chosen by `selection`, in catalog order.
///
/// Names that match no patch are ignored.
pub fn select<'a>(catalog: &'a [Patch], selection: &Selection) -> Vec<&'a Patch> {
    catalog
        .iter()
        .filter(|patch| selection.includes(patch))
        .collect()
}
