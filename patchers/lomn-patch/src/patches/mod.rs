//! The fixed catalog of patches for the Alpha 0.006 executable
//!
//! Every entry lives in its own module and is registered in [`CATALOG`].
//! Catalog order is application order.

use crate::patch::Patch;

mod bit_depth;
mod hvp;
mod screen_res;
mod screen_res_ini;
mod sound_table;
mod win10;

pub use screen_res::DEFAULT_SCREEN_RES;

/// Every known patch, in declaration order
pub static CATALOG: [Patch; 6] = [
    win10::PATCH,
    sound_table::PATCH,
    screen_res::PATCH,
    screen_res_ini::PATCH,
    hvp::PATCH,
    bit_depth::PATCH,
];

/// Returns the full catalog
pub fn catalog() -> &'static [Patch] {
    &CATALOG
}

/// Looks up a catalog entry by name
pub fn find(name: &str) -> Option<&'static Patch> {
    CATALOG.iter().find(|patch| patch.name == name)
}

/// Names of all catalog entries, in catalog order
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|patch| patch.name)
}

/// Smallest file size that every catalog write fits into
pub fn end_offset() -> u64 {
    CATALOG.iter().map(Patch::end_offset).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = names().collect();
        assert_eq!(
            names,
            [
                "win10",
                "soundtableamount",
                "screenres4",
                "screenresini",
                "hvp",
                "bitdepth24"
            ]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let unique: HashSet<_> = names().collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn test_entries_are_described() {
        for patch in catalog() {
            assert!(!patch.name.is_empty());
            assert!(!patch.description.is_empty(), "{} has no description", patch.name);
            assert!(!patch.writes.is_empty(), "{} writes nothing", patch.name);
        }
    }

    #[test]
    fn test_padded_code_fits() {
        for patch in catalog() {
            for write in patch.writes {
                let bytes = write.payload.bytes().unwrap();
                assert_eq!(bytes.len(), write.payload.len(), "{}", patch.name);
            }
        }
    }

    #[test]
    fn test_writes_do_not_overlap() {
        let mut spans: Vec<_> = catalog()
            .iter()
            .flat_map(|patch| patch.writes)
            .map(|write| (write.offset, write.end_offset()))
            .collect();
        spans.sort_unstable();

        for pair in spans.windows(2) {
            assert!(
                pair[0].1 <= pair[1].0,
                "{:#X}..{:#X} overlaps {:#X}..{:#X}",
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1
            );
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("hvp").map(|p| p.writes.len()), Some(7));
        assert!(find("HVP").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_end_offset() {
        // screenres4 sits furthest into the file
        assert_eq!(end_offset(), 0x22CAE5);
    }
}
