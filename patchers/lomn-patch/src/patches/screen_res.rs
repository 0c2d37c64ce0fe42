use crate::patch::{Patch, PatchWrite, Payload};

/// Default screen resolution index written by `screenres4` (the maximum)
pub const DEFAULT_SCREEN_RES: u8 = 0x04;

pub(super) const PATCH: Patch = Patch {
    name: "screenres4",
    description: "Set default screen resolution to 4",
    writes: &[PatchWrite {
        offset: 0x22CAE4,
        address: 0x62_F0E4,
        payload: Payload::Bytes(&[DEFAULT_SCREEN_RES]),
    }],
};
