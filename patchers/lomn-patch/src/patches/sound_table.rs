use crate::patch::{Patch, PatchWrite, Payload};

// Compare the SoundTable entry count against -1 so the count check never
// reports a mismatch.
pub(super) const PATCH: Patch = Patch {
    name: "soundtableamount",
    description: "Avoid SoundTable error message",
    writes: &[PatchWrite {
        offset: 0x14E374,
        address: 0x54_EF74,
        payload: Payload::Bytes(&[0x81, 0xBD, 0xD4, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
    }],
};
