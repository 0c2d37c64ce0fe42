use crate::patch::{Patch, PatchWrite, Payload};

// The game renders with negated near/far clip planes, which no known
// hardware accepts. Each compare-and-jump that inverts the world is blanked
// so the first branch is always taken.
pub(super) const PATCH: Patch = Patch {
    name: "hvp",
    description: "Hardware vertex processing",
    writes: &[
        // GcViewPort::GcViewPort
        PatchWrite {
            offset: 0x3B924,
            address: 0x43_C524,
            payload: Payload::Fill(13),
        },
        // GcLegoCamera::BuildViewMatrix
        PatchWrite {
            offset: 0x4BC80,
            address: 0x44_C880,
            payload: Payload::Fill(13),
        },
        // GcAreaDirector::SetFog
        PatchWrite {
            offset: 0x71D93,
            address: 0x47_2993,
            payload: Payload::Fill(9),
        },
        // ScPerspectiveCamera::BuildProjectionMatrix
        PatchWrite {
            offset: 0x79526,
            address: 0x47_A126,
            payload: Payload::Fill(9),
        },
        // GcGraphicsOptions::SetDrawDistance
        PatchWrite {
            offset: 0x15FBB0,
            address: 0x56_07B0,
            payload: Payload::Fill(9),
        },
        // GcGraphicsOptions::GetDrawDistance
        PatchWrite {
            offset: 0x15FBE0,
            address: 0x56_07E0,
            payload: Payload::Fill(9),
        },
        // GcSprite::Render rotates sprites by PI; use 0.0 so they stay upright.
        PatchWrite {
            offset: 0x21B88C,
            address: 0x61_DE8C,
            payload: Payload::Bytes(&[0x00, 0x00, 0x00, 0x00]),
        },
    ],
};
