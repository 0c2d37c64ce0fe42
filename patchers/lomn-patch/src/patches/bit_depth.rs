use crate::patch::{Patch, PatchWrite, Payload};

pub(super) const PATCH: Patch = Patch {
    name: "bitdepth24",
    description: "Set the bit depth to 24",
    writes: &[
        // Windowed: AutoDepthStencilFormat D3DFMT_D16 (0x50) -> D3DFMT_D24X8 (0x4D)
        PatchWrite {
            offset: 0xCB4F8,
            address: 0x4C_C0F8,
            payload: Payload::Bytes(&[0x4D]),
        },
        // Fullscreen: m_dwMinDepthBits 16 -> 24
        PatchWrite {
            offset: 0xCB5BD,
            address: 0x4C_C1BD,
            payload: Payload::Bytes(&[0x18]),
        },
    ],
};
