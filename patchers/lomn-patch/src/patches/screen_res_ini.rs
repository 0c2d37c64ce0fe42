use crate::patch::{Patch, PatchWrite, Payload};

pub(super) const PATCH: Patch = Patch {
    name: "screenresini",
    description: "Allow ini to control screen resolution",
    writes: &[
        // AppMain: GcGraphicsOptions::GetScreenResolution() becomes 0, which
        // takes the default switch case and keeps the INI values.
        PatchWrite {
            offset: 0xCFFD5,
            address: 0x4D_0BD5,
            payload: Payload::Bytes(&[
                0xB8, 0x00, 0x00, 0x00, 0x00, // mov eax, 0
            ]),
        },
        // ScDrawableContext::Reset: replace the resolution switch with a
        // GcSaver::GetScreenData call. Width and height get real pointers,
        // the other five share a stack slot that is overwritten afterwards.
        PatchWrite {
            offset: 0xEB253,
            address: 0x4E_BE53,
            payload: Payload::Padded {
                code: &[
                    0x8D, 0x85, 0x34, 0xFF, 0xFF, 0xFF, // lea eax, [ebp-0xCC]
                    0x50, // push eax
                    0x50, // push eax
                    0x50, // push eax
                    0x50, // push eax
                    0x50, // push eax
                    0x8D, 0x85, 0x30, 0xFF, 0xFF, 0xFF, // lea eax, [ebp-0xD0]
                    0x50, // push eax
                    0x8D, 0x85, 0x2C, 0xFF, 0xFF, 0xFF, // lea eax, [ebp-0xD4]
                    0x50, // push eax
                    0xE8, 0xCF, 0xAE, 0x06, 0x00, // call GcSaver::GetScreenData
                    0x83, 0xC4, 0x1C, // add esp, 0x1C
                ],
                length: 0x71,
            },
        },
        // ScPlatformScreen::BuildDeviceList: read the size from the existing
        // ScScreenData float pair instead of the config, truncated to ints.
        PatchWrite {
            offset: 0xCA978,
            address: 0x4C_B578,
            payload: Payload::Padded {
                code: &[
                    0x8B, 0x85, 0x20, 0xF8, 0xFF, 0xFF, // mov eax, [ebp-0x7E0]
                    0x8B, 0x40, 0x04, // mov eax, [eax+4]
                    0xD9, 0x40, 0x10, // fld dword [eax+0x10]
                    0xDB, 0x9D, 0x24, 0xF8, 0xFF, 0xFF, // fistp dword [ebp-0x7DC]
                    0x8B, 0x85, 0x20, 0xF8, 0xFF, 0xFF, // mov eax, [ebp-0x7E0]
                    0x8B, 0x40, 0x04, // mov eax, [eax+4]
                    0xD9, 0x40, 0x14, // fld dword [eax+0x14]
                    0xDB, 0x9D, 0x28, 0xF8, 0xFF, 0xFF, // fistp dword [ebp-0x7D8]
                ],
                length: 0x72,
            },
        },
    ],
};
