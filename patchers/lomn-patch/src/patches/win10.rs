use crate::patch::{Patch, PatchWrite, Payload};

// CloseHandle(-1) does not fail on Windows 10, so the file handle is checked
// for -1 explicitly. The original error path is shifted down by 9 bytes with
// its relative call fixed up.
pub(super) const PATCH: Patch = Patch {
    name: "win10",
    description: "Windows 10",
    writes: &[PatchWrite {
        offset: 0x9AE93,
        address: 0x49_BA93,
        payload: Payload::Bytes(&[
            0x83, 0xBB, 0x24, 0x01, 0x00, 0x00, 0xFF, // cmp dword [ebx+0x124], -1
            0x74, 0x04, // je +4
            0x85, 0xC0, // test eax, eax
            0x75, 0x11, // jne +0x11
            0x68, 0x8C, 0xBA, 0x69, 0x00, // push 0x69BA8C
            0x68, 0xB0, 0xBA, 0x69, 0x00, // push 0x69BAB0
            0xE8, 0xA1, 0xEF, 0xFF, 0xFF, // call rel -0x105F
            0x59, // pop ecx
            0x59, // pop ecx
            0xC6, 0x83, 0x20, 0x01, 0x00, 0x00, 0x00, // mov byte [ebx+0x120], 0
            0x8D, 0x65, 0xFC, // lea esp, [ebp-4]
            0x5B, // pop ebx
            0x5D, // pop ebp
            0xC3, // ret
        ]),
    }],
};
