//! Formatting utilities

use lomn_patch::Payload;

/// Format a file offset
pub fn format_offset(offset: u64) -> String {
    format!("{offset:#08X}")
}

/// Format a virtual address in the loaded image
pub fn format_address(address: u32) -> String {
    format!("{address:#010X}")
}

/// Short label for what a payload writes
pub fn payload_kind(payload: &Payload) -> &'static str {
    match payload {
        Payload::Bytes(_) => "bytes",
        Payload::Fill(_) => "nop",
        Payload::Padded { .. } => "code+nop",
    }
}
