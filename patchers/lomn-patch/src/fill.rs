//! Filler byte primitives used to blank out machine code

use crate::error::{PatchError, Result};

/// The x86 `nop` opcode, used to fill removed instructions
pub const FILLER_BYTE: u8 = 0x90;

/// Returns `length` filler bytes.
pub fn fill(length: usize) -> Vec<u8> {
    vec![FILLER_BYTE; length]
}

/// Pads `data` with filler bytes up to exactly `length` bytes.
///
/// Replacement code is usually shorter than the original instructions it
/// overwrites; padding keeps every following byte where it was.
///
/// # Errors
///
/// Returns [`PatchError::PaddingOverflow`] if `data` is already longer than
/// `length`.
///
/// # Examples
///
/// ```
/// use lomn_patch::fill::pad;
///
/// let code = pad(&[0xB8, 0x00, 0x00, 0x00, 0x00], 7).unwrap();
/// assert_eq!(code, [0xB8, 0x00, 0x00, 0x00, 0x00, 0x90, 0x90]);
/// assert!(pad(&[0xC3, 0xC3], 1).is_err());
/// ```
pub fn pad(data: &[u8], length: usize) -> Result<Vec<u8>> {
    let len = data.len();
    let Some(padding) = length.checked_sub(len) else {
        return Err(PatchError::PaddingOverflow { len, length });
    };

    let mut padded = Vec::with_capacity(length);
    padded.extend_from_slice(data);
    padded.extend(fill(padding));
    Ok(padded)
}
