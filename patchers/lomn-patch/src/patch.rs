//! Patch descriptors and their application to a byte sink

use std::borrow::Cow;
use std::fmt;
use std::io::{Seek, SeekFrom, Write};

use log::{debug, trace};

use crate::error::Result;
use crate::fill::{fill, pad};

/// Bytes written by a single [`PatchWrite`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Literal bytes written as-is
    Bytes(&'static [u8]),
    /// A run of filler bytes of the given length
    Fill(usize),
    /// Replacement code padded with filler bytes to `length`
    Padded {
        /// Replacement code
        code: &'static [u8],
        /// Length of the original code being replaced
        length: usize,
    },
}

impl Payload {
    /// Number of bytes this payload covers in the target.
    ///
    /// For [`Payload::Padded`] this is the padded length, even if the code
    /// would overflow it.
    pub fn len(&self) -> usize {
        match *self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Fill(length) | Self::Padded { length, .. } => length,
        }
    }

    /// Whether the payload writes nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the bytes to write
    pub fn bytes(&self) -> Result<Cow<'static, [u8]>> {
        match *self {
            Self::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Self::Fill(length) => Ok(Cow::Owned(fill(length))),
            Self::Padded { code, length } => pad(code, length).map(Cow::Owned),
        }
    }
}

/// One contiguous modification at a fixed file offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchWrite {
    /// Absolute offset in the executable file
    pub offset: u64,
    /// Virtual address of the same bytes once the image is loaded
    pub address: u32,
    /// What gets written at `offset`
    pub payload: Payload,
}

impl PatchWrite {
    /// First file offset past this write
    pub fn end_offset(&self) -> u64 {
        self.offset + self.payload.len() as u64
    }

    /// Seeks `sink` to this write's offset and writes its payload.
    pub fn apply<S: Write + Seek>(&self, sink: &mut S) -> Result<()> {
        let bytes = self.payload.bytes()?;

        trace!("Seeking to {:#X}", self.offset);
        sink.seek(SeekFrom::Start(self.offset))?;
        sink.write_all(&bytes)?;

        debug!(
            "Wrote {} byte(s) at {:#X} ({:#X})",
            bytes.len(),
            self.offset,
            self.address
        );
        Ok(())
    }
}

/// A named, self-contained set of writes against the target executable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// Short unique identifier used for selection
    pub name: &'static str,
    /// One-line human readable summary
    pub description: &'static str,
    /// Writes performed by this patch, in application order
    pub writes: &'static [PatchWrite],
}

impl Patch {
    /// Applies every write of this patch to `sink`, in declared order.
    ///
    /// Offsets are not checked against the size of the sink, and writes
    /// already performed stay in place if a later one fails.
    pub fn apply<S: Write + Seek>(&self, sink: &mut S) -> Result<()> {
        for write in self.writes {
            write.apply(sink)?;
        }
        Ok(())
    }

    /// First file offset past every write of this patch
    pub fn end_offset(&self) -> u64 {
        self.writes
            .iter()
            .map(PatchWrite::end_offset)
            .max()
            .unwrap_or(0)
    }

    /// Total number of bytes this patch writes
    pub fn byte_count(&self) -> usize {
        self.writes.iter().map(|w| w.payload.len()).sum()
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
