//! Wire header: endianness marker + dtype tag + rank
//!
//! The 4-byte header is self-describing: the pair of zero bytes marks which
//! end carries the rank and type, so a reader needs no external convention
//! to tell a big-endian file from a little-endian one.
//!
//! ```text
//! big-endian:    [0x00, 0x00, dtype, rank]
//! little-endian: [rank, dtype, 0x00, 0x00]
//! ```

use super::DType;
use crate::error::NdfileError;

/// Largest supported rank
pub const MAX_RANK: usize = 8;

/// Header size in bytes
pub const HEADER_SIZE: usize = 4;

/// Byte order declared by a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

/// Decoded wire header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub endianness: Endianness,
    pub dtype: DType,
    pub rank: u8,
}

impl Header {
    /// Recognize a 4-byte header.
    ///
    /// The big-endian pattern is checked first. The ambiguous headers
    /// (rank 0 or tag 0 under either reading) are rejected by the rank and
    /// dtype validation no matter which branch claims them.
    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self, NdfileError> {
        let (endianness, tag, rank) = if bytes[0] == 0 && bytes[1] == 0 {
            (Endianness::Big, bytes[2], bytes[3])
        } else if bytes[2] == 0 && bytes[3] == 0 {
            (Endianness::Little, bytes[1], bytes[0])
        } else {
            return Err(NdfileError::UnrecognizedHeader(bytes));
        };

        let dtype = DType::from_u8(tag).ok_or(NdfileError::InvalidDType(tag))?;
        if rank == 0 || rank as usize > MAX_RANK {
            return Err(NdfileError::RankOutOfRange(rank));
        }

        Ok(Header {
            endianness,
            dtype,
            rank,
        })
    }

    /// Encode this header into its 4-byte wire form.
    pub fn to_bytes(self) -> [u8; 4] {
        match self.endianness {
            Endianness::Big => [0x00, 0x00, self.dtype as u8, self.rank],
            Endianness::Little => [self.rank, self.dtype as u8, 0x00, 0x00],
        }
    }
}
