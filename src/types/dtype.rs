//! Element types and their wire tags
//!
//! The single byte in the header that identifies the element representation.
//! `element_size` is the registry consulted by the codec; an unrecognized tag
//! never reaches it because `from_u8` gates decoding.

/// Element type of an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    U8 = 0x01,
    I8 = 0x02,
    U16 = 0x03,
    I16 = 0x04,
    U32 = 0x05,
    I32 = 0x06,
    U64 = 0x07,
    I64 = 0x08,
    F32 = 0x09,
    F64 = 0x0A,
}

impl DType {
    /// Every supported dtype, in tag order
    pub const ALL: [DType; 10] = [
        DType::U8,
        DType::I8,
        DType::U16,
        DType::I16,
        DType::U32,
        DType::I32,
        DType::U64,
        DType::I64,
        DType::F32,
        DType::F64,
    ];

    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }

    /// Try to convert from the wire tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(DType::U8),
            0x02 => Some(DType::I8),
            0x03 => Some(DType::U16),
            0x04 => Some(DType::I16),
            0x05 => Some(DType::U32),
            0x06 => Some(DType::I32),
            0x07 => Some(DType::U64),
            0x08 => Some(DType::I64),
            0x09 => Some(DType::F32),
            0x0A => Some(DType::F64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for dtype in DType::ALL {
            assert_eq!(DType::from_u8(dtype as u8), Some(dtype));
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        assert_eq!(DType::from_u8(0x00), None);
        assert_eq!(DType::from_u8(0x0B), None);
        assert_eq!(DType::from_u8(0xFF), None);
    }

    #[test]
    fn element_sizes() {
        assert_eq!(DType::U8.element_size(), 1);
        assert_eq!(DType::I16.element_size(), 2);
        assert_eq!(DType::I32.element_size(), 4);
        assert_eq!(DType::F32.element_size(), 4);
        assert_eq!(DType::F64.element_size(), 8);
        assert_eq!(DType::U64.element_size(), 8);
    }
}
