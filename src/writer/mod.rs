//! Encoding of the ndfile format
//!
//! Writes the 4-byte header for the requested endianness, the dimension
//! values in that same byte order, then the raw element buffer verbatim.
//! [`decode`](crate::parser::decode) inverts [`encode`] for either
//! endianness choice.

use crate::error::NdfileError;
use crate::types::{Array, Endianness, Header};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Encode an array to a byte stream.
pub fn encode<W: Write>(
    writer: &mut W,
    endianness: Endianness,
    arr: &Array,
) -> Result<(), NdfileError> {
    let header = Header {
        endianness,
        dtype: arr.dtype(),
        rank: arr.rank() as u8,
    };
    writer.write_all(&header.to_bytes())?;

    for &dim in arr.shape() {
        match endianness {
            Endianness::Big => writer.write_u32::<BigEndian>(dim)?,
            Endianness::Little => writer.write_u32::<LittleEndian>(dim)?,
        }
    }

    writer.write_all(arr.data())?;
    Ok(())
}

/// Encode an array to bytes.
pub fn to_bytes(endianness: Endianness, arr: &Array) -> Result<Vec<u8>, NdfileError> {
    let mut buf = Vec::new();
    encode(&mut buf, endianness, arr)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DType, HEADER_SIZE};

    #[test]
    fn header_layout_big_endian() {
        let arr = Array::zeros(DType::I32, vec![2, 3]).unwrap();
        let bytes = to_bytes(Endianness::Big, &arr).unwrap();

        assert_eq!(&bytes[..HEADER_SIZE], &[0x00, 0x00, 0x06, 0x02]);
        assert_eq!(&bytes[4..8], &2u32.to_be_bytes());
        assert_eq!(&bytes[8..12], &3u32.to_be_bytes());
        assert_eq!(bytes.len(), HEADER_SIZE + 2 * 4 + 24);
    }

    #[test]
    fn header_layout_little_endian() {
        let arr = Array::zeros(DType::I32, vec![2, 3]).unwrap();
        let bytes = to_bytes(Endianness::Little, &arr).unwrap();

        assert_eq!(&bytes[..HEADER_SIZE], &[0x02, 0x06, 0x00, 0x00]);
        assert_eq!(&bytes[4..8], &2u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &3u32.to_le_bytes());
    }

    #[test]
    fn data_written_verbatim() {
        let data: Vec<u8> = (0..6).rev().collect();
        let arr = Array::new(DType::U8, vec![6], data.clone()).unwrap();

        let bytes = to_bytes(Endianness::Big, &arr).unwrap();
        assert_eq!(&bytes[HEADER_SIZE + 4..], data.as_slice());

        let bytes = to_bytes(Endianness::Little, &arr).unwrap();
        assert_eq!(&bytes[HEADER_SIZE + 4..], data.as_slice());
    }

    #[test]
    fn short_write_is_io_error() {
        struct FullSink;

        impl Write for FullSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "no space",
                ))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let arr = Array::zeros(DType::U8, vec![4]).unwrap();
        let err = encode(&mut FullSink, Endianness::Big, &arr).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::IoError);
    }
}
