//! Decoding of the ndfile format
//!
//! Two entry points: [`decode`] pulls an owned [`Array`] off any
//! `io::Read`, and [`parse`] reads an in-memory buffer into an
//! [`ArrayView`] whose element bytes borrow from the input (zero-copy).
//!
//! Dimension values on the wire follow the byte order declared by the
//! header marker; element data is raw and never swapped.

use crate::error::NdfileError;
use crate::types::{
    Array, ArrayView, Endianness, HEADER_SIZE, Header, checked_byte_len, validate_shape,
};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Read;

/// Decode an array from a byte stream.
///
/// Reads exactly one array: the 4-byte header, `rank` u32 dimensions in
/// the header's declared byte order, then the raw element buffer. A
/// truncated stream fails with a `FormatError`-kind error; nothing is
/// left allocated on any failure path.
pub fn decode<R: Read>(reader: &mut R) -> Result<Array, NdfileError> {
    let mut header_bytes = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_bytes)?;
    let header = Header::from_bytes(header_bytes)?;

    let shape = read_dims(reader, &header)?;
    validate_shape(&shape)?;

    let byte_len = checked_byte_len(header.dtype, &shape)?;
    let mut data = Vec::new();
    data.try_reserve_exact(byte_len)
        .map_err(|_| NdfileError::OutOfMemory)?;
    data.resize(byte_len, 0);
    reader.read_exact(&mut data)?;

    Array::new(header.dtype, shape, data)
}

/// Parse an array from an in-memory buffer without copying the data.
///
/// The returned view borrows the element bytes from `bytes`; call
/// [`ArrayView::to_owned`] to detach it.
pub fn parse(bytes: &[u8]) -> Result<ArrayView<'_>, NdfileError> {
    let mut reader = bytes;

    let mut header_bytes = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_bytes)?;
    let header = Header::from_bytes(header_bytes)?;

    let shape = read_dims(&mut reader, &header)?;
    validate_shape(&shape)?;

    let byte_len = checked_byte_len(header.dtype, &shape)?;
    if reader.len() < byte_len {
        return Err(NdfileError::Truncated {
            expected: byte_len,
            remaining: reader.len(),
        });
    }

    Ok(ArrayView {
        dtype: header.dtype,
        shape,
        data: &reader[..byte_len],
    })
}

fn read_dims<R: Read>(reader: &mut R, header: &Header) -> Result<Vec<u32>, NdfileError> {
    let mut shape = Vec::with_capacity(header.rank as usize);
    for _ in 0..header.rank {
        let dim = match header.endianness {
            Endianness::Big => reader.read_u32::<BigEndian>()?,
            Endianness::Little => reader.read_u32::<LittleEndian>()?,
        };
        shape.push(dim);
    }
    Ok(shape)
}
