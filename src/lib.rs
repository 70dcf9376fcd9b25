//! ndfile - Self-describing binary format for multidimensional numeric arrays
//!
//! A minimal container for rectangular, row-major numeric arrays and a binary
//! on-disk format for it. The 4-byte header carries its own endianness marker,
//! the dtype tag, and the rank; the dimensions follow as u32 values in the
//! declared byte order, then the raw element buffer.
//!
//! # Features
//!
//! - Self-describing header: readers need no external endianness convention
//! - Zero-copy parsing from in-memory buffers
//! - Buffer-preserving shape algebra: split and merge axes without moving data
//! - Optional ndarray interop behind the `ndarray` feature
//!
//! # Example
//!
//! ```rust
//! use ndfile::{Array, DType, Endianness, decode, writer};
//!
//! // A 2x6 grid of bytes
//! let mut arr = Array::new(DType::U8, vec![2, 6], (0..12).collect()).unwrap();
//!
//! // Reinterpret the last axis without touching the buffer
//! arr.split_last_axis(3).unwrap();
//! assert_eq!(arr.shape(), &[2, 2, 3]);
//!
//! // Encode and decode round-trip
//! let bytes = writer::to_bytes(Endianness::Big, &arr).unwrap();
//! let back = decode(&mut bytes.as_slice()).unwrap();
//! assert_eq!(back, arr);
//! ```

pub mod error;
pub mod parser;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{ErrorKind, NdfileError, ShapeError};
pub use parser::{decode, parse};
pub use types::{Array, ArrayView, DType, Endianness, HEADER_SIZE, Header, MAX_RANK};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::{ArrayType, NdarrayError};
