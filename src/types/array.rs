//! Owned array container, zero-copy view, and shape algebra
//!
//! `Array` owns its element buffer and keeps the shape invariants intact
//! across every operation: rank in `1..=MAX_RANK`, no zero axes, buffer
//! length exactly `num_elements * element_size`. The shape algebra
//! (`split_last_axis` / `merge_last_axes`) reinterprets the shape without
//! touching the buffer.

use super::{DType, MAX_RANK};
use crate::error::{NdfileError, ShapeError};

/// Owned multidimensional array (row-major, flat buffer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array {
    dtype: DType,
    shape: Vec<u32>,
    data: Vec<u8>,
}

impl Array {
    /// Construct an array from its parts, validating every invariant.
    ///
    /// `data` must hold exactly `product(shape) * dtype.element_size()`
    /// bytes in row-major order (axis 0 outermost).
    pub fn new(dtype: DType, shape: Vec<u32>, data: Vec<u8>) -> Result<Self, NdfileError> {
        validate_shape(&shape)?;
        let expected = checked_byte_len(dtype, &shape)?;
        if data.len() != expected {
            return Err(NdfileError::DataSizeMismatch {
                expected: expected as u64,
                actual: data.len() as u64,
            });
        }
        Ok(Self { dtype, shape, data })
    }

    /// Construct a zero-filled array of the given shape.
    pub fn zeros(dtype: DType, shape: Vec<u32>) -> Result<Self, NdfileError> {
        validate_shape(&shape)?;
        let len = checked_byte_len(dtype, &shape)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| NdfileError::OutOfMemory)?;
        data.resize(len, 0);
        Ok(Self { dtype, shape, data })
    }

    /// Construct a zero-filled 1-D array of the given length.
    pub fn vector(dtype: DType, len: u32) -> Result<Self, NdfileError> {
        Self::zeros(dtype, vec![len])
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn shape(&self) -> &[u32] {
        &self.shape
    }

    /// Number of dimensions, always in `1..=MAX_RANK`
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements, the product of all axis lengths
    pub fn num_elements(&self) -> u64 {
        self.shape.iter().map(|&d| d as u64).product()
    }

    /// Raw element bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable element bytes. The length cannot change through this.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Split the last axis in two, leaving the buffer untouched.
    ///
    /// The last axis of length `S` becomes two axes `[S / new_inner_size,
    /// new_inner_size]` and the rank grows by one. The element count is
    /// preserved. Fails without modifying the array if the rank is already
    /// at capacity, the requested size is zero, or `S` is not a multiple of
    /// `new_inner_size`.
    pub fn split_last_axis(&mut self, new_inner_size: u32) -> Result<(), ShapeError> {
        let rank = self.shape.len();
        if rank >= MAX_RANK {
            return Err(ShapeError::RankAtCapacity { rank });
        }
        if new_inner_size == 0 {
            return Err(ShapeError::ZeroSplitSize);
        }
        let last = self.shape[rank - 1];
        if last % new_inner_size != 0 {
            return Err(ShapeError::NotDivisible {
                axis_len: last,
                requested: new_inner_size,
            });
        }

        self.shape[rank - 1] = last / new_inner_size;
        self.shape.push(new_inner_size);
        Ok(())
    }

    /// Merge the last two axes into one, leaving the buffer untouched.
    ///
    /// `shape[rank-2]` absorbs `shape[rank-1]` and the rank shrinks by one;
    /// the element count is preserved. Inverts a preceding
    /// [`split_last_axis`](Self::split_last_axis). Fails without modifying
    /// the array on a rank-1 array (no axis pair to merge) or if the merged
    /// axis would not fit a u32 wire dimension.
    pub fn merge_last_axes(&mut self) -> Result<(), ShapeError> {
        let rank = self.shape.len();
        if rank < 2 {
            return Err(ShapeError::NoAxisToMerge);
        }
        let outer = self.shape[rank - 2];
        let inner = self.shape[rank - 1];
        let merged = outer as u64 * inner as u64;
        if merged > u32::MAX as u64 {
            return Err(ShapeError::MergeOverflow { outer, inner });
        }

        self.shape[rank - 2] = merged as u32;
        self.shape.truncate(rank - 1);
        Ok(())
    }
}

/// Zero-copy view of an array stored in a byte buffer
///
/// Produced by [`parse`](crate::parser::parse); the element bytes borrow
/// from the input buffer. Invariants are established by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayView<'a> {
    pub dtype: DType,
    pub shape: Vec<u32>,
    pub data: &'a [u8],
}

impl ArrayView<'_> {
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn num_elements(&self) -> u64 {
        self.shape.iter().map(|&d| d as u64).product()
    }

    /// Copy into an owned [`Array`]
    pub fn to_owned(&self) -> Array {
        Array {
            dtype: self.dtype,
            shape: self.shape.clone(),
            data: self.data.to_vec(),
        }
    }
}

/// Rank and axis validation shared by constructors and the decoder.
pub(crate) fn validate_shape(shape: &[u32]) -> Result<(), NdfileError> {
    if shape.is_empty() || shape.len() > MAX_RANK {
        return Err(NdfileError::InvalidRank(shape.len()));
    }
    if let Some(axis) = shape.iter().position(|&d| d == 0) {
        return Err(NdfileError::ZeroDim { axis });
    }
    Ok(())
}

/// Buffer length implied by a shape, with overflow checking.
pub(crate) fn checked_byte_len(dtype: DType, shape: &[u32]) -> Result<usize, NdfileError> {
    let mut count: u64 = 1;
    for &dim in shape {
        count = count
            .checked_mul(dim as u64)
            .ok_or(NdfileError::ArrayTooLarge)?;
    }
    let bytes = count
        .checked_mul(dtype.element_size() as u64)
        .ok_or(NdfileError::ArrayTooLarge)?;
    usize::try_from(bytes).map_err(|_| NdfileError::ArrayTooLarge)
}
