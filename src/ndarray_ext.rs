//! ndarray integration for ndfile arrays
//!
//! Conversions between ndfile's [`Array`]/[`ArrayView`] and ndarray's
//! dynamic-dimension `ArrayD`. Element bytes move in native byte order,
//! matching the codec's raw-buffer contract.
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{Array, ArrayView, DType, MAX_RANK};
use ndarray::{ArrayD, IxDyn};
use std::mem::size_of;

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdarrayError {
    /// DType mismatch between expected and actual
    DTypeMismatch { expected: DType, actual: DType },
    /// Shape is not representable in the wire format (rank or axis bounds)
    UnsupportedShape(Vec<usize>),
    /// Shape doesn't match data length
    ShapeMismatch { shape: Vec<u32>, data_len: usize },
}

impl std::fmt::Display for NdarrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdarrayError::DTypeMismatch { expected, actual } => {
                write!(f, "dtype mismatch: expected {:?}, got {:?}", expected, actual)
            }
            NdarrayError::UnsupportedShape(shape) => {
                write!(
                    f,
                    "shape {:?} is not representable (rank 1..={}, axes 1..=u32::MAX)",
                    shape, MAX_RANK
                )
            }
            NdarrayError::ShapeMismatch { shape, data_len } => {
                write!(f, "shape {:?} doesn't match data length {}", shape, data_len)
            }
        }
    }
}

impl std::error::Error for NdarrayError {}

/// Trait for element types that can be stored in an ndfile array
pub trait ArrayType: Copy + 'static {
    const DTYPE: DType;

    /// Read one element from exactly `size_of::<Self>()` native-order bytes.
    fn read_ne(bytes: &[u8]) -> Self;

    /// Append this element's native-order bytes.
    fn write_ne(self, out: &mut Vec<u8>);
}

macro_rules! impl_array_type {
    ($($t:ty => $dtype:ident),* $(,)?) => {$(
        impl ArrayType for $t {
            const DTYPE: DType = DType::$dtype;

            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_ne_bytes(raw)
            }

            fn write_ne(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_ne_bytes());
            }
        }
    )*};
}

impl_array_type!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);

impl Array {
    /// Create an ndfile Array from an ndarray `ArrayD`.
    ///
    /// Elements are serialized in logical row-major order, so any memory
    /// layout is accepted. Fails if the shape has rank 0, rank above
    /// `MAX_RANK`, a zero-length axis, or an axis longer than `u32::MAX`.
    pub fn from_ndarray<T: ArrayType>(arr: &ArrayD<T>) -> Result<Self, NdarrayError> {
        let dims = arr.shape();
        let unsupported = || NdarrayError::UnsupportedShape(dims.to_vec());

        if dims.is_empty() || dims.len() > MAX_RANK || dims.contains(&0) {
            return Err(unsupported());
        }
        let mut shape = Vec::with_capacity(dims.len());
        for &d in dims {
            shape.push(u32::try_from(d).map_err(|_| unsupported())?);
        }

        let mut data = Vec::with_capacity(arr.len() * size_of::<T>());
        for &v in arr.iter() {
            v.write_ne(&mut data);
        }

        Array::new(T::DTYPE, shape, data).map_err(|_| unsupported())
    }

    /// Convert to an ndarray `ArrayD`, copying the elements out.
    pub fn to_ndarray<T: ArrayType>(&self) -> Result<ArrayD<T>, NdarrayError> {
        read_elements(self.dtype(), self.shape(), self.data())
    }
}

impl ArrayView<'_> {
    /// Convert to an owned ndarray `ArrayD`, copying the elements out.
    pub fn to_ndarray<T: ArrayType>(&self) -> Result<ArrayD<T>, NdarrayError> {
        read_elements(self.dtype, &self.shape, self.data)
    }
}

fn read_elements<T: ArrayType>(
    dtype: DType,
    shape: &[u32],
    data: &[u8],
) -> Result<ArrayD<T>, NdarrayError> {
    if T::DTYPE != dtype {
        return Err(NdarrayError::DTypeMismatch {
            expected: T::DTYPE,
            actual: dtype,
        });
    }

    let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
    let elements: Vec<T> = data.chunks_exact(size_of::<T>()).map(T::read_ne).collect();

    ArrayD::from_shape_vec(IxDyn(&dims), elements).map_err(|_| NdarrayError::ShapeMismatch {
        shape: shape.to_vec(),
        data_len: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn roundtrip_1d_f32() {
        let arr = array![1.0f32, 2.0, 3.0, 4.0].into_dyn();
        let blob = Array::from_ndarray(&arr).unwrap();

        assert_eq!(blob.dtype(), DType::F32);
        assert_eq!(blob.shape(), &[4]);

        let back: ArrayD<f32> = blob.to_ndarray().unwrap();
        assert_eq!(arr, back);
    }

    #[test]
    fn roundtrip_2d_i32() {
        let arr = array![[1i32, 2, 3], [4, 5, 6]].into_dyn();
        let blob = Array::from_ndarray(&arr).unwrap();

        assert_eq!(blob.dtype(), DType::I32);
        assert_eq!(blob.shape(), &[2, 3]);

        let back: ArrayD<i32> = blob.to_ndarray().unwrap();
        assert_eq!(arr, back);
    }

    #[test]
    fn non_standard_layout_serializes_row_major() {
        // reversed_axes keeps the original data, so this array is not in
        // standard layout
        let transposed = array![[1i32, 2, 3], [4, 5, 6]].into_dyn().reversed_axes();
        assert!(!transposed.is_standard_layout());

        let blob = Array::from_ndarray(&transposed).unwrap();
        assert_eq!(blob.shape(), &[3, 2]);

        let back: ArrayD<i32> = blob.to_ndarray().unwrap();
        assert_eq!(transposed, back);
    }

    #[test]
    fn dtype_mismatch_error() {
        let arr = array![1.0f32, 2.0, 3.0].into_dyn();
        let blob = Array::from_ndarray(&arr).unwrap();

        let result: Result<ArrayD<f64>, _> = blob.to_ndarray();
        assert!(matches!(result, Err(NdarrayError::DTypeMismatch { .. })));
    }

    #[test]
    fn zero_axis_rejected() {
        let arr = ArrayD::<u8>::zeros(IxDyn(&[2, 0, 3]));
        let result = Array::from_ndarray(&arr);
        assert!(matches!(result, Err(NdarrayError::UnsupportedShape(_))));
    }

    #[test]
    fn view_to_ndarray() {
        let values: Vec<i16> = vec![10, 20, 30, 40];
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

        let view = ArrayView {
            dtype: DType::I16,
            shape: vec![2, 2],
            data: &data,
        };

        let nd: ArrayD<i16> = view.to_ndarray().unwrap();
        assert_eq!(nd.shape(), &[2, 2]);
        assert_eq!(nd[[1, 1]], 40);
    }

    #[test]
    fn all_dtypes_map() {
        assert_eq!(<u8 as ArrayType>::DTYPE, DType::U8);
        assert_eq!(<i8 as ArrayType>::DTYPE, DType::I8);
        assert_eq!(<u16 as ArrayType>::DTYPE, DType::U16);
        assert_eq!(<i16 as ArrayType>::DTYPE, DType::I16);
        assert_eq!(<u32 as ArrayType>::DTYPE, DType::U32);
        assert_eq!(<i32 as ArrayType>::DTYPE, DType::I32);
        assert_eq!(<u64 as ArrayType>::DTYPE, DType::U64);
        assert_eq!(<i64 as ArrayType>::DTYPE, DType::I64);
        assert_eq!(<f32 as ArrayType>::DTYPE, DType::F32);
        assert_eq!(<f64 as ArrayType>::DTYPE, DType::F64);
    }
}
