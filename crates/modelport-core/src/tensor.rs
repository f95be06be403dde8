use anyhow::{ensure, Context, Result};
use bytes::{BufMut, Bytes, BytesMut};
use ndarray::{ArrayD, IxDyn};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DType {
    F32,
    F16,
    I64,
    I32,
    U8,
}

impl DType {
    pub fn size_of(self) -> usize {
        match self {
            DType::F32 | DType::I32 => 4,
            DType::F16 => 2,
            DType::I64 => 8,
            DType::U8 => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape(pub SmallVec<[usize; 6]>);

impl Shape {
    pub fn from_slice(dims: &[usize]) -> Self {
        Self(dims.iter().copied().collect())
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Element count; the empty shape is a scalar and counts as one.
    pub fn numel(&self) -> usize {
        self.0.iter().product::<usize>().max(1)
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub struct TensorDesc {
    pub dtype: DType,
    pub shape: Shape,
}

/// A dense, contiguous, row-major tensor backed by a CPU byte buffer.
#[derive(Clone, Debug)]
pub struct Tensor {
    pub desc: TensorDesc,
    pub data: Bytes,
}

impl Tensor {
    pub fn from_bytes(dtype: DType, shape: Shape, data: Bytes) -> Self {
        Self {
            desc: TensorDesc { dtype, shape },
            data,
        }
    }

    /// Dense f32 tensor with every element set to `value`, little-endian packed.
    pub fn full_f32(shape: Shape, value: f32) -> Self {
        let numel = shape.numel();
        let mut buf = BytesMut::with_capacity(numel * DType::F32.size_of());
        for _ in 0..numel {
            buf.put_f32_le(value);
        }
        Self::from_bytes(DType::F32, shape, buf.freeze())
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Contiguous sub-range along one dimension, half-open `[start, end)`.
    ///
    /// `end` is clamped to the dimension size, so asking for more elements
    /// than the dimension holds returns everything it does hold. An empty or
    /// inverted range yields a zero-sized dimension. Every other dimension is
    /// carried over unchanged.
    pub fn slice_dim(&self, dim: usize, start: usize, end: usize) -> Result<Tensor> {
        let rank = self.desc.shape.rank();
        ensure!(
            dim < rank,
            "slice dimension {dim} out of range for rank-{rank} tensor"
        );

        let dims = self.desc.shape.dims();
        let dim_size = dims[dim];
        let end = end.min(dim_size);
        let start = start.min(end);

        let elem = self.desc.dtype.size_of();
        let inner: usize = dims[dim + 1..].iter().product();
        let outer: usize = dims[..dim].iter().product();
        let src_row = dim_size * inner * elem;
        let dst_row = (end - start) * inner * elem;
        ensure!(
            self.data.len() == outer * src_row,
            "tensor byte length {} does not match shape {:?}",
            self.data.len(),
            dims
        );

        let mut out = BytesMut::with_capacity(outer * dst_row);
        for chunk in 0..outer {
            let base = chunk * src_row + start * inner * elem;
            out.extend_from_slice(&self.data[base..base + dst_row]);
        }

        let mut sliced: SmallVec<[usize; 6]> = self.desc.shape.0.clone();
        sliced[dim] = end - start;
        Ok(Tensor::from_bytes(
            self.desc.dtype,
            Shape(sliced),
            out.freeze(),
        ))
    }

    pub fn to_f32_vec(&self) -> Result<Vec<f32>> {
        ensure!(
            self.desc.dtype == DType::F32,
            "expected f32 tensor, got {:?}",
            self.desc.dtype
        );
        ensure!(
            self.data.len() % 4 == 0,
            "f32 tensor has invalid byte length {}",
            self.data.len()
        );
        Ok(self
            .data
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect())
    }

    /// Reinterpret as an `ndarray` array, for rendering and numeric checks.
    pub fn to_array_f32(&self) -> Result<ArrayD<f32>> {
        let values = self.to_f32_vec()?;
        ArrayD::from_shape_vec(IxDyn(self.desc.shape.dims()), values)
            .context("tensor byte length does not match its shape")
    }
}
