use std::fmt;

use crate::DType;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IOName(pub String);

/// Declared dtype and dimensions of one model input or output.
/// A `None` dimension is dynamic and only pinned down at inference time.
#[derive(Clone, Debug)]
pub struct TensorSpec {
    pub name: IOName,
    pub dtype: DType,
    pub dims: Vec<Option<usize>>,
}

impl fmt::Display for TensorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} [", self.name.0, self.dtype)?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match dim {
                Some(d) => write!(f, "{d}")?,
                None => write!(f, "?")?,
            }
        }
        write!(f, "]")
    }
}

#[derive(Clone, Debug)]
pub struct ModelSpec {
    pub inputs: Vec<TensorSpec>,
    pub outputs: Vec<TensorSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dynamic_dims_as_question_marks() {
        let spec = TensorSpec {
            name: IOName("input".to_string()),
            dtype: DType::F32,
            dims: vec![None, Some(3), Some(224), Some(224)],
        };
        assert_eq!(spec.to_string(), "input: F32 [?, 3, 224, 224]");
    }
}
