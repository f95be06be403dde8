use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// A serialized model on disk, keyed by the format its path implies.
/// The file contents stay opaque; only the loading backend interprets them.
#[derive(Clone, Debug)]
pub enum ModelArtifact {
    OnnxPath(PathBuf),
}

impl ModelArtifact {
    /// Classify a model path by extension. Extensionless paths are assumed
    /// to be ONNX; a recognizably foreign extension fails here rather than
    /// in the deserializer.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("onnx") | Some("ort") | None => Ok(Self::OnnxPath(path.to_path_buf())),
            Some(other) => bail!(
                "unsupported model format `.{other}` for {} (expected .onnx or .ort)",
                path.display()
            ),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::OnnxPath(path) => path,
        }
    }
}
