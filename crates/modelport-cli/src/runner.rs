use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use modelport_backend_ort::OrtBackend;
use modelport_core::{Backend, BackendModel, Device, ModelArtifact, Shape, Tensor};
use tracing::{debug, info};

/// Shape of the synthetic all-ones input: NCHW, one 224x224 RGB image.
const INPUT_DIMS: [usize; 4] = [1, 3, 224, 224];

/// The printed slice covers `[0, 5)` of the output's second dimension,
/// clamped when the model emits fewer channels.
const SLICE_DIM: usize = 1;
const SLICE_END: usize = 5;

/// Load the model, run one forward pass on an all-ones input, and print a
/// slice of the first output. The flow is strictly linear; the first error
/// aborts it.
pub fn run(model_path: &Path, device: Device) -> Result<()> {
    let artifact = ModelArtifact::from_path(model_path)?;

    let backend = OrtBackend::new();
    let started = Instant::now();
    let mut model = backend
        .load(&artifact, device)
        .with_context(|| format!("error loading the model from {}", artifact.path().display()))?;
    info!(
        backend = backend.name(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "model loaded"
    );
    for (i, input) in model.spec().inputs.iter().enumerate() {
        debug!(index = i, spec = %input, "model input");
    }
    for (i, output) in model.spec().outputs.iter().enumerate() {
        debug!(index = i, spec = %output, "model output");
    }

    println!("ok");

    let input = Tensor::full_f32(Shape::from_slice(&INPUT_DIMS), 1.0);
    debug!(bytes = input.byte_len(), "input tensor built");

    let started = Instant::now();
    let outputs = model.infer(vec![input]).context("inference failed")?;
    info!(
        outputs = outputs.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "forward pass complete"
    );

    let output = outputs
        .into_iter()
        .next()
        .context("model produced no outputs")?;
    let slice = output.slice_dim(SLICE_DIM, 0, SLICE_END)?;
    println!("{}", slice.to_array_f32()?);

    Ok(())
}
