use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::{ModelArtifact, ModelSpec, Tensor};

/// Where a backend places its execution. Tensors handed across the backend
/// seam are always CPU buffers; device transfer is the backend's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Cuda { device_id: u32 },
}

impl FromStr for Device {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        if raw.eq_ignore_ascii_case("cpu") {
            return Ok(Device::Cpu);
        }

        if let Some(rest) = raw.strip_prefix("cuda:") {
            let device_id: u32 = rest.parse().context("invalid cuda device id")?;
            return Ok(Device::Cuda { device_id });
        }

        bail!("unsupported device: {raw} (expected cpu or cuda:N)");
    }
}

pub trait Backend {
    type Model: BackendModel;

    fn name(&self) -> &'static str;
    fn load(&self, artifact: &ModelArtifact, device: Device) -> Result<Self::Model>;
}

pub trait BackendModel {
    fn spec(&self) -> &ModelSpec;

    /// One forward pass. Inputs are matched positionally against the
    /// model's declared inputs.
    fn infer(&mut self, inputs: Vec<Tensor>) -> Result<Vec<Tensor>>;
}
