use std::path::PathBuf;

use clap::Parser;
use modelport_core::Device;

#[derive(Parser, Debug)]
#[command(name = "modelport-run", version, about = "Single-shot model inference runner")]
pub struct Cli {
    /// Path to the serialized model artifact
    pub model_path: PathBuf,

    /// Device for inference (cpu or cuda:N)
    #[arg(long, default_value = "cpu")]
    pub device: Device,

    /// Log filter, tracing EnvFilter syntax; logs go to stderr
    #[arg(long, default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn requires_exactly_one_model_path() {
        assert!(Cli::try_parse_from(["modelport-run"]).is_err());
        assert!(Cli::try_parse_from(["modelport-run", "a.onnx", "b.onnx"]).is_err());
        assert!(Cli::try_parse_from(["modelport-run", "a.onnx"]).is_ok());
    }

    #[test]
    fn parses_device_flag() {
        let cli = Cli::try_parse_from(["modelport-run", "a.onnx", "--device", "cuda:1"]).unwrap();
        assert_eq!(cli.device, Device::Cuda { device_id: 1 });

        assert!(Cli::try_parse_from(["modelport-run", "a.onnx", "--device", "npu"]).is_err());
    }
}
