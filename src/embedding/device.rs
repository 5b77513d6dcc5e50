use candle_core::Device;

/// Selects the compute device based on enabled features, falling back to CPU.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Using Metal GPU acceleration");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Using CUDA GPU acceleration");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "CUDA device unavailable"),
    }

    tracing::debug!("Using CPU device");
    Device::Cpu
}
