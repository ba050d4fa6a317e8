use std::path::PathBuf;

use crate::foundation::core::Spp;

/// Configuration for orchestrated render sessions.
///
/// The defaults enable both auxiliary passes at 16 spp, remap normals into
/// the positive range on export, and leave the denoiser unset (the pass
/// chain still runs; only the denoise step is skipped).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DenoiseConfig {
    /// Render a surface-normal pass before the beauty pass.
    #[serde(default = "default_true")]
    pub enable_normal: bool,
    /// Render an albedo pass before the beauty pass.
    #[serde(default = "default_true")]
    pub enable_albedo: bool,
    /// Target sample count for the normal pass.
    #[serde(default = "default_aux_spp")]
    pub normal_spp: Spp,
    /// Target sample count for the albedo pass.
    #[serde(default = "default_aux_spp")]
    pub albedo_spp: Spp,
    /// Remap exported normal components from `[0, 1]` to `[-1, 1]`.
    #[serde(default = "default_true")]
    pub positive_normals: bool,
    /// Ask the host's normal tracer to model water displacement.
    #[serde(default = "default_true")]
    pub normal_water_displacement: bool,
    /// Path of the external denoiser executable; `None` skips denoising.
    #[serde(default)]
    pub denoiser: Option<PathBuf>,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            enable_normal: true,
            enable_albedo: true,
            normal_spp: default_aux_spp(),
            albedo_spp: default_aux_spp(),
            positive_normals: true,
            normal_water_displacement: true,
            denoiser: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_aux_spp() -> Spp {
    Spp(16)
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
