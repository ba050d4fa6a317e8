use std::path::{Path, PathBuf};

use crate::foundation::core::Spp;
use crate::render::host::PassKind;

/// Artifact layout for one scene's session.
///
/// Everything lands in the scene's output directory:
/// `<scene>.normal.pfm` and `<scene>.albedo.pfm` for the auxiliary passes,
/// `<scene>.pfm` for the beauty pass, `<scene>.denoised.pfm` for the
/// denoiser output and `<scene>-<spp>.denoised.png` for the final raster.
#[derive(Clone, Debug)]
pub struct ScenePaths {
    dir: PathBuf,
    scene: String,
}

impl ScenePaths {
    /// Artifact paths for `scene` under `dir`.
    pub fn new(dir: impl Into<PathBuf>, scene: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            scene: scene.into(),
        }
    }

    /// The scene output directory.
    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// The normal-pass float map.
    pub fn normal_pfm(&self) -> PathBuf {
        self.dir.join(format!("{}.normal.pfm", self.scene))
    }

    /// The albedo-pass float map.
    pub fn albedo_pfm(&self) -> PathBuf {
        self.dir.join(format!("{}.albedo.pfm", self.scene))
    }

    /// The beauty-pass float map.
    pub fn beauty_pfm(&self) -> PathBuf {
        self.dir.join(format!("{}.pfm", self.scene))
    }

    /// The float map written by the denoiser.
    pub fn denoised_pfm(&self) -> PathBuf {
        self.dir.join(format!("{}.denoised.pfm", self.scene))
    }

    /// The final raster, stamped with the sample count the render ended at.
    pub fn denoised_png(&self, final_spp: Spp) -> PathBuf {
        self.dir
            .join(format!("{}-{}.denoised.png", self.scene, final_spp.0))
    }

    /// The float map a completed `pass` is exported to.
    pub fn for_pass(&self, pass: PassKind) -> PathBuf {
        match pass {
            PassKind::Normal => self.normal_pfm(),
            PassKind::Albedo => self.albedo_pfm(),
            PassKind::Beauty => self.beauty_pfm(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/paths.rs"]
mod tests;
