use std::path::{Path, PathBuf};

use crate::foundation::error::{DenoyteError, DenoyteResult};
use crate::formats::pfm::{self, ByteOrder};
use crate::render::host::{PassKind, RenderHost};
use crate::session::config::DenoiseConfig;
use crate::session::paths::ScenePaths;

/// Prepare export pixels for `pass` from the host's current sample buffer.
///
/// Normals are optionally remapped from `[0, 1]` to `[-1, 1]`; albedo is
/// clamped to `[0, 1]`; beauty goes through the host's per-pixel
/// post-processing and is then clamped to `[0, 1]`.
pub(crate) fn pass_export_pixels(
    host: &dyn RenderHost,
    pass: PassKind,
    cfg: &DenoiseConfig,
) -> DenoyteResult<Vec<f32>> {
    let dims = host.dimensions();
    let samples = host.sample_buffer();
    if samples.len() != dims.sample_len() {
        return Err(DenoyteError::validation(format!(
            "host sample buffer holds {} values, {}x{} RGB needs {}",
            samples.len(),
            dims.width,
            dims.height,
            dims.sample_len(),
        )));
    }

    let pixels = match pass {
        PassKind::Normal => {
            if cfg.positive_normals {
                samples.iter().map(|v| v.clamp(0.0, 1.0) * 2.0 - 1.0).collect()
            } else {
                samples.to_vec()
            }
        }
        PassKind::Albedo => samples.iter().map(|v| v.clamp(0.0, 1.0)).collect(),
        PassKind::Beauty => {
            let mut pixels = Vec::with_capacity(dims.sample_len());
            for y in 0..dims.height {
                for x in 0..dims.width {
                    let [r, g, b] = host.post_process_pixel(x, y);
                    pixels.push(r.clamp(0.0, 1.0));
                    pixels.push(g.clamp(0.0, 1.0));
                    pixels.push(b.clamp(0.0, 1.0));
                }
            }
            pixels
        }
    };
    Ok(pixels)
}

/// Export `pass`'s prepared buffer as a little-endian float map in the scene
/// layout. Returns the written path.
pub(crate) fn export_pass(
    host: &dyn RenderHost,
    pass: PassKind,
    cfg: &DenoiseConfig,
    paths: &ScenePaths,
) -> DenoyteResult<PathBuf> {
    let pixels = pass_export_pixels(host, pass, cfg)?;
    std::fs::create_dir_all(paths.directory()).map_err(|e| {
        DenoyteError::export(format!(
            "create scene directory '{}': {e}",
            paths.directory().display()
        ))
    })?;
    let path = paths.for_pass(pass);
    pfm::write_pfm_file(&path, &pixels, host.dimensions(), ByteOrder::LittleEndian)?;
    Ok(path)
}

/// Decode the denoiser's float-map output and write it as an opaque PNG.
pub(crate) fn write_denoised_png(pfm_path: &Path, png_path: &Path) -> DenoyteResult<()> {
    let img = pfm::read_pfm_file(pfm_path)?;
    image::save_buffer_with_format(
        png_path,
        &img.to_rgba8(),
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| DenoyteError::export(format!("write png '{}': {e}", png_path.display())))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/export.rs"]
mod tests;
