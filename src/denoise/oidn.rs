use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{DenoyteError, DenoyteResult};

/// Handle to an external OIDN-style denoising executable.
///
/// The executable is treated as opaque: it reads a beauty float map plus
/// optional albedo and normal guides, and writes a denoised float map.
/// [`OidnDenoiser::denoise`] blocks until the process exits, so callers
/// decide which thread carries the wait.
#[derive(Clone, Debug)]
pub struct OidnDenoiser {
    exe: PathBuf,
}

impl OidnDenoiser {
    /// Create a handle for the executable at `exe`.
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self { exe: exe.into() }
    }

    /// Path of the configured executable.
    pub fn executable(&self) -> &Path {
        &self.exe
    }

    /// Return `true` when the configured executable exists as a file.
    pub fn is_available(&self) -> bool {
        self.exe.is_file()
    }

    /// Denoise `beauty` into `out`, guided by the optional auxiliary maps.
    ///
    /// Stdout is discarded; stderr is drained on a helper thread and folded
    /// into the error when the process exits unsuccessfully.
    pub fn denoise(
        &self,
        beauty: &Path,
        albedo: Option<&Path>,
        normal: Option<&Path>,
        out: &Path,
    ) -> DenoyteResult<()> {
        let mut cmd = Command::new(&self.exe);
        cmd.args(denoise_args(beauty, albedo, normal, out));
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| {
            DenoyteError::denoise(format!(
                "failed to spawn denoiser '{}': {e}",
                self.exe.display()
            ))
        })?;

        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| DenoyteError::denoise("failed to open denoiser stderr (unexpected)"))?;
        let stderr_drain: std::thread::JoinHandle<std::io::Result<Vec<u8>>> =
            std::thread::spawn(move || {
                let mut stderr_bytes = Vec::new();
                stderr.read_to_end(&mut stderr_bytes)?;
                Ok(stderr_bytes)
            });

        let status = child
            .wait()
            .map_err(|e| DenoyteError::denoise(format!("failed to wait for denoiser: {e}")))?;
        let stderr_bytes = stderr_drain
            .join()
            .map_err(|_| DenoyteError::denoise("denoiser stderr drain thread panicked"))?
            .map_err(|e| DenoyteError::denoise(format!("denoiser stderr read failed: {e}")))?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(DenoyteError::denoise(format!(
                "denoiser exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Build the denoiser argument list.
///
/// The flags mirror OIDN's `oidnDenoise` tool: `-hdr` for the beauty input,
/// `-alb`/`-nrm` for each guide that is present, `-o` for the output.
fn denoise_args(
    beauty: &Path,
    albedo: Option<&Path>,
    normal: Option<&Path>,
    out: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-hdr".into(), beauty.as_os_str().to_owned()];
    if let Some(albedo) = albedo {
        args.push("-alb".into());
        args.push(albedo.as_os_str().to_owned());
    }
    if let Some(normal) = normal {
        args.push("-nrm".into());
        args.push(normal.as_os_str().to_owned());
    }
    args.push("-o".into());
    args.push(out.as_os_str().to_owned());
    args
}

#[cfg(test)]
#[path = "../../tests/unit/denoise/oidn.rs"]
mod tests;
