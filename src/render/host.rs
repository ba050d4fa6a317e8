use std::path::Path;

use crate::foundation::core::{Dimensions, Spp};

/// Render mode reported by the host renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Interactive preview; orchestration stays dormant.
    Preview,
    /// A render is accumulating samples.
    Rendering,
    /// A render is paused; resuming it does not start a new session.
    Paused,
}

/// The kind of buffer a render pass accumulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Surface normals, traced at a low sample count to guide the denoiser.
    Normal,
    /// Base color without lighting, also a low-sample denoiser guide.
    Albedo,
    /// The path-traced image at the scene's configured sample count.
    Beauty,
}

impl PassKind {
    /// Short lowercase label used in log lines and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Albedo => "albedo",
            Self::Beauty => "beauty",
        }
    }
}

/// A lifecycle notification from the host renderer.
///
/// Hosts deliver events from a single logical thread, in the order they
/// occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    /// The host's render mode changed.
    ModeChanged(RenderMode),
    /// The active accumulation reached `Spp` samples per pixel.
    SampleCountUpdated(Spp),
}

/// Capabilities the pipeline needs from a host path tracer.
///
/// The contract mirrors how progressive renderers behave:
///
/// - Accumulation runs until the target sample count is reached and then
///   stops on its own; the final [`RenderEvent::SampleCountUpdated`] reports
///   a count at or past the target.
/// - Between [`RenderHost::halt_accumulation`] and
///   [`RenderHost::resume_accumulation`] no accumulation worker observes the
///   tracer or the target, so a pass switch applied between the two calls is
///   atomic from the workers' point of view.
/// - [`RenderHost::sample_buffer`] is only read while accumulation is
///   stopped, either halted or completed.
pub trait RenderHost {
    /// Dimensions of the active sample buffer.
    fn dimensions(&self) -> Dimensions;

    /// Name of the scene being rendered; artifact file names derive from it.
    fn scene_name(&self) -> &str;

    /// Directory this scene's artifacts are written into.
    fn scene_directory(&self) -> &Path;

    /// The currently configured target sample count.
    fn target_spp(&self) -> Spp;

    /// The accumulated RGB samples, row-major, top row first,
    /// `dimensions().sample_len()` values.
    fn sample_buffer(&self) -> &[f32];

    /// Stop sample accumulation.
    fn halt_accumulation(&mut self);

    /// Restart accumulation from zero samples with the installed tracer.
    fn resume_accumulation(&mut self);

    /// Set the target sample count for the active pass.
    fn set_target_spp(&mut self, target: Spp);

    /// Install the tracer strategy for `pass`.
    fn install_tracer(&mut self, pass: PassKind);

    /// Post-process one accumulated pixel into display-range linear RGB.
    fn post_process_pixel(&self, x: u32, y: u32) -> [f32; 3];
}
