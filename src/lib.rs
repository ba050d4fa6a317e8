//! Denoyte bolts a denoising pipeline onto a progressive path tracer.
//!
//! The host renderer keeps doing what it does best, accumulating samples;
//! Denoyte sequences everything around that to produce a denoised still:
//!
//! 1. **Orchestrate**: [`PassOrchestrator`] reacts to host lifecycle events
//!    and drives the pass chain normal -> albedo -> beauty, re-targeting the
//!    host between passes.
//! 2. **Export**: each completed pass is written as a portable float map
//!    (PFM), the lingua franca of command-line denoisers.
//! 3. **Denoise** (optional): an external OIDN-style executable turns the
//!    beauty map plus the auxiliary guides into a denoised float map.
//! 4. **Publish**: the denoised map is decoded and saved as an opaque PNG
//!    next to the scene.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No sampling here**: the host owns the sample buffer and the workers;
//!   Denoyte only reads buffers through [`RenderHost`] while accumulation is
//!   stopped.
//! - **A finished render is never failed retroactively**: export and denoise
//!   errors are logged, not propagated. Only decoding a float map reports
//!   hard errors, to its immediate caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod denoise;
mod formats;
mod foundation;
mod render;
mod session;

pub use denoise::oidn::OidnDenoiser;
pub use formats::pfm::{
    ByteOrder, FloatImage, read_pfm, read_pfm_file, read_pfm_header, write_pfm, write_pfm_file,
};
pub use foundation::core::{Dimensions, Spp};
pub use foundation::error::{DenoyteError, DenoyteResult};
pub use render::host::{PassKind, RenderEvent, RenderHost, RenderMode};
pub use session::config::DenoiseConfig;
pub use session::orchestrator::PassOrchestrator;
pub use session::paths::ScenePaths;
