//! Render-session orchestration.
//!
//! A session covers one render from start to denoised output: the
//! [`orchestrator::PassOrchestrator`] sequences the auxiliary and beauty
//! passes over a [`crate::render::host::RenderHost`], `export` turns
//! completed buffers into float-map artifacts, and the artifact layout is
//! fixed by [`paths::ScenePaths`].

/// Session configuration.
pub mod config;
/// Pass-buffer export (float maps and the final raster).
pub(crate) mod export;
/// The pass state machine and its driver.
pub mod orchestrator;
/// Artifact naming for one scene.
pub mod paths;
