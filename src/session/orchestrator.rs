use std::path::Path;
use std::thread::JoinHandle;

use crate::denoise::oidn::OidnDenoiser;
use crate::foundation::core::Spp;
use crate::render::host::{PassKind, RenderEvent, RenderHost, RenderMode};
use crate::session::config::DenoiseConfig;
use crate::session::export;
use crate::session::paths::ScenePaths;

/// Where a session currently is in the pass chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Session started, first progress report not seen yet.
    Idle,
    /// `pass` is accumulating toward `target`.
    Running { pass: PassKind, target: Spp },
    /// The beauty pass completed; later progress reports are ignored.
    Done,
}

/// A side effect the driver performs against the host renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Halt accumulation, install `pass`'s tracer, set `target`, resume.
    BeginPass { pass: PassKind, target: Spp },
    /// Export the current sample buffer as `pass`'s float map.
    ExportPass(PassKind),
    /// Run the external denoiser over the written artifacts.
    Denoise { final_spp: Spp },
}

/// Orchestration state for render sessions.
///
/// [`SessionState::step`] is a pure transition: it mutates only this value
/// and returns the side effects to perform, so pass sequencing is testable
/// by feeding synthetic event sequences.
#[derive(Clone, Debug)]
pub(crate) struct SessionState {
    mode: RenderMode,
    awaiting_first_report: bool,
    beauty_target: Spp,
    phase: Phase,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self {
            mode: RenderMode::Preview,
            awaiting_first_report: false,
            beauty_target: Spp(0),
            phase: Phase::Idle,
        }
    }

    pub(crate) fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Apply one host event.
    ///
    /// `scene_target` is the host's currently configured target sample
    /// count; it is captured as the beauty target only when a session
    /// starts, so target edits made for the auxiliary passes never leak
    /// into the beauty pass.
    pub(crate) fn step(
        &mut self,
        event: RenderEvent,
        scene_target: Spp,
        cfg: &DenoiseConfig,
    ) -> Vec<Action> {
        match event {
            RenderEvent::ModeChanged(mode) => {
                let prev = self.mode;
                self.mode = mode;
                // Resuming out of a pause keeps the session; any other way
                // into Rendering starts a fresh one.
                if mode == RenderMode::Rendering && prev != RenderMode::Paused {
                    self.awaiting_first_report = true;
                    self.beauty_target = scene_target;
                    self.phase = Phase::Idle;
                }
                Vec::new()
            }
            RenderEvent::SampleCountUpdated(spp) => {
                if self.mode == RenderMode::Preview {
                    return Vec::new();
                }
                if self.awaiting_first_report {
                    self.awaiting_first_report = false;
                    let (pass, target) = self.first_pass(cfg);
                    self.phase = Phase::Running { pass, target };
                    return vec![Action::BeginPass { pass, target }];
                }
                match self.phase {
                    Phase::Running { pass, target } if spp >= target => {
                        self.complete_pass(pass, spp, cfg)
                    }
                    _ => Vec::new(),
                }
            }
        }
    }

    fn first_pass(&self, cfg: &DenoiseConfig) -> (PassKind, Spp) {
        if cfg.enable_normal {
            (PassKind::Normal, cfg.normal_spp)
        } else if cfg.enable_albedo {
            (PassKind::Albedo, cfg.albedo_spp)
        } else {
            (PassKind::Beauty, self.beauty_target)
        }
    }

    fn complete_pass(&mut self, pass: PassKind, spp: Spp, cfg: &DenoiseConfig) -> Vec<Action> {
        let mut actions = vec![Action::ExportPass(pass)];
        match pass {
            PassKind::Normal => {
                let (next, target) = if cfg.enable_albedo {
                    (PassKind::Albedo, cfg.albedo_spp)
                } else {
                    (PassKind::Beauty, self.beauty_target)
                };
                self.phase = Phase::Running { pass: next, target };
                actions.push(Action::BeginPass { pass: next, target });
            }
            PassKind::Albedo => {
                let target = self.beauty_target;
                self.phase = Phase::Running {
                    pass: PassKind::Beauty,
                    target,
                };
                actions.push(Action::BeginPass {
                    pass: PassKind::Beauty,
                    target,
                });
            }
            PassKind::Beauty => {
                self.phase = Phase::Done;
                if cfg.denoiser.is_some() {
                    actions.push(Action::Denoise { final_spp: spp });
                }
            }
        }
        actions
    }
}

/// Drives the auxiliary-pass chain over a host renderer's lifecycle.
///
/// Feed [`RenderEvent`]s in arrival order from one thread. Pass switches and
/// float-map exports run synchronously inside
/// [`PassOrchestrator::handle_event`]; the external denoiser runs on a
/// background thread that is joined before the next session starts, in
/// [`PassOrchestrator::wait_for_denoiser`], or on drop.
///
/// Export and denoise failures are logged and never propagate: by the time
/// they can occur the render itself has already finished.
pub struct PassOrchestrator {
    cfg: DenoiseConfig,
    state: SessionState,
    denoise_job: Option<JoinHandle<()>>,
}

impl PassOrchestrator {
    /// Create an orchestrator with `cfg`.
    pub fn new(cfg: DenoiseConfig) -> Self {
        Self {
            cfg,
            state: SessionState::new(),
            denoise_job: None,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DenoiseConfig {
        &self.cfg
    }

    /// React to one host lifecycle event.
    #[tracing::instrument(skip(self, host))]
    pub fn handle_event(&mut self, host: &mut dyn RenderHost, event: RenderEvent) {
        if starts_session(self.state.mode(), event) {
            // Artifacts of the previous session must not be rewritten under
            // an outstanding denoise job.
            self.wait_for_denoiser();
        }
        let scene_target = host.target_spp();
        for action in self.state.step(event, scene_target, &self.cfg) {
            self.apply(host, action);
        }
    }

    /// Block until an outstanding denoise job finishes, if there is one.
    pub fn wait_for_denoiser(&mut self) {
        if let Some(job) = self.denoise_job.take()
            && job.join().is_err()
        {
            tracing::error!("denoise worker panicked");
        }
    }

    fn apply(&mut self, host: &mut dyn RenderHost, action: Action) {
        match action {
            Action::BeginPass { pass, target } => {
                tracing::debug!(pass = pass.label(), target = target.0, "starting pass");
                host.halt_accumulation();
                host.install_tracer(pass);
                host.set_target_spp(target);
                host.resume_accumulation();
            }
            Action::ExportPass(pass) => {
                let paths = ScenePaths::new(host.scene_directory(), host.scene_name());
                match export::export_pass(host, pass, &self.cfg, &paths) {
                    Ok(path) => {
                        tracing::debug!(path = %path.display(), "exported {} map", pass.label());
                    }
                    Err(e) => {
                        tracing::error!("saving the {} map failed: {e}", pass.label());
                    }
                }
            }
            Action::Denoise { final_spp } => {
                let Some(exe) = self.cfg.denoiser.clone() else {
                    return;
                };
                let paths = ScenePaths::new(host.scene_directory(), host.scene_name());
                let albedo = self.cfg.enable_albedo.then(|| paths.albedo_pfm());
                let normal = self.cfg.enable_normal.then(|| paths.normal_pfm());
                self.denoise_job = Some(std::thread::spawn(move || {
                    run_denoise(
                        &OidnDenoiser::new(exe),
                        &paths,
                        albedo.as_deref(),
                        normal.as_deref(),
                        final_spp,
                    );
                }));
            }
        }
    }
}

impl Drop for PassOrchestrator {
    fn drop(&mut self) {
        self.wait_for_denoiser();
    }
}

/// Whether `event` arriving in `mode` starts a new session.
fn starts_session(mode: RenderMode, event: RenderEvent) -> bool {
    event == RenderEvent::ModeChanged(RenderMode::Rendering) && mode != RenderMode::Paused
}

/// Denoise the session artifacts and export the final raster.
///
/// Runs on the background worker; every failure is logged and the worker
/// exits quietly.
fn run_denoise(
    denoiser: &OidnDenoiser,
    paths: &ScenePaths,
    albedo: Option<&Path>,
    normal: Option<&Path>,
    final_spp: Spp,
) {
    let beauty = paths.beauty_pfm();
    let denoised = paths.denoised_pfm();
    if let Err(e) = denoiser.denoise(&beauty, albedo, normal, &denoised) {
        tracing::error!("denoising '{}' failed: {e}", beauty.display());
        return;
    }
    let png = paths.denoised_png(final_spp);
    match export::write_denoised_png(&denoised, &png) {
        Ok(()) => tracing::info!(path = %png.display(), "wrote denoised image"),
        Err(e) => tracing::error!("exporting the denoised image failed: {e}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
