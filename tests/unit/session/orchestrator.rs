use super::*;

fn cfg_with_denoiser() -> DenoiseConfig {
    DenoiseConfig {
        denoiser: Some("oidn".into()),
        ..Default::default()
    }
}

fn started(state: &mut SessionState, scene_target: Spp, cfg: &DenoiseConfig) {
    let actions = state.step(
        RenderEvent::ModeChanged(RenderMode::Rendering),
        scene_target,
        cfg,
    );
    assert!(actions.is_empty());
}

fn report(state: &mut SessionState, spp: u32, cfg: &DenoiseConfig) -> Vec<Action> {
    // The beauty target was snapshotted at session start; the value passed
    // here must be ignored outside of session starts.
    state.step(RenderEvent::SampleCountUpdated(Spp(spp)), Spp(9999), cfg)
}

#[test]
fn full_chain_normal_albedo_beauty_denoise() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    started(&mut state, Spp(200), &cfg);

    // First report of the session only switches to the first pass.
    assert_eq!(
        report(&mut state, 1, &cfg),
        vec![Action::BeginPass {
            pass: PassKind::Normal,
            target: Spp(16)
        }]
    );

    // Below target: accumulation continues.
    assert!(report(&mut state, 8, &cfg).is_empty());

    assert_eq!(
        report(&mut state, 16, &cfg),
        vec![
            Action::ExportPass(PassKind::Normal),
            Action::BeginPass {
                pass: PassKind::Albedo,
                target: Spp(16)
            },
        ]
    );

    assert_eq!(
        report(&mut state, 16, &cfg),
        vec![
            Action::ExportPass(PassKind::Albedo),
            Action::BeginPass {
                pass: PassKind::Beauty,
                target: Spp(200)
            },
        ]
    );

    assert!(report(&mut state, 199, &cfg).is_empty());
    assert_eq!(
        report(&mut state, 200, &cfg),
        vec![
            Action::ExportPass(PassKind::Beauty),
            Action::Denoise {
                final_spp: Spp(200)
            },
        ]
    );
}

#[test]
fn completion_tolerates_batch_overshoot() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    started(&mut state, Spp(200), &cfg);

    report(&mut state, 1, &cfg);
    // Batches can jump past the target; 20 >= 16 completes the pass.
    let actions = report(&mut state, 20, &cfg);
    assert_eq!(actions[0], Action::ExportPass(PassKind::Normal));

    report(&mut state, 16, &cfg);
    // The final raster is stamped with the reported count, not the target.
    let actions = report(&mut state, 250, &cfg);
    assert_eq!(
        actions,
        vec![
            Action::ExportPass(PassKind::Beauty),
            Action::Denoise {
                final_spp: Spp(250)
            },
        ]
    );
}

#[test]
fn beauty_completion_is_terminal() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    started(&mut state, Spp(100), &cfg);

    report(&mut state, 1, &cfg);
    report(&mut state, 16, &cfg);
    report(&mut state, 16, &cfg);
    assert_eq!(report(&mut state, 100, &cfg).len(), 2);

    // Further reports past the threshold do not denoise again.
    assert!(report(&mut state, 150, &cfg).is_empty());
    assert!(report(&mut state, 200, &cfg).is_empty());
}

#[test]
fn disabled_normal_starts_with_albedo() {
    let cfg = DenoiseConfig {
        enable_normal: false,
        ..cfg_with_denoiser()
    };
    let mut state = SessionState::new();
    started(&mut state, Spp(100), &cfg);

    assert_eq!(
        report(&mut state, 1, &cfg),
        vec![Action::BeginPass {
            pass: PassKind::Albedo,
            target: Spp(16)
        }]
    );
    let actions = report(&mut state, 16, &cfg);
    assert_eq!(actions[0], Action::ExportPass(PassKind::Albedo));
    assert_eq!(
        actions[1],
        Action::BeginPass {
            pass: PassKind::Beauty,
            target: Spp(100)
        }
    );
}

#[test]
fn disabled_auxiliary_passes_go_straight_to_beauty() {
    let cfg = DenoiseConfig {
        enable_normal: false,
        enable_albedo: false,
        ..cfg_with_denoiser()
    };
    let mut state = SessionState::new();
    started(&mut state, Spp(42), &cfg);

    assert_eq!(
        report(&mut state, 1, &cfg),
        vec![Action::BeginPass {
            pass: PassKind::Beauty,
            target: Spp(42)
        }]
    );
    let actions = report(&mut state, 42, &cfg);
    assert_eq!(actions[0], Action::ExportPass(PassKind::Beauty));
}

#[test]
fn normal_chains_to_beauty_when_albedo_disabled() {
    let cfg = DenoiseConfig {
        enable_albedo: false,
        ..cfg_with_denoiser()
    };
    let mut state = SessionState::new();
    started(&mut state, Spp(64), &cfg);

    report(&mut state, 1, &cfg);
    assert_eq!(
        report(&mut state, 16, &cfg),
        vec![
            Action::ExportPass(PassKind::Normal),
            Action::BeginPass {
                pass: PassKind::Beauty,
                target: Spp(64)
            },
        ]
    );
}

#[test]
fn reports_in_preview_are_ignored() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    assert!(report(&mut state, 16, &cfg).is_empty());
    assert!(report(&mut state, 1000, &cfg).is_empty());
    assert_eq!(state.mode(), RenderMode::Preview);
}

#[test]
fn pause_and_resume_keep_the_session() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    started(&mut state, Spp(200), &cfg);

    report(&mut state, 1, &cfg);
    report(&mut state, 16, &cfg);
    report(&mut state, 16, &cfg); // now in Beauty @ 200

    assert!(
        state
            .step(
                RenderEvent::ModeChanged(RenderMode::Paused),
                Spp(9999),
                &cfg
            )
            .is_empty()
    );
    // Rendering entered from Paused: no new session, no re-snapshot.
    assert!(
        state
            .step(
                RenderEvent::ModeChanged(RenderMode::Rendering),
                Spp(9999),
                &cfg
            )
            .is_empty()
    );

    // The beauty pass is still running with the original target.
    assert!(report(&mut state, 199, &cfg).is_empty());
    let actions = report(&mut state, 200, &cfg);
    assert_eq!(actions[0], Action::ExportPass(PassKind::Beauty));
}

#[test]
fn entering_rendering_anew_restarts_the_chain() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    started(&mut state, Spp(100), &cfg);

    report(&mut state, 1, &cfg);
    report(&mut state, 16, &cfg);
    report(&mut state, 16, &cfg);
    report(&mut state, 100, &cfg); // terminal

    // A fresh Rendering transition (not out of a pause) starts over, with a
    // newly snapshotted beauty target.
    started(&mut state, Spp(500), &cfg);
    assert_eq!(
        report(&mut state, 1, &cfg),
        vec![Action::BeginPass {
            pass: PassKind::Normal,
            target: Spp(16)
        }]
    );
    report(&mut state, 16, &cfg);
    assert_eq!(
        report(&mut state, 16, &cfg)[1],
        Action::BeginPass {
            pass: PassKind::Beauty,
            target: Spp(500)
        }
    );
}

#[test]
fn no_denoise_action_without_a_configured_denoiser() {
    let cfg = DenoiseConfig::default();
    let mut state = SessionState::new();
    started(&mut state, Spp(50), &cfg);

    report(&mut state, 1, &cfg);
    report(&mut state, 16, &cfg);
    report(&mut state, 16, &cfg);
    assert_eq!(
        report(&mut state, 50, &cfg),
        vec![Action::ExportPass(PassKind::Beauty)]
    );
}

#[test]
fn leaving_rendering_stops_reactions_until_a_new_session() {
    let cfg = cfg_with_denoiser();
    let mut state = SessionState::new();
    started(&mut state, Spp(100), &cfg);
    report(&mut state, 1, &cfg);

    assert!(
        state
            .step(
                RenderEvent::ModeChanged(RenderMode::Preview),
                Spp(9999),
                &cfg
            )
            .is_empty()
    );
    // Preview swallows progress reports entirely.
    assert!(report(&mut state, 16, &cfg).is_empty());
}
