use super::*;

#[test]
fn defaults_match_plugin_settings() {
    let cfg = DenoiseConfig::default();
    assert!(cfg.enable_normal);
    assert!(cfg.enable_albedo);
    assert_eq!(cfg.normal_spp, Spp(16));
    assert_eq!(cfg.albedo_spp, Spp(16));
    assert!(cfg.positive_normals);
    assert!(cfg.normal_water_displacement);
    assert_eq!(cfg.denoiser, None);
}

#[test]
fn empty_json_deserializes_to_defaults() {
    let cfg: DenoiseConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, DenoiseConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg: DenoiseConfig =
        serde_json::from_str(r#"{"enable_normal": false, "albedo_spp": 4, "denoiser": "/usr/bin/oidnDenoise"}"#)
            .unwrap();
    assert!(!cfg.enable_normal);
    assert!(cfg.enable_albedo);
    assert_eq!(cfg.albedo_spp, Spp(4));
    assert_eq!(cfg.normal_spp, Spp(16));
    assert_eq!(cfg.denoiser, Some(PathBuf::from("/usr/bin/oidnDenoise")));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = DenoiseConfig {
        enable_normal: false,
        normal_spp: Spp(8),
        denoiser: Some(PathBuf::from("oidn")),
        ..Default::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: DenoiseConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}
