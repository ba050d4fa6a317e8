use super::*;

#[test]
fn artifact_names_follow_scene_layout() {
    let paths = ScenePaths::new("/renders/out", "island");
    assert_eq!(paths.normal_pfm(), Path::new("/renders/out/island.normal.pfm"));
    assert_eq!(paths.albedo_pfm(), Path::new("/renders/out/island.albedo.pfm"));
    assert_eq!(paths.beauty_pfm(), Path::new("/renders/out/island.pfm"));
    assert_eq!(
        paths.denoised_pfm(),
        Path::new("/renders/out/island.denoised.pfm")
    );
    assert_eq!(
        paths.denoised_png(Spp(250)),
        Path::new("/renders/out/island-250.denoised.png")
    );
}

#[test]
fn for_pass_maps_each_pass_to_its_file() {
    let paths = ScenePaths::new("out", "s");
    assert_eq!(paths.for_pass(PassKind::Normal), paths.normal_pfm());
    assert_eq!(paths.for_pass(PassKind::Albedo), paths.albedo_pfm());
    assert_eq!(paths.for_pass(PassKind::Beauty), paths.beauty_pfm());
}
