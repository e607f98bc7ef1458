use lng_cooldown_toolbox::config::{self, Config, UnitSystem};
use lng_cooldown_toolbox::cooldown::{ContingencyTarget, LatentHeatModel, PhaseLayout};
use lng_cooldown_toolbox::units::VolumeUnit;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("load default");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.model.latent_heat, LatentHeatModel::Latent);
    assert_eq!(cfg.model.advisory.cooling_rate_ceiling_c_per_h, 12.5);
}

#[test]
fn saved_settings_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.set_unit_system(UnitSystem::Imperial);
    cfg.model.phase_layout = PhaseLayout::LinLng;
    cfg.model.contingency_target = ContingencyTarget::Lng;
    cfg.language = Some("ko".into());
    cfg.save(&path).unwrap();

    let reloaded = config::load_or_default(&path).unwrap();
    assert_eq!(reloaded, cfg);
    assert_eq!(reloaded.display_units.volume, VolumeUnit::UsGallon);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[model]\nphase_layout = \"LinLng\"\n\n[model.advisory]\ntarget_duration_h = 20.0\n",
    )
    .unwrap();
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg.model.phase_layout, PhaseLayout::LinLng);
    assert_eq!(cfg.model.advisory.target_duration_h, 20.0);
    assert_eq!(cfg.model.advisory.cooling_rate_ceiling_c_per_h, 12.5);
    assert_eq!(cfg.unit_system, UnitSystem::SI);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = 42\n").unwrap();
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
