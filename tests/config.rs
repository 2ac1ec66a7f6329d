use std::path::{Path, PathBuf};

use appicon::config::{config_dir, Config};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("appicon.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.logo, PathBuf::from("logo.png"));
    assert_eq!(
        config.dest,
        PathBuf::from("macos/Runner/Assets.xcassets/AppIcon.appiconset")
    );
    assert!(!config.bleed);
}

#[test]
fn parse_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.toml");
    std::fs::write(
        &path,
        r#"
logo = "assets/brand.png"
dest = "out/AppIcon.appiconset"
bleed = true
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.logo, PathBuf::from("assets/brand.png"));
    assert_eq!(config.dest, PathBuf::from("out/AppIcon.appiconset"));
    assert!(config.bleed);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.toml");
    std::fs::write(&path, "bleed = true\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.logo, PathBuf::from("logo.png"));
    assert!(config.bleed);
}

#[test]
fn geometry_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.toml");
    std::fs::write(&path, "padding = 0.1\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("padding"), "error: {err:#}");
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.toml");
    std::fs::write(&path, "logo = [").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"), "error: {err}");
}

#[test]
fn default_template_matches_defaults() {
    let template = Config::default_template();
    let parsed: Config = toml::from_str(&template).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.toml");
    let config = Config {
        logo: PathBuf::from("brand/logo.jpg"),
        dest: PathBuf::from("icons"),
        bleed: true,
    };

    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn paths_resolve_against_config_dir() {
    let config = Config::default();
    let base = Path::new("/project");

    assert_eq!(config.logo_path(base), PathBuf::from("/project/logo.png"));
    assert_eq!(
        config.dest_dir(base),
        PathBuf::from("/project/macos/Runner/Assets.xcassets/AppIcon.appiconset")
    );
}

#[test]
fn bare_config_name_uses_current_dir() {
    assert_eq!(config_dir(Path::new("appicon.toml")), Path::new("."));
    assert_eq!(
        config_dir(Path::new("project/appicon.toml")),
        Path::new("project")
    );
}
