use super::*;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.output_prefix, "_");
    assert!(settings.atomic_writes);
    assert!(!settings.reset_pregap);
    assert!(!settings.track_type_from_mode);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "reset_pregap = true\noutput_dir = \"/srv/bins\"\n").unwrap();

    let settings = load_settings(&path).unwrap();
    assert!(settings.reset_pregap);
    assert_eq!(settings.output_dir, Some(PathBuf::from("/srv/bins")));
    assert_eq!(settings.output_prefix, "_");
}

#[test]
fn invalid_file_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "reset_pregap = \"sometimes\"\n").unwrap();
    assert!(matches!(
        load_settings(&path),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn to_options_maps_every_field() {
    let settings = Settings {
        output_dir: Some(PathBuf::from("/out")),
        output_prefix: "new_".to_string(),
        reset_pregap: true,
        track_type_from_mode: true,
        atomic_writes: false,
    };
    let options = settings.to_options();
    assert_eq!(options.output_dir, Some(PathBuf::from("/out")));
    assert_eq!(options.output_prefix, "new_");
    assert!(options.parse.reset_pregap);
    assert!(options.parse.type_from_mode);
    assert_eq!(options.write_mode, WriteMode::Direct);
}

#[test]
fn track_type_key_is_read_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "track_type_from_mode = true\n").unwrap();

    let settings = load_settings(&path).unwrap();
    assert!(settings.track_type_from_mode);
    assert!(settings.to_options().parse.type_from_mode);
}

#[test]
fn settings_path_ends_with_app_dir() {
    assert!(settings_path().ends_with("isobin/settings.toml"));
}
