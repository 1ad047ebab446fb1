use passgauge::Settings;
use passgauge::entropy::Source;

#[test]
fn settings_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passgauge").join("settings.toml");

    let settings = Settings {
        length: 20,
        digits: false,
        source: Source::Hardware,
        ..Default::default()
    };
    settings.save_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("length = 20"));
    assert!(text.contains("source = \"hardware\""));

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.charset().size(), 26 + 26 + 21);
}

#[test]
fn defaults_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Settings::load_from(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(loaded, Settings::default());
    assert_eq!(loaded.length, 16);
    assert_eq!(loaded.bars, 4);
}
