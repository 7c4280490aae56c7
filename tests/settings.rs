use week_lanes::{LayoutMetrics, Settings, SettingsError};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let (settings, problem) = Settings::load_or_init(&path);
    assert!(problem.is_none());
    assert_eq!(settings, Settings::default());
    assert!(path.exists());
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "day_width": 96.0, "week_start": "2026-03-02" }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.day_width, 96.0);
    assert_eq!(settings.history_limit, 100);
    assert_eq!(
        settings.initial_week_start().to_string(),
        "2026-03-02"
    );
    assert_eq!(settings.metrics().day_width, 96.0);
    assert_eq!(settings.metrics().row_height, LayoutMetrics::default().row_height);
}

#[test]
fn nonsensical_sizes_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "day_width": -5.0, "row_gap": 0.0, "row_height": 0.0 }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.day_width, 120.0);
    assert_eq!(settings.row_height, 44.0);
    assert_eq!(settings.row_gap, 0.0);
}

#[test]
fn sub_point_day_width_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "day_width": 1e-5, "row_offset": 0.0 }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.day_width, 120.0);
    assert_eq!(settings.row_offset, 0.0);

    std::fs::write(&path, r#"{ "day_width": 1.0 }"#).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap().day_width, 1.0);
}

#[test]
fn malformed_file_reports_problem_and_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
    let (settings, problem) = Settings::load_or_init(&path);
    assert_eq!(settings, Settings::default());
    assert!(matches!(problem, Some(SettingsError::Json(_))));
}

#[test]
fn default_week_is_the_sample_week() {
    assert_eq!(Settings::default().initial_week_start().to_string(), "2026-02-02");
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut settings = Settings::default();
    settings.history_limit = 0;
    settings.log_level = "debug".to_string();
    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}
