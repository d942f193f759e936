use super::{apply_env, apply_file, load_settings, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_fakerapi() {
    let settings = Settings::default();
    assert_eq!(settings.persons_api_url, "https://fakerapi.it/api/v1/persons");
    assert_eq!(settings.batch_size, 15);
    assert_eq!(settings.request_timeout(), Duration::from_secs(10));
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
persons_api_url = "http://localhost:9000/persons"
batch_size = 40
"#,
    )
    .expect("apply file");

    assert_eq!(settings.persons_api_url, "http://localhost:9000/persons");
    assert_eq!(settings.batch_size, 40);
    assert_eq!(settings.avatar_base_url, Settings::default().avatar_base_url);
}

#[test]
fn malformed_file_is_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "batch_size = \"many\"").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        lookup_from(&[
            ("PERSONS_API_URL", "http://plain"),
            ("APP__PERSONS_API_URL", "http://prefixed"),
            ("APP__REQUEST_TIMEOUT_SECS", "3"),
        ]),
    );
    assert_eq!(settings.persons_api_url, "http://prefixed");
    assert_eq!(settings.request_timeout_secs, 3);
}

#[test]
fn invalid_numeric_env_is_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        lookup_from(&[("APP__BATCH_SIZE", "lots"), ("APP__REQUEST_TIMEOUT_SECS", "-1")]),
    );
    assert_eq!(settings.batch_size, 15);
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn load_settings_reads_file_from_disk() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("hr_dashboard_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("dashboard.toml");
    fs::write(&path, "avatar_base_url = \"http://avatars.local/svg\"\n").expect("write");

    let settings = load_settings(&path).expect("load");
    assert_eq!(settings.avatar_base_url, "http://avatars.local/svg");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = env::temp_dir().join("hr_dashboard_config_test_missing/dashboard.toml");
    let settings = load_settings(&path).expect("load");
    assert!(settings.batch_size > 0);
}
