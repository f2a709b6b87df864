// Config loading and validation tests

use chartmetrics::config::AppConfig;
use chartmetrics::query::MetricsRange;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[limits]
max_body_bytes = 1048576

[query]
default_range = "1D"
default_percentile = 0.9
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 9000
host = "127.0.0.1"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.limits.max_body_bytes, 1_048_576);
    assert_eq!(config.query.default_range, MetricsRange::OneDay);
    assert_eq!(config.query.default_percentile, 0.9);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("minimal");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.limits.max_body_bytes, 8 * 1024 * 1024);
    assert_eq!(config.query.default_range, MetricsRange::SixHours);
    assert_eq!(config.query.default_percentile, 0.99);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_zero_body_limit() {
    let bad = VALID_CONFIG.replace("max_body_bytes = 1048576", "max_body_bytes = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_body_bytes"));
}

#[test]
fn test_config_validation_rejects_percentile_out_of_range() {
    for value in ["0.0", "1.5", "-0.1"] {
        let bad = VALID_CONFIG.replace(
            "default_percentile = 0.9",
            &format!("default_percentile = {value}"),
        );
        let err = AppConfig::load_from_str(&bad).unwrap_err();
        assert!(err.to_string().contains("default_percentile"), "{value}");
    }
}

#[test]
fn test_config_rejects_unknown_range() {
    let bad = VALID_CONFIG.replace("default_range = \"1D\"", "default_range = \"2W\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    let config = AppConfig::load_from_path(&path).expect("load from path");
    assert_eq!(config.server.port, 8081);
}

#[test]
fn test_config_load_from_missing_path_names_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    let err = AppConfig::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.query.default_range, MetricsRange::OneDay);
}
