// Config loading and validation tests

use jrnl_monitor::config::AppConfig;

const VALID_CONFIG: &str = r#"
[runtime]
binary = "podman"
command_timeout_secs = 5

[logs]
container = "api"
tail_lines = 20

[output]
path = "/srv/www/status.html"
json_path = "/srv/www/status.json"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.runtime.binary, "podman");
    assert_eq!(config.runtime.command_timeout_secs, 5);
    assert_eq!(config.logs.container, "api");
    assert_eq!(config.logs.tail_lines, 20);
    assert_eq!(config.output.path, "/srv/www/status.html");
    assert_eq!(config.output.json_path.as_deref(), Some("/srv/www/status.json"));
}

#[test]
fn test_config_defaults_when_empty() {
    let config = AppConfig::load_from_str("").expect("empty config is valid");
    assert_eq!(config.runtime.binary, "docker");
    assert_eq!(config.runtime.command_timeout_secs, 10);
    assert_eq!(config.logs.container, "jrnl-container");
    assert_eq!(config.logs.tail_lines, 50);
    assert_eq!(config.output.path, "dashboard.html");
    assert!(config.output.json_path.is_none());
}

#[test]
fn test_config_partial_section_keeps_other_defaults() {
    let config = AppConfig::load_from_str("[logs]\ntail_lines = 5\n").expect("valid");
    assert_eq!(config.logs.tail_lines, 5);
    assert_eq!(config.logs.container, "jrnl-container");
    assert_eq!(config.runtime.binary, "docker");
}

#[test]
fn test_config_validation_rejects_empty_binary() {
    let bad = VALID_CONFIG.replace("binary = \"podman\"", "binary = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("runtime.binary"));
}

#[test]
fn test_config_validation_rejects_timeout_zero() {
    let bad = VALID_CONFIG.replace("command_timeout_secs = 5", "command_timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("command_timeout_secs"));
}

#[test]
fn test_config_validation_rejects_empty_log_container() {
    let bad = VALID_CONFIG.replace("container = \"api\"", "container = \"  \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("logs.container"));
}

#[test]
fn test_config_validation_rejects_tail_lines_zero() {
    let bad = VALID_CONFIG.replace("tail_lines = 20", "tail_lines = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("tail_lines"));
}

#[test]
fn test_config_validation_rejects_empty_output_path() {
    let bad = VALID_CONFIG.replace("path = \"/srv/www/status.html\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("output.path"));
}

#[test]
fn test_config_validation_rejects_empty_json_path() {
    let bad = VALID_CONFIG.replace("json_path = \"/srv/www/status.json\"", "json_path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("json_path"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
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
    assert_eq!(config.runtime.binary, "podman");
    assert_eq!(config.logs.tail_lines, 20);
}
