//! Configuration loading and validation.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cohort::config::Config;
use cohort::error::{ConfigError, Error};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("cohort-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_rejects_unparsable_base_url() {
    let toml = r#"
[api]
base_url = "not a url"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "base_url", ..
        })) => {}
        Err(err) => panic!("Expected invalid base_url error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid base_url to be rejected, got {}",
            config.api.base_url
        ),
    }
}

#[test]
fn config_rejects_empty_base_url() {
    let toml = r#"
[api]
base_url = ""
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "base_url" }))
        ),
        "Expected empty base_url to be rejected"
    );
}

#[test]
fn config_rejects_zero_timeout() {
    let toml = r#"
[api]
timeout_secs = 0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_secs",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_logging_format() {
    let toml = r#"
[logging]
level = "info"
format = "xml"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        }))
    ));
}

#[test]
fn config_accepts_a_full_file() {
    let toml = r#"
[api]
base_url = "https://crm.example.com/api/"
timeout_secs = 5

[storage]
data_dir = "/var/lib/cohort"

[logging]
level = "debug"
format = "json"
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).expect("valid config");
    let _ = fs::remove_file(&path);

    assert_eq!(config.api.base_url, "https://crm.example.com/api/");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(
        config.storage.segments_file(),
        PathBuf::from("/var/lib/cohort/segments.json")
    );
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("cohort-config-test-does-not-exist.toml");
    let config = Config::load_or_default(&path).expect("defaults");
    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.api.timeout_secs, 10);
}
