use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.identity.base_url.as_str(), eq("http://127.0.0.1:9099"));
    assert_that!(config.store.base_url.as_str(), eq("http://127.0.0.1:8087"));
    assert_that!(config.http.timeout_secs, eq(30));
    assert_that!(config.http.connect_timeout_secs, eq(10));
    assert_that!(config.session.file.as_str(), eq("session.json"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_config_file_when_loaded_then_file_values_used() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[identity]
base_url = "https://id.example.com"
api_key = "k-123"

[store]
base_url = "https://docs.example.com"

[http]
timeout_secs = 5
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.identity.base_url.as_str(), eq("https://id.example.com"));
    assert_that!(config.identity.api_key.as_str(), eq("k-123"));
    assert_that!(config.store.base_url.as_str(), eq("https://docs.example.com"));
    assert_that!(config.http.timeout_secs, eq(5));
    // Unspecified sections keep defaults
    assert_that!(config.http.connect_timeout_secs, eq(10));
}

#[test]
#[serial]
fn given_env_overrides_when_loaded_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[store]\nbase_url = \"http://file.example.com\"\n",
    )
    .unwrap();
    let _store = EnvGuard::set("TL_STORE_BASE_URL", "http://env.example.com");
    let _timeout = EnvGuard::set("TL_HTTP_TIMEOUT_SECS", "60");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.store.base_url.as_str(), eq("http://env.example.com"));
    assert_that!(config.http.timeout_secs, eq(60));
}

#[test]
#[serial]
fn given_missing_config_dir_when_loaded_then_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("deep").join(".tl");
    let _guard = EnvGuard::set("TL_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
}

// =========================================================================
// Paths
// =========================================================================

#[test]
#[serial]
fn given_session_file_when_resolved_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("session.json")));
}

#[test]
#[serial]
fn given_no_log_file_when_resolved_then_none() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.log_path().unwrap().is_none());
}

#[test]
#[serial]
fn given_log_file_when_resolved_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("TL_LOG_FILE", "tl.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_path().unwrap();

    // Then
    assert_that!(path, eq(&Some(temp.path().join("tl.log"))));
}
