use crate::{Config, LogLevel};
use crate::tests::{EnvGuard, setup_config_dir};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, err, eq};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_malformed_toml_when_loaded_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[identity\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_timeout_env_when_loaded_then_value_ignored() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("TL_HTTP_TIMEOUT_SECS", "not-a-number");

    // When
    let config = Config::load().unwrap();

    // Then - default survives a junk override
    assert_that!(config.http.timeout_secs, eq(30));
}

#[test]
#[serial]
fn given_invalid_log_level_when_loaded_then_defaults_to_info() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("TL_LOG_LEVEL", "loud");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_level_in_config_file_when_loaded_then_parsed() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
fn given_level_strings_when_parsed_then_matching_filters() {
    assert_that!(*LogLevel::from_str("off").unwrap(), eq(LevelFilter::Off));
    assert_that!(*LogLevel::from_str("error").unwrap(), eq(LevelFilter::Error));
    assert_that!(*LogLevel::from_str("TRACE").unwrap(), eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_colored_env_values_when_loaded_then_parsed() {
    // Given
    let _temp = setup_config_dir();
    let _colored = EnvGuard::set("TL_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.colored, eq(false));
}
