use lyf_exporter::config::{Config, ConfigError};
use serial_test::serial;
use std::time::Duration;

// =============================================================================
// INTEGRATION TESTS - ENVIRONMENT CONFIGURATION
// =============================================================================

fn set_env(uuid: &str, port: &str, delay: &str) {
    std::env::set_var("LYF_KITTY_UUID", uuid);
    std::env::set_var("LYF_PORT", port);
    std::env::set_var("LYF_DELAY", delay);
}

#[serial]
#[test]
fn test_ok_config() {
    set_env("6666", "1234", "66s");

    let config = Config::from_env().unwrap();

    assert_eq!(
        config,
        Config {
            url: "https://api.lyf.eu/public/api/kitties/6666".to_string(),
            delay: Duration::from_secs(66),
            port: 1234,
        }
    );
}

#[serial]
#[test]
fn test_err_non_numeric_port() {
    set_env("6666", "azerty", "66s");

    let err = Config::from_env().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPort { .. }));
    assert!(err.to_string().contains("LYF_PORT"));
    assert!(err.to_string().contains("azerty"));
}

#[serial]
#[test]
fn test_err_no_time_extension() {
    set_env("6666", "1234", "66");

    let err = Config::from_env().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidDelay { ref value, .. } if value == "66"));
    assert!(err.to_string().contains("LYF_DELAY"));
}

#[serial]
#[test]
fn test_defaults_when_unset() {
    std::env::set_var("LYF_KITTY_UUID", "abc");
    std::env::remove_var("LYF_PORT");
    std::env::remove_var("LYF_DELAY");

    let config = Config::from_env().unwrap();

    assert_eq!(config.url, "https://api.lyf.eu/public/api/kitties/abc");
    assert_eq!(config.delay, Duration::from_secs(60));
    assert_eq!(config.port, 8080);
}

#[serial]
#[test]
fn test_missing_identifier_is_accepted() {
    std::env::remove_var("LYF_KITTY_UUID");
    std::env::remove_var("LYF_PORT");
    std::env::remove_var("LYF_DELAY");

    let config = Config::from_env().unwrap();

    assert_eq!(config.url, "https://api.lyf.eu/public/api/kitties/");
}

#[serial]
#[test]
fn test_compound_delay() {
    set_env("6666", "9100", "1m30s");

    let config = Config::from_env().unwrap();

    assert_eq!(config.delay, Duration::from_secs(90));
    assert_eq!(config.port, 9100);
}
