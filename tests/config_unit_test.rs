//! Unit tests for the config module.
//!
//! Run with: cargo test --test config_unit_test

use demo1_api::config::{parse_port, Config, ConfigError};

#[test]
fn bind_address_joins_host_and_port() {
    let config = Config {
        api_host: "127.0.0.1".to_string(),
        api_port: 9090,
    };
    assert_eq!(config.bind_address(), "127.0.0.1:9090");
}

#[test]
fn port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), 8080);
}

#[test]
fn port_parses_when_set() {
    assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
}

#[test]
fn unparsable_port_is_rejected() {
    let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid("API_PORT", _)));

    // Out-of-range values are rejected too, not clamped
    let err = parse_port(Some("70000".to_string())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid("API_PORT", _)));
}
