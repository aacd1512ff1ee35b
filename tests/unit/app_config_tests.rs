/*!
 * Tests for application configuration
 */

use scriptsync::app_config::{Config, LogLevel};

/// Test the default configuration values
#[test]
fn test_default_config_withNoOverrides_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.min_phrase_length, 3);
    assert_eq!(config.chars_per_second, 15.0);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test deserializing an empty JSON object into defaults
#[test]
fn test_config_deserialize_withEmptyObject_shouldFallBackToDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.min_phrase_length, 3);
    assert_eq!(config.chars_per_second, 15.0);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test deserializing explicit settings
#[test]
fn test_config_deserialize_withExplicitValues_shouldApplyThem() {
    let json = r#"{
        "min_phrase_length": 5,
        "chars_per_second": 12.5,
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.min_phrase_length, 5);
    assert_eq!(config.chars_per_second, 12.5);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test round-tripping a config through JSON
#[test]
fn test_config_serialize_withDefaults_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.min_phrase_length, config.min_phrase_length);
    assert_eq!(parsed.chars_per_second, config.chars_per_second);
    assert_eq!(parsed.log_level, config.log_level);
}

/// Test validation of a zero phrase length
#[test]
fn test_validate_withZeroPhraseLength_shouldFail() {
    let config = Config {
        min_phrase_length: 0,
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test validation of non-positive reading speeds
#[test]
fn test_validate_withBadCharsPerSecond_shouldFail() {
    let zero = Config {
        chars_per_second: 0.0,
        ..Config::default()
    };
    assert!(zero.validate().is_err());

    let negative = Config {
        chars_per_second: -3.0,
        ..Config::default()
    };
    assert!(negative.validate().is_err());

    let nan = Config {
        chars_per_second: f64::NAN,
        ..Config::default()
    };
    assert!(nan.validate().is_err());
}
