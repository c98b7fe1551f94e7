//! Tests for configuration serialization and persistence

use tokenview::config::{ApiConfig, Config, ConfigLoader};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://localhost:4000/api/v1");
    assert_eq!(config.api.timeout_secs, 30);
    assert!(!config.api.accept_invalid_certs);
}

#[test]
fn test_config_serialization() {
    let config = Config {
        api: ApiConfig {
            base_url: "https://ss1.example.org:4000/api/v1".to_string(),
            timeout_secs: 10,
            accept_invalid_certs: true,
        },
    };

    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("baseUrl"));
    assert!(yaml.contains("ss1.example.org"));
    assert!(yaml.contains("acceptInvalidCerts: true"));
}

#[test]
fn test_config_deserialization_with_partial_file() {
    let yaml = r#"
api:
  baseUrl: https://ss1.example.org:4000/api/v1
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.api.base_url, "https://ss1.example.org:4000/api/v1");
    assert_eq!(config.api.timeout_secs, 30);
    assert!(!config.api.accept_invalid_certs);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let config = Config {
        api: ApiConfig {
            base_url: "https://ss2.example.org:4000/api/v1".to_string(),
            timeout_secs: 15,
            accept_invalid_certs: false,
        },
    };

    ConfigLoader::save(&config, &path).unwrap();
    let loaded = ConfigLoader::load_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_file_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.yaml");

    assert!(ConfigLoader::load_file(&path).is_err());
}
