//! Configuration loading and validation

use resale_catalog::config::{CatalogConfig, Config, Environment};
use resale_catalog::utils::error::CatalogError;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[tokio::test]
async fn test_sample_config_parses_and_validates() {
    let config = Config::parse_file("config/catalog.yaml").await.unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.server().port, 3000);
    assert_eq!(
        config.storage().files.category_seed.as_deref(),
        Some("config/categories.yaml")
    );
    assert_eq!(config.batch().max_file_size, 1_048_576);
}

#[tokio::test]
async fn test_environment_overrides_file_values() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"server:\n  port: 8080\nbatch:\n  item_delay_ms: 50\n")
        .unwrap();
    let mut config = Config::parse_file(file.path()).await.unwrap();

    config
        .catalog
        .apply_overrides_from(lookup(&[
            ("PORT", "9090"),
            ("CORS_ORIGIN", "http://a.test, ,http://b.test"),
            ("NODE_ENV", "production"),
            ("OPENAI_API_KEY", "sk-env"),
            ("BATCH_ITEM_DELAY_MS", "0"),
        ]))
        .unwrap();

    assert_eq!(config.server().port, 9090);
    assert_eq!(
        config.server().cors.allowed_origins,
        vec!["http://a.test", "http://b.test"]
    );
    assert_eq!(config.environment(), Environment::Production);
    assert_eq!(config.vision().api_key(), Some("sk-env"));
    assert_eq!(config.batch().item_delay_ms, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_app_env_wins_over_node_env() {
    let mut config = CatalogConfig::default();
    config
        .apply_overrides_from(lookup(&[("APP_ENV", "test"), ("NODE_ENV", "production")]))
        .unwrap();
    assert_eq!(config.environment, Environment::Test);
}

#[test]
fn test_invalid_numeric_override_is_config_error() {
    let mut config = CatalogConfig::default();
    let err = config
        .apply_overrides_from(lookup(&[("PORT", "eighty")]))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn test_credentials_with_any_origin_is_rejected() {
    let mut config = Config::default();
    config.catalog.server.cors.allowed_origins = vec!["*".to_string()];
    config.catalog.server.cors.allow_credentials = true;
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_port_is_rejected() {
    let mut config = Config::default();
    config.catalog.server.port = 0;
    assert!(config.validate().is_err());
}
