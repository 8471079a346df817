//! Tests for layered configuration loading.

use agentos_server::{AppConfig, ConfigFile};
use std::collections::HashMap;
use std::path::Path;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn bundled_defaults_apply() -> anyhow::Result<()> {
    let config = AppConfig::load_with(Some(ConfigFile::Toml("")), &HashMap::new())?;

    assert_eq!(config.server.bind, "0.0.0.0:8000");
    assert_eq!(config.server.service_name, "directoris-agentos");
    assert_eq!(config.model.base_url, "https://openrouter.ai/api/v1");
    assert_eq!(config.model.model, "anthropic/claude-3.5-sonnet");
    assert_eq!(config.model.temperature, 0.3);
    assert_eq!(config.model.max_tokens, None);
    assert_eq!(config.model.timeout_secs, 60);
    assert_eq!(config.model.max_retries, 2);
    assert_eq!(config.host.base_url, "http://localhost:3000");
    assert_eq!(config.host.timeout_secs, 30);
    Ok(())
}

#[test]
fn missing_credentials_fail_fast() -> anyhow::Result<()> {
    let config = AppConfig::load_with(Some(ConfigFile::Toml("")), &HashMap::new())?;
    let err = config.validate().expect_err("no credentials configured");
    assert!(err.message.contains("model.api_key"));

    let config = AppConfig::load_with(
        Some(ConfigFile::Toml("")),
        &vars(&[("OPENROUTER_API_KEY", "sk-or-test")]),
    )?;
    let err = config.validate().expect_err("host secret missing");
    assert!(err.message.contains("host.api_key"));
    Ok(())
}

#[test]
fn legacy_variables_are_honored() -> anyhow::Result<()> {
    let config = AppConfig::load_with(
        Some(ConfigFile::Toml("")),
        &vars(&[
            ("OPENROUTER_API_KEY", "sk-or-test"),
            ("OPENROUTER_MODEL", "openai/gpt-4o-mini"),
            ("OPENROUTER_BASE_URL", "http://proxy.local/v1"),
            ("DIRECTORIS_API_URL", "http://web:3000"),
            ("DIRECTORIS_API_KEY", "shared-secret"),
            ("UNRELATED", "ignored"),
        ]),
    )?;

    config.validate()?;
    assert_eq!(config.model.api_key, "sk-or-test");
    assert_eq!(config.model.model, "openai/gpt-4o-mini");
    assert_eq!(config.model.base_url, "http://proxy.local/v1");
    assert_eq!(config.host.base_url, "http://web:3000");
    assert_eq!(config.host.api_key, "shared-secret");
    Ok(())
}

#[test]
fn prefixed_environment_overrides_file() -> anyhow::Result<()> {
    let file = r#"
        [model]
        model = "from/file"
        temperature = 0.1

        [host]
        timeout_secs = 10
    "#;

    let config = AppConfig::load_with(
        Some(ConfigFile::Toml(file)),
        &vars(&[
            ("AGENTOS__MODEL__MODEL", "from/env"),
            ("AGENTOS__MODEL__MAX_TOKENS", "1024"),
            ("AGENTOS__HOST__TIMEOUT_SECS", "5"),
        ]),
    )?;

    assert_eq!(config.model.model, "from/env");
    assert_eq!(config.model.temperature, 0.1);
    assert_eq!(config.model.max_tokens, Some(1024));
    assert_eq!(config.host.timeout_secs, 5);
    Ok(())
}

#[test]
fn legacy_variables_win_over_prefixed_environment() -> anyhow::Result<()> {
    let config = AppConfig::load_with(
        Some(ConfigFile::Toml("[model]\nmodel = \"from/file\"")),
        &vars(&[
            ("AGENTOS__MODEL__MODEL", "from/env"),
            ("OPENROUTER_MODEL", "from/legacy"),
            ("OPENROUTER_BASE_URL", "  "),
        ]),
    )?;

    assert_eq!(config.model.model, "from/legacy");
    assert_eq!(config.model.base_url, "https://openrouter.ai/api/v1");
    Ok(())
}

#[test]
fn zero_timeouts_and_bad_bind_are_rejected() -> anyhow::Result<()> {
    let credentials = vars(&[("OPENROUTER_API_KEY", "k"), ("DIRECTORIS_API_KEY", "s")]);

    let config = AppConfig::load_with(Some(ConfigFile::Toml("[model]\ntimeout_secs = 0")), &credentials)?;
    assert!(config.validate().is_err());

    let config = AppConfig::load_with(Some(ConfigFile::Toml("[host]\ntimeout_secs = 0")), &credentials)?;
    assert!(config.validate().is_err());

    let config = AppConfig::load_with(Some(ConfigFile::Toml("[server]\nbind = \"not an address\"")), &credentials)?;
    assert!(config.validate().is_err());

    let config = AppConfig::load_with(Some(ConfigFile::Toml("[model]\ntemperature = 3.5")), &credentials)?;
    assert!(config.validate().is_err());
    Ok(())
}

#[test]
fn explicit_file_must_exist() {
    let result = AppConfig::load_with(
        Some(ConfigFile::Path(Path::new("/definitely/not/here/agentos.toml"))),
        &HashMap::new(),
    );
    assert!(result.is_err());
}

#[test]
fn converts_into_client_settings() -> anyhow::Result<()> {
    let config = AppConfig::load_with(
        Some(ConfigFile::Toml(
            "[model]\nmax_tokens = 900\nmax_retries = 4\nretry_base_ms = 50\ntimeout_secs = 20",
        )),
        &vars(&[("OPENROUTER_API_KEY", "k"), ("DIRECTORIS_API_KEY", "s")]),
    )?;

    let model = config.model_config();
    assert_eq!(model.api_key, "k");
    assert_eq!(model.max_tokens, Some(900));
    assert_eq!(model.timeout_secs, 20);

    let host = config.host_config();
    assert_eq!(host.api_key, "s");
    assert_eq!(host.timeout_secs, 30);

    let retry = config.retry_policy();
    assert_eq!(*retry.max_retries(), 4);
    assert_eq!(*retry.base_delay_ms(), 50);
    Ok(())
}
