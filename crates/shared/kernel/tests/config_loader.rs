use std::fs;
use tempfile::tempdir;
use whub_kernel::config::{ConfigError, ConfigLoader};
use whub_kernel::domain::config::{ApiConfig, ExclusivityMode};

const NO_ENV: [(&str, &str); 0] = [];

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 9000\n\n[catalog]\nexclusivity = \"mutual\"\n")?;

    let cfg: ApiConfig = ConfigLoader::new().file(&path).env_source(NO_ENV).load()?;
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Mutual);
    assert!(cfg.catalog.audit_registry);
    Ok(())
}

#[test]
fn file_extension_is_probed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("local.toml"), "[server]\nport = 9100\n")?;

    let cfg: ApiConfig =
        ConfigLoader::new().file(dir.path().join("local")).env_source(NO_ENV).load()?;
    assert_eq!(cfg.server.port, 9100);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 9000\n")?;

    let cfg: ApiConfig = ConfigLoader::new()
        .file(&path)
        .env_source([("WHUB__SERVER__PORT", "8088"), ("WHUB__CATALOG__EXCLUSIVITY", "mutual")])
        .load()?;

    assert_eq!(cfg.server.port, 8088);
    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Mutual);
    Ok(())
}

#[test]
fn missing_required_file_fails() {
    let dir = tempdir().expect("tempdir");
    let result: Result<ApiConfig, ConfigError> =
        ConfigLoader::new().file(dir.path().join("absent.toml")).env_source(NO_ENV).load();

    let err = result.expect_err("required file is missing");
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn optional_missing_file_yields_defaults() -> Result<(), ConfigError> {
    let dir = tempdir().expect("tempdir");
    let cfg: ApiConfig = ConfigLoader::new()
        .file(dir.path().join("absent"))
        .required(false)
        .env_source(NO_ENV)
        .load()?;

    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Standalone);
    Ok(())
}

#[test]
fn malformed_values_fail_deserialization() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "[catalog]\nexclusivity = \"sometimes\"\n").expect("write config");

    let err = ConfigLoader::new()
        .file(&path)
        .env_source(NO_ENV)
        .load::<ApiConfig>()
        .expect_err("unknown mode");
    assert!(err.to_string().contains("Failed to deserialize config"));
}

#[test]
fn environment_exclusivity_is_case_insensitive() -> Result<(), ConfigError> {
    let cfg: ApiConfig = ConfigLoader::new()
        .required(false)
        .env_source([("WHUB__CATALOG__EXCLUSIVITY", "Mutual")])
        .load()?;

    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Mutual);
    Ok(())
}

#[test]
fn file_exclusivity_accepts_the_cli_spellings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[catalog]\nexclusivity = \" MUTUAL \"\n")?;

    let cfg: ApiConfig = ConfigLoader::new().file(&path).env_source(NO_ENV).load()?;
    assert_eq!(cfg.catalog.exclusivity, ExclusivityMode::Mutual);
    Ok(())
}
