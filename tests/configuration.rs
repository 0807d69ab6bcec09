use fitveg::Config;
use temp_dir::TempDir;

#[test]
fn test_config_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::from_file(&missing.to_string_lossy())?;

    assert_eq!(config.database.url, "sqlite:fitveg.db");
    assert_eq!(config.database.max_connections, 1);
    assert_eq!(config.observability.log_level, "warn");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("fitveg.toml");
    std::fs::write(
        &path,
        "[database]\nurl = \"sqlite:other.db\"\nmax_connections = 3\n\n[observability]\nlog_level = \"debug\"\n",
    )?;

    let config = Config::from_file(&path.to_string_lossy())?;

    assert_eq!(config.database.url, "sqlite:other.db");
    assert_eq!(config.database.max_connections, 3);
    assert_eq!(config.observability.log_level, "debug");

    Ok(())
}

#[test]
fn test_config_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("fitveg.toml");
    std::fs::write(&path, "[observability]\nlog_level = \"info\"\n")?;

    let config = Config::from_file(&path.to_string_lossy())?;

    assert_eq!(config.database.url, "sqlite:fitveg.db");
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}

#[test]
fn test_config_rejects_empty_database_url() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("fitveg.toml");
    std::fs::write(&path, "[database]\nurl = \"\"\nmax_connections = 1\n")?;

    let config = Config::from_file(&path.to_string_lossy())?;
    assert!(config.validate().is_err());

    Ok(())
}
