//! Tests for configuration system

use mealplanner::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealplanner.toml");
    std::fs::write(
        &path,
        r#"
[household]
id = "dupont"

[store]
path = "/var/lib/mealplanner/dupont.json"

[planning]
timezone = "America/Montreal"
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.household.id, "dupont");
    assert_eq!(config.store.path, "/var/lib/mealplanner/dupont.json");
    assert_eq!(config.planning.timezone, "America/Montreal");
    assert_eq!(config.planning.cache_capacity, 3);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.display().to_string()))?;

    assert_eq!(config.household.id, "default");
    assert_eq!(config.store.path, "mealplanner.json");
    assert_eq!(config.planning.timezone, "UTC");

    Ok(())
}
