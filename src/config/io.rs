use super::types::ShopConfig;
use crate::utils::get_shop_path;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Name of the config file inside the shop data folder.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolve the path of the shop config file.
#[must_use]
pub fn config_path(root: &Path) -> std::path::PathBuf {
    get_shop_path(root).join(CONFIG_FILE)
}

/// Load the shop configuration.
///
/// A missing file resolves to defaults so callers never handle the "absent
/// file" case specially. Environment overrides (`BAKESHOP_*`) are applied on
/// top of whatever the file provides, which is how deployments inject the
/// admin PIN hash without committing it.
pub async fn load_config(root: &Path) -> Result<ShopConfig, ConfigError> {
    let path = config_path(root);

    let mut config = if path.exists() {
        let content = fs::read_to_string(&path).await?;
        toml::from_str(&content)?
    } else {
        debug!("No config file at {}; using defaults", path.display());
        ShopConfig::default()
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Write the shop configuration file.
pub async fn write_config(root: &Path, config: &ShopConfig) -> Result<(), ConfigError> {
    let path = config_path(root);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content).await?;
    Ok(())
}

fn apply_env_overrides(config: &mut ShopConfig) {
    let non_empty = |v: String| if v.is_empty() { None } else { Some(v) };

    if let Some(v) = std::env::var("BAKESHOP_SITE_NAME").ok().and_then(non_empty) {
        config.site_name = v;
    }
    if let Some(v) = std::env::var("BAKESHOP_SITE_HOST").ok().and_then(non_empty) {
        config.site_host = v;
    }
    if let Some(v) = std::env::var("BAKESHOP_ADMIN_PIN_HASH")
        .ok()
        .and_then(non_empty)
    {
        config.admin_pin_hash = Some(v);
    }
    if let Some(v) = std::env::var("BAKESHOP_WHATSAPP_NUMBER")
        .ok()
        .and_then(non_empty)
    {
        config.whatsapp_number = Some(v);
    }
    if let Some(v) = std::env::var("BAKESHOP_CHECKOUT_FROM_EMAIL")
        .ok()
        .and_then(non_empty)
    {
        config.checkout_from_email = Some(v);
    }
    if let Some(v) = std::env::var("BAKESHOP_CHECKOUT_NOTIFICATION_EMAIL")
        .ok()
        .and_then(non_empty)
    {
        config.checkout_notification_email = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::get_shop_path;

    #[tokio::test]
    async fn test_load_config_missing_file_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = load_config(temp_dir.path()).await.unwrap();
        assert_eq!(config.site_name, ShopConfig::default().site_name);
    }

    #[tokio::test]
    async fn test_write_then_load_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        tokio::fs::create_dir_all(get_shop_path(temp_dir.path()))
            .await
            .unwrap();

        let config = ShopConfig {
            site_name: "Crumbs".to_string(),
            whatsapp_number: Some("+1 555 0100".to_string()),
            ..Default::default()
        };
        write_config(temp_dir.path(), &config).await.unwrap();

        let loaded = load_config(temp_dir.path()).await.unwrap();
        assert_eq!(loaded.site_name, "Crumbs");
        assert_eq!(loaded.whatsapp_digits().as_deref(), Some("15550100"));
    }

    #[tokio::test]
    async fn test_load_config_rejects_invalid_toml() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        tokio::fs::create_dir_all(get_shop_path(temp_dir.path()))
            .await
            .unwrap();
        tokio::fs::write(config_path(temp_dir.path()), "site_name = [broken")
            .await
            .unwrap();

        let result = load_config(temp_dir.path()).await;
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
