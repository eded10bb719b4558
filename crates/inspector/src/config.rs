use std::path::PathBuf;

use model_metadata::config::DEFAULT_CONFIG;
use model_metadata::ResolverConfig;

/// File name looked up next to the executable
const CONFIG_FILE_NAME: &str = "inspector.toml";

/// Environment variable overriding the config file location
const CONFIG_ENV_VAR: &str = "INSPECTOR_CONFIG";

/// Load resolver configuration
///
/// Search order:
/// 1. The path in `INSPECTOR_CONFIG`, if set
/// 2. `inspector.toml` next to the executable
/// 3. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<ResolverConfig> {
    if let Some(config_path) = config_path() {
        tracing::info!("Loading config from: {}", config_path.display());
        let contents = std::fs::read_to_string(&config_path)?;
        return ResolverConfig::from_toml_str(&contents);
    }

    tracing::info!("Using default embedded configuration");
    ResolverConfig::from_toml_str(DEFAULT_CONFIG)
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("{} not found at: {}", CONFIG_FILE_NAME, config_path.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_metadata::{AnnotationMultiplicity, CompanionLinkPolicy};
    use tempfile::TempDir;

    // Single test so that nothing else races on the environment variable
    #[test]
    fn test_load_config_from_env_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &config_path,
            "[resolver]\ncompanion_links = \"reject\"\n",
        )
        .unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &config_path);
        let loaded = load_config();

        std::env::set_var(CONFIG_ENV_VAR, dir.path().join("missing.toml"));
        let missing = load_config();

        std::env::remove_var(CONFIG_ENV_VAR);

        let config = loaded.unwrap();
        assert_eq!(config.companion_links, CompanionLinkPolicy::Reject);
        assert_eq!(config.annotation_multiplicity, AnnotationMultiplicity::Single);
        assert!(missing.is_err());
    }
}
