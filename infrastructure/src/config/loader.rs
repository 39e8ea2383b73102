//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["switchboard.toml", ".switchboard.toml"];
const ENV_PREFIX: &str = "SWITCHBOARD_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SWITCHBOARD_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./switchboard.toml` or `./.switchboard.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/switchboard/config.toml`
    /// 5. Default values
    ///
    /// An explicit path must exist. The merged result is validated before
    /// it is returned.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let config: FileConfig = Self::figment(config_path).extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("switchboard").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Read the API key from the environment variable the config names.
    pub fn resolve_api_key(config: &FileConfig) -> Result<String, ConfigError> {
        let var = &config.provider.api_key_env;
        std::env::var(var)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential(var.clone()))
    }

    /// Describe the config file locations being used (for `--show-config`)
    pub fn describe_sources(config_path: Option<&Path>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {ENV_PREFIX}<SECTION>__<KEY>"));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{mark}] Explicit: {}", path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{mark}] Global:  {}", path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use switchboard_application::RoutingStrategy;
    use switchboard_domain::OutputFormat;

    fn isolate(jail: &mut Jail) {
        let home = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", home.display());
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.model.max_tokens, 1024);
        assert_eq!(config.routing.strategy, RoutingStrategy::Keyword);
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("switchboard/config.toml"));
        }
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "switchboard.toml",
                r#"
                [routing]
                strategy = "llm"

                [output]
                format = "compact"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.routing.strategy, RoutingStrategy::Llm);
            assert_eq!(config.output.format, OutputFormat::Compact);
            assert_eq!(config.retry.max_attempts, 3);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_and_env_precedence() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("switchboard.toml", "[model]\nmax_tokens = 100\n")?;
            jail.create_file("custom.toml", "[model]\nmax_tokens = 200\nname = \"claude-opus-4-5\"\n")?;
            jail.set_env("SWITCHBOARD_MODEL__MAX_TOKENS", "300");

            let config =
                ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.model.max_tokens, 300);
            assert_eq!(config.model.name, "claude-opus-4-5");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("switchboard.toml", "[model]\nmax_tokens = 100\n")?;

            let err = ConfigLoader::load(Some(Path::new("custm.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::NotFound(ref path) if path.ends_with("custm.toml")));
            assert!(err.to_string().contains("custm.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("switchboard.toml", "[retry]\nmax_attempts = 0\n")?;

            let err = ConfigLoader::load(None).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });
    }

    #[test]
    fn test_resolve_api_key() {
        Jail::expect_with(|jail| {
            let mut config = FileConfig::default();
            config.provider.api_key_env = "SWITCHBOARD_TEST_KEY".to_string();

            let err = ConfigLoader::resolve_api_key(&config).unwrap_err();
            assert!(err.to_string().contains("SWITCHBOARD_TEST_KEY"));

            jail.set_env("SWITCHBOARD_TEST_KEY", " sk-ant-test ");
            assert_eq!(
                ConfigLoader::resolve_api_key(&config).map_err(|e| e.to_string())?,
                "sk-ant-test"
            );
            Ok(())
        });
    }
}
