use anyhow::{Context, Result};
use once_cell::unsync::OnceCell;
use pokedex_core::DataPaths;
use pokedex_runtime::{Config, Pokedex, SourceKind};
use std::path::PathBuf;

/// Command-line settings that win over config.toml
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source: Option<SourceKind>,
    pub offline: bool,
    pub language: Option<String>,
    pub version: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(source) = self.source {
            config.source = source;
        }
        if self.offline {
            config.offline = true;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(version) = &self.version {
            config.version = version.clone();
        }
        config
    }
}

/// State shared by the handlers of one invocation. The config file is read
/// and the data sources opened on first use only.
pub struct ExecutionContext {
    paths: DataPaths,
    overrides: ConfigOverrides,
    config: OnceCell<Config>,
    pokedex: OnceCell<Pokedex>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, overrides: ConfigOverrides) -> Self {
        Self {
            paths: DataPaths::new(data_dir),
            overrides,
            config: OnceCell::new(),
            pokedex: OnceCell::new(),
        }
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.paths.config_file();
            let config = Config::load_from(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            Ok(self.overrides.apply(config))
        })
    }

    pub fn pokedex(&self) -> Result<&Pokedex> {
        self.pokedex.get_or_try_init(|| {
            let config = self.config()?.clone();
            Pokedex::open(self.paths.clone(), config).with_context(|| {
                format!("failed to open data directory {}", self.paths.root().display())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let file = Config {
            language: "fr".to_string(),
            version: "sword".to_string(),
            ..Config::default()
        };
        file.save_to(&dir.path().join("config.toml")).unwrap();

        let overrides = ConfigOverrides {
            source: Some(SourceKind::Database),
            offline: true,
            language: None,
            version: Some("x".to_string()),
        };
        let ctx = ExecutionContext::new(dir.path().to_path_buf(), overrides);
        let config = ctx.config().unwrap();

        assert_eq!(config.language, "fr");
        assert_eq!(config.version, "x");
        assert_eq!(config.source, SourceKind::Database);
        assert!(config.offline);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let fresh = dir.path().join("fresh");
        let ctx = ExecutionContext::new(fresh.clone(), ConfigOverrides::default());

        assert_eq!(ctx.config().unwrap(), &Config::default());
        assert!(!fresh.exists());
    }
}
