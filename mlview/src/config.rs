//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file and
//! environment variables, in increasing order of precedence.

use medialane_core::models::{PageRequest, SortKey};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// The full tool configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Defaults for derived views
    #[serde(default)]
    pub view: ViewConfig,

    /// How collections are loaded
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Defaults applied when the command line leaves a view setting out
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    /// The ordering used when `--sort` is absent
    #[serde(default)]
    pub sort: SortKey,

    /// The page size used when `--per-page` is absent
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    PageRequest::DEFAULT_PER_PAGE
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            per_page: default_per_page(),
        }
    }
}

/// Collection loading settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Simulated network latency before a collection is returned (e.g. "250ms")
    #[serde(default, with = "humantime_serde::option")]
    pub latency: Option<Duration>,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if one is given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `MEDIALANE_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// export MEDIALANE_VIEW__PER_PAGE=50
    /// export MEDIALANE_VIEW__SORT=price-high
    /// export MEDIALANE_CATALOG__LATENCY=300ms
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("MEDIALANE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.view.sort, SortKey::Recent);
        assert_eq!(config.view.per_page, PageRequest::DEFAULT_PER_PAGE);
        assert_eq!(config.catalog.latency, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = std::env::temp_dir().join(format!("mlview-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[view]\nsort = \"price-low\"\nper_page = 5\n\n[catalog]\nlatency = \"150ms\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.view.sort, SortKey::PriceLow);
        assert_eq!(config.view.per_page, 5);
        assert_eq!(config.catalog.latency, Some(Duration::from_millis(150)));
    }

    #[test]
    fn missing_files_are_an_error() {
        let path = std::env::temp_dir().join("mlview-config-that-does-not-exist.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
