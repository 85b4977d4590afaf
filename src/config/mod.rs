use crate::errors::{AppError, AppResult};
use crate::models::Category;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;
pub mod defaults;

/// One entry of the ordered domain table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRule {
    pub domain: String,
    pub category: Category,
}

/// One keyword regex, tried in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_domain_table")]
    pub domain_table: Vec<DomainRule>,
    #[serde(default = "default_keyword_rules")]
    pub keyword_rules: Vec<KeywordRule>,
    #[serde(default = "default_search_engines")]
    pub search_engines: Vec<String>,
    #[serde(default = "default_boilerplate_prefixes")]
    pub boilerplate_prefixes: Vec<String>,
    #[serde(default = "default_media_labels")]
    pub media_labels: Vec<String>,
    #[serde(default = "default_shop_labels")]
    pub shop_labels: Vec<String>,
    #[serde(default = "default_window_minutes")]
    pub window_minutes: i64,
    /// User label for input files that carry no `user` column.
    #[serde(default)]
    pub default_user: Option<String>,
    /// Extra chrono formats tried when parsing `visit_time`.
    #[serde(default)]
    pub timestamp_formats: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_domain_table() -> Vec<DomainRule> {
    defaults::DOMAIN_TABLE
        .iter()
        .map(|(domain, category)| DomainRule {
            domain: domain.to_string(),
            category: *category,
        })
        .collect()
}

fn default_keyword_rules() -> Vec<KeywordRule> {
    defaults::KEYWORD_RULES
        .iter()
        .map(|(category, pattern)| KeywordRule {
            category: *category,
            pattern: pattern.to_string(),
        })
        .collect()
}

fn default_search_engines() -> Vec<String> {
    to_strings(defaults::SEARCH_ENGINES)
}

fn default_boilerplate_prefixes() -> Vec<String> {
    to_strings(defaults::BOILERPLATE_PREFIXES)
}

fn default_media_labels() -> Vec<String> {
    to_strings(defaults::MEDIA_LABELS)
}

fn default_shop_labels() -> Vec<String> {
    to_strings(defaults::SHOP_LABELS)
}

fn default_window_minutes() -> i64 {
    defaults::WINDOW_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain_table: default_domain_table(),
            keyword_rules: default_keyword_rules(),
            search_engines: default_search_engines(),
            boilerplate_prefixes: default_boilerplate_prefixes(),
            media_labels: default_media_labels(),
            shop_labels: default_shop_labels(),
            window_minutes: default_window_minutes(),
            default_user: None,
            timestamp_formats: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rsessionize")
        } else {
            base.join(".rsessionize")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsessionize.conf")
    }

    /// Load the configuration from the standard location, or defaults if the
    /// file does not exist yet.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the configuration from an explicit file.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        debug!(
            "loaded config from {} ({} domain rules, {} keyword rules)",
            path.display(),
            cfg.domain_table.len(),
            cfg.keyword_rules.len()
        );
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
