//! Pipeline configuration.
//!
//! Handles loading and validating `config.toml`. Configuration is sparse:
//! stock defaults cover everything, user files override only what they
//! name, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input_dir = "models"      # Content root: one subdirectory per collection
//! output_dir = "static"     # Artifact root: JSON lands under {output_dir}/{input_dir}/
//!
//! # List views: one sorted (optionally paginated) projection per entry.
//! # Omitting [[lists]] entirely gives a single unlimited view named "list",
//! # ascending by date.
//! [[lists]]
//! name = "list"
//! sort_by = "date"          # "date" | "id"
//! order = "asc"             # "asc" | "desc"
//! # limit = 10              # Page size; omit for a single unpaginated file
//! ```
//!
//! ## List View Naming
//!
//! A view without `limit` writes `{name}.json`; a view with `limit` writes
//! `{name}-0.json`, `{name}-1.json`, ...: one file per page, even when the
//! collection fits in a single page.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pipeline configuration loaded from `config.toml`.
///
/// All fields have defaults; user files need only specify overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Content root, relative to the project directory. Each immediate
    /// subdirectory is a collection.
    pub input_dir: String,
    /// Artifact root. Output lands under `{output_dir}/{input_dir}/`.
    pub output_dir: String,
    /// List views computed per collection.
    pub lists: Vec<ListSpec>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: "models".to_string(),
            output_dir: "static".to_string(),
            lists: vec![ListSpec::default()],
        }
    }
}

/// One named, sorted, optionally paginated projection of a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListSpec {
    pub name: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub order: Order,
    /// Max documents per output batch. `None` = one unpaginated batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for ListSpec {
    fn default() -> Self {
        Self {
            name: "list".to_string(),
            sort_by: SortBy::Date,
            order: Order::Asc,
            limit: None,
        }
    }
}

/// Sort key for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Parsed `date` field; unparseable dates sort as epoch 0.
    #[default]
    Date,
    /// Lexicographic `id`.
    Id,
}

/// Sort direction for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl PipelineConfig {
    /// Validate config values.
    ///
    /// Checks directory names are non-empty, list names are non-empty and
    /// unique (duplicate names would silently overwrite each other's
    /// artifacts), and page sizes are at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_dir.is_empty() {
            return Err(ConfigError::Validation("input_dir must not be empty".to_string()));
        }
        if self.output_dir.is_empty() {
            return Err(ConfigError::Validation("output_dir must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for list in &self.lists {
            if list.name.is_empty() {
                return Err(ConfigError::Validation("list name must not be empty".to_string()));
            }
            if !seen.insert(list.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate list name: {}",
                    list.name
                )));
            }
            if let Some(limit) = list.limit
                && limit == 0
            {
                return Err(ConfigError::Validation(format!(
                    "list '{}': limit must be at least 1",
                    list.name
                )));
            }
        }

        Ok(())
    }
}

/// Load config from `{root}/config.toml`, falling back to defaults when the
/// file doesn't exist. The result is always validated.
pub fn load_config(root: &Path) -> Result<PipelineConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        PipelineConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file path. The file must exist.
pub fn load_config_file(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: PipelineConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# mdmodels configuration
# All options are optional - the values below are the defaults.

# Content root. Each immediate subdirectory is a collection of markdown
# documents (front-matter + body); an images/ subdirectory inside a
# collection is copied to the output tree as-is.
input_dir = "models"

# Artifact root. JSON lands under {output_dir}/{input_dir}/{collection}/.
output_dir = "static"

# List views: sorted (optionally paginated) projections written per
# collection. A view without `limit` writes {name}.json; with `limit` it
# writes {name}-0.json, {name}-1.json, ...
[[lists]]
name = "list"
sort_by = "date"   # "date" | "id"
order = "asc"      # "asc" | "desc"
# limit = 10
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_toml() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.input_dir, "models");
        assert_eq!(config.output_dir, "static");
        assert_eq!(config.lists.len(), 1);
        assert_eq!(config.lists[0].name, "list");
        assert_eq!(config.lists[0].sort_by, SortBy::Date);
        assert_eq!(config.lists[0].order, Order::Asc);
        assert_eq!(config.lists[0].limit, None);
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "input_dir = \"content\"\n").unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.input_dir, "content");
        assert_eq!(config.output_dir, "static");
        assert_eq!(config.lists.len(), 1);
    }

    #[test]
    fn list_views_parsed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            r#"
[[lists]]
name = "recent"
sort_by = "date"
order = "desc"
limit = 5

[[lists]]
name = "alphabetical"
sort_by = "id"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.lists.len(), 2);
        assert_eq!(config.lists[0].name, "recent");
        assert_eq!(config.lists[0].order, Order::Desc);
        assert_eq!(config.lists[0].limit, Some(5));
        assert_eq!(config.lists[1].sort_by, SortBy::Id);
        assert_eq!(config.lists[1].order, Order::Asc);
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "input_dri = \"models\"\n").unwrap();

        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn zero_limit_rejected() {
        let config = PipelineConfig {
            lists: vec![ListSpec {
                limit: Some(0),
                ..ListSpec::default()
            }],
            ..PipelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn duplicate_list_names_rejected() {
        let config = PipelineConfig {
            lists: vec![ListSpec::default(), ListSpec::default()],
            ..PipelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let parsed: PipelineConfig = toml::from_str(stock_config_toml()).unwrap();
        parsed.validate().unwrap();
        assert_eq!(parsed.input_dir, "models");
        assert_eq!(parsed.lists[0].name, "list");
    }
}
