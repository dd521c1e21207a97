//! Built-in map style table
//!
//! The table is embedded at compile time and parsed on first use.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::errors::{AnimError, AnimResult};

lazy_static! {
    static ref MAP_STYLES: MapStyles = {
        let content = include_str!("../../map_styles.toml");
        MapStyles::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in map styles: {}", e);
            MapStyles::default()
        })
    };
}

/// One map style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStyle {
    /// Short name, e.g. `streets-v12`
    pub key: String,
    /// Style URL handed to the map renderer
    pub url: String,
    /// Human readable name
    pub name: String,
}

/// Map styles indexed by short name
#[derive(Debug, Default)]
pub struct MapStyles {
    styles: BTreeMap<String, MapStyle>,
}

impl MapStyles {
    /// Parse a style table from a TOML string
    pub fn from_str(content: &str) -> AnimResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| AnimError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut styles = BTreeMap::new();
        if let Some(table) = toml_value.get("styles").and_then(|v| v.as_table()) {
            for (key, entry) in table {
                let url = entry.get("url").and_then(|v| v.as_str());
                let name = entry.get("name").and_then(|v| v.as_str()).unwrap_or(key);
                if let Some(url) = url {
                    styles.insert(key.clone(), MapStyle {
                        key: key.clone(),
                        url: url.to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(MapStyles { styles })
    }

    pub fn get(&self, key: &str) -> Option<&MapStyle> {
        self.styles.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(|k| k.as_str())
    }
}

/// Look up a built-in map style by short name
pub fn map_style(key: &str) -> AnimResult<&'static MapStyle> {
    MAP_STYLES.get(key).ok_or_else(|| {
        AnimError::ConfigError(format!(
            "Unknown map style '{}' (known: {})",
            key,
            MAP_STYLES.keys().collect::<Vec<_>>().join(", ")
        ))
    })
}

/// Short names of every built-in map style
pub fn map_style_keys() -> Vec<&'static str> {
    MAP_STYLES.keys().collect()
}
