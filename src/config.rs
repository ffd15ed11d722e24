// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Board configuration.
//!
//! Loaded from a YAML file passed with `--config`. Every field is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_AUTHORS: [&str; 4] = ["Tim Macoveev", "John Doe", "Andre Right", "Greg Malkovich"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Films shown per "load more" step.
    pub page_size: usize,
    /// Names new comments are attributed to.
    pub authors: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            authors: default_authors(),
        }
    }
}

/// Author pool used when none is configured.
pub fn default_authors() -> Vec<String> {
    DEFAULT_AUTHORS.iter().map(|s| s.to_string()).collect()
}

impl BoardConfig {
    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: BoardConfig = serde_yaml::from_str(yaml)?;
        Ok(config.normalized())
    }

    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!("page_size must be at least 1, using 1");
            self.page_size = 1;
        }
        if self.authors.is_empty() {
            log::warn!("Empty author pool, using defaults");
            self.authors = default_authors();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = BoardConfig::from_yaml("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.page_size, 5);
        assert_eq!(config.authors.len(), 4);
    }

    #[test]
    fn test_partial_override() {
        let config = BoardConfig::from_yaml("page_size: 8\n").unwrap();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.authors, BoardConfig::default().authors);
    }

    #[test]
    fn test_invalid_values_are_normalized() {
        let config = BoardConfig::from_yaml("page_size: 0\nauthors: []\n").unwrap();
        assert_eq!(config.page_size, 1);
        assert!(!config.authors.is_empty());
    }

    #[test]
    fn test_demo_config_parses() {
        let config = BoardConfig::from_yaml(include_str!("../demos/config.yaml")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(BoardConfig::from_yaml("page_size: [").is_err());
    }
}
