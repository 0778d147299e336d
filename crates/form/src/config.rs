/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FormError, FormResult};
use crate::messages::Locale;

/// Site configuration a form needs to resolve URLs and pick messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Prefix for relative action and link URLs, used verbatim.
    #[serde(default)]
    pub base_url: String,
    /// Prefix for relative asset URLs; always ends with exactly one `/`.
    #[serde(default, alias = "imageUrl")]
    pub cdn_url: String,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl FormConfig {
    pub fn new(base_url: impl Into<String>, cdn_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cdn_url: normalize_cdn_url(&cdn_url.into()),
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn set_cdn_url(&mut self, url: impl Into<String>) {
        self.cdn_url = normalize_cdn_url(&url.into());
    }

    /// Parse a YAML configuration document.
    pub fn from_yaml_str(content: &str) -> FormResult<Self> {
        let mut config: FormConfig = serde_yaml::from_str(content)
            .map_err(|e| FormError::Config(format!("Failed to parse config: {e}")))?;
        config.cdn_url = normalize_cdn_url(&config.cdn_url);
        Ok(config)
    }

    /// Read a YAML configuration file. A missing file yields the defaults.
    pub fn load(path: &Path) -> FormResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            FormError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }
}

/// Trim trailing slashes down to exactly one; an empty URL becomes `/`.
fn normalize_cdn_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cdn_url_gets_single_trailing_slash() {
        assert_eq!(FormConfig::new("", "http://cdn").cdn_url, "http://cdn/");
        assert_eq!(FormConfig::new("", "http://cdn/").cdn_url, "http://cdn/");
        assert_eq!(FormConfig::new("", "http://cdn//").cdn_url, "http://cdn/");
        assert_eq!(FormConfig::new("", "").cdn_url, "/");
    }

    #[test]
    fn test_base_url_is_verbatim() {
        assert_eq!(FormConfig::new("http://h", "").base_url, "http://h");
    }

    #[test]
    fn test_from_yaml_str() {
        let config = FormConfig::from_yaml_str(
            "baseUrl: http://h/\ncdnUrl: http://cdn\nlocale: zh-cn\n",
        )
        .unwrap();
        assert_eq!(config.base_url, "http://h/");
        assert_eq!(config.cdn_url, "http://cdn/");
        assert_eq!(config.locale, Locale::ZhCn);
    }

    #[test]
    fn test_from_yaml_str_defaults() {
        let config = FormConfig::from_yaml_str("baseUrl: http://h/\n").unwrap();
        assert_eq!(config.cdn_url, "/");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_from_yaml_str_invalid() {
        let result = FormConfig::from_yaml_str("baseUrl: [unclosed");
        assert!(matches!(result, Err(FormError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = FormConfig::load(&temp_dir.path().join("formkit.yaml")).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("formkit.yaml");
        fs::write(&path, "baseUrl: http://site/\nimageUrl: http://img\n").unwrap();
        let config = FormConfig::load(&path).unwrap();
        assert_eq!(config.base_url, "http://site/");
        assert_eq!(config.cdn_url, "http://img/");
    }
}
