/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::config::FormConfig;

fn is_absolute(url: &str) -> bool {
    url.starts_with("http")
}

fn join(base: &str, url: &str) -> String {
    let relative = url.strip_prefix('/').unwrap_or(url);
    format!("{base}{relative}")
}

/// Resolve an action or link URL against `base_url`. Absolute (`http...`)
/// and fragment (`#...`) URLs pass through unchanged.
pub fn resolve_action_url(base_url: &str, url: &str) -> String {
    if url.starts_with('#') || is_absolute(url) {
        return url.to_string();
    }
    join(base_url, url)
}

/// Resolve an asset URL against `cdn_url`. A non-empty `format` selects a
/// pre-generated size variant by appending `-{format}.jpg`.
pub fn resolve_asset_url(cdn_url: &str, url: &str, format: Option<&str>) -> String {
    let mut resolved = if is_absolute(url) {
        url.to_string()
    } else {
        join(cdn_url, url)
    };
    if let Some(format) = format.filter(|f| !f.is_empty()) {
        resolved.push('-');
        resolved.push_str(format);
        resolved.push_str(".jpg");
    }
    resolved
}

impl FormConfig {
    pub fn resolve_action_url(&self, url: &str) -> String {
        resolve_action_url(&self.base_url, url)
    }

    pub fn resolve_asset_url(&self, url: &str, format: Option<&str>) -> String {
        resolve_asset_url(&self.cdn_url, url, format)
    }
}
