/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Inline behaviour scripts for rich controls. The browser-side widget
 * runtimes (WebUploader, KindEditor) are opaque; these templates only wire a
 * control's configuration into them.
 */

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::FormResult;
use crate::messages::UploaderStrings;

const UPLOADER_TEMPLATE: &str = include_str!("templates/uploader.js.tera");
const RICH_TEXT_TEMPLATE: &str = include_str!("templates/rich_text.js.tera");

/// Configuration handed to the browser-side uploader.
#[derive(Debug, Serialize)]
pub struct UploaderScript<'a> {
    pub input_id: &'a str,
    pub list_id: &'a str,
    pub picker_id: &'a str,
    pub max_count: usize,
    pub value_type: &'a str,
    pub width: u32,
    pub height: u32,
    pub thumb_width: u32,
    pub thumb_height: u32,
    pub is_image: bool,
    pub upload_url: &'a str,
    pub title: &'a str,
    pub extensions: &'a str,
    pub mime_types: &'a str,
    pub strings: UploaderStrings,
}

/// Configuration handed to the browser-side rich text editor.
#[derive(Debug, Serialize)]
pub struct RichTextScript<'a> {
    pub editor_var: &'a str,
    pub input_id: &'a str,
    pub css_paths: Vec<String>,
    pub upload_url: &'a str,
    pub file_manager_url: &'a str,
}

fn render_template(template: &str, data: &impl Serialize) -> FormResult<String> {
    let context = Context::from_serialize(data)?;
    // Script bodies are JavaScript, not HTML: no auto-escaping
    Ok(Tera::one_off(template, &context, false)?)
}

pub fn render_uploader(script: &UploaderScript<'_>) -> FormResult<String> {
    render_template(UPLOADER_TEMPLATE, script)
}

pub fn render_rich_text(script: &RichTextScript<'_>) -> FormResult<String> {
    render_template(RICH_TEXT_TEMPLATE, script)
}
