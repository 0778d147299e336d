/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FormConfig;
use crate::control::field::{Field, ValueControl};
use crate::control::group::{Group, Grouped};
use crate::error::FormResult;
use crate::html::escape;
use crate::naming::{dom_id, encode_name, prefixed_id};
use crate::scripts::{render_uploader, UploaderScript};

const DEFAULT_UPLOAD_URL: &str = "/attachment/upload?dir=auto";
const DEFAULT_MAX_COUNT: usize = 10;
const IMAGE_EXTENSIONS: &str = "jpg,jpeg,png,gif";
const FILE_EXTENSIONS: &str = "doc,docx,xls,xlsx,ppt,pptx,txt,rar,zip,7z,html,htm,mp3,mov,mp4,avi";
const FILE_ITEM_WIDTH: u32 = 120;
/// File tiles are taller than wide to fit the file name.
const FILE_NAME_HEIGHT: u32 = 24;
const IMAGE_ITEM_SIZE: u32 = 80;

/// How the uploaded files are serialized into the hidden field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// JSON array of file descriptors (a bare object for single uploads).
    #[default]
    Json,
    /// URLs joined by `;` (a bare URL for single uploads).
    Url,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Url => "url",
        }
    }
}

/// One uploaded file as recorded in the hidden field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl FileDescriptor {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Extension of the URL's last segment, used for the file icon.
    pub fn extension(&self) -> &str {
        self.url
            .rsplit('/')
            .next()
            .and_then(|segment| segment.rsplit_once('.'))
            .map_or("", |(_, ext)| ext)
    }
}

/// Encoding of an upload control's value.
pub struct UploadValue;

impl UploadValue {
    /// Parse a hidden-field value. Unparseable input yields no files.
    pub fn decode(raw: &str, value_type: ValueType, max_count: usize) -> Vec<FileDescriptor> {
        if raw.is_empty() {
            return Vec::new();
        }
        match value_type {
            ValueType::Url if max_count == 1 => vec![FileDescriptor::from_url(raw)],
            ValueType::Url => raw
                .split(';')
                .filter(|url| !url.is_empty())
                .map(FileDescriptor::from_url)
                .collect(),
            ValueType::Json => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Array(items)) => items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .take(max_count.max(1))
                    .collect(),
                Ok(item @ Value::Object(_)) => {
                    serde_json::from_value(item).ok().into_iter().collect()
                }
                Ok(_) => Vec::new(),
                Err(e) => {
                    tracing::debug!("Ignoring unparseable upload value: {}", e);
                    Vec::new()
                }
            },
        }
    }

    /// Serialize files for the hidden field. Single uploads store the bare
    /// URL or object, never a one-element list.
    pub fn encode(
        files: &[FileDescriptor],
        value_type: ValueType,
        max_count: usize,
    ) -> FormResult<String> {
        if max_count == 1 {
            return match (files.first(), value_type) {
                (None, _) => Ok(String::new()),
                (Some(file), ValueType::Url) => Ok(file.url.clone()),
                (Some(file), ValueType::Json) => Ok(serde_json::to_string(file)?),
            };
        }
        match value_type {
            ValueType::Url => Ok(files
                .iter()
                .map(|file| file.url.as_str())
                .collect::<Vec<_>>()
                .join(";")),
            ValueType::Json if files.is_empty() => Ok(String::new()),
            ValueType::Json => Ok(serde_json::to_string(files)?),
        }
    }
}

/// Which upload preset a control was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    File,
    Files,
    Image,
    Images,
}

impl UploadKind {
    pub fn is_single(self) -> bool {
        matches!(self, Self::File | Self::Image)
    }

    pub fn is_image(self) -> bool {
        matches!(self, Self::Image | Self::Images)
    }
}

/// File or image upload widget bound to a hidden field.
#[derive(Debug, Clone)]
pub struct Upload {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub kind: UploadKind,
    pub max_count: usize,
    pub allow_files: String,
    pub mime_types: String,
    /// Picker caption; defaults to the locale's upload caption.
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub value_type: ValueType,
    pub upload_url: String,
}

impl ValueControl for Upload {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}

impl Grouped for Upload {
    fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }
}

impl Upload {
    fn with_kind(key: impl Into<String>, kind: UploadKind) -> Self {
        let (allow_files, mime_types, width, height) = if kind.is_image() {
            (IMAGE_EXTENSIONS, "image/*", IMAGE_ITEM_SIZE, IMAGE_ITEM_SIZE)
        } else {
            (
                FILE_EXTENSIONS,
                "",
                FILE_ITEM_WIDTH,
                FILE_ITEM_WIDTH + FILE_NAME_HEIGHT,
            )
        };
        Self {
            field: Field::new(key),
            group: Group::default(),
            kind,
            max_count: if kind.is_single() { 1 } else { DEFAULT_MAX_COUNT },
            allow_files: allow_files.to_string(),
            mime_types: mime_types.to_string(),
            title: None,
            width,
            height,
            value_type: ValueType::default(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }

    /// A single document.
    pub fn file(key: impl Into<String>) -> Self {
        Self::with_kind(key, UploadKind::File)
    }

    /// Several documents.
    pub fn files(key: impl Into<String>) -> Self {
        Self::with_kind(key, UploadKind::Files)
    }

    /// A single image.
    pub fn image(key: impl Into<String>) -> Self {
        Self::with_kind(key, UploadKind::Image)
    }

    /// Several images.
    pub fn images(key: impl Into<String>) -> Self {
        Self::with_kind(key, UploadKind::Images)
    }

    /// Ignored by single-file presets, which always hold one file.
    pub fn max_count(mut self, max_count: usize) -> Self {
        if !self.kind.is_single() {
            self.max_count = max_count.max(1);
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Comma separated extensions, e.g. `pdf,doc`.
    pub fn allow_files(mut self, allow_files: impl Into<String>) -> Self {
        self.allow_files = allow_files.into();
        self
    }

    pub fn mime_types(mut self, mime_types: impl Into<String>) -> Self {
        self.mime_types = mime_types.into();
        self
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    /// Tile width in pixels. Document tiles derive their height from it.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        if !self.kind.is_image() {
            self.height = width.saturating_add(FILE_NAME_HEIGHT);
        }
        self
    }

    /// Tile height in pixels; document tiles ignore it.
    pub fn height(mut self, height: u32) -> Self {
        if self.kind.is_image() {
            self.height = height;
        }
        self
    }

    /// Whether previews render as image thumbnails.
    pub fn shows_images(&self) -> bool {
        self.mime_types.len() > 5 && self.mime_types.starts_with("image")
    }

    pub fn files_list(&self) -> Vec<FileDescriptor> {
        UploadValue::decode(&self.field.value, self.value_type, self.max_count)
    }

    pub fn render_input(&self, config: &FormConfig) -> FormResult<String> {
        let key = &self.field.key;
        let input_id = dom_id(key);
        let list_id = prefixed_id("fileList_", key);
        let picker_id = prefixed_id("filePicker_", key);
        let width = self.width.saturating_add(2);
        let height = self.height.saturating_add(2);
        let style = format!(" style=\"width:{width}px;height:{height}px;\"");
        let is_image = self.shows_images();
        let title = match &self.title {
            Some(title) => title.as_str(),
            None if self.kind.is_image() => config.locale.upload_image_title(),
            None => config.locale.upload_file_title(),
        };

        let mut html = format!(
            "<input type=\"hidden\" id=\"{input_id}\" name=\"{}\" value=\"{}\" /> \n",
            encode_name(key),
            escape(&self.field.value)
        );
        html.push_str("<div class=\"webuploader clearfix\">\n");
        html.push_str(&format!("<div id=\"{list_id}\" class=\"uploader-list\">\n"));
        for file in self.files_list() {
            if is_image {
                html.push_str(&format!(
                    "<div class=\"file-item\"{style}><img src=\"{}\" /><i class=\"fa fa-close\"></i></div>\n",
                    escape(&config.resolve_asset_url(&file.url, None))
                ));
            } else {
                html.push_str(&format!(
                    "<div class=\"file-item\"{style}><div class=\"file-icon\"><span class=\"file-icon file-icon-{}\"></span></div><div class=\"file-name\">{}</div><i class=\"fa fa-close\"></i></div>\n",
                    escape(file.extension()),
                    escape(&file.name)
                ));
            }
        }
        html.push_str("</div>\n");
        html.push_str(&format!(
            "<div id=\"{picker_id}\" class=\"file-upload-btn\"{style}><i class=\"fa fa-plus fa-3x\"></i><span>{title}</span></div>\n"
        ));
        html.push_str("</div>\n");

        let upload_url = config.resolve_action_url(&self.upload_url);
        html.push_str(&render_uploader(&UploaderScript {
            input_id: &input_id,
            list_id: &list_id,
            picker_id: &picker_id,
            max_count: self.max_count,
            value_type: self.value_type.as_str(),
            width,
            height,
            thumb_width: self.width.saturating_mul(2),
            thumb_height: self.height.saturating_mul(2),
            is_image,
            upload_url: &upload_url,
            title,
            extensions: &self.allow_files,
            mime_types: &self.mime_types,
            strings: config.locale.uploader_strings(),
        })?);
        Ok(html)
    }

    pub fn render(&self, config: &FormConfig) -> FormResult<String> {
        Ok(self
            .group
            .wrap(&self.field, config.locale, &self.render_input(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormConfig {
        FormConfig::new("http://h/", "http://cdn/")
    }

    #[test]
    fn test_single_url_value_is_bare() {
        let upload = Upload::image("avatar")
            .value_type(ValueType::Url)
            .value("http://x/a.jpg");
        let html = upload.render_input(&config()).unwrap();
        assert!(html.starts_with(
            "<input type=\"hidden\" id=\"i_avatar\" name=\"n_avatar\" value=\"http://x/a.jpg\" />"
        ));
        assert!(html.contains("<img src=\"http://x/a.jpg\" />"));
        assert!(html.contains("var maxCount = 1;"));
    }

    #[test]
    fn test_single_preset_ignores_max_count() {
        assert_eq!(Upload::file("doc").max_count(5).max_count, 1);
        assert_eq!(Upload::files("docs").max_count(5).max_count, 5);
    }

    #[test]
    fn test_decode_url_list() {
        let files = UploadValue::decode("a.pdf;b.pdf;", ValueType::Url, 10);
        assert_eq!(
            files,
            vec![FileDescriptor::from_url("a.pdf"), FileDescriptor::from_url("b.pdf")]
        );
        // a single upload keeps the raw value whole
        let files = UploadValue::decode("a;b", ValueType::Url, 1);
        assert_eq!(files, vec![FileDescriptor::from_url("a;b")]);
    }

    #[test]
    fn test_decode_json() {
        let raw = r#"[{"url":"u1","name":"one.png","width":10,"height":20},{"url":"u2"},{"bad":1}]"#;
        let files = UploadValue::decode(raw, ValueType::Json, 10);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].width, Some(10));
        assert_eq!(files[1].name, "");

        let single = UploadValue::decode(r#"{"url":"u","name":"n"}"#, ValueType::Json, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].name, "n");
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(UploadValue::decode("{not json", ValueType::Json, 10).is_empty());
        assert!(UploadValue::decode("42", ValueType::Json, 10).is_empty());
        assert!(UploadValue::decode("", ValueType::Url, 10).is_empty());
    }

    #[test]
    fn test_encode() {
        let files = vec![
            FileDescriptor {
                url: "u1".to_string(),
                name: "a.png".to_string(),
                width: Some(1),
                height: Some(2),
            },
            FileDescriptor::from_url("u2"),
        ];
        assert_eq!(UploadValue::encode(&files, ValueType::Url, 10).unwrap(), "u1;u2");
        assert_eq!(UploadValue::encode(&files, ValueType::Url, 1).unwrap(), "u1");
        assert_eq!(
            UploadValue::encode(&files, ValueType::Json, 10).unwrap(),
            r#"[{"url":"u1","name":"a.png","width":1,"height":2},{"url":"u2","name":""}]"#
        );
        assert_eq!(
            UploadValue::encode(&files[1..], ValueType::Json, 1).unwrap(),
            r#"{"url":"u2","name":""}"#
        );
        assert_eq!(UploadValue::encode(&[], ValueType::Json, 10).unwrap(), "");
    }

    #[test]
    fn test_json_value_round_trips_through_hidden_field() {
        let raw = r#"[{"url":"http://x/a.doc","name":"a.doc"}]"#;
        let upload = Upload::files("attachments").value(raw);
        let html = upload.render_input(&config()).unwrap();
        assert!(html.contains(
            "value=\"[{&quot;url&quot;:&quot;http://x/a.doc&quot;,&quot;name&quot;:&quot;a.doc&quot;}]\""
        ));
        assert!(html.contains("file-icon-doc"));
        assert!(html.contains("<div class=\"file-name\">a.doc</div>"));
    }

    #[test]
    fn test_file_tiles_derive_height() {
        let upload = Upload::files("docs").width(100).height(10);
        assert_eq!((upload.width, upload.height), (100, 124));
        let upload = Upload::images("pics").width(100).height(50);
        assert_eq!((upload.width, upload.height), (100, 50));
    }

    #[test]
    fn test_oversized_tiles_saturate() {
        let upload = Upload::files("docs").width(u32::MAX);
        assert_eq!(upload.height, u32::MAX);

        let upload = Upload::images("pics").width(u32::MAX).height(u32::MAX);
        let html = upload.render_input(&config()).unwrap();
        assert!(html.contains(&format!("style=\"width:{max}px;height:{max}px;\"", max = u32::MAX)));
        assert!(html.contains(&format!("}}, {max}, {max} );", max = u32::MAX)));
    }

    #[test]
    fn test_widget_configuration() {
        let upload = Upload::images("gallery.pics").max_count(3).title("Pick");
        let html = upload.render_input(&config()).unwrap();
        assert!(html.contains("id=\"fileList_gallery_-_pics\""));
        assert!(html.contains("<span>Pick</span>"));
        assert!(html.contains("var maxCount = 3;"));
        assert!(html.contains("extensions: 'jpg,jpeg,png,gif'"));
        assert!(html.contains("server: 'http://h/attachment/upload?dir=auto'"));
        assert!(html.contains("style=\"width:82px;height:82px;\""));
    }

    #[test]
    fn test_relative_image_resolves_against_cdn() {
        let upload = Upload::image("avatar")
            .value_type(ValueType::Url)
            .value("/u/a.jpg");
        let html = upload.render_input(&config()).unwrap();
        assert!(html.contains("<img src=\"http://cdn/u/a.jpg\" />"));
    }

    #[test]
    fn test_default_title_follows_locale() {
        let html = Upload::file("doc").render_input(&config()).unwrap();
        assert!(html.contains("<span>Upload file</span>"));
    }
}
