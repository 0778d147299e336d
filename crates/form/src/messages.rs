/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Message catalogue used for field errors and widget captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    #[serde(alias = "zh", alias = "zh_cn")]
    ZhCn,
}

impl Locale {
    /// Localized message for a field error. `min`/`max` are the control's
    /// length bounds.
    pub fn field_error(self, error: &FieldError, min: usize, max: usize) -> String {
        match (self, error) {
            (_, FieldError::Custom { message }) => message.clone(),
            (Self::En, FieldError::LengthTooShort) => format!("Length must be at least {min}"),
            (Self::En, FieldError::LengthTooExceeded) => format!("Length must be at most {max}"),
            (Self::En, FieldError::RequiredMissing) => "Required".to_string(),
            (Self::En, FieldError::FormatInvalid { rule }) => match rule.as_str() {
                "integer" => "Must be an integer".to_string(),
                "numberic" => "Must be a number".to_string(),
                "url" => "Must be a URL".to_string(),
                "email" => "Must be an email address".to_string(),
                _ => "Invalid format".to_string(),
            },
            (Self::ZhCn, FieldError::LengthTooShort) => format!("长度必须大于{min}"),
            (Self::ZhCn, FieldError::LengthTooExceeded) => format!("长度必须小于{max}"),
            (Self::ZhCn, FieldError::RequiredMissing) => "不能为空".to_string(),
            (Self::ZhCn, FieldError::FormatInvalid { rule }) => match rule.as_str() {
                "integer" => "必须是整数".to_string(),
                "numberic" => "必须是数字".to_string(),
                "url" => "必须是网址".to_string(),
                "email" => "必须是Email".to_string(),
                _ => "格式错误".to_string(),
            },
        }
    }

    pub fn upload_image_title(self) -> &'static str {
        match self {
            Self::En => "Upload image",
            Self::ZhCn => "上传图片",
        }
    }

    pub fn upload_file_title(self) -> &'static str {
        match self {
            Self::En => "Upload file",
            Self::ZhCn => "上传文件",
        }
    }

    /// Strings the uploader script shows in the browser.
    pub fn uploader_strings(self) -> UploaderStrings {
        match self {
            Self::En => UploaderStrings {
                no_preview: "No preview",
                upload_failed: "Upload failed",
                too_many_files: "Too many files selected",
                file_too_large: "The selected file is too large",
                type_denied: "This file type is not allowed",
                duplicate: "Duplicate file",
                unknown_error: "Unknown error: ",
            },
            Self::ZhCn => UploaderStrings {
                no_preview: "不能预览",
                upload_failed: "上传失败",
                too_many_files: "所选的文件数量超过限制",
                file_too_large: "所选的文件大小超过限制",
                type_denied: "所选的文件类型不允许上传",
                duplicate: "重复文件",
                unknown_error: "未知错误:",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UploaderStrings {
    pub no_preview: &'static str,
    pub upload_failed: &'static str,
    pub too_many_files: &'static str,
    pub file_too_large: &'static str,
    pub type_denied: &'static str,
    pub duplicate: &'static str,
    pub unknown_error: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_messages_carry_bounds() {
        let msg = Locale::En.field_error(&FieldError::LengthTooShort, 3, 10);
        assert_eq!(msg, "Length must be at least 3");
        let msg = Locale::ZhCn.field_error(&FieldError::LengthTooExceeded, 3, 10);
        assert_eq!(msg, "长度必须小于10");
    }

    #[test]
    fn test_unknown_rule_falls_back_to_format_error() {
        let error = FieldError::FormatInvalid {
            rule: "[a-z]+".to_string(),
        };
        assert_eq!(Locale::En.field_error(&error, 0, 0), "Invalid format");
        assert_eq!(Locale::ZhCn.field_error(&error, 0, 0), "格式错误");
    }

    #[test]
    fn test_custom_message_is_verbatim_in_every_locale() {
        let error = FieldError::Custom {
            message: "Already taken".to_string(),
        };
        assert_eq!(Locale::En.field_error(&error, 0, 0), "Already taken");
        assert_eq!(Locale::ZhCn.field_error(&error, 0, 0), "Already taken");
    }

    #[test]
    fn test_locale_deserializes_aliases() {
        let locale: Locale = serde_json::from_str("\"zh-cn\"").unwrap();
        assert_eq!(locale, Locale::ZhCn);
        let locale: Locale = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(locale, Locale::ZhCn);
    }
}
