/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Declarative form definitions: a YAML or JSON document describing the
 * controls of a form, turned into a ready `FormBuilder`.
 */

use serde::Deserialize;
use serde_json::Value;

use crate::builder::FormBuilder;
use crate::config::FormConfig;
use crate::control::{
    Button, Checkbox, Choices, Control, Date, Grouped, Hidden, Html, Radio, RichText, Script,
    Select, Styled, Text, Textarea, Upload, ValueControl, ValueType,
};
use crate::error::{FormError, FormResult};
use crate::parser::parse_definition_document;

/// A whole form as written in a definition file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormDefinition {
    #[serde(default)]
    pub action: String,
    #[serde(default = "default_method")]
    pub method: String,
    pub controls: Vec<ControlDefinition>,
    /// Initial data bag.
    #[serde(default)]
    pub data: Option<Value>,
}

fn default_method() -> String {
    "post".to_string()
}

/// State shared by every value-bearing control definition.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub readonly: bool,
    /// Built-in rule names or patterns, checked in order.
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub min: usize,
    #[serde(default)]
    pub max: usize,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Sizing and styling for inputs that carry attributes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinition {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub input_class: Option<String>,
}

/// Upload widget settings; unset members keep the preset's defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadDefinition {
    #[serde(default)]
    pub max_count: Option<usize>,
    #[serde(default)]
    pub allow_files: Option<String>,
    #[serde(default)]
    pub mime_types: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub value_type: Option<ValueType>,
    #[serde(default)]
    pub upload_url: Option<String>,
}

/// One control, tagged by `type`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlDefinition {
    Text {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        style: StyleDefinition,
        #[serde(default)]
        placeholder: String,
    },
    Textarea {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        style: StyleDefinition,
        #[serde(default)]
        placeholder: String,
    },
    RichText {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        style: StyleDefinition,
        #[serde(default, rename = "uploadUrl")]
        upload_url: Option<String>,
        #[serde(default, rename = "fileManagerUrl")]
        file_manager_url: Option<String>,
    },
    Date {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        style: StyleDefinition,
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        format: Option<String>,
        #[serde(default)]
        autoclose: Option<bool>,
    },
    Hidden {
        #[serde(flatten)]
        field: FieldDefinition,
    },
    Select {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        style: StyleDefinition,
        #[serde(default)]
        options: Value,
    },
    Radio {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(default)]
        options: Value,
    },
    Checkbox {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(default)]
        options: Value,
    },
    File {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        upload: UploadDefinition,
    },
    Files {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        upload: UploadDefinition,
    },
    Image {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        upload: UploadDefinition,
    },
    Images {
        #[serde(flatten)]
        field: FieldDefinition,
        #[serde(flatten)]
        upload: UploadDefinition,
    },
    Button {
        label: String,
        #[serde(default)]
        primary: bool,
        #[serde(default)]
        link: Option<String>,
    },
    Html {
        html: String,
    },
    Script {
        script: String,
    },
}

fn apply_field<T: ValueControl>(control: T, def: &FieldDefinition) -> FormResult<T> {
    let mut control = control
        .label(def.label.clone())
        .value(def.value.clone())
        .readonly(def.readonly)
        .min_length(def.min)
        .max_length(def.max);
    for rule in &def.rules {
        control = control.add_rule(rule)?;
    }
    if let Some(word) = &def.error {
        control = control.error(word.clone());
    }
    Ok(control)
}

fn apply_group<T: Grouped>(control: T, def: &FieldDefinition) -> FormResult<T> {
    let control = apply_field(control, def)?;
    Ok(match &def.remark {
        Some(remark) => control.remark(remark.clone()),
        None => control,
    })
}

fn apply_style<T: Styled>(mut control: T, style: &StyleDefinition) -> T {
    if let Some(class) = &style.input_class {
        control = control.input_class(class.clone());
    }
    if let Some(width) = style.width {
        control = control.width(width);
    }
    if let Some(height) = style.height {
        control = control.height(height);
    }
    control
}

fn build_upload(mut control: Upload, def: &UploadDefinition) -> Upload {
    if let Some(max_count) = def.max_count {
        control = control.max_count(max_count);
    }
    if let Some(allow_files) = &def.allow_files {
        control = control.allow_files(allow_files.clone());
    }
    if let Some(mime_types) = &def.mime_types {
        control = control.mime_types(mime_types.clone());
    }
    if let Some(title) = &def.title {
        control = control.title(title.clone());
    }
    if let Some(width) = def.width {
        control = control.width(width);
    }
    if let Some(height) = def.height {
        control = control.height(height);
    }
    if let Some(value_type) = def.value_type {
        control = control.value_type(value_type);
    }
    if let Some(url) = &def.upload_url {
        control = control.upload_url(url.clone());
    }
    control
}

impl ControlDefinition {
    /// `type` tag as written in the document.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Textarea { .. } => "textarea",
            Self::RichText { .. } => "richText",
            Self::Date { .. } => "date",
            Self::Hidden { .. } => "hidden",
            Self::Select { .. } => "select",
            Self::Radio { .. } => "radio",
            Self::Checkbox { .. } => "checkbox",
            Self::File { .. } => "file",
            Self::Files { .. } => "files",
            Self::Image { .. } => "image",
            Self::Images { .. } => "images",
            Self::Button { .. } => "button",
            Self::Html { .. } => "html",
            Self::Script { .. } => "script",
        }
    }

    /// Build the control. Fails when a rule pattern does not compile.
    pub fn to_control(&self) -> FormResult<Control> {
        Ok(match self {
            Self::Text {
                field,
                style,
                placeholder,
            } => {
                let text = apply_group(Text::new(&field.key), field)?;
                apply_style(text, style).placeholder(placeholder.clone()).into()
            }
            Self::Textarea {
                field,
                style,
                placeholder,
            } => {
                let textarea = apply_group(Textarea::new(&field.key), field)?;
                apply_style(textarea, style).placeholder(placeholder.clone()).into()
            }
            Self::RichText {
                field,
                style,
                upload_url,
                file_manager_url,
            } => {
                let mut editor = apply_style(apply_group(RichText::new(&field.key), field)?, style);
                if let Some(url) = upload_url {
                    editor = editor.upload_url(url.clone());
                }
                if let Some(url) = file_manager_url {
                    editor = editor.file_manager_url(url.clone());
                }
                editor.into()
            }
            Self::Date {
                field,
                style,
                placeholder,
                format,
                autoclose,
            } => {
                let mut date = apply_style(apply_group(Date::new(&field.key), field)?, style)
                    .placeholder(placeholder.clone());
                if let Some(format) = format {
                    date = date.date_format(format.clone());
                }
                if let Some(autoclose) = autoclose {
                    date = date.autoclose(*autoclose);
                }
                date.into()
            }
            Self::Hidden { field } => apply_field(Hidden::new(&field.key), field)?.into(),
            Self::Select {
                field,
                style,
                options,
            } => {
                let select = apply_group(Select::new(&field.key), field)?;
                apply_style(select, style).options_json(options).into()
            }
            Self::Radio { field, options } => apply_group(Radio::new(&field.key), field)?
                .options_json(options)
                .into(),
            Self::Checkbox { field, options } => apply_group(Checkbox::new(&field.key), field)?
                .options_json(options)
                .into(),
            Self::File { field, upload } => {
                build_upload(apply_group(Upload::file(&field.key), field)?, upload).into()
            }
            Self::Files { field, upload } => {
                build_upload(apply_group(Upload::files(&field.key), field)?, upload).into()
            }
            Self::Image { field, upload } => {
                build_upload(apply_group(Upload::image(&field.key), field)?, upload).into()
            }
            Self::Images { field, upload } => {
                build_upload(apply_group(Upload::images(&field.key), field)?, upload).into()
            }
            Self::Button {
                label,
                primary,
                link,
            } => {
                let button = Button::new(label.clone());
                match (link, primary) {
                    (Some(url), _) => button.link(url.clone()),
                    (None, true) => button.primary(),
                    (None, false) => button,
                }
                .into()
            }
            Self::Html { html } => Html::new(html.clone()).into(),
            Self::Script { script } => Script::new(script.clone()).into(),
        })
    }
}

impl FormDefinition {
    /// Deserialize from an already parsed document.
    pub fn from_value(value: Value) -> FormResult<Self> {
        serde_json::from_value(value).map_err(|e| FormError::Definition(e.to_string()))
    }

    /// Builder holding every control in document order, with the action,
    /// method and initial data applied.
    pub fn into_builder(self, config: FormConfig) -> FormResult<FormBuilder> {
        let mut builder = FormBuilder::new(config);
        builder.action(&self.action).method(self.method.clone());
        if let Some(data) = self.data {
            builder.set_data(data);
        }
        for definition in &self.controls {
            builder.add(definition.to_control()?);
        }
        tracing::debug!(
            "Built form '{}' with {} controls",
            builder.action_url(),
            builder.controls().len()
        );
        Ok(builder)
    }
}

/// Parse a YAML or JSON form definition.
///
/// `file_path` only drives format detection.
pub fn parse_definition(content: &str, file_path: Option<&str>) -> FormResult<FormDefinition> {
    let value = parse_definition_document(content, file_path)
        .map_err(|e| FormError::Parse(e.into()))?;
    FormDefinition::from_value(value)
}
