//! Formkit form library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! Builds HTML forms on the server: typed controls bound to a nested data
//! bag, submitted values validated against per-control rules, and the whole
//! form rendered back with values and error messages in place.
//!
//! # Example
//!
//! ```rust,no_run
//! use formkit::control::{Button, Grouped, Text, ValueControl};
//! use formkit::{FormBuilder, FormConfig, MapInput};
//!
//! let mut form = FormBuilder::new(FormConfig::new("http://example.com/", "http://cdn.example.com/"));
//! form.action("/user/save")
//!     .add(Text::new("user.name").label("Name").not_empty().remark("Your full name"))
//!     .add(Button::new("Save").primary());
//!
//! let submission = MapInput::new().field("n_user_-_name", "Ann");
//! if form.handle(&submission) {
//!     println!("saved {}", form.data().to_value());
//! }
//! let html = form.build()?;
//! # Ok::<(), formkit::FormError>(())
//! ```

pub mod builder;
pub mod config;
pub mod control;
pub mod data;
pub mod definition;
pub mod error;
pub mod html;
pub mod input;
pub mod messages;
pub mod naming;
pub mod parser;
pub mod rules;
pub mod schemas;
pub mod scripts;
pub mod urls;
pub mod validator;

use serde_json::Value;

pub use builder::FormBuilder;
pub use config::FormConfig;
pub use control::{Control, Render};
pub use data::DataBag;
pub use definition::{parse_definition, ControlDefinition, FormDefinition};
pub use error::{FieldError, FormError, FormResult, ParseError};
pub use input::{InputSource, MapInput};
pub use messages::Locale;
pub use rules::Rule;
pub use urls::{resolve_action_url, resolve_asset_url};
pub use validator::error::{ValidationError, ValidationResult};
pub use validator::Validator;

/// Validate a parsed form definition against the embedded schema and the
/// per-control rules.
pub fn validate_definition(file_path: &str, data: &Value) -> ValidationResult {
    Validator::new().validate_definition(file_path, data)
}

/// Parse a definition document without deserializing it, for validation.
///
/// # Errors
///
/// Returns `ParseError` if the input is invalid YAML/JSON or has no
/// `controls` list.
pub fn parse_definition_value(content: &str, file_path: Option<&str>) -> FormResult<Value> {
    parser::parse_definition_document(content, file_path).map_err(|e| FormError::Parse(e.into()))
}
