/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::error::{FieldError, FormResult};
use crate::messages::Locale;
use crate::rules::{check_length, evaluate, Rule};

/// Identity, value, constraints and error state shared by every
/// value-bearing control.
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// May contain `.` to address a nested entry of the data bag.
    pub key: String,
    pub label: String,
    pub value: String,
    pub readonly: bool,
    pub rules: Vec<Rule>,
    pub min: usize,
    /// Zero means unbounded.
    pub max: usize,
    pub error: Option<FieldError>,
    /// Explicit message that replaces the built-in one for any failure.
    pub error_word: String,
}

impl Field {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Validate `value`: length bounds first, then each rule in declared
    /// order. The first failure is recorded; success clears any previous
    /// error.
    pub fn check_rules(&mut self, value: &str) -> bool {
        self.error = check_length(value, self.min, self.max).or_else(|| {
            self.rules
                .iter()
                .find(|rule| !evaluate(rule, value))
                .map(Rule::failure)
        });
        self.error.is_none()
    }

    /// Attach a business-rule error after the built-in pass.
    pub fn set_custom_error(&mut self, message: impl Into<String>) {
        self.error = Some(FieldError::Custom {
            message: message.into(),
        });
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// `""` when valid, otherwise `min`, `max`, a rule name or `custom`.
    pub fn error_type(&self) -> &str {
        self.error.as_ref().map_or("", FieldError::error_type)
    }

    /// Error message in the default locale.
    pub fn error_message(&self) -> String {
        self.error_message_in(Locale::default())
    }

    pub fn error_message_in(&self, locale: Locale) -> String {
        match &self.error {
            None => String::new(),
            Some(FieldError::Custom { message }) => message.clone(),
            Some(_) if !self.error_word.is_empty() => self.error_word.clone(),
            Some(error) => locale.field_error(error, self.min, self.max),
        }
    }
}

/// Chained setters for controls that carry a [`Field`].
pub trait ValueControl: Sized {
    fn field(&self) -> &Field;
    fn field_mut(&mut self) -> &mut Field;

    fn key(mut self, key: impl Into<String>) -> Self {
        self.field_mut().key = key.into();
        self
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.field_mut().label = label.into();
        self
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.field_mut().value = value.into();
        self
    }

    fn readonly(mut self, readonly: bool) -> Self {
        self.field_mut().readonly = readonly;
        self
    }

    fn rule(mut self, rule: Rule) -> Self {
        self.field_mut().rules.push(rule);
        self
    }

    /// Add a rule by name; unknown names are compiled as patterns.
    fn add_rule(self, rule: &str) -> FormResult<Self> {
        Ok(self.rule(Rule::parse(rule)?))
    }

    fn not_empty(self) -> Self {
        self.rule(Rule::NotEmpty)
    }

    fn integer_value(self) -> Self {
        self.rule(Rule::Integer)
    }

    fn numberic_value(self) -> Self {
        self.rule(Rule::Numeric)
    }

    fn url_value(self) -> Self {
        self.rule(Rule::Url)
    }

    fn email_value(self) -> Self {
        self.rule(Rule::Email)
    }

    fn min_length(mut self, min: usize) -> Self {
        self.field_mut().min = min;
        self
    }

    fn max_length(mut self, max: usize) -> Self {
        self.field_mut().max = max;
        self
    }

    /// Override the message shown for any failure of this control.
    fn error(mut self, word: impl Into<String>) -> Self {
        self.field_mut().error_word = word.into();
        self
    }
}

impl ValueControl for Field {
    fn field(&self) -> &Field {
        self
    }

    fn field_mut(&mut self) -> &mut Field {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_takes_precedence_over_rules() {
        let mut field = Field::new("code").integer_value().not_empty().min_length(3);
        assert!(!field.check_rules("a"));
        assert_eq!(field.error_type(), "min");
        assert!(!field.check_rules(""));
        assert_eq!(field.error_type(), "min");
    }

    #[test]
    fn test_max_length() {
        let mut field = Field::new("code").max_length(2);
        assert!(!field.check_rules("abc"));
        assert_eq!(field.error, Some(FieldError::LengthTooExceeded));
        assert_eq!(field.error_message(), "Length must be at most 2");
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut field = Field::new("n").integer_value().email_value();
        assert!(!field.check_rules("abc"));
        assert_eq!(field.error_type(), "integer");
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut field = Field::new("n").not_empty();
        assert!(!field.check_rules(""));
        assert_eq!(field.error_type(), "not_empty");
        assert!(field.check_rules("x"));
        assert_eq!(field.error_type(), "");
        assert_eq!(field.error_message(), "");
    }

    #[test]
    fn test_required_message() {
        let mut field = Field::new("name").not_empty();
        field.check_rules("");
        assert_eq!(field.error_message(), "Required");
        assert_eq!(field.error_message_in(Locale::ZhCn), "不能为空");
    }

    #[test]
    fn test_error_word_overrides_builtin_message() {
        let mut field = Field::new("age").integer_value().error("Age please");
        field.check_rules("x");
        assert_eq!(field.error_message(), "Age please");
    }

    #[test]
    fn test_custom_error_is_verbatim() {
        let mut field = Field::new("email").email_value().error("override");
        field.check_rules("bad");
        field.set_custom_error("Already registered");
        assert_eq!(field.error_type(), "custom");
        assert_eq!(field.error_message(), "Already registered");
    }

    #[test]
    fn test_add_rule_pattern() {
        let mut field = Field::new("slug").add_rule("[a-z-]+").unwrap();
        assert!(field.check_rules("hello-world"));
        assert!(!field.check_rules("Hello"));
        assert_eq!(field.error_type(), "[a-z-]+");
        assert_eq!(field.error_message(), "Invalid format");
    }

    #[test]
    fn test_add_rule_invalid_pattern() {
        assert!(Field::new("slug").add_rule("[").is_err());
    }
}
