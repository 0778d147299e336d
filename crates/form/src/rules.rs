/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Validation rule engine: pure predicates over a single submitted value.
 */

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FieldError, FormError, FormResult};

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern is valid"));

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("numeric pattern is valid"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+(?:[/?#]\S*)?$")
        .expect("url pattern is valid")
});

/// `/body/flags` delimited patterns, as written in older form declarations.
static DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(.*)/([imsxu]*)$").expect("delimiter pattern is valid"));

/// A predicate a submitted value must satisfy.
#[derive(Debug, Clone)]
pub enum Rule {
    NotEmpty,
    Integer,
    Numeric,
    Url,
    Email,
    Pattern(Pattern),
}

/// A user supplied regular expression matched against the whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern. Both bare expressions (`[a-z]+`) and
    /// slash-delimited ones with flags (`/^[a-z]+$/i`) are accepted.
    pub fn new(source: &str) -> FormResult<Self> {
        let (body, flags) = match DELIMITED.captures(source) {
            Some(caps) => (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
            ),
            None => (source, ""),
        };

        // `u` is implied by the regex crate
        let inline: String = flags.chars().filter(|c| *c != 'u').collect();
        let anchored = if inline.is_empty() {
            format!("^(?:{body})$")
        } else {
            format!("(?{inline})^(?:{body})$")
        };

        let regex = Regex::new(&anchored).map_err(|source_err| FormError::Pattern {
            pattern: source.to_string(),
            source: source_err,
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl Rule {
    /// Parse a rule name; anything other than a built-in name is compiled
    /// as a pattern.
    pub fn parse(name: &str) -> FormResult<Self> {
        Ok(match name {
            "not_empty" => Self::NotEmpty,
            "integer" => Self::Integer,
            "numberic" | "numeric" => Self::Numeric,
            "url" => Self::Url,
            "email" => Self::Email,
            other => Self::Pattern(Pattern::new(other)?),
        })
    }

    /// Name recorded as the error type when this rule fails.
    pub fn name(&self) -> &str {
        match self {
            Self::NotEmpty => "not_empty",
            Self::Integer => "integer",
            Self::Numeric => "numberic",
            Self::Url => "url",
            Self::Email => "email",
            Self::Pattern(pattern) => pattern.as_str(),
        }
    }

    /// Error recorded on a control when this rule rejects its value.
    pub fn failure(&self) -> FieldError {
        match self {
            Self::NotEmpty => FieldError::RequiredMissing,
            other => FieldError::FormatInvalid {
                rule: other.name().to_string(),
            },
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Evaluate one rule against one value.
///
/// Empty values pass every rule except `not_empty`: required-ness is opt-in
/// and independent of the format rules.
pub fn evaluate(rule: &Rule, value: &str) -> bool {
    if let Rule::NotEmpty = rule {
        return !value.is_empty();
    }
    if value.is_empty() {
        return true;
    }
    match rule {
        Rule::NotEmpty => true,
        Rule::Integer => INTEGER.is_match(value),
        Rule::Numeric => NUMERIC.is_match(value),
        Rule::Url => URL.is_match(value),
        Rule::Email => EMAIL.is_match(value),
        Rule::Pattern(pattern) => pattern.is_match(value),
    }
}

/// Check length bounds, measured in characters. A `max` of zero means
/// unbounded.
pub fn check_length(value: &str, min: usize, max: usize) -> Option<FieldError> {
    let length = value.chars().count();
    if length < min {
        return Some(FieldError::LengthTooShort);
    }
    if max > 0 && length > max {
        return Some(FieldError::LengthTooExceeded);
    }
    None
}
