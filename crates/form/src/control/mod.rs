/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * The control model: a closed set of variants sharing composed behaviour
 * (field state, group wrapper, input attributes) instead of a class
 * hierarchy.
 */

/// Implements the setter traits for a control with `field`, `group` and
/// `attrs` members.
macro_rules! styled_control {
    ($name:ident) => {
        impl ValueControl for $name {
            fn field(&self) -> &Field {
                &self.field
            }

            fn field_mut(&mut self) -> &mut Field {
                &mut self.field
            }
        }

        impl Grouped for $name {
            fn group_mut(&mut self) -> &mut Group {
                &mut self.group
            }
        }

        impl Styled for $name {
            fn attrs_mut(&mut self) -> &mut Attrs {
                &mut self.attrs
            }
        }
    };
}

pub mod attrs;
pub mod button;
pub mod choice;
pub mod date;
pub mod field;
pub mod group;
pub mod hidden;
pub mod static_html;
pub mod text;
pub mod upload;

pub use attrs::{Attrs, Styled};
pub use button::{Button, ButtonMode};
pub use choice::{normalize_options, Checkbox, ChoiceOption, Choices, Radio, Select};
pub use date::Date;
pub use field::{Field, ValueControl};
pub use group::{Group, Grouped};
pub use hidden::Hidden;
pub use static_html::{Html, Script};
pub use text::{RichText, Text, Textarea};
pub use upload::{FileDescriptor, Upload, UploadKind, UploadValue, ValueType};

use crate::config::FormConfig;
use crate::error::FormResult;
use crate::input::InputSource;
use crate::naming::encode_name;

/// Where the builder places a control in the rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Hidden,
    Plain,
    Button,
}

/// Anything that serializes itself to markup.
pub trait Render {
    fn render(&self, config: &FormConfig) -> FormResult<String>;
}

/// Every control a form can hold.
#[derive(Debug, Clone)]
pub enum Control {
    Html(Html),
    Script(Script),
    Button(Button),
    Hidden(Hidden),
    Text(Text),
    Textarea(Textarea),
    RichText(RichText),
    Date(Date),
    Select(Select),
    Radio(Radio),
    Checkbox(Checkbox),
    Upload(Upload),
}

impl Control {
    /// Field state of value-bearing controls.
    pub fn field(&self) -> Option<&Field> {
        match self {
            Self::Html(_) | Self::Script(_) | Self::Button(_) => None,
            Self::Hidden(c) => Some(c.field()),
            Self::Text(c) => Some(c.field()),
            Self::Textarea(c) => Some(c.field()),
            Self::RichText(c) => Some(c.field()),
            Self::Date(c) => Some(c.field()),
            Self::Select(c) => Some(c.field()),
            Self::Radio(c) => Some(c.field()),
            Self::Checkbox(c) => Some(c.field()),
            Self::Upload(c) => Some(c.field()),
        }
    }

    pub fn field_mut(&mut self) -> Option<&mut Field> {
        match self {
            Self::Html(_) | Self::Script(_) | Self::Button(_) => None,
            Self::Hidden(c) => Some(c.field_mut()),
            Self::Text(c) => Some(c.field_mut()),
            Self::Textarea(c) => Some(c.field_mut()),
            Self::RichText(c) => Some(c.field_mut()),
            Self::Date(c) => Some(c.field_mut()),
            Self::Select(c) => Some(c.field_mut()),
            Self::Radio(c) => Some(c.field_mut()),
            Self::Checkbox(c) => Some(c.field_mut()),
            Self::Upload(c) => Some(c.field_mut()),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.field().map(|f| f.key.as_str())
    }

    pub fn value(&self) -> Option<&str> {
        self.field().map(|f| f.value.as_str())
    }

    /// Message for the last recorded error in the default locale, or `""`.
    /// [`FormBuilder::error_message`](crate::FormBuilder::error_message)
    /// follows the builder's configured locale.
    pub fn error_message(&self) -> String {
        self.field().map(Field::error_message).unwrap_or_default()
    }

    pub fn has_error(&self) -> bool {
        self.field().is_some_and(Field::has_error)
    }

    pub fn placement(&self) -> Placement {
        match self {
            Self::Hidden(_) => Placement::Hidden,
            Self::Button(_) => Placement::Button,
            _ => Placement::Plain,
        }
    }

    /// Read this control's submitted value. Missing fields read as `""`;
    /// checkbox groups join every checked value with `,`.
    pub fn read_input(&self, input: &dyn InputSource) -> Option<String> {
        let key = self.key()?;
        let name = encode_name(key);
        Some(match self {
            Self::Checkbox(_) => input
                .values(&name)
                .join(choice::MULTI_VALUE_SEPARATOR),
            _ => input.value(&name).unwrap_or_default().to_string(),
        })
    }
}

impl Render for Control {
    fn render(&self, config: &FormConfig) -> FormResult<String> {
        Ok(match self {
            Self::Html(c) => c.render(),
            Self::Script(c) => c.render(),
            Self::Button(c) => c.render(config),
            Self::Hidden(c) => c.render(),
            Self::Text(c) => c.render(config),
            Self::Textarea(c) => c.render(config),
            Self::RichText(c) => c.render(config)?,
            Self::Date(c) => c.render(config),
            Self::Select(c) => c.render(config),
            Self::Radio(c) => c.render(config),
            Self::Checkbox(c) => c.render(config),
            Self::Upload(c) => c.render(config)?,
        })
    }
}

macro_rules! control_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Control {
                fn from(control: $variant) -> Self {
                    Self::$variant(control)
                }
            }
        )*
    };
}

control_from!(
    Html, Script, Button, Hidden, Text, Textarea, RichText, Date, Select, Radio, Checkbox, Upload
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MapInput;

    #[test]
    fn test_placement() {
        assert_eq!(Control::from(Hidden::new("id")).placement(), Placement::Hidden);
        assert_eq!(Control::from(Button::new("Go")).placement(), Placement::Button);
        assert_eq!(Control::from(Text::new("name")).placement(), Placement::Plain);
        assert_eq!(Control::from(Html::new("<hr/>")).placement(), Placement::Plain);
    }

    #[test]
    fn test_decorative_controls_have_no_key() {
        assert_eq!(Control::from(Html::new("x")).key(), None);
        assert_eq!(Control::from(Button::new("x")).key(), None);
        assert_eq!(Control::from(Text::new("x")).key(), Some("x"));
    }

    #[test]
    fn test_read_input() {
        let input = MapInput::new()
            .field("n_a_-_b", "x")
            .field("n_tags", "1")
            .field("n_tags", "3");
        assert_eq!(
            Control::from(Text::new("a.b")).read_input(&input).as_deref(),
            Some("x")
        );
        assert_eq!(
            Control::from(Text::new("missing")).read_input(&input).as_deref(),
            Some("")
        );
        assert_eq!(
            Control::from(Checkbox::new("tags")).read_input(&input).as_deref(),
            Some("1,3")
        );
        assert_eq!(Control::from(Html::new("x")).read_input(&input), None);
    }

    #[test]
    fn test_render_dispatch() {
        let config = FormConfig::default();
        let html = Control::from(Script::new("go();")).render(&config).unwrap();
        assert!(html.contains("go();"));
    }
}
