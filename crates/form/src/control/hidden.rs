/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::control::field::{Field, ValueControl};
use crate::html::escape;
use crate::naming::encode_name;

#[derive(Debug, Clone, Default)]
pub struct Hidden {
    field: Field,
}

impl Hidden {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            field: Field::new(key),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\" /> \n",
            encode_name(&self.field.key),
            escape(&self.field.value)
        )
    }
}

impl ValueControl for Hidden {
    fn field(&self) -> &Field {
        &self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}
