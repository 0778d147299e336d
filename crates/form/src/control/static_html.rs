/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

/// Raw markup emitted as-is.
#[derive(Debug, Clone, Default)]
pub struct Html {
    pub html: String,
}

impl Html {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn render(&self) -> String {
        self.html.clone()
    }
}

/// Raw script body emitted inside a script element.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub body: String,
}

impl Script {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn render(&self) -> String {
        format!("<script type=\"text/javascript\">\n{}\n</script>\n", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_is_verbatim() {
        assert_eq!(Html::new("<hr/>").render(), "<hr/>");
    }

    #[test]
    fn test_script_envelope() {
        assert_eq!(
            Script::new("alert(1);").render(),
            "<script type=\"text/javascript\">\nalert(1);\n</script>\n"
        );
    }
}
