use crate::render::{Render, RenderContext};

/// Text content. It is escaped when rendered.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Text { text: text.into() }
    }

    /// Get the text value, unescaped.
    pub fn get(&self) -> &str {
        &self.text
    }
}

impl Render for Text {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        writer.push_str(&context.config().escape(&self.text));
    }
}

/// Text that is rendered as is, without escaping.
///
/// Use this for markup that is already HTML, such as a doctype declaration
/// or the contents of an inlined file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawText {
    text: String,
}

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        RawText { text: text.into() }
    }

    /// Get the raw markup.
    pub fn get(&self) -> &str {
        &self.text
    }
}

impl Render for RawText {
    fn render_model(&self, writer: &mut String, _context: &RenderContext<'_>) {
        writer.push_str(&self.text);
    }
}
