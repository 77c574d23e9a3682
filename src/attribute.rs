use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::render::{Render, RenderContext};

type Binding = Arc<dyn Fn(&RenderContext<'_>) -> String + Send + Sync>;

/// The value part of an attribute.
#[derive(Clone)]
pub enum AttributeValue {
    /// A boolean attribute, rendered as just its name: `required`.
    Valueless,
    /// A text value, escaped when rendered.
    Text(String),
    /// A value computed from the render context, written verbatim.
    Bound(Binding),
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Valueless => write!(f, "Valueless"),
            AttributeValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            AttributeValue::Bound(_) => write!(f, "Bound(..)"),
        }
    }
}

/// An HTML attribute: a name and maybe a value.
///
/// An attribute with an empty name renders nothing at all.
#[derive(Debug, Clone)]
pub struct HtmlAttribute {
    name: Cow<'static, str>,
    value: AttributeValue,
}

impl HtmlAttribute {
    /// An attribute with a text value.
    ///
    /// ```rust
    /// use tagsmith::{HtmlAttribute, Render};
    ///
    /// let href = HtmlAttribute::new("href", "http://example.com");
    /// assert_eq!(href.render(), r#" href="http://example.com""#);
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        HtmlAttribute {
            name: name.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    /// An attribute without a value, such as `hidden`.
    pub fn valueless(name: impl Into<Cow<'static, str>>) -> Self {
        HtmlAttribute {
            name: name.into(),
            value: AttributeValue::Valueless,
        }
    }

    /// An attribute whose value is computed when rendering, typically from
    /// the model.
    ///
    /// The computed value is written as is, without escaping.
    ///
    /// ```rust
    /// use tagsmith::{HtmlAttribute, Render};
    ///
    /// struct Page { slug: &'static str }
    ///
    /// let href = HtmlAttribute::bound("href", |context| {
    ///     match context.model_as::<Page>() {
    ///         Some(page) => format!("/pages/{}", page.slug),
    ///         None => "/".to_string(),
    ///     }
    /// });
    /// assert_eq!(href.render(), r#" href="/""#);
    /// assert_eq!(href.render_with_model(&Page { slug: "about" }), r#" href="/pages/about""#);
    /// ```
    pub fn bound<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> String + Send + Sync + 'static,
    {
        HtmlAttribute {
            name: name.into(),
            value: AttributeValue::Bound(Arc::new(f)),
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text value, unescaped. `None` for valueless and bound attributes.
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The attribute value.
    pub fn attribute_value(&self) -> &AttributeValue {
        &self.value
    }

    /// Whether the attribute renders anything.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

impl Render for HtmlAttribute {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        if !self.has_name() {
            return;
        }
        writer.push(' ');
        writer.push_str(&self.name);
        match &self.value {
            AttributeValue::Valueless => {}
            AttributeValue::Text(text) => {
                writer.push_str("=\"");
                writer.push_str(&context.config().escape(text));
                writer.push('"');
            }
            AttributeValue::Bound(binding) => {
                writer.push_str("=\"");
                writer.push_str(&binding(context));
                writer.push('"');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_render() {
        let attribute_with_value = HtmlAttribute::new("href", "http://example.com");
        assert_eq!(attribute_with_value.render(), r#" href="http://example.com""#);
        let attribute = HtmlAttribute::valueless("required");
        assert_eq!(attribute.render(), " required");
        let nameless = HtmlAttribute::valueless("");
        assert_eq!(nameless.render(), "");
        let nameless = HtmlAttribute::new("", "value");
        assert_eq!(nameless.render(), "");
    }

    #[test]
    fn test_render_escapes_value() {
        let attribute = HtmlAttribute::new("title", r#"say "hi" & <go>"#);
        assert_eq!(
            attribute.render(),
            r#" title="say &quot;hi&quot; &amp; &lt;go&gt;""#
        );
        // the stored value stays as given
        assert_eq!(attribute.value(), Some(r#"say "hi" & <go>"#));
    }

    #[test]
    fn test_render_uses_configured_escaper() {
        let config = Config::default().with_text_escaper(|text| text.to_uppercase());
        let attribute = HtmlAttribute::new("title", "quiet");
        assert_eq!(attribute.render_with(&config), r#" title="QUIET""#);
    }

    #[test]
    fn test_bound_is_not_escaped() {
        let attribute = HtmlAttribute::bound("data-raw", |_| "<&>".to_string());
        assert_eq!(attribute.render(), r#" data-raw="<&>""#);
        assert_eq!(attribute.value(), None);
    }
}
