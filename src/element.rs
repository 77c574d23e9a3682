use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use crate::attribute::HtmlAttribute;
use crate::config::Config;
use crate::content::{DomContent, IntoContent};
use crate::pretty::Formatter;
use crate::render::{Render, RenderContext};
use crate::tag::Tag;
use crate::text::Text;

fn write_open_tag(
    writer: &mut String,
    name: &str,
    attributes: &[HtmlAttribute],
    context: &RenderContext<'_>,
    self_close: bool,
) {
    if name.is_empty() {
        return;
    }
    writer.push('<');
    writer.push_str(name);
    for attribute in attributes {
        attribute.render_model(writer, context);
    }
    if self_close {
        writer.push('/');
    }
    writer.push('>');
}

fn write_close_tag(writer: &mut String, name: &str) {
    if name.is_empty() {
        return;
    }
    writer.push_str("</");
    writer.push_str(name);
    writer.push('>');
}

/// A tag that cannot have children, such as `<br>` or `<img>`.
#[derive(Debug, Clone)]
pub struct EmptyTag {
    name: Cow<'static, str>,
    attributes: Vec<HtmlAttribute>,
}

impl EmptyTag {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        EmptyTag {
            name: name.into(),
            attributes: Vec::new(),
        }
    }
}

impl Tag for EmptyTag {
    fn tag_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[HtmlAttribute] {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Vec<HtmlAttribute> {
        &mut self.attributes
    }
}

impl Render for EmptyTag {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        write_open_tag(
            writer,
            &self.name,
            &self.attributes,
            context,
            context.config().close_empty_tags,
        );
    }
}

/// A tag with ordered children.
///
/// A container with an empty name is anonymous: it renders only its
/// children.
///
/// Children are moved in, so a container can never contain itself:
///
/// ```compile_fail
/// use tagsmith::tags::div;
///
/// let outer = div();
/// let outer = outer.with(outer);
/// ```
#[derive(Debug, Clone)]
pub struct ContainerTag {
    name: Cow<'static, str>,
    attributes: Vec<HtmlAttribute>,
    children: Vec<DomContent>,
}

impl ContainerTag {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        ContainerTag {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append content to the end of this element.
    ///
    /// Anything implementing [`IntoContent`] can be appended: nodes, strings
    /// (as escaped text), `Option`s (where `None` adds nothing), vectors,
    /// arrays and tuples.
    ///
    /// ```rust
    /// use tagsmith::{tags::{div, p, span}, Render, Text};
    ///
    /// let html = div()
    ///     .with((p().with("One"), None::<Text>, "two & three"))
    ///     .with(vec![span(), span()])
    ///     .render();
    /// assert_eq!(html, "<div><p>One</p>two &amp; three<span></span><span></span></div>");
    /// ```
    pub fn with(mut self, content: impl IntoContent) -> Self {
        content.append_to(&mut self.children);
        self
    }

    /// Call [`ContainerTag::with`] if `condition` holds.
    pub fn cond_with(self, condition: bool, content: impl IntoContent) -> Self {
        if condition {
            self.with(content)
        } else {
            self
        }
    }

    /// Append escaped text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with(Text::new(text))
    }

    /// Append content in place.
    pub fn push(&mut self, content: impl IntoContent) {
        content.append_to(&mut self.children);
    }

    pub fn children(&self) -> &[DomContent] {
        &self.children
    }

    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    /// Render indented, with the process-wide configuration.
    ///
    /// Each element goes on its own line, indented by its depth. The
    /// content of whitespace-preserving elements (`pre` and `textarea` by
    /// default) is left as is.
    ///
    /// ```rust
    /// use tagsmith::tags::{div, p};
    ///
    /// assert_eq!(
    ///     div().with(p().with("Hello")).render_formatted(),
    ///     "<div>\n    <p>\n        Hello\n    </p>\n</div>\n"
    /// );
    /// ```
    pub fn render_formatted(&self) -> String {
        self.render_formatted_with(Config::global())
    }

    /// Render indented, with the given configuration.
    pub fn render_formatted_with(&self, config: &Config) -> String {
        self.render_formatted_model(&RenderContext::new(config))
    }

    /// Render indented, with the given render context.
    pub fn render_formatted_model(&self, context: &RenderContext<'_>) -> String {
        let mut writer = String::new();
        Formatter::new(*context).container(&mut writer, self, 0);
        writer
    }

    pub(crate) fn write_open_tag(&self, writer: &mut String, context: &RenderContext<'_>) {
        write_open_tag(writer, &self.name, &self.attributes, context, false);
    }

    pub(crate) fn write_close_tag(&self, writer: &mut String) {
        write_close_tag(writer, &self.name);
    }
}

impl Tag for ContainerTag {
    fn tag_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[HtmlAttribute] {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Vec<HtmlAttribute> {
        &mut self.attributes
    }
}

impl Render for ContainerTag {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        self.write_open_tag(writer, context);
        for child in &self.children {
            child.render_model(writer, context);
        }
        self.write_close_tag(writer);
    }
}

// Tags compare by what they render to, not by how they were built.
macro_rules! rendered_equality {
    ($($t:ty),*) => {
        $(
            impl PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    self.render() == other.render()
                }
            }

            impl Eq for $t {}

            impl Hash for $t {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.render().hash(state);
                }
            }
        )*
    };
}

rendered_equality!(EmptyTag, ContainerTag);
