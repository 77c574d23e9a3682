//! Element constructors and composition helpers.
//!
//! Every HTML5 element has a constructor named after it. Container elements
//! come in four flavors:
//!
//! ```rust
//! use tagsmith::{attrs, tags::{p, p_attrs, p_attrs_with, p_with}, Render};
//!
//! assert_eq!(p().render(), "<p></p>");
//! assert_eq!(p_with("Hi").render(), "<p>Hi</p>");
//! let short_form = attrs("#intro.lead")?;
//! assert_eq!(p_attrs(&short_form).render(), r#"<p id="intro" class="lead"></p>"#);
//! assert_eq!(
//!     p_attrs_with(&short_form, "Hi").render(),
//!     r#"<p id="intro" class="lead">Hi</p>"#
//! );
//! # Ok::<(), tagsmith::Error>(())
//! ```
//!
//! Void elements only have the plain and the `_attrs` flavor.
use std::borrow::Cow;

use crate::attr::ShortForm;
use crate::config::Config;
use crate::content::{Fragment, IntoContent};
use crate::element::{ContainerTag, EmptyTag};
use crate::error::Error;
use crate::render::Render;
use crate::tag::Tag;
use crate::text::{RawText, Text};

mod elements;

pub use elements::*;

const DOCTYPE: &str = "<!DOCTYPE html>";

/// `Some(value)` if `condition` holds, `None` otherwise.
///
/// Appending `None` adds nothing, so this reads as an inline `if`:
///
/// ```rust
/// use tagsmith::{tags::{div, if_then, span}, Render};
///
/// let logged_in = false;
/// let html = div().with(if_then(logged_in, span().with("Welcome back"))).render();
/// assert_eq!(html, "<div></div>");
/// ```
pub fn if_then<T>(condition: bool, value: T) -> Option<T> {
    if condition {
        Some(value)
    } else {
        None
    }
}

/// `if_value` if `condition` holds, `else_value` otherwise.
pub fn if_else<T>(condition: bool, if_value: T, else_value: T) -> T {
    if condition {
        if_value
    } else {
        else_value
    }
}

/// Parse selector shorthand such as `"#id.class1.class2"`.
///
/// See [`ShortForm::parse`].
pub fn attrs(selector: &str) -> Result<ShortForm, Error> {
    ShortForm::parse(selector)
}

/// Map every item to content, as a sequence of siblings.
///
/// ```rust
/// use tagsmith::{tags::{each, li, ul}, Render};
///
/// let numbers = [1, 2, 3];
/// let html = ul().with(each(numbers, |n| li().with(n.to_string()))).render();
/// assert_eq!(html, "<ul><li>1</li><li>2</li><li>3</li></ul>");
/// ```
pub fn each<I, F, C>(items: I, mapper: F) -> Fragment
where
    I: IntoIterator,
    F: FnMut(I::Item) -> C,
    C: IntoContent,
{
    items.into_iter().map(mapper).collect()
}

/// Map every key/value entry to content, as a sequence of siblings.
///
/// Entries are visited in the map's iteration order; use an ordered map
/// for predictable output.
pub fn each_entry<M, K, V, F, C>(map: M, mut mapper: F) -> Fragment
where
    M: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> C,
    C: IntoContent,
{
    map.into_iter().map(|(key, value)| mapper(key, value)).collect()
}

/// Keep the items matching `predicate`, in order.
pub fn filter<I, P>(items: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Markup inserted as is, without escaping.
pub fn raw_html(html: impl Into<String>) -> RawText {
    RawText::new(html)
}

/// Text that is escaped when rendered.
pub fn text(text: impl Into<String>) -> Text {
    Text::new(text)
}

/// A container element with any name.
pub fn tag(name: impl Into<Cow<'static, str>>) -> ContainerTag {
    ContainerTag::new(name)
}

/// A void element with any name.
pub fn empty_tag(name: impl Into<Cow<'static, str>>) -> EmptyTag {
    EmptyTag::new(name)
}

/// The HTML5 document type declaration, `<!DOCTYPE html>`.
pub fn document() -> RawText {
    RawText::new(DOCTYPE)
}

fn check_html(html: &ContainerTag) -> Result<(), Error> {
    if html.tag_name() == "html" {
        Ok(())
    } else {
        Err(Error::NotHtmlElement(html.tag_name().to_string()))
    }
}

/// A complete document: the document type declaration followed by the
/// rendered `html` element.
///
/// ```rust
/// use tagsmith::tags::{body, document_with, html};
///
/// assert_eq!(
///     document_with(&html().with(body()))?,
///     "<!DOCTYPE html><html><body></body></html>"
/// );
/// assert!(document_with(&body()).is_err());
/// # Ok::<(), tagsmith::Error>(())
/// ```
pub fn document_with(html: &ContainerTag) -> Result<String, Error> {
    check_html(html)?;
    let mut document = String::from(DOCTYPE);
    document.push_str(&html.render());
    Ok(document)
}

/// Like [`document_with`], with the `html` element formatted.
pub fn document_formatted(html: &ContainerTag) -> Result<String, Error> {
    document_formatted_with(html, Config::global())
}

/// Like [`document_formatted`], with the given configuration.
pub fn document_formatted_with(html: &ContainerTag, config: &Config) -> Result<String, Error> {
    check_html(html)?;
    let mut document = String::from(DOCTYPE);
    document.push('\n');
    document.push_str(&html.render_formatted_with(config));
    Ok(document)
}
