//! Proptest support for tagsmith
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module helps you write a proptest by letting you
//! generate arbitrary HTML trees.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tagsmith = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::attribute::HtmlAttribute;
use crate::content::{DomContent, Fragment};
use crate::element::{ContainerTag, EmptyTag};
use crate::tag::Tag;
use crate::text::{RawText, Text};

const NAMED_CONTAINERS: &[&str] = &["div", "p", "span", "ul", "li", "pre", "textarea"];
const CONTAINER_NAMES: &[&str] = &["div", "p", "span", "ul", "li", "pre", "textarea", ""];
const VOID_NAMES: &[&str] = &["br", "hr", "img", "input"];
const ATTRIBUTE_NAMES: &[&str] = &["id", "class", "title", "data-x", "hidden"];
const ANY_TEXT: &str = "[\u{0009}\u{000a}\u{0020}-\u{D7FF}\u{E000}-\u{FFFD}]*";
const RAW_MARKUP: &str = "<(b|i|em)>[a-z ]*</(b|i|em)>";

fn arb_attribute() -> impl Strategy<Value = HtmlAttribute> {
    (
        prop::sample::select(ATTRIBUTE_NAMES),
        prop::option::of(ANY_TEXT),
    )
        .prop_map(|(name, value)| match value {
            Some(value) => HtmlAttribute::new(name, value),
            None => HtmlAttribute::valueless(name),
        })
}

fn arb_attributes() -> impl Strategy<Value = Vec<HtmlAttribute>> {
    prop::collection::vec(arb_attribute(), 0..4).prop_map(unduplicate_attributes)
}

fn unduplicate_attributes(attributes: Vec<HtmlAttribute>) -> Vec<HtmlAttribute> {
    let mut seen = HashSet::default();
    attributes
        .into_iter()
        .filter(|attribute| seen.insert(attribute.name().to_string()))
        .collect()
}

fn arb_empty_tag() -> impl Strategy<Value = EmptyTag> {
    (prop::sample::select(VOID_NAMES), arb_attributes()).prop_map(|(name, attributes)| {
        attributes
            .into_iter()
            .fold(EmptyTag::new(name), |tag, attribute| tag.with_attribute(attribute))
    })
}

/// Generate arbitrary content: text, raw markup, tags and fragments,
/// nested up to eight levels deep.
pub fn arb_dom_content() -> impl Strategy<Value = DomContent> {
    let leaf = prop_oneof![
        4 => ANY_TEXT.prop_map(|s| DomContent::Text(Text::new(s))),
        1 => RAW_MARKUP.prop_map(|s| DomContent::Raw(RawText::new(s))),
        2 => arb_empty_tag().prop_map(DomContent::Empty),
    ];

    leaf.prop_recursive(
        8,   // levels deep
        256, // maximum size of 256 nodes
        10,  // up to 10 items per collection
        |inner| {
            prop_oneof![
                3 => (
                    prop::sample::select(CONTAINER_NAMES),
                    arb_attributes(),
                    prop::collection::vec(inner.clone(), 0..10),
                )
                    .prop_map(|(name, attributes, children)| {
                        DomContent::Container(container(name, attributes, children))
                    }),
                1 => prop::collection::vec(inner, 0..10)
                    .prop_map(|children| DomContent::Fragment(Fragment::new().with(children))),
            ]
        },
    )
}

fn container(
    name: &'static str,
    attributes: Vec<HtmlAttribute>,
    children: Vec<DomContent>,
) -> ContainerTag {
    attributes
        .into_iter()
        .fold(ContainerTag::new(name), |tag, attribute| {
            tag.with_attribute(attribute)
        })
        .with(children)
}

/// Generate an arbitrary named element with arbitrary content.
///
/// Example:
///
/// ```notrust
/// use proptest::prelude::*;
/// use tagsmith::proptest::arb_container;
/// use tagsmith::Render;
///
/// proptest! {
///   #[test]
///   fn test_render_is_stable(tag in arb_container()) {
///     prop_assert_eq!(tag.render(), tag.render());
///   }
/// }
/// ```
pub fn arb_container() -> impl Strategy<Value = ContainerTag> {
    (
        prop::sample::select(NAMED_CONTAINERS),
        arb_attributes(),
        prop::collection::vec(arb_dom_content(), 0..4),
    )
        .prop_map(|(name, attributes, children)| container(name, attributes, children))
}

/// Generate a valid selector shorthand such as `#main.a.b`.
pub fn arb_selector() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a-z][a-z0-9-]{0,8}"),
        prop::collection::vec("[a-z][a-z0-9-]{0,8}", 0..4),
    )
        .prop_filter("id or class", |(id, classes)| {
            id.is_some() || !classes.is_empty()
        })
        .prop_map(|(id, classes)| {
            let mut selector = String::new();
            if let Some(id) = id {
                selector.push('#');
                selector.push_str(&id);
            }
            for class in classes {
                selector.push('.');
                selector.push_str(&class);
            }
            selector
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::ShortForm;
    use crate::config::Config;
    use crate::render::Render;

    proptest! {
        #[test]
        fn test_render_is_idempotent(content in arb_dom_content()) {
            let config = Config::default();
            prop_assert_eq!(content.render_with(&config), content.render_with(&config));
        }

        #[test]
        fn test_escaped_text_has_no_markup(s in ANY_TEXT) {
            let rendered = Text::new(s).render_with(&Config::default());
            prop_assert!(!rendered.contains('<'));
            prop_assert!(!rendered.contains('>'));
            prop_assert!(!rendered.contains('"'));
        }

        #[test]
        fn test_named_container_is_wrapped(tag in arb_container()) {
            let config = Config::default();
            let rendered = tag.render_with(&config);
            let open = format!("<{}", tag.tag_name());
            let close = format!("</{}>", tag.tag_name());
            prop_assert!(rendered.starts_with(&open));
            prop_assert!(rendered.ends_with(&close));
            let formatted = tag.render_formatted_with(&config);
            prop_assert!(formatted.starts_with(&open));
            prop_assert!(formatted.ends_with('\n'));
        }

        #[test]
        fn test_valid_selectors_parse(selector in arb_selector()) {
            let short_form = ShortForm::parse(&selector);
            prop_assert!(short_form.is_ok(), "{} failed", selector);
        }
    }
}
