#![forbid(unsafe_code)]

//! Build HTML with Rust functions instead of string templates.
//!
//! A tree is built from element constructors in [`tags`], configured through
//! the fluent [`Tag`] API, and rendered to a compact string with
//! [`Render::render`] or to indented text with
//! [`ContainerTag::render_formatted`].
//!
//! ```rust
//! use tagsmith::{attrs, join, tags::*, Render, Tag};
//!
//! let page = html().with((
//!     head().with(title_with("Test")),
//!     body().with((
//!         h1_with(join!("Welcome", a_with("home").with_href("/"), ".")),
//!         div_attrs_with(&attrs("#main.content")?, p_with("Hi & bye")),
//!     )),
//! ));
//! assert_eq!(
//!     page.render(),
//!     concat!(
//!         "<html><head><title>Test</title></head><body>",
//!         "<h1>Welcome <a href=\"/\">home</a>.</h1>",
//!         "<div id=\"main\" class=\"content\"><p>Hi &amp; bye</p></div>",
//!         "</body></html>",
//!     )
//! );
//! # Ok::<(), tagsmith::Error>(())
//! ```
//!
//! Text is escaped with the configured escaper; [`RawText`] is not. See
//! [`Config`] for the rendering hooks.

pub mod attr;
mod attribute;
pub mod config;
mod content;
mod element;
mod encoding;
mod entity;
mod error;
mod html5elements;
pub mod inline;
mod joiner;
mod pretty;
mod render;
mod tag;
pub mod tags;
mod text;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use attr::ShortForm;
pub use attribute::{AttributeValue, HtmlAttribute};
pub use config::Config;
pub use content::{DomContent, Dynamic, Fragment, IntoContent};
pub use element::{ContainerTag, EmptyTag};
pub use entity::escape_html;
pub use error::Error;
pub use html5elements::{element, is_void_element, HtmlNames};
pub use joiner::{JoinPart, Joiner};
pub use render::{Render, RenderContext};
pub use tag::Tag;
pub use tags::{attrs, raw_html, text};
pub use text::{RawText, Text};
