//! Inline static files into the document.
//!
//! Files are read once, when the tree is built. Their encoding is detected
//! from a byte order mark or a declared charset, falling back to UTF-8.
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::element::ContainerTag;
use crate::encoding::decode;
use crate::tags::{script, style};
use crate::text::{RawText, Text};
use crate::Error;

/// How to inline a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetFormat {
    /// A `<style>` element, minified with [`Config::css_minifier`].
    CssMin,
    /// A `<style>` element with the file as is.
    Css,
    /// A `<script>` element, minified with [`Config::js_minifier`].
    JsMin,
    /// A `<script>` element with the file as is.
    Js,
}

fn read_file(path: &Path) -> Result<String, Error> {
    let data = fs::read(path)?;
    Ok(decode(&data))
}

/// Read a file and wrap it in a `<style>` or `<script>` element, using the
/// process-wide configuration for minification.
pub fn inline_static_resource(
    path: impl AsRef<Path>,
    format: TargetFormat,
) -> Result<ContainerTag, Error> {
    inline_static_resource_with(path, format, Config::global())
}

/// Like [`inline_static_resource`], with the given configuration.
///
/// ```rust
/// use std::io::Write;
/// use tagsmith::{inline::{inline_static_resource_with, TargetFormat}, Config, Render};
///
/// let mut file = tempfile::NamedTempFile::new()?;
/// write!(file, "p {{ color: red; }}")?;
/// let config = Config::default().with_css_minifier(|css| css.replace(' ', ""));
/// let style = inline_static_resource_with(file.path(), TargetFormat::CssMin, &config)?;
/// assert_eq!(style.render(), "<style>p{color:red;}</style>");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn inline_static_resource_with(
    path: impl AsRef<Path>,
    format: TargetFormat,
    config: &Config,
) -> Result<ContainerTag, Error> {
    let path = path.as_ref();
    let file = read_file(path)?;
    debug!(path = %path.display(), ?format, size = file.len(), "inlining static resource");
    let tag = match format {
        TargetFormat::CssMin => style().with(RawText::new((config.css_minifier)(&file))),
        TargetFormat::Css => style().with(RawText::new(file)),
        TargetFormat::JsMin => script().with(RawText::new((config.js_minifier)(&file))),
        TargetFormat::Js => script().with(RawText::new(file)),
    };
    Ok(tag)
}

/// The file as a `<style>` element.
pub fn style_with_inline_file(path: impl AsRef<Path>) -> Result<ContainerTag, Error> {
    inline_static_resource(path, TargetFormat::Css)
}

/// The file as a `<script>` element.
pub fn script_with_inline_file(path: impl AsRef<Path>) -> Result<ContainerTag, Error> {
    inline_static_resource(path, TargetFormat::Js)
}

/// The file as a minified `<style>` element.
pub fn style_with_inline_file_min(path: impl AsRef<Path>) -> Result<ContainerTag, Error> {
    inline_static_resource(path, TargetFormat::CssMin)
}

/// The file as a minified `<script>` element.
pub fn script_with_inline_file_min(path: impl AsRef<Path>) -> Result<ContainerTag, Error> {
    inline_static_resource(path, TargetFormat::JsMin)
}

/// The file contents as text, escaped when rendered.
pub fn file_as_escaped_string(path: impl AsRef<Path>) -> Result<Text, Error> {
    Ok(Text::new(read_file(path.as_ref())?))
}

/// The file contents as markup, inserted as is.
pub fn file_as_string(path: impl AsRef<Path>) -> Result<RawText, Error> {
    Ok(RawText::new(read_file(path.as_ref())?))
}
