//! Standard HTML attribute names, and the selector shorthand.
//!
//! The constants can be passed wherever an attribute name is expected:
//!
//! ```rust
//! use tagsmith::{attr, tags::div, Render, Tag};
//!
//! let html = div().attr(attr::ROLE, "banner").render();
//! assert_eq!(html, r#"<div role="banner"></div>"#);
//! ```
//!
//! [`ShortForm`] parses a CSS selector-like string such as
//! `"#main.wide.dark"` into an id and a class list.
use std::str::FromStr;

use crate::error::Error;

pub const ACCEPT: &str = "accept";
pub const ACCEPT_CHARSET: &str = "accept-charset";
pub const ACCESSKEY: &str = "accesskey";
pub const ACTION: &str = "action";
pub const ALIGN: &str = "align";
pub const ALT: &str = "alt";
pub const ASYNC: &str = "async";
pub const AUTOCOMPLETE: &str = "autocomplete";
pub const AUTOFOCUS: &str = "autofocus";
pub const AUTOPLAY: &str = "autoplay";
pub const AUTOSAVE: &str = "autosave";
pub const BORDER: &str = "border";
pub const BUFFERED: &str = "buffered";
pub const CHALLENGE: &str = "challenge";
pub const CHARSET: &str = "charset";
pub const CHECKED: &str = "checked";
pub const CITE: &str = "cite";
pub const CLASS: &str = "class";
pub const COLOR: &str = "color";
pub const COLS: &str = "cols";
pub const COLSPAN: &str = "colspan";
pub const CONTENT: &str = "content";
pub const CONTENTEDITABLE: &str = "contenteditable";
pub const CONTEXTMENU: &str = "contextmenu";
pub const CONTROLS: &str = "controls";
pub const COORDS: &str = "coords";
pub const DATA: &str = "data";
pub const DATETIME: &str = "datetime";
pub const DEFAULT: &str = "default";
pub const DEFER: &str = "defer";
pub const DIR: &str = "dir";
pub const DIRNAME: &str = "dirname";
pub const DISABLED: &str = "disabled";
pub const DOWNLOAD: &str = "download";
pub const DRAGGABLE: &str = "draggable";
pub const DROPZONE: &str = "dropzone";
pub const ENCTYPE: &str = "enctype";
pub const FOR: &str = "for";
pub const FORM: &str = "form";
pub const FORMACTION: &str = "formaction";
pub const HEADERS: &str = "headers";
pub const HEIGHT: &str = "height";
pub const HIDDEN: &str = "hidden";
pub const HIGH: &str = "high";
pub const HREF: &str = "href";
pub const HREFLANG: &str = "hreflang";
pub const HTTP_EQUIV: &str = "http-equiv";
pub const ICON: &str = "icon";
pub const ID: &str = "id";
pub const ISMAP: &str = "ismap";
pub const ITEMPROP: &str = "itemprop";
pub const KEYTYPE: &str = "keytype";
pub const KIND: &str = "kind";
pub const LABEL: &str = "label";
pub const LANG: &str = "lang";
pub const LANGUAGE: &str = "language";
pub const LIST: &str = "list";
pub const LOOP: &str = "loop";
pub const LOW: &str = "low";
pub const MANIFEST: &str = "manifest";
pub const MAX: &str = "max";
pub const MAXLENGTH: &str = "maxlength";
pub const MEDIA: &str = "media";
pub const METHOD: &str = "method";
pub const MIN: &str = "min";
pub const MULTIPLE: &str = "multiple";
pub const NAME: &str = "name";
pub const NOVALIDATE: &str = "novalidate";
pub const OPEN: &str = "open";
pub const OPTIMUM: &str = "optimum";
pub const PATTERN: &str = "pattern";
pub const PING: &str = "ping";
pub const PLACEHOLDER: &str = "placeholder";
pub const POSTER: &str = "poster";
pub const PRELOAD: &str = "preload";
pub const PUBDATE: &str = "pubdate";
pub const RADIOGROUP: &str = "radiogroup";
pub const READONLY: &str = "readonly";
pub const REL: &str = "rel";
pub const REQUIRED: &str = "required";
pub const REVERSED: &str = "reversed";
pub const ROLE: &str = "role";
pub const ROWS: &str = "rows";
pub const ROWSPAN: &str = "rowspan";
pub const SANDBOX: &str = "sandbox";
pub const SCOPE: &str = "scope";
pub const SCOPED: &str = "scoped";
pub const SEAMLESS: &str = "seamless";
pub const SELECTED: &str = "selected";
pub const SHAPE: &str = "shape";
pub const SIZE: &str = "size";
pub const SIZES: &str = "sizes";
pub const SPAN: &str = "span";
pub const SPELLCHECK: &str = "spellcheck";
pub const SRC: &str = "src";
pub const SRCDOC: &str = "srcdoc";
pub const SRCLANG: &str = "srclang";
pub const SRCSET: &str = "srcset";
pub const START: &str = "start";
pub const STEP: &str = "step";
pub const STYLE: &str = "style";
pub const SUMMARY: &str = "summary";
pub const TABINDEX: &str = "tabindex";
pub const TARGET: &str = "target";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";
pub const USEMAP: &str = "usemap";
pub const VALUE: &str = "value";
pub const WIDTH: &str = "width";
pub const WRAP: &str = "wrap";

/// An id and a class list parsed from selector shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortForm {
    id: String,
    classes: String,
}

impl ShortForm {
    /// Create a short form directly from an id and a space-separated class
    /// list. Either may be empty.
    pub fn new(id: impl Into<String>, classes: impl Into<String>) -> Self {
        ShortForm {
            id: id.into(),
            classes: classes.into(),
        }
    }

    /// Parse selector shorthand.
    ///
    /// At most one id is allowed, written as `#id` at the start of a
    /// segment; every other `.`-separated segment is a class name.
    ///
    /// ```rust
    /// use tagsmith::ShortForm;
    ///
    /// let short = ShortForm::parse("#main.wide.dark")?;
    /// assert_eq!(short.id(), Some("main"));
    /// assert_eq!(short.classes(), Some("wide dark"));
    /// # Ok::<(), tagsmith::Error>(())
    /// ```
    pub fn parse(attrs: &str) -> Result<Self, Error> {
        if !attrs.contains('.') && !attrs.contains('#') {
            return Err(Error::MissingIdOrClass(attrs.to_string()));
        }
        if attrs.split('#').count() > 2 {
            return Err(Error::MultipleIds(attrs.to_string()));
        }
        let mut id = "";
        let mut classes = String::new();
        for segment in attrs.split('.') {
            if segment.contains('#') {
                match segment.strip_prefix('#') {
                    Some(rest) => id = rest,
                    None => return Err(Error::IdNotAtStart(attrs.to_string())),
                }
            } else {
                classes.push_str(segment);
                classes.push(' ');
            }
        }
        Ok(ShortForm::new(id.trim(), classes.trim()))
    }

    /// The id, if one was given.
    pub fn id(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    /// The space-separated class list, if any classes were given.
    pub fn classes(&self) -> Option<&str> {
        if self.classes.is_empty() {
            None
        } else {
            Some(&self.classes)
        }
    }

    /// Whether an id was given.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Whether any classes were given.
    pub fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }
}

impl FromStr for ShortForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShortForm::parse(s)
    }
}
