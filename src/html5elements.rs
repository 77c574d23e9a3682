use std::sync::LazyLock;

use ahash::{HashSet, HashSetExt};

use crate::content::DomContent;
use crate::element::{ContainerTag, EmptyTag};

/// A case-insensitive set of HTML element names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlNames {
    names: HashSet<String>,
}

impl HtmlNames {
    /// Create a set from a list of names.
    pub fn new(names: &[&str]) -> Self {
        let mut set = HashSet::new();
        for name in names {
            set.insert(name.to_ascii_lowercase());
        }
        Self { names: set }
    }

    /// Add a name to the set.
    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_ascii_lowercase());
    }

    /// Remove a name from the set.
    pub fn remove(&mut self, name: &str) {
        self.names.remove(&name.to_ascii_lowercase());
    }

    /// Whether the name is in the set. The comparison ignores ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        // avoid allocating for the common, already lowercase case
        if self.names.contains(name) {
            return true;
        }
        if !name.bytes().any(|b| b.is_ascii_uppercase()) {
            return false;
        }
        self.names.contains(&name.to_ascii_lowercase())
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct Html5Elements {
    pub(crate) void_names: HtmlNames,
    pub(crate) preformatted_names: HtmlNames,
}

impl Html5Elements {
    fn new() -> Self {
        let void_names = [
            "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
            "param", "source", "track", "wbr",
        ];
        let preformatted_names = ["pre", "textarea"];
        Self {
            void_names: HtmlNames::new(&void_names),
            preformatted_names: HtmlNames::new(&preformatted_names),
        }
    }
}

pub(crate) static HTML5_ELEMENTS: LazyLock<Html5Elements> = LazyLock::new(Html5Elements::new);

/// Whether `name` is an HTML5 void element, one that never has content or
/// a closing tag.
pub fn is_void_element(name: &str) -> bool {
    HTML5_ELEMENTS.void_names.matches(name)
}

/// Create an element by name, picking the tag shape from the HTML5 void
/// element list.
///
/// ```rust
/// use tagsmith::{element, Render};
///
/// assert_eq!(element("br").render(), "<br>");
/// assert_eq!(element("span").render(), "<span></span>");
/// ```
pub fn element(name: &str) -> DomContent {
    if is_void_element(name) {
        DomContent::Empty(EmptyTag::new(name.to_string()))
    } else {
        DomContent::Container(ContainerTag::new(name.to_string()))
    }
}
