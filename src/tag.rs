use std::borrow::Cow;
use std::fmt::Display;

use crate::attr::{self, ShortForm};
use crate::attribute::HtmlAttribute;
use crate::render::Render;

// Each entry generates a setter for a well-known attribute name plus its
// conditional variant.
macro_rules! attribute_setters {
    ($($setter:ident, $cond:ident => $name:ident;)*) => {
        $(
            #[doc = concat!("Set the [`attr::", stringify!($name), "`] attribute.")]
            fn $setter(self, value: impl Display) -> Self {
                self.attr(attr::$name, value)
            }

            #[doc = concat!("Call [`Tag::", stringify!($setter), "`] if `condition` holds.")]
            fn $cond(self, condition: bool, value: impl Display) -> Self {
                self.cond_attr(condition, attr::$name, value)
            }
        )*
    };
}

macro_rules! flag_setters {
    ($($setter:ident, $cond:ident => $name:ident;)*) => {
        $(
            #[doc = concat!("Add the valueless [`attr::", stringify!($name), "`] attribute.")]
            fn $setter(self) -> Self {
                self.flag(attr::$name)
            }

            #[doc = concat!("Call [`Tag::", stringify!($setter), "`] if `condition` holds.")]
            fn $cond(self, condition: bool) -> Self {
                self.cond_flag(condition, attr::$name)
            }
        )*
    };
}

/// The attribute API shared by [`EmptyTag`](crate::EmptyTag) and
/// [`ContainerTag`](crate::ContainerTag).
///
/// All builder methods consume the tag and return it, for chaining:
///
/// ```rust
/// use tagsmith::{tags::input, Render, Tag};
///
/// let html = input()
///     .with_type("email")
///     .with_name("email")
///     .with_placeholder("Email")
///     .is_required()
///     .render();
/// assert_eq!(html, r#"<input type="email" name="email" placeholder="Email" required>"#);
/// ```
///
/// Setting an attribute replaces any attribute of the same name, and the
/// new attribute goes to the end of the attribute list.
pub trait Tag: Render + Sized {
    /// The tag name. Empty for anonymous wrappers.
    fn tag_name(&self) -> &str;

    /// The attributes, in rendering order.
    fn attributes(&self) -> &[HtmlAttribute];

    /// Mutable access to the attribute list.
    fn attributes_mut(&mut self) -> &mut Vec<HtmlAttribute>;

    /// Whether this tag has a name (and so renders its own markup).
    fn has_tag_name(&self) -> bool {
        !self.tag_name().is_empty()
    }

    /// Look up an attribute by name.
    fn attribute(&self, name: &str) -> Option<&HtmlAttribute> {
        self.attributes().iter().find(|a| a.name() == name)
    }

    /// Add an attribute, replacing existing attributes with the same name.
    fn set_attribute(&mut self, attribute: HtmlAttribute) {
        let attributes = self.attributes_mut();
        if attribute.has_name() {
            attributes.retain(|a| a.name() != attribute.name());
        }
        attributes.push(attribute);
    }

    /// Remove all attributes with this name.
    fn remove_attribute(&mut self, name: &str) {
        self.attributes_mut().retain(|a| a.name() != name);
    }

    /// Add an attribute object, replacing existing attributes with the same
    /// name.
    fn with_attribute(mut self, attribute: HtmlAttribute) -> Self {
        self.set_attribute(attribute);
        self
    }

    /// Set a custom attribute.
    fn attr(self, name: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.with_attribute(HtmlAttribute::new(name, value.to_string()))
    }

    /// Set a custom attribute without a value.
    fn flag(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.with_attribute(HtmlAttribute::valueless(name))
    }

    /// Call [`Tag::attr`] if `condition` holds.
    fn cond_attr(
        self,
        condition: bool,
        name: impl Into<Cow<'static, str>>,
        value: impl Display,
    ) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    /// Call [`Tag::flag`] if `condition` holds.
    fn cond_flag(self, condition: bool, name: impl Into<Cow<'static, str>>) -> Self {
        if condition {
            self.flag(name)
        } else {
            self
        }
    }

    /// Set the class attribute from several class names.
    fn with_classes(self, classes: &[&str]) -> Self {
        let joined = classes.join(" ");
        self.attr(attr::CLASS, joined.trim())
    }

    /// Set a `data-*` attribute.
    fn with_data(self, key: &str, value: impl Display) -> Self {
        self.attr(format!("{}-{}", attr::DATA, key), value)
    }

    /// Call [`Tag::with_data`] if `condition` holds.
    fn with_cond_data(self, condition: bool, key: &str, value: impl Display) -> Self {
        if condition {
            self.with_data(key, value)
        } else {
            self
        }
    }

    /// Apply the id and classes of a [`ShortForm`].
    fn with_short_form(self, short_form: &ShortForm) -> Self {
        let tag = match short_form.id() {
            Some(id) => self.with_id(id),
            None => self,
        };
        match short_form.classes() {
            Some(classes) => tag.with_class(classes),
            None => tag,
        }
    }

    flag_setters! {
        is_auto_complete, with_cond_auto_complete => AUTOCOMPLETE;
        is_auto_focus, with_cond_auto_focus => AUTOFOCUS;
        is_hidden, with_cond_hidden => HIDDEN;
        is_required, with_cond_required => REQUIRED;
    }

    attribute_setters! {
        with_alt, with_cond_alt => ALT;
        with_action, with_cond_action => ACTION;
        with_charset, with_cond_charset => CHARSET;
        with_class, with_cond_class => CLASS;
        with_content, with_cond_content => CONTENT;
        with_dir, with_cond_dir => DIR;
        with_href, with_cond_href => HREF;
        with_id, with_cond_id => ID;
        with_lang, with_cond_lang => LANG;
        with_method, with_cond_method => METHOD;
        with_name, with_cond_name => NAME;
        with_placeholder, with_cond_placeholder => PLACEHOLDER;
        with_target, with_cond_target => TARGET;
        with_title, with_cond_title => TITLE;
        with_type, with_cond_type => TYPE;
        with_rel, with_cond_rel => REL;
        with_role, with_cond_role => ROLE;
        with_src, with_cond_src => SRC;
        with_style, with_cond_style => STYLE;
        with_value, with_cond_value => VALUE;
    }
}
