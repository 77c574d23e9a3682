use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::Config;
use crate::element::{ContainerTag, EmptyTag};
use crate::pretty::Formatter;
use crate::render::{Render, RenderContext};
use crate::text::{RawText, Text};

/// A node in an HTML tree.
#[derive(Debug, Clone)]
pub enum DomContent {
    /// Escaped text.
    Text(Text),
    /// Markup written as is.
    Raw(RawText),
    /// A tag without children.
    Empty(EmptyTag),
    /// A tag with children.
    Container(ContainerTag),
    /// A sequence of siblings without a wrapping element.
    Fragment(Fragment),
    /// Content computed at render time.
    Dynamic(Dynamic),
}

impl DomContent {
    /// Wrap a custom [`Render`] implementation.
    pub fn dynamic(content: impl Render + Send + Sync + 'static) -> Self {
        DomContent::Dynamic(Dynamic::new(content))
    }

    /// Content built by a closure each time it is rendered.
    ///
    /// The closure sees the render context, including the model.
    pub fn template<F, C>(f: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> C + Send + Sync + 'static,
        C: IntoContent,
    {
        DomContent::dynamic(FnTemplate { f })
    }

    /// Content built from a model of type `M` each time it is rendered.
    ///
    /// Renders nothing when there is no model or the model has another
    /// type.
    ///
    /// ```rust
    /// use tagsmith::{tags::{li, ul}, DomContent, Render};
    ///
    /// struct Todo {
    ///     items: Vec<&'static str>,
    /// }
    ///
    /// let list = ul().with(DomContent::model_template(|todo: &Todo| {
    ///     todo.items.iter().map(|item| li().with(*item)).collect::<Vec<_>>()
    /// }));
    /// let todo = Todo { items: vec!["milk", "eggs"] };
    /// assert_eq!(list.render_with_model(&todo), "<ul><li>milk</li><li>eggs</li></ul>");
    /// assert_eq!(list.render(), "<ul></ul>");
    /// ```
    pub fn model_template<M, F, C>(f: F) -> Self
    where
        M: Any,
        F: Fn(&M) -> C + Send + Sync + 'static,
        C: IntoContent,
    {
        DomContent::dynamic(ModelTemplate {
            f,
            model: PhantomData,
        })
    }

    /// Render indented, with the process-wide configuration.
    pub fn render_formatted(&self) -> String {
        self.render_formatted_with(Config::global())
    }

    /// Render indented, with the given configuration.
    ///
    /// Fragments and anonymous containers lay out their children at the top
    /// level. Other non-container content is written on a single line.
    pub fn render_formatted_with(&self, config: &Config) -> String {
        let mut writer = String::new();
        Formatter::new(RenderContext::new(config)).top_level(&mut writer, self);
        writer
    }
}

impl Render for DomContent {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        match self {
            DomContent::Text(text) => text.render_model(writer, context),
            DomContent::Raw(raw) => raw.render_model(writer, context),
            DomContent::Empty(tag) => tag.render_model(writer, context),
            DomContent::Container(tag) => tag.render_model(writer, context),
            DomContent::Fragment(fragment) => fragment.render_model(writer, context),
            DomContent::Dynamic(dynamic) => dynamic.render_model(writer, context),
        }
    }
}

impl From<Text> for DomContent {
    fn from(text: Text) -> Self {
        DomContent::Text(text)
    }
}

impl From<RawText> for DomContent {
    fn from(raw: RawText) -> Self {
        DomContent::Raw(raw)
    }
}

impl From<EmptyTag> for DomContent {
    fn from(tag: EmptyTag) -> Self {
        DomContent::Empty(tag)
    }
}

impl From<ContainerTag> for DomContent {
    fn from(tag: ContainerTag) -> Self {
        DomContent::Container(tag)
    }
}

impl From<Fragment> for DomContent {
    fn from(fragment: Fragment) -> Self {
        DomContent::Fragment(fragment)
    }
}

impl From<Dynamic> for DomContent {
    fn from(dynamic: Dynamic) -> Self {
        DomContent::Dynamic(dynamic)
    }
}

impl From<&str> for DomContent {
    fn from(text: &str) -> Self {
        DomContent::Text(Text::new(text))
    }
}

impl From<String> for DomContent {
    fn from(text: String) -> Self {
        DomContent::Text(Text::new(text))
    }
}

/// Siblings without a wrapping element.
///
/// This is what [`each`](crate::tags::each) produces. It renders only its
/// children.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    children: Vec<DomContent>,
}

impl Fragment {
    pub fn new() -> Self {
        Fragment::default()
    }

    /// Append content.
    pub fn with(mut self, content: impl IntoContent) -> Self {
        content.append_to(&mut self.children);
        self
    }

    /// Append content in place.
    pub fn push(&mut self, content: impl IntoContent) {
        content.append_to(&mut self.children);
    }

    pub fn children(&self) -> &[DomContent] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Render indented, with the process-wide configuration.
    pub fn render_formatted(&self) -> String {
        self.render_formatted_with(Config::global())
    }

    /// Render indented, with the given configuration. Each child starts at
    /// the top level.
    pub fn render_formatted_with(&self, config: &Config) -> String {
        let mut writer = String::new();
        Formatter::new(RenderContext::new(config)).children(&mut writer, &self.children, 0, false);
        writer
    }
}

impl Render for Fragment {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        for child in &self.children {
            child.render_model(writer, context);
        }
    }
}

impl<C: IntoContent> FromIterator<C> for Fragment {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut children = Vec::new();
        for content in iter {
            content.append_to(&mut children);
        }
        Fragment { children }
    }
}

/// Shared, user-supplied content.
///
/// Cloning a `Dynamic` shares the underlying value rather than copying it,
/// so one subtree can appear under several parents.
#[derive(Clone)]
pub struct Dynamic(Arc<dyn Render + Send + Sync>);

impl Dynamic {
    pub fn new(content: impl Render + Send + Sync + 'static) -> Self {
        Dynamic(Arc::new(content))
    }
}

impl Render for Dynamic {
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        self.0.render_model(writer, context);
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dynamic(..)")
    }
}

struct FnTemplate<F> {
    f: F,
}

impl<F, C> Render for FnTemplate<F>
where
    F: Fn(&RenderContext<'_>) -> C,
    C: IntoContent,
{
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        let mut children = Vec::new();
        (self.f)(context).append_to(&mut children);
        for child in &children {
            child.render_model(writer, context);
        }
    }
}

struct ModelTemplate<M, F> {
    f: F,
    // fn() keeps the template Send + Sync whatever M is
    model: PhantomData<fn() -> M>,
}

impl<M, F, C> Render for ModelTemplate<M, F>
where
    M: Any,
    F: Fn(&M) -> C,
    C: IntoContent,
{
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
        let Some(model) = context.model_as::<M>() else {
            return;
        };
        let mut children = Vec::new();
        (self.f)(model).append_to(&mut children);
        for child in &children {
            child.render_model(writer, context);
        }
    }
}

/// Things that can be appended to a [`ContainerTag`] or [`Fragment`].
///
/// Strings become escaped [`Text`]. `None` and `()` add nothing.
/// Collections and tuples add each of their items in order.
pub trait IntoContent {
    /// Append this content to a list of children.
    fn append_to(self, children: &mut Vec<DomContent>);
}

macro_rules! into_content_via_from {
    ($($t:ty),*) => {
        $(
            impl IntoContent for $t {
                fn append_to(self, children: &mut Vec<DomContent>) {
                    children.push(DomContent::from(self));
                }
            }
        )*
    };
}

into_content_via_from!(Text, RawText, EmptyTag, ContainerTag, Fragment, Dynamic, &str, String);

impl IntoContent for DomContent {
    fn append_to(self, children: &mut Vec<DomContent>) {
        children.push(self);
    }
}

impl IntoContent for &String {
    fn append_to(self, children: &mut Vec<DomContent>) {
        children.push(DomContent::Text(Text::new(self.as_str())));
    }
}

impl IntoContent for () {
    fn append_to(self, _children: &mut Vec<DomContent>) {}
}

impl<T: IntoContent> IntoContent for Option<T> {
    fn append_to(self, children: &mut Vec<DomContent>) {
        if let Some(content) = self {
            content.append_to(children);
        }
    }
}

impl<T: IntoContent> IntoContent for Vec<T> {
    fn append_to(self, children: &mut Vec<DomContent>) {
        for content in self {
            content.append_to(children);
        }
    }
}

impl<T: IntoContent, const N: usize> IntoContent for [T; N] {
    fn append_to(self, children: &mut Vec<DomContent>) {
        for content in self {
            content.append_to(children);
        }
    }
}

macro_rules! into_content_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoContent),+> IntoContent for ($($name,)+) {
            #[allow(non_snake_case)]
            fn append_to(self, children: &mut Vec<DomContent>) {
                let ($($name,)+) = self;
                $($name.append_to(children);)+
            }
        }
    };
}

into_content_tuple!(A);
into_content_tuple!(A, B);
into_content_tuple!(A, B, C);
into_content_tuple!(A, B, C, D);
into_content_tuple!(A, B, C, D, E);
into_content_tuple!(A, B, C, D, E, F);
into_content_tuple!(A, B, C, D, E, F, G);
into_content_tuple!(A, B, C, D, E, F, G, H);
into_content_tuple!(A, B, C, D, E, F, G, H, I);
into_content_tuple!(A, B, C, D, E, F, G, H, I, J);
into_content_tuple!(A, B, C, D, E, F, G, H, I, J, K);
into_content_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
