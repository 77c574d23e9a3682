use crate::config::Config;
use crate::content::{DomContent, Fragment};
use crate::element::{ContainerTag, EmptyTag};
use crate::render::Render;
use crate::text::{RawText, Text};

/// One piece of a [`Joiner`].
#[derive(Debug, Clone)]
pub enum JoinPart {
    /// Contributes nothing, not even a separator.
    Skip,
    /// A string, inserted as is.
    Str(String),
    /// Content, inserted rendered.
    Content(DomContent),
}

impl From<&str> for JoinPart {
    fn from(s: &str) -> Self {
        JoinPart::Str(s.to_string())
    }
}

impl From<String> for JoinPart {
    fn from(s: String) -> Self {
        JoinPart::Str(s)
    }
}

impl From<DomContent> for JoinPart {
    fn from(content: DomContent) -> Self {
        JoinPart::Content(content)
    }
}

macro_rules! join_part_from_content {
    ($($t:ty),*) => {
        $(
            impl From<$t> for JoinPart {
                fn from(content: $t) -> Self {
                    JoinPart::Content(content.into())
                }
            }
        )*
    };
}

join_part_from_content!(Text, RawText, EmptyTag, ContainerTag, Fragment);

impl<T: Into<JoinPart>> From<Option<T>> for JoinPart {
    fn from(part: Option<T>) -> Self {
        match part {
            Some(part) => part.into(),
            None => JoinPart::Skip,
        }
    }
}

/// Joins strings and rendered content into a single piece of markup.
///
/// Every part is trimmed, the parts are joined by the separator, and the
/// whole result is trimmed again. Strings are inserted without escaping, so
/// they may contain markup. With punctuation fixing on, a whitespace
/// character directly before a `.` or `,` is removed, so sentences can be
/// assembled from parts.
///
/// ```rust
/// use tagsmith::{tags::a, Joiner, Render, Tag};
///
/// let sentence = Joiner::new(" ")
///     .fix_punctuation(true)
///     .part("See")
///     .part(a().with_href("/docs").with("the docs"))
///     .part(".")
///     .finish();
/// assert_eq!(sentence.render(), r#"See <a href="/docs">the docs</a>."#);
/// ```
#[derive(Debug, Clone)]
pub struct Joiner {
    separator: String,
    fix_punctuation: bool,
    parts: Vec<JoinPart>,
}

impl Joiner {
    pub fn new(separator: impl Into<String>) -> Self {
        Joiner {
            separator: separator.into(),
            fix_punctuation: false,
            parts: Vec::new(),
        }
    }

    /// Remove whitespace directly before `.` and `,` in the result.
    pub fn fix_punctuation(mut self, fix: bool) -> Self {
        self.fix_punctuation = fix;
        self
    }

    /// Add a part. `None` parts are skipped.
    pub fn part(mut self, part: impl Into<JoinPart>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Join, rendering content with the process-wide configuration.
    pub fn finish(self) -> RawText {
        self.finish_with(Config::global())
    }

    /// Join, rendering content with the given configuration.
    pub fn finish_with(self, config: &Config) -> RawText {
        let pieces: Vec<String> = self
            .parts
            .iter()
            .filter_map(|part| match part {
                JoinPart::Skip => None,
                JoinPart::Str(s) => Some(s.trim().to_string()),
                JoinPart::Content(content) => Some(content.render_with(config).trim().to_string()),
            })
            .collect();
        let joined = pieces.join(&self.separator);
        let joined = joined.trim();
        if self.fix_punctuation {
            RawText::new(fix_punctuation(joined))
        } else {
            RawText::new(joined)
        }
    }
}

fn fix_punctuation(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && matches!(chars.peek(), Some('.') | Some(',')) {
            continue;
        }
        result.push(c);
    }
    result
}

/// Join parts with a space, fixing the spacing before `.` and `,`.
///
/// Parts may be strings, content, or `Option`s of those; `None` parts are
/// skipped. The result is [`RawText`](crate::RawText).
///
/// ```rust
/// use tagsmith::{join, tags::{code, p}, Render};
///
/// let html = p().with(join!("Use", code().with("cargo"), ",", "then rest", None::<&str>, "."));
/// assert_eq!(html.render(), "<p>Use <code>cargo</code>, then rest.</p>");
/// ```
#[macro_export]
macro_rules! join {
    ($($part:expr),* $(,)?) => {
        $crate::Joiner::new(" ")
            .fix_punctuation(true)
            $(.part($part))*
            .finish()
    };
}
