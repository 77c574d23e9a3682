//! Rendering configuration.
//!
//! A [`Config`] bundles the hooks used while rendering: the text escaper,
//! the CSS and JavaScript minifiers used by resource inlining, the indenter
//! used by formatted rendering, and whether empty tags are closed.
//!
//! Pass a configuration explicitly with
//! [`Render::render_with`](crate::Render::render_with), or install one for
//! the whole process with [`Config::install`] before rendering starts.
//! Without an installed configuration, [`Config::default`] applies.
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::entity::escape_html;
use crate::error::Error;
use crate::html5elements::{HtmlNames, HTML5_ELEMENTS};

const FOUR_SPACES: &str = "    ";

/// Turns text into markup-safe text.
pub type TextEscaper = Arc<dyn Fn(&str) -> String + Send + Sync>;
/// Minifies CSS or JavaScript source.
pub type Minifier = Arc<dyn Fn(&str) -> String + Send + Sync>;
/// Prefixes text with the indentation for a level.
pub type Indenter = Arc<dyn Fn(usize, &str) -> String + Send + Sync>;

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Rendering configuration.
#[derive(Clone)]
pub struct Config {
    /// Escapes text content and attribute values. Defaults to HTML entity
    /// escaping of `<`, `>`, `&`, `"` and `'`.
    pub text_escaper: TextEscaper,
    /// Minifies inlined CSS. There is no default minifier.
    pub css_minifier: Minifier,
    /// Minifies inlined JavaScript. There is no default minifier.
    pub js_minifier: Minifier,
    /// Indents a line of formatted output. Defaults to four spaces per level.
    pub indenter: Indenter,
    /// Render empty tags as `<br/>` instead of `<br>`. Off by default.
    pub close_empty_tags: bool,
    /// Elements whose content formatted rendering leaves untouched.
    /// Defaults to `pre` and `textarea`.
    pub preformatted: HtmlNames,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text_escaper: Arc::new(|text: &str| escape_html(text).into_owned()),
            css_minifier: Arc::new(|text: &str| text.to_string()),
            js_minifier: Arc::new(|text: &str| text.to_string()),
            indenter: Arc::new(four_spaces),
            close_empty_tags: false,
            preformatted: HTML5_ELEMENTS.preformatted_names.clone(),
        }
    }
}

fn four_spaces(level: usize, text: &str) -> String {
    let mut s = String::with_capacity(FOUR_SPACES.len() * level + text.len());
    for _ in 0..level {
        s.push_str(FOUR_SPACES);
    }
    s.push_str(text);
    s
}

impl Config {
    /// Replace the text escaper.
    ///
    /// To disable escaping altogether:
    ///
    /// ```rust
    /// use tagsmith::{Config, Render, text};
    ///
    /// let config = Config::default().with_text_escaper(|text| text.to_string());
    /// assert_eq!(text("<b>").render_with(&config), "<b>");
    /// ```
    pub fn with_text_escaper<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.text_escaper = Arc::new(f);
        self
    }

    /// Replace the CSS minifier.
    pub fn with_css_minifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.css_minifier = Arc::new(f);
        self
    }

    /// Replace the JavaScript minifier.
    pub fn with_js_minifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.js_minifier = Arc::new(f);
        self
    }

    /// Replace the indenter used by formatted rendering.
    pub fn with_indenter<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, &str) -> String + Send + Sync + 'static,
    {
        self.indenter = Arc::new(f);
        self
    }

    /// Enable or disable closing empty tags (`<br/>`).
    pub fn with_close_empty_tags(mut self, close: bool) -> Self {
        self.close_empty_tags = close;
        self
    }

    /// Replace the set of elements whose content is not reformatted.
    pub fn with_preformatted(mut self, names: &[&str]) -> Self {
        self.preformatted = HtmlNames::new(names);
        self
    }

    pub(crate) fn escape(&self, text: &str) -> String {
        (self.text_escaper)(text)
    }

    pub(crate) fn indent(&self, level: usize, text: &str) -> String {
        (self.indenter)(level, text)
    }

    /// The process-wide configuration.
    ///
    /// This is the installed configuration, or the default one if nothing
    /// was installed. Once this has been called, [`Config::install`] fails.
    pub fn global() -> &'static Config {
        GLOBAL.get_or_init(Config::default)
    }

    /// Install this configuration for the whole process.
    ///
    /// This must happen once, at startup, before anything renders with the
    /// process-wide configuration. It fails with
    /// [`Error::AlreadyConfigured`] otherwise.
    pub fn install(self) -> Result<(), Error> {
        match GLOBAL.set(self) {
            Ok(()) => {
                debug!("installed process-wide render configuration");
                Ok(())
            }
            Err(_) => {
                debug!("process-wide render configuration already in place");
                Err(Error::AlreadyConfigured)
            }
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("close_empty_tags", &self.close_empty_tags)
            .field("preformatted", &self.preformatted)
            .finish_non_exhaustive()
    }
}
