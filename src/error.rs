use std::fmt;

/// Errors raised while building a tree.
///
/// Rendering never fails; every variant here is raised immediately by the
/// construction call that received the bad input.
#[derive(Debug)]
pub enum Error {
    /// A selector shorthand contained neither `#` nor `.`.
    MissingIdOrClass(String),
    /// A selector shorthand contained more than one `#`.
    MultipleIds(String),
    /// A `#` appeared somewhere other than the start of a `.`-separated
    /// segment of a selector shorthand.
    IdNotAtStart(String),
    /// Only the `html` element may follow the document declaration. Carries
    /// the tag name that was given instead.
    NotHtmlElement(String),
    /// The process-wide configuration was already in place.
    AlreadyConfigured,
    /// A file could not be read for inlining.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingIdOrClass(s) => {
                write!(f, "selector {:?} must contain either id (#) or class (.)", s)
            }
            Error::MultipleIds(s) => write!(f, "selector {:?} has more than one id (#)", s),
            Error::IdNotAtStart(s) => {
                write!(f, "selector {:?}: # cannot be in the middle of string", s)
            }
            Error::NotHtmlElement(name) => write!(
                f,
                "only the html tag can follow the document declaration, got {:?}",
                name
            ),
            Error::AlreadyConfigured => write!(f, "global configuration is already set"),
            Error::Io(e) => write!(f, "cannot read file: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
