use std::fmt;

/// Prefix marking an alias (inline/local) reference.
pub const REF_SIGIL: char = '#';

///
/// Reference
///
/// `#rest` names an import by alias; anything else is a literal package path.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reference<'a> {
    Alias(&'a str),
    Path(&'a str),
}

impl<'a> Reference<'a> {
    #[must_use]
    pub fn parse(reference: &'a str) -> Self {
        match reference.strip_prefix(REF_SIGIL) {
            Some(alias) => Self::Alias(alias),
            None => Self::Path(reference),
        }
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alias(alias) => write!(f, "{REF_SIGIL}{alias}"),
            Self::Path(path) => f.write_str(path),
        }
    }
}
