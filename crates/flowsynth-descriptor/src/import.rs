use std::fmt;
use thiserror::Error as ThisError;

///
/// ImportError
///

#[derive(Debug, ThisError)]
pub enum ImportError {
    #[error("malformed import '{0}', expected '[alias ]path[@version]'")]
    Malformed(String),

    #[error("import '{import}' has alias '{alias}' which is not a valid identifier")]
    InvalidAlias { import: String, alias: String },

    #[error("import '{import}' does not map to a valid module path ('{path}')")]
    InvalidPath { import: String, path: String },
}

///
/// Import
///
/// One entry of the descriptor's import list. The canonical alias is the
/// explicit alias if one was given, otherwise the last path segment; both
/// the alias and every module path segment have `-` and `.` mapped to `_`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Import {
    alias: Option<String>,
    path: String,
    version: Option<String>,
    canonical_alias: String,
    module_path: String,
}

impl Import {
    pub fn parse(import: &str) -> Result<Self, ImportError> {
        let malformed = || ImportError::Malformed(import.to_string());

        let mut parts = import.split_whitespace();
        let (alias, target) = match (parts.next(), parts.next(), parts.next()) {
            (Some(target), None, None) => (None, target),
            (Some(alias), Some(target), None) => (Some(alias.to_string()), target),
            _ => return Err(malformed()),
        };

        let (path, version) = match target.split_once('@') {
            Some((path, version)) if !version.is_empty() => (path, Some(version.to_string())),
            Some(_) => return Err(malformed()),
            None => (target, None),
        };
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Err(malformed());
        }

        // canonical alias
        let raw_alias = match &alias {
            Some(alias) => alias.as_str(),
            None => path.rsplit('/').next().unwrap_or(path),
        };
        let canonical_alias = normalize_segment(raw_alias);
        if syn::parse_str::<syn::Ident>(&canonical_alias).is_err() {
            return Err(ImportError::InvalidAlias {
                import: import.to_string(),
                alias: canonical_alias,
            });
        }

        let module_path = module_path(path);
        if syn::parse_str::<syn::Path>(&module_path).is_err() {
            return Err(ImportError::InvalidPath {
                import: import.to_string(),
                path: module_path,
            });
        }

        Ok(Self {
            alias,
            path: path.to_string(),
            version,
            canonical_alias,
            module_path,
        })
    }

    #[must_use]
    pub fn canonical_alias(&self) -> &str {
        &self.canonical_alias
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Package path as written, without version.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Absolute module path used in generated `use` items, e.g.
    /// `::project_flogo::contrib::trigger::rest`.
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias} ")?;
        }
        f.write_str(&self.path)?;
        if let Some(version) = &self.version {
            write!(f, "@{version}")?;
        }

        Ok(())
    }
}

/// Parse a whole import list, failing on the first malformed entry.
pub fn parse_imports(imports: &[String]) -> Result<Vec<Import>, ImportError> {
    imports.iter().map(|import| Import::parse(import)).collect()
}

fn normalize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if matches!(c, '-' | '.') { '_' } else { c })
        .collect()
}

// module_path
// a leading host segment (anything with a dot, like github.com) is dropped
fn module_path(path: &str) -> String {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty()).peekable();
    if segments.peek().is_some_and(|first| first.contains('.')) {
        segments.next();
    }

    segments.fold(String::new(), |mut out, segment| {
        out.push_str("::");
        out.push_str(&normalize_segment(segment));
        out
    })
}
