use crate::core::{InvalidLocaleError, InvalidSourceError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A validated locale code such as `fr_FR`.
///
/// Validation is deliberately minimal: exactly five characters, no charset
/// check. Anything the gettext tools accept as a directory name is fine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LocaleCode {
    type Err = InvalidLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() == 5 {
            Ok(LocaleCode(s.to_string()))
        } else {
            Err(InvalidLocaleError {
                locale: s.to_string(),
            })
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `.py` source file that translatable strings are extracted from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile(PathBuf);

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<PathBuf> for SourceFile {
    type Error = InvalidSourceError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        // Suffix check rather than Path::extension: a file named just ".py"
        // still counts.
        if path.to_string_lossy().ends_with(".py") {
            Ok(SourceFile(path))
        } else {
            Err(InvalidSourceError { path })
        }
    }
}
