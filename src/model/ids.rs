// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Name of a type in a hierarchy snapshot.
///
/// This does not enforce any particular language's identifier rules; it only
/// enforces that the name is non-empty and contains no whitespace, because
/// names are used verbatim as DOT node ids and as JSON snapshot keys.
///
/// Backed by [`SmolStr`]: traversals clone names into queues and visited sets
/// on every step, so clones must be cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    value: SmolStr,
}

impl TypeName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, TypeNameError> {
        let value = value.as_ref();
        validate_type_name(value)?;
        Ok(Self {
            value: SmolStr::new(value),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = TypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNameError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for TypeNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("type name must not be empty"),
            Self::ContainsWhitespace => f.write_str("type name must not contain whitespace"),
        }
    }
}

impl std::error::Error for TypeNameError {}

fn validate_type_name(value: &str) -> Result<(), TypeNameError> {
    if value.is_empty() {
        return Err(TypeNameError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(TypeNameError::ContainsWhitespace);
    }
    Ok(())
}
