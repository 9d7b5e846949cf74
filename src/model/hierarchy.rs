// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use super::ids::TypeName;
use super::source::{SupertypeSource, Supertypes};

/// A static snapshot of a type graph: every type with its ordered direct
/// supertypes, in declaration order.
///
/// The table is append-only. `declare` requires every listed supertype to be
/// already declared, so a `Hierarchy` can never contain a cycle and every
/// traversal over it terminates. (An injected [`SupertypeSource`] carries no
/// such guarantee; see the trait docs.)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hierarchy {
    order: Vec<TypeName>,
    supertypes: BTreeMap<TypeName, Supertypes>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a type with its direct supertypes, in declaration order.
    pub fn declare(
        &mut self,
        name: TypeName,
        supertypes: impl IntoIterator<Item = TypeName>,
    ) -> Result<(), DeclareError> {
        if self.supertypes.contains_key(&name) {
            return Err(DeclareError::DuplicateType { name });
        }

        let mut bases = Supertypes::new();
        for supertype in supertypes {
            if !self.supertypes.contains_key(&supertype) {
                return Err(DeclareError::UnknownSupertype { name, supertype });
            }
            if bases.contains(&supertype) {
                return Err(DeclareError::DuplicateSupertype { name, supertype });
            }
            bases.push(supertype);
        }

        self.order.push(name.clone());
        self.supertypes.insert(name, bases);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.supertypes.contains_key(name)
    }

    /// Direct supertypes of `of`, in declaration order. Empty for roots and
    /// for names not in the table.
    pub fn direct_supertypes(&self, of: &str) -> &[TypeName] {
        self.supertypes.get(of).map_or(&[], |bases| bases.as_slice())
    }

    /// Direct subtypes of `of`: the reverse adjacency, in declaration order
    /// of the derived types.
    pub fn direct_subtypes(&self, of: &str) -> Supertypes {
        let mut subtypes = Supertypes::new();
        for name in &self.order {
            if self.direct_supertypes(name.as_str()).iter().any(|base| base.as_str() == of) {
                subtypes.push(name.clone());
            }
        }
        subtypes
    }

    /// All declared types, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeName> {
        self.order.iter()
    }

    /// Types with no declared supertypes, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &TypeName> {
        self.order
            .iter()
            .filter(|name| self.direct_supertypes(name.as_str()).is_empty())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Borrowed view with the edge direction flipped: its "supertypes" are
    /// this table's subtypes. Ancestor walks over the inverted view are
    /// descendant walks over the table.
    pub fn inverted(&self) -> Inverted<'_> {
        Inverted(self)
    }
}

impl SupertypeSource for Hierarchy {
    fn direct_supertypes(&self, of: &TypeName) -> Supertypes {
        Hierarchy::direct_supertypes(self, of.as_str()).iter().cloned().collect()
    }
}

/// See [`Hierarchy::inverted`].
#[derive(Debug, Clone, Copy)]
pub struct Inverted<'h>(&'h Hierarchy);

impl SupertypeSource for Inverted<'_> {
    fn direct_supertypes(&self, of: &TypeName) -> Supertypes {
        self.0.direct_subtypes(of.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclareError {
    DuplicateType {
        name: TypeName,
    },
    UnknownSupertype {
        name: TypeName,
        supertype: TypeName,
    },
    DuplicateSupertype {
        name: TypeName,
        supertype: TypeName,
    },
}

impl fmt::Display for DeclareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateType { name } => {
                write!(f, "type '{name}' is already declared")
            }
            Self::UnknownSupertype { name, supertype } => write!(
                f,
                "type '{name}' lists supertype '{supertype}' which is not declared yet"
            ),
            Self::DuplicateSupertype { name, supertype } => {
                write!(f, "type '{name}' lists supertype '{supertype}' twice")
            }
        }
    }
}

impl std::error::Error for DeclareError {}
