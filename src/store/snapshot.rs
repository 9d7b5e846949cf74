// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{DeclareError, Hierarchy, TypeName, TypeNameError};

/// JSON document shape for a hierarchy snapshot.
///
/// Array order is declaration order, so loading replays the declarations and
/// inherits all of [`Hierarchy::declare`]'s validation: forward references,
/// duplicates, and (therefore) cycles are rejected.
#[derive(Debug, Serialize, Deserialize)]
struct HierarchyDoc {
    types: Vec<TypeDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TypeDoc {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    supertypes: Vec<String>,
}

#[derive(Debug)]
pub enum SnapshotError {
    Json {
        source: serde_json::Error,
    },
    InvalidTypeName {
        raw: String,
        source: TypeNameError,
    },
    Declare {
        source: DeclareError,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "invalid snapshot JSON: {source}"),
            Self::InvalidTypeName { raw, source } => {
                write!(f, "invalid type name {raw:?} in snapshot: {source}")
            }
            Self::Declare { source } => write!(f, "inconsistent snapshot: {source}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidTypeName { source, .. } => Some(source),
            Self::Declare { source } => Some(source),
        }
    }
}

/// Loads a hierarchy from snapshot JSON.
pub fn from_json_str(raw: &str) -> Result<Hierarchy, SnapshotError> {
    let doc: HierarchyDoc =
        serde_json::from_str(raw).map_err(|source| SnapshotError::Json { source })?;

    let mut hierarchy = Hierarchy::new();
    for entry in doc.types {
        let name = parse_name(entry.name)?;
        let mut supertypes = Vec::with_capacity(entry.supertypes.len());
        for supertype in entry.supertypes {
            supertypes.push(parse_name(supertype)?);
        }
        hierarchy
            .declare(name, supertypes)
            .map_err(|source| SnapshotError::Declare { source })?;
    }

    Ok(hierarchy)
}

/// Saves a hierarchy as pretty-printed snapshot JSON, declaration order
/// preserved.
pub fn to_json_string(hierarchy: &Hierarchy) -> Result<String, SnapshotError> {
    let doc = HierarchyDoc {
        types: hierarchy
            .types()
            .map(|name| TypeDoc {
                name: name.to_string(),
                supertypes: hierarchy
                    .direct_supertypes(name.as_str())
                    .iter()
                    .map(|base| base.to_string())
                    .collect(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&doc).map_err(|source| SnapshotError::Json { source })
}

fn parse_name(raw: String) -> Result<TypeName, SnapshotError> {
    TypeName::new(&raw).map_err(|source| SnapshotError::InvalidTypeName { raw, source })
}
