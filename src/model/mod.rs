// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data model.
//!
//! A hierarchy is a static snapshot of a type graph: type names plus each
//! type's ordered direct supertypes. The walker side of the crate only sees
//! the [`SupertypeSource`] trait, so graphs can also be injected as closures.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod hierarchy;
pub mod ids;
pub mod source;

pub use hierarchy::{DeclareError, Hierarchy, Inverted};
pub use ids::{TypeName, TypeNameError};
pub use source::{SupertypeSource, Supertypes, SupertypesFn};
