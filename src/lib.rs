// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stemma — traversal and DOT export for static type-inheritance graphs.
//!
//! A [`model::Hierarchy`] is a read-only snapshot of a type graph: each type
//! with its direct supertypes in declaration order. [`query`] walks the graph
//! (lazy breadth-first, eager pre/postorder), deduplicating the shared
//! ancestors of diamond inheritance with an explicit visited set rather than
//! any language's method-resolution-order rules. [`render`] turns traversals
//! into Graphviz DOT; [`store`] round-trips hierarchies as JSON snapshots.
//!
//! Graphs can also be injected as a plain closure via
//! [`model::SupertypesFn`] — the walker never assumes a particular runtime's
//! object model.

pub mod model;
pub mod query;
pub mod render;
pub mod store;
