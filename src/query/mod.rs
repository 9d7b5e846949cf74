// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only traversals over hierarchies.
//!
//! The breadth-first [`walk`] module is the lazy, per-node walker; [`deep`]
//! holds the eager depth-first walks that also record the edge list.

pub mod deep;
pub mod filter;
pub mod walk;

pub use deep::{
    postorder_ancestors, postorder_ancestors_filtered, postorder_descendants,
    postorder_descendants_filtered, preorder_ancestors, preorder_ancestors_filtered,
    preorder_descendants, preorder_descendants_filtered, InheritanceEdge, Traversal,
};
pub use walk::{ancestors, ancestors_filtered, descendants, descendants_filtered, walk, Walk};
