// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Eager depth-first walks that record nodes and inheritance edges.
//!
//! Unlike the lazy breadth-first [`Walk`](super::walk::Walk), these walks
//! return the whole traversal at once, including the edge list, which is what
//! the DOT exporter consumes. Their filter *prunes*: a rejected vertex is not
//! recorded and none of its incident edges are recorded or traversed, so a
//! filter here limits the search itself.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Hierarchy, SupertypeSource, TypeName};

use super::filter::allow_all;

/// An inheritance relationship. Every edge points from a base type to an
/// (immediately) derived type, regardless of which direction the walk that
/// discovered it was moving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceEdge {
    pub base: TypeName,
    pub derived: TypeName,
}

impl InheritanceEdge {
    pub fn new(base: TypeName, derived: TypeName) -> Self {
        Self { base, derived }
    }
}

impl fmt::Display for InheritanceEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.base, self.derived)
    }
}

/// Result of a deep walk: vertices and edges in the order the walk observed
/// them.
///
/// For preorder walks both lists are in discovery order (the order the walk
/// advances to them); for postorder walks, the order the walk retreats from
/// them. Edges to already-visited vertices are recorded too, so diamond
/// cross-edges appear in `edges` even though the shared ancestor appears in
/// `nodes` only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    pub nodes: Vec<TypeName>,
    pub edges: Vec<InheritanceEdge>,
}

/// Which way the walk moves relative to the base->derived edge direction.
#[derive(Clone, Copy)]
enum Heading {
    /// Neighbors are supertypes: the walk advances from derived to base.
    TowardBases,
    /// Neighbors are subtypes: the walk advances from base to derived.
    TowardDerived,
}

impl Heading {
    fn edge(self, src: &TypeName, dest: &TypeName) -> InheritanceEdge {
        match self {
            Self::TowardBases => InheritanceEdge::new(dest.clone(), src.clone()),
            Self::TowardDerived => InheritanceEdge::new(src.clone(), dest.clone()),
        }
    }
}

fn preorder_explore<S, F>(
    graph: &S,
    src: &TypeName,
    filter: &mut F,
    heading: Heading,
    visited: &mut BTreeSet<TypeName>,
    out: &mut Traversal,
) where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    visited.insert(src.clone());
    for dest in graph.direct_supertypes(src) {
        if !filter(&dest) {
            continue;
        }
        out.edges.push(heading.edge(src, &dest));
        if !visited.contains(&dest) {
            // Preorder: record the vertex, then explore past it.
            out.nodes.push(dest.clone());
            preorder_explore(graph, &dest, filter, heading, visited, out);
        }
    }
}

fn postorder_explore<S, F>(
    graph: &S,
    src: &TypeName,
    filter: &mut F,
    heading: Heading,
    visited: &mut BTreeSet<TypeName>,
    out: &mut Traversal,
) where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    visited.insert(src.clone());
    for dest in graph.direct_supertypes(src) {
        if !filter(&dest) {
            continue;
        }
        if !visited.contains(&dest) {
            // Postorder: explore past the vertex, then record it.
            postorder_explore(graph, &dest, filter, heading, visited, out);
            out.nodes.push(dest.clone());
        }
        out.edges.push(heading.edge(src, &dest));
    }
}

fn preorder_walk<S, F>(graph: &S, starts: &[TypeName], mut filter: F, heading: Heading) -> Traversal
where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    let mut out = Traversal::default();
    let mut visited = BTreeSet::new();

    for start in starts {
        if filter(start) && !visited.contains(start) {
            out.nodes.push(start.clone());
            preorder_explore(graph, start, &mut filter, heading, &mut visited, &mut out);
        }
    }

    out
}

fn postorder_walk<S, F>(
    graph: &S,
    starts: &[TypeName],
    mut filter: F,
    heading: Heading,
) -> Traversal
where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    let mut out = Traversal::default();
    let mut visited = BTreeSet::new();

    for start in starts {
        if filter(start) && !visited.contains(start) {
            postorder_explore(graph, start, &mut filter, heading, &mut visited, &mut out);
            out.nodes.push(start.clone());
        }
    }

    out
}

/// Depth-first preorder walk from derived to base types.
///
/// The walk always recurses up the graph as far as possible before exploring
/// anywhere else. Nodes and edges are in discovery order; the visited set is
/// shared across `starts`.
pub fn preorder_ancestors(hierarchy: &Hierarchy, starts: &[TypeName]) -> Traversal {
    preorder_ancestors_filtered(hierarchy, starts, allow_all)
}

/// [`preorder_ancestors`] with a pruning filter.
pub fn preorder_ancestors_filtered<F>(
    hierarchy: &Hierarchy,
    starts: &[TypeName],
    filter: F,
) -> Traversal
where
    F: FnMut(&TypeName) -> bool,
{
    preorder_walk(&hierarchy, starts, filter, Heading::TowardBases)
}

/// Depth-first postorder walk from derived to base types: nodes and edges in
/// the order the walk retreats from them.
pub fn postorder_ancestors(hierarchy: &Hierarchy, starts: &[TypeName]) -> Traversal {
    postorder_ancestors_filtered(hierarchy, starts, allow_all)
}

/// [`postorder_ancestors`] with a pruning filter.
pub fn postorder_ancestors_filtered<F>(
    hierarchy: &Hierarchy,
    starts: &[TypeName],
    filter: F,
) -> Traversal
where
    F: FnMut(&TypeName) -> bool,
{
    postorder_walk(&hierarchy, starts, filter, Heading::TowardBases)
}

/// Depth-first preorder walk from base to derived types.
pub fn preorder_descendants(hierarchy: &Hierarchy, starts: &[TypeName]) -> Traversal {
    preorder_descendants_filtered(hierarchy, starts, allow_all)
}

/// [`preorder_descendants`] with a pruning filter.
pub fn preorder_descendants_filtered<F>(
    hierarchy: &Hierarchy,
    starts: &[TypeName],
    filter: F,
) -> Traversal
where
    F: FnMut(&TypeName) -> bool,
{
    preorder_walk(&hierarchy.inverted(), starts, filter, Heading::TowardDerived)
}

/// Depth-first postorder walk from base to derived types.
pub fn postorder_descendants(hierarchy: &Hierarchy, starts: &[TypeName]) -> Traversal {
    postorder_descendants_filtered(hierarchy, starts, allow_all)
}

/// [`postorder_descendants`] with a pruning filter.
pub fn postorder_descendants_filtered<F>(
    hierarchy: &Hierarchy,
    starts: &[TypeName],
    filter: F,
) -> Traversal
where
    F: FnMut(&TypeName) -> bool,
{
    postorder_walk(&hierarchy.inverted(), starts, filter, Heading::TowardDerived)
}
