// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{BTreeSet, VecDeque};

use crate::model::{Hierarchy, Inverted, SupertypeSource, TypeName};

use super::filter::{allow_all, AllowAll};

/// Lazy breadth-first traversal over a supertype graph.
///
/// Nodes come out in breadth-first order by distance from the root, ties
/// broken by the left-to-right declaration order of supertypes at each level:
/// for a diamond `D(B, C)` with both inheriting `A`, the order is
/// `D, B, C, A`. Every reachable node is yielded at most once, however many
/// paths lead to it.
///
/// The filter gates *yielding only*: a rejected node is skipped but its
/// supertypes are still traversed, so rejecting a universal base removes
/// exactly that node from the output. (The deep walks in
/// [`deep`](super::deep) use the opposite, pruning filter semantics.)
///
/// A `Walk` holds no cross-call state; building a new one recomputes from
/// scratch. Dropping it early does no further supertype lookups.
pub struct Walk<S, F> {
    graph: S,
    filter: F,
    queue: VecDeque<TypeName>,
    visited: BTreeSet<TypeName>,
}

impl<S, F> Walk<S, F>
where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    fn new(graph: S, root: TypeName, filter: F) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self {
            graph,
            filter,
            queue,
            visited: BTreeSet::new(),
        }
    }
}

impl<S, F> Iterator for Walk<S, F>
where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    type Item = TypeName;

    fn next(&mut self) -> Option<TypeName> {
        while let Some(node) = self.queue.pop_front() {
            if !self.visited.insert(node.clone()) {
                continue;
            }

            for supertype in self.graph.direct_supertypes(&node) {
                if !self.visited.contains(&supertype) {
                    self.queue.push_back(supertype);
                }
            }

            if (self.filter)(&node) {
                return Some(node);
            }
        }

        None
    }
}

/// Breadth-first walk from `root` up an arbitrary [`SupertypeSource`].
///
/// The acyclicity precondition is the caller's (see the trait docs); prefer
/// [`ancestors`] when the graph is a [`Hierarchy`], which cannot be cyclic.
pub fn walk<S, F>(graph: S, root: TypeName, filter: F) -> Walk<S, F>
where
    S: SupertypeSource,
    F: FnMut(&TypeName) -> bool,
{
    Walk::new(graph, root, filter)
}

/// Breadth-first walk from `root` up the hierarchy, `root` included.
pub fn ancestors<'h>(hierarchy: &'h Hierarchy, root: &TypeName) -> Walk<&'h Hierarchy, AllowAll> {
    ancestors_filtered(hierarchy, root, allow_all)
}

/// [`ancestors`] with a yield filter.
pub fn ancestors_filtered<'h, F>(
    hierarchy: &'h Hierarchy,
    root: &TypeName,
    filter: F,
) -> Walk<&'h Hierarchy, F>
where
    F: FnMut(&TypeName) -> bool,
{
    Walk::new(hierarchy, root.clone(), filter)
}

/// Breadth-first walk from `root` down the hierarchy, `root` included.
pub fn descendants<'h>(hierarchy: &'h Hierarchy, root: &TypeName) -> Walk<Inverted<'h>, AllowAll> {
    descendants_filtered(hierarchy, root, allow_all)
}

/// [`descendants`] with a yield filter.
pub fn descendants_filtered<'h, F>(
    hierarchy: &'h Hierarchy,
    root: &TypeName,
    filter: F,
) -> Walk<Inverted<'h>, F>
where
    F: FnMut(&TypeName) -> bool,
{
    Walk::new(hierarchy.inverted(), root.clone(), filter)
}
