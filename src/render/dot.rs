// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Write as _;

use crate::model::Hierarchy;
use crate::query::Traversal;

/// Graphviz DOT text for a recorded traversal.
///
/// One node statement per traversal node and one edge statement per recorded
/// edge, each pointing from base to derived. Graphviz lays directed edges
/// top-down, so derived types end up below their bases, the conventional way
/// to draw inheritance.
pub fn export_dot(traversal: &Traversal) -> String {
    let mut out = String::from("digraph inheritance {\n");

    for node in &traversal.nodes {
        let id = quote(node.as_str());
        // Writing to a String cannot fail.
        writeln!(out, "    {id}").expect("write to string");
    }
    for edge in &traversal.edges {
        let base = quote(edge.base.as_str());
        let derived = quote(edge.derived.as_str());
        writeln!(out, "    {base} -> {derived}").expect("write to string");
    }

    out.push_str("}\n");
    out
}

/// Graphviz DOT text for a whole hierarchy table, in declaration order.
pub fn export_hierarchy_dot(hierarchy: &Hierarchy) -> String {
    let mut out = String::from("digraph inheritance {\n");

    for name in hierarchy.types() {
        let id = quote(name.as_str());
        writeln!(out, "    {id}").expect("write to string");
    }
    for name in hierarchy.types() {
        for base in hierarchy.direct_supertypes(name.as_str()) {
            let base = quote(base.as_str());
            let derived = quote(name.as_str());
            writeln!(out, "    {base} -> {derived}").expect("write to string");
        }
    }

    out.push_str("}\n");
    out
}

/// Quotes a name as a DOT double-quoted id.
fn quote(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for ch in name.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
