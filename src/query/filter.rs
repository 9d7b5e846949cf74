// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use regex::Regex;
use smol_str::SmolStr;

use crate::model::TypeName;

/// Signature of the default, accept-everything filter.
pub type AllowAll = fn(&TypeName) -> bool;

/// Accepts every node. The default filter of every walk.
pub fn allow_all(_: &TypeName) -> bool {
    true
}

/// Rejects exactly one name. The usual way to drop a universal base type
/// from output.
pub fn exclude(name: impl AsRef<str>) -> impl Fn(&TypeName) -> bool {
    let name = SmolStr::new(name.as_ref());
    move |node: &TypeName| node.as_str() != name
}

/// Accepts names matching `pattern`.
pub fn matching(pattern: Regex) -> impl Fn(&TypeName) -> bool {
    move |node: &TypeName| pattern.is_match(node.as_str())
}
