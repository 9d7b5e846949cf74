// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::hierarchy::Hierarchy;
use super::ids::TypeName;

fn tn(value: &str) -> TypeName {
    TypeName::new(value).expect("type name")
}

/// Inheritance diamond with an explicit universal base:
/// `A(Any)`, `B(A)`, `C(A)`, `D(B, C)`.
pub(crate) fn diamond() -> Hierarchy {
    let mut hierarchy = Hierarchy::new();

    hierarchy.declare(tn("Any"), []).expect("declare Any");
    hierarchy.declare(tn("A"), [tn("Any")]).expect("declare A");
    hierarchy.declare(tn("B"), [tn("A")]).expect("declare B");
    hierarchy.declare(tn("C"), [tn("A")]).expect("declare C");
    hierarchy
        .declare(tn("D"), [tn("B"), tn("C")])
        .expect("declare D");

    hierarchy
}

/// Replication of the CPython 3.10 `collections.abc` inheritance structure,
/// including the (undocumented) order in which base classes are listed.
/// Methods are irrelevant here; only the shape of the graph matters.
pub(crate) fn abc_stubs() -> Hierarchy {
    let mut hierarchy = Hierarchy::new();

    let declarations: &[(&str, &[&str])] = &[
        ("Hashable", &[]),
        ("Awaitable", &[]),
        ("Coroutine", &["Awaitable"]),
        ("AsyncIterable", &[]),
        ("AsyncIterator", &["AsyncIterable"]),
        ("AsyncGenerator", &["AsyncIterator"]),
        ("Iterable", &[]),
        ("Iterator", &["Iterable"]),
        ("Reversible", &["Iterable"]),
        ("Generator", &["Iterator"]),
        ("Sized", &[]),
        ("Container", &[]),
        ("Collection", &["Sized", "Iterable", "Container"]),
        ("Callable", &[]),
        ("Set", &["Collection"]),
        ("MutableSet", &["Set"]),
        ("Mapping", &["Collection"]),
        ("MappingView", &["Sized"]),
        ("KeysView", &["MappingView", "Set"]),
        ("ItemsView", &["MappingView", "Set"]),
        ("ValuesView", &["MappingView", "Collection"]),
        ("MutableMapping", &["Mapping"]),
        ("Sequence", &["Reversible", "Collection"]),
        ("ByteString", &["Sequence"]),
        ("MutableSequence", &["Sequence"]),
    ];

    for (name, bases) in declarations {
        hierarchy
            .declare(tn(name), bases.iter().map(|base| tn(base)))
            .unwrap_or_else(|err| panic!("declare {name}: {err}"));
    }

    hierarchy
}
