// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use stemma::model::{Hierarchy, TypeName};

fn tn(value: &str) -> TypeName {
    TypeName::new(value).expect("type name")
}

/// The `collections.abc` stub hierarchy (25 types, several diamonds).
pub fn abc_stubs() -> Hierarchy {
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

    let mut hierarchy = Hierarchy::new();
    for (name, bases) in declarations {
        hierarchy
            .declare(tn(name), bases.iter().map(|base| tn(base)))
            .expect("declare stub");
    }
    hierarchy
}

#[derive(Debug, Clone, Copy)]
pub struct DagParams {
    pub layers: usize,
    pub width: usize,
    pub bases_per_type: usize,
}

impl DagParams {
    pub fn new(layers: usize, width: usize, bases_per_type: usize) -> Self {
        Self {
            layers,
            width,
            bases_per_type,
        }
    }
}

/// Layered synthetic DAG: `layers x width` types, each inheriting from
/// `bases_per_type` types of the previous layer (wrapping), so deep diamonds
/// reconverge constantly.
pub fn dag(params: DagParams) -> (Hierarchy, TypeName) {
    let mut hierarchy = Hierarchy::new();

    for layer in 0..params.layers {
        for slot in 0..params.width {
            let name = tn(&format!("T{layer}_{slot}"));
            let bases: Vec<TypeName> = if layer == 0 {
                Vec::new()
            } else {
                (0..params.bases_per_type.min(params.width))
                    .map(|offset| {
                        let base_slot = (slot + offset) % params.width;
                        let base_layer = layer - 1;
                        tn(&format!("T{base_layer}_{base_slot}"))
                    })
                    .collect()
            };
            hierarchy.declare(name, bases).expect("declare dag type");
        }
    }

    let bottom_layer = params.layers - 1;
    (hierarchy, tn(&format!("T{bottom_layer}_0")))
}
