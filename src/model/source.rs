// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use smallvec::SmallVec;

use super::ids::TypeName;

/// Ordered direct supertypes of a type, in declaration order.
///
/// Almost every type has four or fewer direct bases, so the list stays inline.
pub type Supertypes = SmallVec<[TypeName; 4]>;

/// The injected boundary between the walker and the host program's type graph.
///
/// Implementations supply, for each type, its immediate parents in declaration
/// order (empty for a root type). The walker never looks at anything else, so
/// any object model can sit behind this trait: a materialized
/// [`Hierarchy`](super::Hierarchy) table, a closure over runtime reflection,
/// or a recorded snapshot.
///
/// The walker requires the supertype relation to be finite and acyclic.
/// A cyclic source makes traversal non-terminating; that is a caller error,
/// not a detected condition.
pub trait SupertypeSource {
    /// Immediate supertypes of `of`, in declaration order.
    ///
    /// Types unknown to the source have no supertypes.
    fn direct_supertypes(&self, of: &TypeName) -> Supertypes;
}

impl<S: SupertypeSource + ?Sized> SupertypeSource for &S {
    fn direct_supertypes(&self, of: &TypeName) -> Supertypes {
        (**self).direct_supertypes(of)
    }
}

/// Adapter for the "function" form of a type graph: any closure from a type
/// name to its ordered direct supertypes.
pub struct SupertypesFn<F>(pub F);

impl<F> SupertypeSource for SupertypesFn<F>
where
    F: Fn(&TypeName) -> Supertypes,
{
    fn direct_supertypes(&self, of: &TypeName) -> Supertypes {
        (self.0)(of)
    }
}
