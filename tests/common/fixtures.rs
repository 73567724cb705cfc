//! Reference container wiring used across the integration tests.
#![allow(dead_code)]

use composition_graph::adapters::snapshot::{ContainerSnapshot, SnapshotBuilder};
use composition_graph::domain::type_ref::TypeRef;

pub const NS: &str = "Fixtures";

pub fn ty(name: &str) -> TypeRef {
    TypeRef::new(NS, name)
}

pub fn int32() -> TypeRef {
    TypeRef::new("System", "Int32")
}

pub fn multiple_generic() -> TypeRef {
    TypeRef::generic(NS, "IMultipleGeneric`1", vec![int32()])
}

pub fn enumerable_of(element: TypeRef) -> TypeRef {
    TypeRef::generic("System.Collections.Generic", "IEnumerable`1", vec![element])
}

pub fn multiples() -> Vec<TypeRef> {
    vec![ty("Multiple1"), ty("Multiple2"), ty("Multiple3")]
}

/// Wiring of the reference object graph:
///
/// ```text
/// Root(ILevel4, IMultipleGeneric<Int32>[], IDecoratable)
/// Level4(ILevel3, IAnotherLevel3)
/// Level3(ILevel2)   AnotherLevel3(ILevel2)
/// Level2(ISimple)   SimpleReference(IIsolated)   IsolatedType()
/// ReferenceToMultiple(IMultiple[])
/// ReferenceToMultiple2(IEnumerable<IMultiple>)
/// ReferenceToMultiple3(IMultipleGeneric<Int32>[])
/// Decorator(IDecoratable) wrapping Decorated
/// DecoratableReference(IDecoratable)
/// ```
pub fn reference_builder() -> SnapshotBuilder {
    let mut b = SnapshotBuilder::new();

    let isolated = b.provider(ty("IIsolated"), ty("IsolatedType"));
    let simple = b.provider(ty("ISimple"), ty("SimpleReference"));
    b.depends_on(simple, isolated);
    let level2 = b.provider(ty("ILevel2"), ty("Level2"));
    b.depends_on(level2, simple);
    let level3 = b.provider(ty("ILevel3"), ty("Level3"));
    b.depends_on(level3, level2);

    b.collection(ty("IMultiple"), multiples());
    b.collection(multiple_generic(), multiples());
    let multiple_array = b.concrete(TypeRef::array_of(ty("IMultiple")));
    let multiple_seq = b.concrete(enumerable_of(ty("IMultiple")));
    let generic_array = b.concrete(TypeRef::array_of(multiple_generic()));

    let ref1 = b.concrete(ty("ReferenceToMultiple"));
    b.depends_on(ref1, multiple_array);
    let ref2 = b.concrete(ty("ReferenceToMultiple2"));
    b.depends_on(ref2, multiple_seq);
    let ref3 = b.concrete(ty("ReferenceToMultiple3"));
    b.depends_on(ref3, generic_array);

    let another3 = b.provider(ty("IAnotherLevel3"), ty("AnotherLevel3"));
    b.depends_on(another3, level2);
    let level4 = b.provider(ty("ILevel4"), ty("Level4"));
    b.depends_on(level4, level3).depends_on(level4, another3);

    let decorated = b.decorated(ty("IDecoratable"), ty("Decorated"));
    let decorator = b.provider(ty("IDecoratable"), ty("Decorator"));
    b.depends_on(decorator, decorated);
    let decoratable_ref = b.concrete(ty("DecoratableReference"));
    b.depends_on(decoratable_ref, decorator);

    let root = b.concrete(ty("Root"));
    b.depends_on(root, level4)
        .depends_on(root, generic_array)
        .depends_on(root, decorator);

    b
}

pub fn reference_snapshot() -> ContainerSnapshot {
    reference_builder()
        .build()
        .expect("reference wiring is valid")
}

/// The same wiring as [`reference_snapshot`], in the JSON snapshot format.
pub fn reference_snapshot_json() -> String {
    let document = reference_builder()
        .into_document()
        .expect("reference wiring is valid");
    serde_json::to_string_pretty(&document).expect("serialize snapshot")
}

/// A straight chain `Node0 -> Node1 -> ... -> Node{len-1}`, each behind `I{name}`.
pub fn chain_snapshot(len: usize) -> ContainerSnapshot {
    let mut b = SnapshotBuilder::new();
    let ids: Vec<_> = (0..len)
        .map(|i| b.provider(ty(&format!("INode{i}")), ty(&format!("Node{i}"))))
        .collect();
    for pair in ids.windows(2) {
        b.depends_on(pair[0], pair[1]);
    }
    b.build().expect("chain wiring is valid")
}
