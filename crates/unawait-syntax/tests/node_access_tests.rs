use unawait_common::Span;
use unawait_syntax::{Attachment, BindingId, Constant, NodeKind, SyntaxNode, Type};

fn int(value: i32) -> SyntaxNode {
    SyntaxNode::literal(Constant::Int(value)).with_type(Type::named("Int"))
}

#[test]
fn test_children_follow_source_order() {
    let call = SyntaxNode::apply(SyntaxNode::ident("f"), vec![int(1), int(2)]);
    let names: Vec<_> = call.children().iter().map(|c| c.kind_name()).collect();
    assert_eq!(names, vec!["Ident", "Literal", "Literal"]);

    let block = SyntaxNode::block(
        vec![SyntaxNode::val_def("a", SyntaxNode::empty_type_tree(), int(1))],
        SyntaxNode::ident("a"),
    );
    let names: Vec<_> = block.children().iter().map(|c| c.kind_name()).collect();
    assert_eq!(names, vec!["ValDef", "Ident"]);
}

#[test]
fn test_leaf_kinds_have_no_children() {
    assert!(SyntaxNode::empty().children().is_empty());
    assert!(SyntaxNode::ident("x").children().is_empty());
    assert!(SyntaxNode::this("C").children().is_empty());
    assert!(int(3).children().is_empty());
}

#[test]
fn test_type_tree_original_is_a_child() {
    let written = SyntaxNode::ident("Int");
    let tt = SyntaxNode::type_tree(Type::named("Int"), Some(written.clone()), false);
    let children = tt.children();
    assert_eq!(children.len(), 1);
    assert_eq!(*children[0], written);
}

#[test]
fn test_map_children_identity_preserves_structure() {
    let tree = SyntaxNode::if_else(
        SyntaxNode::ident("c").with_binding(BindingId(1)),
        SyntaxNode::block(vec![], int(1)),
        SyntaxNode::empty(),
    )
    .with_span(Span::new(0, 20))
    .with_type(Type::named("Int"));

    let kind = tree.map_children(&mut |child| child.clone());
    assert_eq!(kind, tree.kind);
}

#[test]
fn test_map_children_visits_in_children_order() {
    let tree = SyntaxNode::method_def(
        "m",
        vec![SyntaxNode::val_def(
            "p",
            SyntaxNode::empty_type_tree(),
            SyntaxNode::empty(),
        )],
        SyntaxNode::empty_type_tree(),
        SyntaxNode::ident("p"),
    );
    let mut seen = Vec::new();
    let _ = tree.map_children(&mut |child| {
        seen.push(child.kind_name());
        child.clone()
    });
    let expected: Vec<_> = tree.children().iter().map(|c| c.kind_name()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_descendants_are_preorder() {
    let tree = SyntaxNode::apply(
        SyntaxNode::select(SyntaxNode::ident("a"), "+"),
        vec![SyntaxNode::ident("b")],
    );
    let names: Vec<_> = tree
        .descendants()
        .iter()
        .map(|n| n.name().unwrap_or(n.kind_name()).to_string())
        .collect();
    assert_eq!(names, vec!["Apply", "+", "a", "b"]);
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn test_bindings_collects_every_resolved_reference() {
    let tree = SyntaxNode::block(
        vec![SyntaxNode::ident("x").with_binding(BindingId(7))],
        SyntaxNode::ident("y").with_binding(BindingId(9)),
    );
    assert_eq!(tree.bindings(), vec![BindingId(7), BindingId(9)]);
}

#[test]
fn test_empty_type_tree_detection() {
    assert!(SyntaxNode::empty_type_tree().is_empty_type_tree());
    assert!(!SyntaxNode::type_tree(Type::named("Int"), None, true).is_empty_type_tree());
    assert!(!SyntaxNode::empty().is_empty_type_tree());
}

#[test]
fn test_binding_slot_and_boundary_kinds() {
    assert!(SyntaxNode::ident("x").has_binding_slot());
    assert!(!SyntaxNode::empty().has_binding_slot());
    assert!(!SyntaxNode::apply(SyntaxNode::ident("f"), vec![]).has_binding_slot());
    assert!(SyntaxNode::lambda(vec![], SyntaxNode::empty()).is_scope_boundary());
    assert!(SyntaxNode::class_def("C", vec![]).is_scope_boundary());
    assert!(!SyntaxNode::block(vec![], SyntaxNode::empty()).is_scope_boundary());
}

#[test]
fn test_to_json_omits_empty_metadata() {
    let node = SyntaxNode::ident("x");
    let json = node.to_json();
    assert!(json.contains("\"Ident\""));
    assert!(!json.contains("binding"));
    assert!(!json.contains("attachments"));

    let marked = node.with_attachment(Attachment::marker("synthetic"));
    assert!(marked.to_json().contains("synthetic"));
}

#[test]
fn test_without_semantics_keeps_position() {
    let node = SyntaxNode::ident("x")
        .with_span(Span::new(1, 2))
        .with_binding(BindingId(3))
        .with_type(Type::named("Int"))
        .without_semantics();
    assert_eq!(node.span, Span::new(1, 2));
    assert!(node.binding.is_none());
    assert!(node.ty.is_none());
    assert!(matches!(node.kind, NodeKind::Ident { .. }));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_tree_types_are_send_and_sync() {
    assert_send_sync::<SyntaxNode>();
    assert_send_sync::<NodeKind>();
    assert_send_sync::<Type>();
    assert_send_sync::<Attachment>();
    assert_send_sync::<BindingId>();
}
