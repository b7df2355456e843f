mod fixtures;

use fixtures::*;
use unawait_syntax::{ParamInfo, SyntaxNode, Type};
use unawait_transform::{BoundaryKind, ScopedVisitor, walk_children, walk_node};

/// Records every generically visited node and every boundary hook call.
#[derive(Default)]
struct Recorder {
    visited: Vec<String>,
    hooks: Vec<(BoundaryKind, String)>,
    recurse_into_methods: bool,
}

fn label(node: &SyntaxNode) -> String {
    node.name().unwrap_or(node.kind_name()).to_string()
}

impl ScopedVisitor for Recorder {
    fn traverse(&mut self, node: &SyntaxNode) {
        if BoundaryKind::of(node).is_none() {
            self.visited.push(label(node));
        }
        walk_node(self, node);
    }

    fn nested_class(&mut self, node: &SyntaxNode) {
        self.hooks.push((BoundaryKind::NestedClass, label(node)));
    }

    fn nested_module(&mut self, node: &SyntaxNode) {
        self.hooks.push((BoundaryKind::NestedModule, label(node)));
    }

    fn nested_method(&mut self, node: &SyntaxNode) {
        self.hooks.push((BoundaryKind::NestedMethod, label(node)));
        if self.recurse_into_methods {
            walk_children(self, node);
        }
    }

    fn by_name_argument(&mut self, arg: &SyntaxNode) {
        self.hooks.push((BoundaryKind::ByNameArgument, label(arg)));
    }

    fn function_literal(&mut self, node: &SyntaxNode) {
        self.hooks.push((BoundaryKind::FunctionLiteral, label(node)));
    }
}

/// ```text
/// {
///   val x = f(1, g(2))          // f's second parameter is by-name
///   def m() = y
///   (p) => p
///   class C { val z = 3 }
///   object O {}
///   if (a && b) 4
/// }
/// ```
fn sample_tree() -> SyntaxNode {
    let mut fx = Fixture::new();
    let f = SyntaxNode::ident("f")
        .with_binding(fx.binding())
        .with_type(Type::method(
            vec![
                ParamInfo::new("a", int_ty()),
                ParamInfo::by_name("b", int_ty()),
            ],
            int_ty(),
        ));
    let g_call = SyntaxNode::apply(SyntaxNode::ident("g"), vec![int(2)]);
    let val_x = SyntaxNode::val_def(
        "x",
        SyntaxNode::empty_type_tree(),
        SyntaxNode::apply(f, vec![int(1), g_call]),
    );
    let method = SyntaxNode::method_def(
        "m",
        vec![],
        SyntaxNode::empty_type_tree(),
        SyntaxNode::ident("y"),
    );
    let lambda = SyntaxNode::lambda(
        vec![SyntaxNode::val_def(
            "p",
            SyntaxNode::empty_type_tree(),
            SyntaxNode::empty(),
        )],
        SyntaxNode::ident("p"),
    );
    let class = SyntaxNode::class_def(
        "C",
        vec![SyntaxNode::val_def("z", SyntaxNode::empty_type_tree(), int(3))],
    );
    let module = SyntaxNode::module_def("O", vec![]);
    let cond = connective(
        ident("a", fx.binding(), bool_ty()),
        "&&",
        ident("b", fx.binding(), bool_ty()),
    );
    let expr = SyntaxNode::if_else(cond, int(4), SyntaxNode::empty());
    SyntaxNode::block(vec![val_x, method, lambda, class, module], expr)
}

#[test]
fn test_boundaries_are_reported_once_in_order() {
    let tree = sample_tree();
    let mut recorder = Recorder::default();
    recorder.traverse(&tree);

    assert_eq!(
        recorder.hooks,
        vec![
            (BoundaryKind::ByNameArgument, "Apply".to_string()),
            (BoundaryKind::NestedMethod, "m".to_string()),
            (BoundaryKind::FunctionLiteral, "Lambda".to_string()),
            (BoundaryKind::NestedClass, "C".to_string()),
            (BoundaryKind::NestedModule, "O".to_string()),
            (BoundaryKind::ByNameArgument, "b".to_string()),
        ]
    );
}

#[test]
fn test_generic_descent_visits_exactly_the_sequential_nodes() {
    let tree = sample_tree();
    let mut recorder = Recorder::default();
    recorder.traverse(&tree);

    assert_eq!(
        recorder.visited,
        vec![
            "Block", "x", "TypeTree", "Apply", "Literal", "f", "If", "Apply", "&&", "a",
            "Literal", "Empty",
        ]
    );
}

#[test]
fn test_visits_plus_boundary_subtrees_cover_the_tree() {
    let tree = sample_tree();
    let mut recorder = Recorder::default();
    recorder.traverse(&tree);

    // Sizes of the subtrees rooted at each boundary node.
    let hidden: usize = [
        3, // g(2)
        3, // def m() = y
        5, // (p) => p
        4, // class C { val z = 3 }
        1, // object O
        1, // b
    ]
    .iter()
    .sum();
    assert_eq!(recorder.visited.len() + hidden, tree.node_count());
    assert_eq!(recorder.hooks.len(), 6);
}

#[test]
fn test_never_descends_past_a_boundary() {
    let tree = sample_tree();
    let mut recorder = Recorder::default();
    recorder.traverse(&tree);

    for hidden in ["g", "y", "p", "z", "b"] {
        assert!(
            !recorder.visited.iter().any(|name| name == hidden),
            "traversal reached '{hidden}' through a boundary"
        );
    }
}

#[test]
fn test_nested_method_hides_short_circuit_operands() {
    let mut fx = Fixture::new();
    let cond = connective(
        ident("a", fx.binding(), bool_ty()),
        "&&",
        ident("b", fx.binding(), bool_ty()),
    );
    let method = SyntaxNode::method_def(
        "check",
        vec![],
        explicit(bool_ty()),
        SyntaxNode::if_else(cond, int(1), int(2)),
    );
    let tree = SyntaxNode::block(vec![method], SyntaxNode::empty());

    let mut recorder = Recorder::default();
    recorder.traverse(&tree);

    assert_eq!(
        recorder.hooks,
        vec![(BoundaryKind::NestedMethod, "check".to_string())]
    );
    assert_eq!(recorder.visited, vec!["Block", "Empty"]);
}

#[test]
fn test_hook_can_opt_into_recursion() {
    let mut fx = Fixture::new();
    let cond = connective(
        ident("a", fx.binding(), bool_ty()),
        "||",
        ident("b", fx.binding(), bool_ty()),
    );
    let method = SyntaxNode::method_def(
        "check",
        vec![],
        SyntaxNode::empty_type_tree(),
        SyntaxNode::if_else(cond, int(1), int(2)),
    );

    let mut recorder = Recorder {
        recurse_into_methods: true,
        ..Recorder::default()
    };
    recorder.traverse(&method);

    assert!(recorder.visited.iter().any(|name| name == "a"));
    // The connective's operand is still routed to the by-name hook.
    assert!(!recorder.visited.iter().any(|name| name == "b"));
    assert_eq!(
        recorder.hooks,
        vec![
            (BoundaryKind::NestedMethod, "check".to_string()),
            (BoundaryKind::ByNameArgument, "b".to_string()),
        ]
    );
}

#[test]
fn test_arguments_are_visited_before_callee() {
    let call = SyntaxNode::apply(
        SyntaxNode::ident("f"),
        vec![SyntaxNode::ident("x"), SyntaxNode::ident("y")],
    );
    let mut recorder = Recorder::default();
    recorder.traverse(&call);
    assert_eq!(recorder.visited, vec!["Apply", "x", "y", "f"]);
    assert!(recorder.hooks.is_empty());
}

#[test]
fn test_unresolved_callee_arguments_are_sequential() {
    let overloaded = SyntaxNode::ident("f").with_type(Type::Overloaded(vec![
        Type::method(vec![ParamInfo::by_name("a", int_ty())], int_ty()),
        Type::method(vec![ParamInfo::new("a", bool_ty())], int_ty()),
    ]));
    let call = SyntaxNode::apply(overloaded, vec![SyntaxNode::ident("x")]);
    let mut recorder = Recorder::default();
    recorder.traverse(&call);
    assert_eq!(recorder.visited, vec!["Apply", "x", "f"]);
    assert!(recorder.hooks.is_empty());
}

#[test]
fn test_boundary_at_root_goes_straight_to_hook() {
    let lambda = SyntaxNode::lambda(vec![], SyntaxNode::ident("body"));
    let mut recorder = Recorder::default();
    recorder.traverse(&lambda);
    assert!(recorder.visited.is_empty());
    assert_eq!(
        recorder.hooks,
        vec![(BoundaryKind::FunctionLiteral, "Lambda".to_string())]
    );
}

#[test]
fn test_default_hooks_do_nothing() {
    struct Counter(usize);
    impl ScopedVisitor for Counter {
        fn traverse(&mut self, node: &SyntaxNode) {
            self.0 += 1;
            walk_node(self, node);
        }
    }

    let tree = sample_tree();
    let mut counter = Counter(0);
    counter.traverse(&tree);
    // 12 sequential nodes plus the four declaration/lambda boundaries, which
    // reach `traverse` before dispatch. By-name arguments never do.
    assert_eq!(counter.0, 16);
}

#[test]
fn test_boundary_kind_labels() {
    assert_eq!(BoundaryKind::NestedModule.as_str(), "nested object");
    assert_eq!(
        BoundaryKind::of(&SyntaxNode::module_def("O", vec![])),
        Some(BoundaryKind::NestedModule)
    );
    assert_eq!(BoundaryKind::of(&SyntaxNode::ident("x")), None);
}
