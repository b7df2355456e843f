//! Scope-aware traversal.
//!
//! Walks the sequential code of a fragment and stops at every boundary where
//! execution leaves the current flow:
//!
//! - nested class, object and method declarations
//! - lambda literals
//! - arguments passed by name
//!
//! Boundary nodes are handed to a hook instead of being descended into. A
//! hook that wants to look inside calls [`walk_children`] (or
//! [`ScopedVisitor::traverse`] on selected children) itself.
//!
//! ```ignore
//! struct CountIdents(usize);
//!
//! impl ScopedVisitor for CountIdents {
//!     fn traverse(&mut self, node: &SyntaxNode) {
//!         if matches!(node.kind, NodeKind::Ident { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_node(self, node);
//!     }
//! }
//! ```

use crate::by_name::by_name_at;
use crate::known_symbols::KnownSymbols;
use unawait_syntax::{NodeKind, SyntaxNode};

/// Why the traversal stopped at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    NestedClass,
    NestedModule,
    NestedMethod,
    FunctionLiteral,
    ByNameArgument,
}

impl BoundaryKind {
    /// Boundary kind of a declaration or lambda node. By-name arguments are
    /// a property of the call site, not the node, and are never returned.
    pub const fn of(node: &SyntaxNode) -> Option<Self> {
        match node.kind {
            NodeKind::ClassDef { .. } => Some(BoundaryKind::NestedClass),
            NodeKind::ModuleDef { .. } => Some(BoundaryKind::NestedModule),
            NodeKind::MethodDef { .. } => Some(BoundaryKind::NestedMethod),
            NodeKind::Lambda { .. } => Some(BoundaryKind::FunctionLiteral),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BoundaryKind::NestedClass => "nested class",
            BoundaryKind::NestedModule => "nested object",
            BoundaryKind::NestedMethod => "nested method",
            BoundaryKind::FunctionLiteral => "function literal",
            BoundaryKind::ByNameArgument => "by-name argument",
        }
    }
}

/// Visitor over sequential code. Every hook defaults to doing nothing, so a
/// visitor that overrides only `traverse` never crosses a boundary.
pub trait ScopedVisitor: Sized {
    /// Visit `node`. Overrides should call [`walk_node`] to continue.
    fn traverse(&mut self, node: &SyntaxNode) {
        walk_node(self, node);
    }

    /// Registry used to recognise the short-circuit connectives at call
    /// sites. Without one, only unbound `&&`/`||` selections are by-name.
    fn known_symbols(&self) -> Option<&KnownSymbols> {
        None
    }

    fn nested_class(&mut self, _node: &SyntaxNode) {}

    fn nested_module(&mut self, _node: &SyntaxNode) {}

    fn nested_method(&mut self, _node: &SyntaxNode) {}

    fn by_name_argument(&mut self, _arg: &SyntaxNode) {}

    fn function_literal(&mut self, _node: &SyntaxNode) {}
}

/// Default dispatch for one node.
pub fn walk_node<V: ScopedVisitor>(visitor: &mut V, node: &SyntaxNode) {
    match &node.kind {
        NodeKind::ClassDef { .. } => {
            tracing::trace!(name = node.name(), "[traverse] nested class boundary");
            visitor.nested_class(node);
        }
        NodeKind::ModuleDef { .. } => {
            tracing::trace!(name = node.name(), "[traverse] nested module boundary");
            visitor.nested_module(node);
        }
        NodeKind::MethodDef { .. } => {
            tracing::trace!(name = node.name(), "[traverse] nested method boundary");
            visitor.nested_method(node);
        }
        NodeKind::Lambda { .. } => {
            tracing::trace!("[traverse] function literal boundary");
            visitor.function_literal(node);
        }
        NodeKind::Apply { callee, args } => {
            let shape = by_name_at(node, visitor.known_symbols());
            for (index, arg) in args.iter().enumerate() {
                if shape.is_by_name(index) {
                    tracing::trace!(index, "[traverse] by-name argument boundary");
                    visitor.by_name_argument(arg);
                } else {
                    visitor.traverse(arg);
                }
            }
            visitor.traverse(callee);
        }
        NodeKind::Empty
        | NodeKind::Ident { .. }
        | NodeKind::This { .. }
        | NodeKind::Select { .. }
        | NodeKind::Literal(_)
        | NodeKind::TypeApply { .. }
        | NodeKind::TypeTree { .. }
        | NodeKind::Block { .. }
        | NodeKind::ValDef { .. }
        | NodeKind::Assign { .. }
        | NodeKind::If { .. }
        | NodeKind::While { .. }
        | NodeKind::Return { .. } => walk_children(visitor, node),
    }
}

/// Traverse every child of `node` in structural order, regardless of kind.
///
/// Used by boundary hooks that choose to look inside the boundary. Note that
/// for an `Apply` this bypasses by-name classification of its arguments.
pub fn walk_children<V: ScopedVisitor>(visitor: &mut V, node: &SyntaxNode) {
    for child in node.children() {
        visitor.traverse(child);
    }
}
