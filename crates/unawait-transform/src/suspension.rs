//! Suspension-point queries built on the scoped traversal.
//!
//! An await only becomes a state transition when it executes inline in the
//! asynchronous block's own flow. Awaits under a nested declaration, a
//! lambda, or a by-name argument run at some other time and are rejected.

use crate::known_symbols::KnownSymbols;
use crate::traverse::{BoundaryKind, ScopedVisitor, walk_children, walk_node};
use std::sync::Arc;
use unawait_common::diagnostics::{DiagnosticMessage, diagnostic_messages};
use unawait_common::{Diagnostic, Span};
use unawait_syntax::SyntaxNode;

/// Collects awaits reachable through sequential code.
struct AwaitFinder<'a> {
    symbols: &'a KnownSymbols,
    found: Vec<Span>,
    stop_at_first: bool,
}

impl ScopedVisitor for AwaitFinder<'_> {
    fn known_symbols(&self) -> Option<&KnownSymbols> {
        Some(self.symbols)
    }

    fn traverse(&mut self, node: &SyntaxNode) {
        if self.stop_at_first && !self.found.is_empty() {
            return;
        }
        if self.symbols.is_await_call(node) {
            self.found.push(node.span);
        }
        walk_node(self, node);
    }
}

/// Whether `node` contains an await that executes in its own sequential
/// flow.
pub fn contains_await(node: &SyntaxNode, symbols: &KnownSymbols) -> bool {
    let mut finder = AwaitFinder {
        symbols,
        found: Vec::new(),
        stop_at_first: true,
    };
    finder.traverse(node);
    !finder.found.is_empty()
}

/// Spans of the awaits in `node`'s sequential flow, in traversal order.
pub fn collect_awaits(node: &SyntaxNode, symbols: &KnownSymbols) -> Vec<Span> {
    let mut finder = AwaitFinder {
        symbols,
        found: Vec::new(),
        stop_at_first: false,
    };
    finder.traverse(node);
    finder.found
}

/// Reports every await that sits beneath a boundary.
///
/// Unlike the sequential queries, this analysis deliberately walks through
/// boundaries so that each misplaced await is found, and attributes it to
/// the innermost enclosing boundary.
pub struct UnsupportedAwaitAnalysis<'a> {
    symbols: &'a KnownSymbols,
    boundaries: Vec<(BoundaryKind, Option<Arc<str>>)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> UnsupportedAwaitAnalysis<'a> {
    pub fn new(symbols: &'a KnownSymbols) -> Self {
        UnsupportedAwaitAnalysis {
            symbols,
            boundaries: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Analyse the body of an asynchronous block.
    pub fn run(mut self, body: &SyntaxNode) -> Vec<Diagnostic> {
        self.traverse(body);
        tracing::debug!(
            errors = self.diagnostics.len(),
            "[suspension] unsupported await analysis finished"
        );
        self.diagnostics
    }

    fn report(&mut self, await_span: Span) {
        let Some((kind, name)) = self.boundaries.last() else {
            return;
        };
        let message: &DiagnosticMessage = match kind {
            BoundaryKind::NestedClass => &diagnostic_messages::AWAIT_UNDER_NESTED_CLASS,
            BoundaryKind::NestedModule => &diagnostic_messages::AWAIT_UNDER_NESTED_MODULE,
            BoundaryKind::NestedMethod => &diagnostic_messages::AWAIT_UNDER_NESTED_METHOD,
            BoundaryKind::FunctionLiteral => &diagnostic_messages::AWAIT_UNDER_FUNCTION_LITERAL,
            BoundaryKind::ByNameArgument => &diagnostic_messages::AWAIT_UNDER_BY_NAME_ARGUMENT,
        };
        let name = name.as_deref().unwrap_or("");
        tracing::trace!(boundary = kind.as_str(), %await_span, "[suspension] await under boundary");
        self.diagnostics
            .push(Diagnostic::from_message(await_span, message, &[name]));
    }

    fn enter(&mut self, kind: BoundaryKind, node: &SyntaxNode) {
        self.boundaries
            .push((kind, node.name().map(Arc::from)));
        walk_children(self, node);
        self.boundaries.pop();
    }
}

impl ScopedVisitor for UnsupportedAwaitAnalysis<'_> {
    fn known_symbols(&self) -> Option<&KnownSymbols> {
        Some(self.symbols)
    }

    fn traverse(&mut self, node: &SyntaxNode) {
        if self.symbols.is_await_call(node) {
            self.report(node.span);
        }
        walk_node(self, node);
    }

    fn nested_class(&mut self, node: &SyntaxNode) {
        self.enter(BoundaryKind::NestedClass, node);
    }

    fn nested_module(&mut self, node: &SyntaxNode) {
        self.enter(BoundaryKind::NestedModule, node);
    }

    fn nested_method(&mut self, node: &SyntaxNode) {
        self.enter(BoundaryKind::NestedMethod, node);
    }

    fn function_literal(&mut self, node: &SyntaxNode) {
        self.enter(BoundaryKind::FunctionLiteral, node);
    }

    fn by_name_argument(&mut self, arg: &SyntaxNode) {
        self.boundaries.push((BoundaryKind::ByNameArgument, None));
        self.traverse(arg);
        self.boundaries.pop();
    }
}
