//! Position and attachment stamping for replacement nodes.
//!
//! When a synthetic node replaces an original one, diagnostics and
//! attachment-based bookkeeping should still point at the original source.
//! Binding and type are never copied: the replacement has its own meaning.

use unawait_common::Span;
use unawait_syntax::SyntaxNode;

/// Stamp `replacement` with the span and attachments of `original`.
#[must_use]
pub fn copy_meta(original: &SyntaxNode, mut replacement: SyntaxNode) -> SyntaxNode {
    replacement.span = original.span;
    replacement.attachments = original.attachments.clone();
    replacement
}

/// Stamp only the span of `original` onto `replacement`.
#[must_use]
pub fn copy_span(original: &SyntaxNode, mut replacement: SyntaxNode) -> SyntaxNode {
    replacement.span = original.span;
    replacement
}

/// Give every node of `tree` that has no position the span `span`.
/// Nodes that already carry a position keep it.
#[must_use]
pub fn fill_missing_spans(span: Span, tree: SyntaxNode) -> SyntaxNode {
    let kind = tree.map_children(&mut |child| filled(span, child));
    SyntaxNode {
        kind,
        span: if tree.span.is_none() { span } else { tree.span },
        ..tree
    }
}

fn filled(span: Span, node: &SyntaxNode) -> SyntaxNode {
    SyntaxNode {
        kind: node.map_children(&mut |child| filled(span, child)),
        span: if node.span.is_none() { span } else { node.span },
        attachments: node.attachments.clone(),
        binding: node.binding,
        ty: node.ty.clone(),
    }
}
