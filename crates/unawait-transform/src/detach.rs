//! Detach: reset the semantic annotations of a resolved fragment.
//!
//! Code hoisted into a new declaration (for example a state-dispatch method)
//! must be re-elaborated in its new lexical context. Detach produces a
//! duplicate of the fragment in which:
//!
//! - bindings and types of everything internal to the transform are cleared,
//!   so re-elaboration resolves them afresh;
//! - identifier and `this` references to external declarations are kept
//!   verbatim, binding and type included, so they cannot be re-resolved to
//!   something else by name;
//! - type annotations prefer the form the user wrote, inferred placeholders
//!   become empty annotations, and explicit types that cannot be rebuilt
//!   from syntax are kept as recorded.
//!
//! The input tree is never modified.

use crate::classify::{InternalBindings, is_internal};
use crate::meta::copy_meta;
use unawait_syntax::{NodeKind, SyntaxNode};

/// Produce a re-elaborable duplicate of `node`.
pub fn detach(node: &SyntaxNode, internal: &InternalBindings) -> SyntaxNode {
    let mut detacher = Detacher::new(internal);
    let result = detacher.detach(node);
    tracing::debug!(
        root = node.kind_name(),
        erased = detacher.erased,
        preserved = detacher.preserved,
        dropped_type_args = detacher.dropped_type_args,
        "[detach] reset internal attributes"
    );
    result
}

struct Detacher<'a> {
    internal: &'a InternalBindings,
    /// Nodes whose binding was cleared
    erased: u32,
    /// External references kept verbatim
    preserved: u32,
    /// Type-argument lists degraded to "no explicit type arguments"
    dropped_type_args: u32,
}

impl<'a> Detacher<'a> {
    fn new(internal: &'a InternalBindings) -> Self {
        Detacher {
            internal,
            erased: 0,
            preserved: 0,
            dropped_type_args: 0,
        }
    }

    fn detach(&mut self, node: &SyntaxNode) -> SyntaxNode {
        match &node.kind {
            NodeKind::TypeTree {
                original: Some(original),
                ..
            } => self.detach(original),
            NodeKind::TypeTree {
                original: None,
                was_empty: true,
            } => copy_meta(node, SyntaxNode::empty_type_tree()),
            NodeKind::TypeTree {
                original: None,
                was_empty: false,
            } => node.clone(),

            NodeKind::TypeApply { callee, type_args } => {
                let type_args: Vec<SyntaxNode> =
                    type_args.iter().map(|arg| self.detach(arg)).collect();
                let callee = self.detach(callee);
                if type_args.iter().any(SyntaxNode::is_empty_type_tree) {
                    self.dropped_type_args += 1;
                    callee
                } else {
                    SyntaxNode {
                        kind: NodeKind::TypeApply {
                            callee: Box::new(callee),
                            type_args,
                        },
                        span: node.span,
                        attachments: node.attachments.clone(),
                        binding: None,
                        ty: None,
                    }
                }
            }

            NodeKind::Empty => node.clone(),

            NodeKind::Ident { .. } | NodeKind::This { .. }
                if !node
                    .binding
                    .is_some_and(|binding| is_internal(binding, self.internal)) =>
            {
                self.preserved += 1;
                node.clone()
            }

            _ => {
                let kind = node.map_children(&mut |child| self.detach(child));
                if node.has_binding_slot() && node.binding.is_some() {
                    self.erased += 1;
                }
                SyntaxNode {
                    kind,
                    span: node.span,
                    attachments: node.attachments.clone(),
                    binding: None,
                    ty: None,
                }
            }
        }
    }
}
