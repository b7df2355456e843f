//! Structural access to node children.
//!
//! `children` and `map_children` are the single source of truth for the
//! structural order of every node kind. Traversals and rewrites go through
//! them so that no kind is silently skipped.

use crate::binding::BindingId;
use crate::node::{NodeKind, SyntaxNode};
use smallvec::SmallVec;

impl SyntaxNode {
    /// Direct children in left-to-right source order.
    pub fn children(&self) -> SmallVec<[&SyntaxNode; 4]> {
        let mut out: SmallVec<[&SyntaxNode; 4]> = SmallVec::new();
        match &self.kind {
            NodeKind::Empty
            | NodeKind::Ident { .. }
            | NodeKind::This { .. }
            | NodeKind::Literal(_) => {}
            NodeKind::Select { qualifier, .. } => out.push(qualifier),
            NodeKind::Apply { callee, args } => {
                out.push(callee);
                out.extend(args.iter());
            }
            NodeKind::TypeApply { callee, type_args } => {
                out.push(callee);
                out.extend(type_args.iter());
            }
            NodeKind::TypeTree { original, .. } => {
                if let Some(original) = original {
                    out.push(original);
                }
            }
            NodeKind::Block { stats, expr } => {
                out.extend(stats.iter());
                out.push(expr);
            }
            NodeKind::ValDef { tpt, rhs, .. } => {
                out.push(tpt);
                out.push(rhs);
            }
            NodeKind::Assign { lhs, rhs } => {
                out.push(lhs);
                out.push(rhs);
            }
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push(cond);
                out.push(then_branch);
                out.push(else_branch);
            }
            NodeKind::While { cond, body } => {
                out.push(cond);
                out.push(body);
            }
            NodeKind::Return { expr } => out.push(expr),
            NodeKind::Lambda { params, body } => {
                out.extend(params.iter());
                out.push(body);
            }
            NodeKind::MethodDef {
                params, tpt, body, ..
            } => {
                out.extend(params.iter());
                out.push(tpt);
                out.push(body);
            }
            NodeKind::ClassDef { body, .. } | NodeKind::ModuleDef { body, .. } => {
                out.extend(body.iter());
            }
        }
        out
    }

    /// Rebuild this node's kind with every child replaced by `f(child)`.
    ///
    /// Children are visited in the same order as [`SyntaxNode::children`].
    /// Span, attachments, binding and type are not part of the kind; the
    /// caller decides what to carry over.
    pub fn map_children(&self, f: &mut impl FnMut(&SyntaxNode) -> SyntaxNode) -> NodeKind {
        let mut boxed = |node: &SyntaxNode| Box::new(f(node));
        match &self.kind {
            NodeKind::Empty => NodeKind::Empty,
            NodeKind::Ident { name } => NodeKind::Ident { name: name.clone() },
            NodeKind::This { qualifier } => NodeKind::This {
                qualifier: qualifier.clone(),
            },
            NodeKind::Literal(value) => NodeKind::Literal(value.clone()),
            NodeKind::Select { qualifier, name } => NodeKind::Select {
                qualifier: boxed(qualifier),
                name: name.clone(),
            },
            NodeKind::Apply { callee, args } => {
                let callee = boxed(callee);
                NodeKind::Apply {
                    callee,
                    args: args.iter().map(|arg| *boxed(arg)).collect(),
                }
            }
            NodeKind::TypeApply { callee, type_args } => {
                let callee = boxed(callee);
                NodeKind::TypeApply {
                    callee,
                    type_args: type_args.iter().map(|arg| *boxed(arg)).collect(),
                }
            }
            NodeKind::TypeTree {
                original,
                was_empty,
            } => NodeKind::TypeTree {
                original: original.as_deref().map(&mut boxed),
                was_empty: *was_empty,
            },
            NodeKind::Block { stats, expr } => {
                let stats = stats.iter().map(|stat| *boxed(stat)).collect();
                NodeKind::Block {
                    stats,
                    expr: boxed(expr),
                }
            }
            NodeKind::ValDef {
                name,
                mutable,
                tpt,
                rhs,
            } => {
                let tpt = boxed(tpt);
                NodeKind::ValDef {
                    name: name.clone(),
                    mutable: *mutable,
                    tpt,
                    rhs: boxed(rhs),
                }
            }
            NodeKind::Assign { lhs, rhs } => {
                let lhs = boxed(lhs);
                NodeKind::Assign {
                    lhs,
                    rhs: boxed(rhs),
                }
            }
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = boxed(cond);
                let then_branch = boxed(then_branch);
                NodeKind::If {
                    cond,
                    then_branch,
                    else_branch: boxed(else_branch),
                }
            }
            NodeKind::While { cond, body } => {
                let cond = boxed(cond);
                NodeKind::While {
                    cond,
                    body: boxed(body),
                }
            }
            NodeKind::Return { expr } => NodeKind::Return { expr: boxed(expr) },
            NodeKind::Lambda { params, body } => {
                let params = params.iter().map(|param| *boxed(param)).collect();
                NodeKind::Lambda {
                    params,
                    body: boxed(body),
                }
            }
            NodeKind::MethodDef {
                name,
                params,
                tpt,
                body,
            } => {
                let params = params.iter().map(|param| *boxed(param)).collect();
                let tpt = boxed(tpt);
                NodeKind::MethodDef {
                    name: name.clone(),
                    params,
                    tpt,
                    body: boxed(body),
                }
            }
            NodeKind::ClassDef { name, body } => NodeKind::ClassDef {
                name: name.clone(),
                body: body.iter().map(|member| *boxed(member)).collect(),
            },
            NodeKind::ModuleDef { name, body } => NodeKind::ModuleDef {
                name: name.clone(),
                body: body.iter().map(|member| *boxed(member)).collect(),
            },
        }
    }

    /// All nodes of the tree in pre-order, `self` first.
    pub fn descendants(&self) -> Vec<&SyntaxNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            // Reverse so the leftmost child is popped first.
            stack.extend(node.children().into_iter().rev());
        }
        out
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }

    /// Every resolved binding in the tree, in pre-order.
    pub fn bindings(&self) -> Vec<BindingId> {
        self.descendants()
            .into_iter()
            .filter_map(|node| node.binding)
            .collect()
    }

    /// Whether any node in the tree carries a resolved type.
    pub fn has_any_type(&self) -> bool {
        self.descendants().iter().any(|node| node.ty.is_some())
    }

    /// First node in pre-order matching `pred`.
    pub fn find(&self, mut pred: impl FnMut(&SyntaxNode) -> bool) -> Option<&SyntaxNode> {
        self.descendants().into_iter().find(|node| pred(node))
    }
}
