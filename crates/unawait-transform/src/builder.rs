//! Builders for the synthetic trees the state machine is assembled from.
//!
//! Every builder that takes an `origin` stamps the result with the origin's
//! span and attachments, so diagnostics on generated code point back at the
//! user's source.

use crate::known_symbols::KnownSymbols;
use crate::literals::default_value;
use crate::meta::{copy_meta, fill_missing_spans};
use crate::names::state_machine;
use std::sync::Arc;
use unawait_syntax::{Attachment, Constant, SyntaxNode, Type};

/// Marker attached to every node built here.
pub const SYNTHETIC_MARKER: &str = "synthetic";

/// Builds trees that refer to one generated state machine class.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    state_machine_class: Arc<str>,
}

impl TreeBuilder {
    pub fn new(state_machine_class: &str) -> Self {
        TreeBuilder {
            state_machine_class: Arc::from(state_machine_class),
        }
    }

    pub fn state_machine_class(&self) -> &str {
        &self.state_machine_class
    }

    fn stamp(origin: Option<&SyntaxNode>, node: SyntaxNode) -> SyntaxNode {
        match origin {
            Some(origin) => fill_missing_spans(origin.span, copy_meta(origin, node))
                .with_attachment(Attachment::marker(SYNTHETIC_MARKER)),
            None => node.with_attachment(Attachment::marker(SYNTHETIC_MARKER)),
        }
    }

    /// `StateMachine.this`
    pub fn state_machine_this(&self) -> SyntaxNode {
        SyntaxNode::this(&self.state_machine_class)
    }

    /// `StateMachine.this.field`
    pub fn field(&self, field: &str) -> SyntaxNode {
        SyntaxNode::select(self.state_machine_this(), field)
    }

    /// `StateMachine.this.state = next`
    pub fn assign_state(&self, next: u32, origin: Option<&SyntaxNode>) -> SyntaxNode {
        let value = i32::try_from(next).map_or(Constant::Long(i64::from(next)), Constant::Int);
        let node = SyntaxNode::assign(
            self.field(state_machine::STATE),
            SyntaxNode::literal(value),
        );
        Self::stamp(origin, node)
    }

    /// `var name: ty = <default>`
    pub fn var_with_default(
        &self,
        name: &str,
        ty: &Type,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let node = SyntaxNode::var_def(
            name,
            SyntaxNode::type_tree(ty.clone(), None, false),
            default_value(ty),
        );
        Self::stamp(origin, node)
    }

    /// `qualifier.name(args)`
    pub fn call_method(
        &self,
        qualifier: SyntaxNode,
        name: &str,
        args: Vec<SyntaxNode>,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let node = SyntaxNode::apply(SyntaxNode::select(qualifier, name), args);
        Self::stamp(origin, node)
    }

    /// `callee[type_args](args)`
    pub fn call_generic(
        &self,
        callee: SyntaxNode,
        type_args: Vec<Type>,
        args: Vec<SyntaxNode>,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let type_args = type_args
            .into_iter()
            .map(|ty| SyntaxNode::type_tree(ty, None, false))
            .collect();
        let node = SyntaxNode::apply(SyntaxNode::type_apply(callee, type_args), args);
        Self::stamp(origin, node)
    }

    /// `await(awaitable)` bound to the registry's await marker.
    pub fn await_call(
        &self,
        symbols: &KnownSymbols,
        awaitable: SyntaxNode,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let callee =
            SyntaxNode::ident(state_machine::AWAIT).with_binding(symbols.await_marker);
        Self::stamp(origin, SyntaxNode::apply(callee, vec![awaitable]))
    }

    /// `tr.get()`: unwrap the completed try-result, rethrowing failures.
    pub fn try_get(
        &self,
        symbols: &KnownSymbols,
        tr: SyntaxNode,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let callee = SyntaxNode::select(tr, "get").with_binding(symbols.try_get);
        Self::stamp(origin, SyntaxNode::apply(callee, Vec::new()))
    }

    /// `tr.unwrap()`: the completed value as a try-result, for
    /// continuations that propagate failures instead of rethrowing.
    pub fn try_unwrap(
        &self,
        symbols: &KnownSymbols,
        tr: SyntaxNode,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let callee = SyntaxNode::select(tr, "unwrap").with_binding(symbols.try_unwrap);
        Self::stamp(origin, SyntaxNode::apply(callee, Vec::new()))
    }

    /// `tr.isFailure()`
    pub fn try_is_failure(
        &self,
        symbols: &KnownSymbols,
        tr: SyntaxNode,
        origin: Option<&SyntaxNode>,
    ) -> SyntaxNode {
        let callee = SyntaxNode::select(tr, "isFailure").with_binding(symbols.try_is_failure);
        Self::stamp(origin, SyntaxNode::apply(callee, Vec::new()))
    }
}
