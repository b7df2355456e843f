//! Shared tree-building helpers for transform tests.

#![allow(dead_code)]

use unawait_syntax::{BindingId, BindingIdGen, Constant, ParamInfo, SyntaxNode, Type};
use unawait_transform::{KnownSymbols, SymbolTable};

pub fn int_ty() -> Type {
    Type::named("Int")
}

pub fn bool_ty() -> Type {
    Type::named("Boolean")
}

pub fn int(value: i32) -> SyntaxNode {
    SyntaxNode::literal(Constant::Int(value)).with_type(int_ty())
}

/// Identifier resolved to `binding` with type `ty`.
pub fn ident(name: &str, binding: BindingId, ty: Type) -> SyntaxNode {
    SyntaxNode::ident(name).with_binding(binding).with_type(ty)
}

/// `(params)result` method type.
pub fn method_ty(params: Vec<ParamInfo>, result: Type) -> Type {
    Type::method(params, result)
}

/// `lhs op rhs` for a boolean connective, typed the way a resolver would.
pub fn connective(lhs: SyntaxNode, op: &str, rhs: SyntaxNode) -> SyntaxNode {
    let select = SyntaxNode::select(lhs, op).with_type(method_ty(
        vec![ParamInfo::by_name("that", bool_ty())],
        bool_ty(),
    ));
    SyntaxNode::apply(select, vec![rhs]).with_type(bool_ty())
}

/// `lhs + rhs` on Int.
pub fn plus(lhs: SyntaxNode, rhs: SyntaxNode, plus_binding: BindingId) -> SyntaxNode {
    let select = SyntaxNode::select(lhs, "+")
        .with_binding(plus_binding)
        .with_type(method_ty(vec![ParamInfo::new("x", int_ty())], int_ty()));
    SyntaxNode::apply(select, vec![rhs]).with_type(int_ty())
}

/// Inferred (placeholder) type annotation.
pub fn inferred(ty: Type) -> SyntaxNode {
    SyntaxNode::type_tree(ty, None, true)
}

/// Explicit type annotation that has no recorded original form.
pub fn explicit(ty: Type) -> SyntaxNode {
    SyntaxNode::type_tree(ty, None, false)
}

pub struct Fixture {
    pub ids: BindingIdGen,
    pub symbols: KnownSymbols,
}

impl Fixture {
    pub fn new() -> Self {
        let mut ids = BindingIdGen::starting_at(1000);
        let mut table = SymbolTable::new();
        for name in [
            KnownSymbols::AWAIT,
            KnownSymbols::BOOLEAN_AND,
            KnownSymbols::BOOLEAN_OR,
            KnownSymbols::TRY_IS_FAILURE,
            KnownSymbols::TRY_GET,
            KnownSymbols::TRY_UNWRAP,
        ] {
            table.insert(name, ids.new_id());
        }
        let symbols = KnownSymbols::resolve(&table).expect("complete symbol table");
        Fixture { ids, symbols }
    }

    pub fn binding(&mut self) -> BindingId {
        self.ids.new_id()
    }

    /// `await(future)` resolved to the await marker.
    pub fn await_of(&self, future: SyntaxNode) -> SyntaxNode {
        let callee = SyntaxNode::ident("await")
            .with_binding(self.symbols.await_marker)
            .with_type(method_ty(vec![ParamInfo::new("f", Type::named("Future"))], int_ty()));
        SyntaxNode::apply(callee, vec![future]).with_type(int_ty())
    }
}
