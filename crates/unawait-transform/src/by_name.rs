//! By-name parameter classification for call sites.
//!
//! A by-name argument is passed unevaluated; the callee decides when (and
//! whether) to run it. Suspension points inside such an argument do not
//! execute at the call site, so the traversal has to route them to a
//! separate hook.

use crate::known_symbols::KnownSymbols;
use unawait_syntax::{NodeKind, ParameterShape, PrimitiveKind, SyntaxNode};

/// Laziness of each argument position at one call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByNameShape {
    /// Every position is by-name (short-circuit connectives).
    AllByName,
    /// Every position is eager (callee signature unknown or not a method).
    AllEager,
    /// Positions follow the callee's declared parameter list.
    Declared(ParameterShape),
}

impl ByNameShape {
    /// Whether the argument at `index` is evaluated lazily by the callee.
    pub fn is_by_name(&self, index: usize) -> bool {
        match self {
            ByNameShape::AllByName => true,
            ByNameShape::AllEager => false,
            ByNameShape::Declared(shape) => shape.is_by_name(index),
        }
    }
}

/// `&&` and `||` on booleans evaluate their operand lazily regardless of the
/// declared signature.
pub fn is_short_circuit_operator(name: &str) -> bool {
    matches!(name, "&&" | "||")
}

/// Classify the argument positions of `call`.
///
/// A callee bound to the registry's `&&`/`||` is by-name in every position.
/// An unbound selection named `&&`/`||` on an untyped or `Boolean` qualifier
/// is treated the same way; any other bound callee goes through its
/// signature, so a user-defined `&&` keeps its declared laziness.
///
/// Callees whose type is not a single resolved method signature
/// (unresolved, polymorphic, overloaded) classify every position as eager.
/// Non-call nodes classify as all-eager too.
pub fn by_name_at(call: &SyntaxNode, symbols: Option<&KnownSymbols>) -> ByNameShape {
    let NodeKind::Apply { callee, .. } = &call.kind else {
        return ByNameShape::AllEager;
    };

    if is_short_circuit_callee(callee, symbols) {
        return ByNameShape::AllByName;
    }

    match callee.ty.as_ref().and_then(|ty| ty.as_method()) {
        Some(sig) => ByNameShape::Declared(ParameterShape::of(sig)),
        None => ByNameShape::AllEager,
    }
}

fn is_short_circuit_callee(callee: &SyntaxNode, symbols: Option<&KnownSymbols>) -> bool {
    match callee.binding {
        Some(binding) => symbols.is_some_and(|symbols| symbols.is_short_circuit(binding)),
        None => {
            let NodeKind::Select { qualifier, name } = &callee.kind else {
                return false;
            };
            is_short_circuit_operator(name)
                && qualifier
                    .ty
                    .as_ref()
                    .is_none_or(|ty| ty.primitive() == Some(PrimitiveKind::Boolean))
        }
    }
}
