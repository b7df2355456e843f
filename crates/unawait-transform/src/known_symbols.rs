//! Registry of well-known library symbols.
//!
//! The transform recognises a handful of library members by identity: the
//! await marker, the boolean short-circuit connectives and the accessors of
//! the try-result type the state machine completes with. They are resolved
//! once, up front, from a table supplied by the host, and passed around as a
//! `KnownSymbols` value. A missing or ambiguous entry means the host library
//! does not have the shape the transform assumes, so resolution fails
//! immediately.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::Arc;
use unawait_syntax::{BindingId, NodeKind, SyntaxNode};

/// Errors from resolving well-known symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnownSymbolError {
    /// No candidate is registered under the qualified name
    Missing { name: Arc<str> },
    /// Several candidates are registered and none was chosen
    Ambiguous {
        name: Arc<str>,
        candidates: Vec<BindingId>,
    },
    /// A representative expression contains no resolved call
    NoResolvedCall { context: String },
}

impl std::fmt::Display for KnownSymbolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnownSymbolError::Missing { name } => {
                write!(f, "required library symbol '{name}' was not found")
            }
            KnownSymbolError::Ambiguous { name, candidates } => {
                write!(
                    f,
                    "required library symbol '{name}' is ambiguous: {} candidates (",
                    candidates.len()
                )?;
                for (i, candidate) in candidates.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{candidate}")?;
                }
                write!(f, ")")
            }
            KnownSymbolError::NoResolvedCall { context } => {
                write!(f, "no resolved call found in representative expression: {context}")
            }
        }
    }
}

impl std::error::Error for KnownSymbolError {}

/// Qualified name to candidate bindings, as exported by the host resolver.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: FxHashMap<Arc<str>, SmallVec<[BindingId; 1]>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `binding` as a candidate for `name`. Overloads register
    /// several candidates under one name.
    pub fn insert(&mut self, name: &str, binding: BindingId) {
        let candidates = self.entries.entry(Arc::from(name)).or_default();
        if !candidates.contains(&binding) {
            candidates.push(binding);
        }
    }

    pub fn candidates(&self, name: &str) -> &[BindingId] {
        self.entries
            .get(name)
            .map(|candidates| candidates.as_slice())
            .unwrap_or(&[])
    }

    /// The single binding registered under `name`.
    pub fn resolve_unique(&self, name: &str) -> Result<BindingId, KnownSymbolError> {
        match self.candidates(name) {
            [] => Err(KnownSymbolError::Missing {
                name: Arc::from(name),
            }),
            [binding] => Ok(*binding),
            many => Err(KnownSymbolError::Ambiguous {
                name: Arc::from(name),
                candidates: many.to_vec(),
            }),
        }
    }
}

/// Identities of the library members the transform depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownSymbols {
    pub await_marker: BindingId,
    pub boolean_and: BindingId,
    pub boolean_or: BindingId,
    pub try_is_failure: BindingId,
    pub try_get: BindingId,
    pub try_unwrap: BindingId,
}

impl KnownSymbols {
    pub const AWAIT: &'static str = "unawait.await";
    pub const BOOLEAN_AND: &'static str = "Boolean.&&";
    pub const BOOLEAN_OR: &'static str = "Boolean.||";
    pub const TRY_IS_FAILURE: &'static str = "Try.isFailure";
    pub const TRY_GET: &'static str = "Try.get";
    pub const TRY_UNWRAP: &'static str = "Try.unwrap";

    /// Resolve every required symbol from `table`, failing on the first
    /// missing or ambiguous entry.
    pub fn resolve(table: &SymbolTable) -> Result<Self, KnownSymbolError> {
        let symbols = KnownSymbols {
            await_marker: table.resolve_unique(Self::AWAIT)?,
            boolean_and: table.resolve_unique(Self::BOOLEAN_AND)?,
            boolean_or: table.resolve_unique(Self::BOOLEAN_OR)?,
            try_is_failure: table.resolve_unique(Self::TRY_IS_FAILURE)?,
            try_get: table.resolve_unique(Self::TRY_GET)?,
            try_unwrap: table.resolve_unique(Self::TRY_UNWRAP)?,
        };
        tracing::debug!(?symbols, "[known_symbols] resolved");
        Ok(symbols)
    }

    /// Whether `node` is an application of the await marker, possibly with
    /// explicit type arguments: `await(x)` or `await[T](x)`.
    pub fn is_await_call(&self, node: &SyntaxNode) -> bool {
        let NodeKind::Apply { callee, .. } = &node.kind else {
            return false;
        };
        callee_binding(callee) == Some(self.await_marker)
    }

    pub fn is_short_circuit(&self, binding: BindingId) -> bool {
        binding == self.boolean_and || binding == self.boolean_or
    }
}

/// Binding of a call's function part, looking through type application.
fn callee_binding(callee: &SyntaxNode) -> Option<BindingId> {
    match &callee.kind {
        NodeKind::TypeApply { callee, .. } => callee_binding(callee),
        _ => callee.binding,
    }
}

/// Binding of the first resolved call in a checked representative
/// expression, e.g. the `get` in `(null: Try[Any]).get()`.
pub fn applied_binding(expr: &SyntaxNode) -> Result<BindingId, KnownSymbolError> {
    expr.descendants()
        .into_iter()
        .find_map(|node| match &node.kind {
            NodeKind::Apply { callee, .. } => callee_binding(callee),
            _ => None,
        })
        .ok_or_else(|| KnownSymbolError::NoResolvedCall {
            context: expr.to_json(),
        })
}
