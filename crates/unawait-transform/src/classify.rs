//! Internal/external binding classification.
//!
//! A binding is *internal* when the current transform introduced it or owns
//! its declaration; anything else is *external* and must keep its identity
//! through detach. The set is supplied per transform invocation.

use rustc_hash::FxHashSet;
use unawait_syntax::{BindingId, NodeKind, SyntaxNode};

/// Bindings owned by one transform invocation.
#[derive(Debug, Clone, Default)]
pub struct InternalBindings {
    set: FxHashSet<BindingId>,
}

impl InternalBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings of every declaration (`val`/`var`, method, class, object)
    /// inside `tree`, including declarations nested in lambdas and methods.
    pub fn declared_in(tree: &SyntaxNode) -> Self {
        tree.descendants()
            .into_iter()
            .filter(|node| {
                matches!(
                    node.kind,
                    NodeKind::ValDef { .. }
                        | NodeKind::MethodDef { .. }
                        | NodeKind::ClassDef { .. }
                        | NodeKind::ModuleDef { .. }
                )
            })
            .filter_map(|node| node.binding)
            .collect()
    }

    pub fn insert(&mut self, binding: BindingId) -> bool {
        self.set.insert(binding)
    }

    pub fn contains(&self, binding: BindingId) -> bool {
        self.set.contains(&binding)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = BindingId> + '_ {
        self.set.iter().copied()
    }
}

impl FromIterator<BindingId> for InternalBindings {
    fn from_iter<I: IntoIterator<Item = BindingId>>(iter: I) -> Self {
        InternalBindings {
            set: iter.into_iter().collect(),
        }
    }
}

impl Extend<BindingId> for InternalBindings {
    fn extend<I: IntoIterator<Item = BindingId>>(&mut self, iter: I) {
        self.set.extend(iter);
    }
}

/// Whether `binding` belongs to the transform's internal set.
#[inline]
#[must_use]
pub fn is_internal(binding: BindingId, internal: &InternalBindings) -> bool {
    internal.contains(binding)
}
