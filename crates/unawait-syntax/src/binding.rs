//! Binding identities.
//!
//! A `BindingId` is the resolved target of a reference. It is an opaque
//! handle: two references with the same text may resolve to different
//! bindings, and whether a binding is internal to a transform is decided by
//! the caller, not recorded here.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BindingId(pub u32);

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocates fresh, never-repeating binding identities.
#[derive(Debug, Default)]
pub struct BindingIdGen {
    next_id: u32,
}

impl BindingIdGen {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Continue numbering after an existing id space (e.g. the resolver's).
    pub fn starting_at(next_id: u32) -> Self {
        Self { next_id }
    }

    pub fn new_id(&mut self) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        id
    }
}
