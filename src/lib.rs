//! unawait: tree primitives for rewriting `await` into explicit state machines.
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`common`]: source spans and diagnostics
//! - [`syntax`]: the resolved syntax tree (nodes, bindings, types)
//! - [`transform`]: scoped traversal, detach, and the generator's helpers
//!
//! ```ignore
//! use unawait::syntax::SyntaxNode;
//! use unawait::transform::{InternalBindings, detach};
//!
//! let internal = InternalBindings::declared_in(&fragment);
//! let standalone = detach(&fragment, &internal);
//! ```

pub use unawait_common as common;
pub use unawait_syntax as syntax;
pub use unawait_transform as transform;

pub use unawait_common::{Diagnostic, Span};
pub use unawait_syntax::{BindingId, SyntaxNode, Type};
pub use unawait_transform::{
    InternalBindings, KnownSymbols, ScopedVisitor, by_name_at, copy_meta, detach,
};

// Tracing subscriber setup, driven by UNAWAIT_LOG / UNAWAIT_LOG_FORMAT
pub mod tracing_config;
