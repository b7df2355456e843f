//! Tree primitives for rewriting suspension points into a state machine.
//!
//! The state-machine generator needs two things it cannot get wrong:
//!
//! 1. A **scoped traversal** ([`traverse`]) that walks sequential code and
//!    stops at boundaries where execution leaves the current flow: nested
//!    classes, objects and methods, lambda literals, and by-name arguments.
//! 2. A **detach** operation ([`detach`]) that strips the semantic
//!    annotations introduced inside the transformed fragment so the tree can
//!    be re-elaborated in a new lexical context, while references to outside
//!    declarations keep their original bindings.
//!
//! The remaining modules are the small helpers the generator assembles code
//! with: fresh names, default literals, synthetic tree builders, and the
//! registry of well-known library symbols.

pub mod builder;
pub mod by_name;
pub mod classify;
pub mod detach;
pub mod known_symbols;
pub mod literals;
pub mod meta;
pub mod names;
pub mod suspension;
pub mod traverse;

pub use builder::TreeBuilder;
pub use by_name::{ByNameShape, by_name_at};
pub use classify::{InternalBindings, is_internal};
pub use detach::detach;
pub use known_symbols::{KnownSymbolError, KnownSymbols, SymbolTable, applied_binding};
pub use literals::default_value;
pub use meta::{copy_meta, copy_span};
pub use names::FreshNames;
pub use suspension::{UnsupportedAwaitAnalysis, collect_awaits, contains_await};
pub use traverse::{BoundaryKind, ScopedVisitor, walk_children, walk_node};
