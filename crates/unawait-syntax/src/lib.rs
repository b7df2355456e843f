//! Resolved syntax trees for the unawait transform.
//!
//! Trees arrive from an upstream parser/resolver with every reference bound
//! to a declaration (`BindingId`) and every expression assigned a `Type`.
//! Nodes own their children and are treated as immutable values: passes
//! build new trees instead of editing shared ones.

pub mod binding;
pub use binding::{BindingId, BindingIdGen};

pub mod types;
pub use types::{MethodSignature, ParamInfo, ParameterShape, PrimitiveKind, Type};

pub mod node;
pub use node::{Attachment, Constant, NodeKind, SyntaxNode};

mod node_access;
