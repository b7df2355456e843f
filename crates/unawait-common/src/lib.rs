//! Common types shared across the unawait crates.
//!
//! - Source spans (`Span`) attached to every syntax node
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`) reported by analyses
//!   and carried as out-of-band node attachments

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics reported by transform analyses
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
