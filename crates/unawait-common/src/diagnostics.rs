use crate::span::Span;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Messages reported by the suspension-point analyses.
///
/// `{0}` placeholders are substituted by [`format_message`].
pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage};

    pub const AWAIT_UNDER_NESTED_CLASS: DiagnosticMessage = DiagnosticMessage {
        code: 9001,
        category: DiagnosticCategory::Error,
        message: "await must not be used under a nested class '{0}'.",
    };
    pub const AWAIT_UNDER_NESTED_MODULE: DiagnosticMessage = DiagnosticMessage {
        code: 9002,
        category: DiagnosticCategory::Error,
        message: "await must not be used under a nested object '{0}'.",
    };
    pub const AWAIT_UNDER_NESTED_METHOD: DiagnosticMessage = DiagnosticMessage {
        code: 9003,
        category: DiagnosticCategory::Error,
        message: "await must not be used under a nested method '{0}'.",
    };
    pub const AWAIT_UNDER_FUNCTION_LITERAL: DiagnosticMessage = DiagnosticMessage {
        code: 9004,
        category: DiagnosticCategory::Error,
        message: "await must not be used under a nested function.",
    };
    pub const AWAIT_UNDER_BY_NAME_ARGUMENT: DiagnosticMessage = DiagnosticMessage {
        code: 9005,
        category: DiagnosticCategory::Error,
        message: "await must not be used under a by-name argument.",
    };
}

pub mod diagnostic_codes {
    pub const AWAIT_UNDER_NESTED_CLASS: u32 = 9001;
    pub const AWAIT_UNDER_NESTED_MODULE: u32 = 9002;
    pub const AWAIT_UNDER_NESTED_METHOD: u32 = 9003;
    pub const AWAIT_UNDER_FUNCTION_LITERAL: u32 = 9004;
    pub const AWAIT_UNDER_BY_NAME_ARGUMENT: u32 = 9005;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub span: Span,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            span,
            message_text: message.into(),
        }
    }

    /// Build a diagnostic from a message template and its arguments.
    pub fn from_message(span: Span, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            category: message.category,
            code: message.code,
            span,
            message_text: format_message(message.message, args),
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.category, DiagnosticCategory::Error)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        };
        write!(
            f,
            "{label} UA{}: {} ({})",
            self.code, self.message_text, self.span
        )
    }
}

/// Substitute `{0}`, `{1}`, ... in `template` with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
