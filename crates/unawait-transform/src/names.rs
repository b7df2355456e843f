//! Fresh and well-known names for generated code.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Names of the generated state machine's members.
pub mod state_machine {
    pub const STATE: &str = "state";
    pub const RESULT: &str = "result";
    pub const EXEC_CONTEXT: &str = "execContext";
    pub const APPLY: &str = "apply";
    pub const RESUME: &str = "resume";
    pub const COMPLETED: &str = "completed";
    pub const TR: &str = "tr";
    pub const MATCH_RES: &str = "matchres";
    pub const IF_RES: &str = "ifres";
    pub const AWAIT: &str = "await";
    pub const BIND_SUFFIX: &str = "$bind";
}

/// Separator between a fresh name's prefix and its counter. User code is
/// assumed not to declare names containing it.
pub const FRESH_SEPARATOR: char = '$';

/// Generates names unique within one transform invocation.
#[derive(Debug, Default)]
pub struct FreshNames {
    counters: FxHashMap<Arc<str>, u32>,
}

impl FreshNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// `prefix$1`, `prefix$2`, ... counted separately for each prefix.
    pub fn fresh(&mut self, prefix: &str) -> Arc<str> {
        let counter = self.counters.entry(Arc::from(prefix)).or_insert(0);
        *counter += 1;
        Arc::from(format!("{prefix}{FRESH_SEPARATOR}{counter}"))
    }

    /// Fresh name for the variable that receives the result of an await.
    pub fn await_result(&mut self) -> Arc<str> {
        self.fresh(state_machine::AWAIT)
    }

    /// Fresh name for the lifted result of an `if` expression.
    pub fn if_result(&mut self) -> Arc<str> {
        self.fresh(state_machine::IF_RES)
    }

    /// Fresh name for the lifted result of a `match` expression.
    pub fn match_result(&mut self) -> Arc<str> {
        self.fresh(state_machine::MATCH_RES)
    }

    /// Name of the field that holds a pattern-bound variable across states.
    pub fn bind_field(name: &str) -> Arc<str> {
        Arc::from(format!("{name}{}", state_machine::BIND_SUFFIX))
    }

    /// Whether `name` was produced by [`FreshNames::fresh`] for `prefix`.
    pub fn is_fresh_for(name: &str, prefix: &str) -> bool {
        name.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(FRESH_SEPARATOR))
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    }
}
