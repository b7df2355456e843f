//! Syntax node definitions.
//!
//! A `SyntaxNode` is a `NodeKind` plus the per-node metadata every kind
//! carries: source span, out-of-band attachments, resolved binding and
//! resolved type.

use crate::binding::BindingId;
use crate::types::Type;
use serde::Serialize;
use std::sync::Arc;
use unawait_common::{Diagnostic, Span};

/// Literal constant value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Constant {
    Unit,
    Bool(bool),
    Char(char),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(Arc<str>),
    Null,
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::Unit => write!(f, "()"),
            Constant::Bool(b) => write!(f, "{b}"),
            Constant::Char(c) => write!(f, "{c:?}"),
            Constant::Int(i) => write!(f, "{i}"),
            Constant::Long(l) => write!(f, "{l}L"),
            Constant::Float(x) => write!(f, "{x:?}f"),
            Constant::Double(x) => write!(f, "{x:?}"),
            Constant::Str(s) => write!(f, "{s:?}"),
            Constant::Null => write!(f, "null"),
        }
    }
}

/// Out-of-band payload attached to a node. Attachments never influence
/// binding or typing; they travel with a node so diagnostics and downstream
/// bookkeeping stay traceable to the original source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Attachment {
    /// Named marker, e.g. "synthetic" or "state-boundary"
    Marker(Arc<str>),
    /// Deferred diagnostic to surface if this node is reported
    Diagnostic(Diagnostic),
    /// Arbitrary data owned by some other pass
    Data(serde_json::Value),
}

impl Attachment {
    pub fn marker(name: &str) -> Self {
        Attachment::Marker(Arc::from(name))
    }
}

/// Node kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    /// Canonical "no information" node: missing else-branch, missing
    /// initializer, missing result expression.
    Empty,

    // =========================================================================
    // References
    // =========================================================================
    /// Identifier reference: `x`
    Ident { name: Arc<str> },

    /// Self reference of the named enclosing class: `C.this`
    This { qualifier: Arc<str> },

    /// Member selection: `qualifier.name`
    Select {
        qualifier: Box<SyntaxNode>,
        name: Arc<str>,
    },

    /// Literal: `1`, `"a"`, `null`
    Literal(Constant),

    // =========================================================================
    // Applications
    // =========================================================================
    /// Call application: `callee(args)`
    Apply {
        callee: Box<SyntaxNode>,
        args: Vec<SyntaxNode>,
    },

    /// Parameterized-type application: `callee[type_args]`
    TypeApply {
        callee: Box<SyntaxNode>,
        type_args: Vec<SyntaxNode>,
    },

    /// Type-annotation placeholder. The assigned type lives in the node's
    /// `ty` field. `original` is the annotation as the user wrote it, if
    /// any; `was_empty` marks a type synthesized by inference rather than
    /// derived from real information.
    TypeTree {
        original: Option<Box<SyntaxNode>>,
        was_empty: bool,
    },

    // =========================================================================
    // Statements and control flow
    // =========================================================================
    /// Block: `{ stats; expr }`
    Block {
        stats: Vec<SyntaxNode>,
        expr: Box<SyntaxNode>,
    },

    /// Value definition: `val name: tpt = rhs` / `var name: tpt = rhs`
    ValDef {
        name: Arc<str>,
        mutable: bool,
        tpt: Box<SyntaxNode>,
        rhs: Box<SyntaxNode>,
    },

    /// Assignment: `lhs = rhs`
    Assign {
        lhs: Box<SyntaxNode>,
        rhs: Box<SyntaxNode>,
    },

    /// Conditional: `if (cond) then_branch else else_branch`
    If {
        cond: Box<SyntaxNode>,
        then_branch: Box<SyntaxNode>,
        else_branch: Box<SyntaxNode>,
    },

    /// Loop: `while (cond) body`
    While {
        cond: Box<SyntaxNode>,
        body: Box<SyntaxNode>,
    },

    /// Return: `return expr`
    Return { expr: Box<SyntaxNode> },

    // =========================================================================
    // Boundaries: nested units of execution
    // =========================================================================
    /// Lambda literal: `(params) => body`
    Lambda {
        params: Vec<SyntaxNode>,
        body: Box<SyntaxNode>,
    },

    /// Method-like declaration: `def name(params): tpt = body`
    MethodDef {
        name: Arc<str>,
        params: Vec<SyntaxNode>,
        tpt: Box<SyntaxNode>,
        body: Box<SyntaxNode>,
    },

    /// Class-like declaration: `class name { body }`
    ClassDef { name: Arc<str>, body: Vec<SyntaxNode> },

    /// Module-like declaration: `object name { body }`
    ModuleDef { name: Arc<str>, body: Vec<SyntaxNode> },
}

/// A node in a resolved syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
}

impl SyntaxNode {
    /// Unresolved, unpositioned node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        SyntaxNode {
            kind,
            span: Span::NONE,
            attachments: Vec::new(),
            binding: None,
            ty: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(NodeKind::Empty)
    }

    pub fn ident(name: &str) -> Self {
        Self::new(NodeKind::Ident {
            name: Arc::from(name),
        })
    }

    pub fn this(qualifier: &str) -> Self {
        Self::new(NodeKind::This {
            qualifier: Arc::from(qualifier),
        })
    }

    pub fn select(qualifier: SyntaxNode, name: &str) -> Self {
        Self::new(NodeKind::Select {
            qualifier: Box::new(qualifier),
            name: Arc::from(name),
        })
    }

    pub fn literal(value: Constant) -> Self {
        Self::new(NodeKind::Literal(value))
    }

    pub fn apply(callee: SyntaxNode, args: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::Apply {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn type_apply(callee: SyntaxNode, type_args: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::TypeApply {
            callee: Box::new(callee),
            type_args,
        })
    }

    /// Type-annotation placeholder with no assigned type yet.
    pub fn empty_type_tree() -> Self {
        Self::new(NodeKind::TypeTree {
            original: None,
            was_empty: false,
        })
    }

    /// Type-annotation placeholder carrying an assigned type.
    pub fn type_tree(ty: Type, original: Option<SyntaxNode>, was_empty: bool) -> Self {
        Self::new(NodeKind::TypeTree {
            original: original.map(Box::new),
            was_empty,
        })
        .with_type(ty)
    }

    pub fn block(stats: Vec<SyntaxNode>, expr: SyntaxNode) -> Self {
        Self::new(NodeKind::Block {
            stats,
            expr: Box::new(expr),
        })
    }

    pub fn val_def(name: &str, tpt: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::new(NodeKind::ValDef {
            name: Arc::from(name),
            mutable: false,
            tpt: Box::new(tpt),
            rhs: Box::new(rhs),
        })
    }

    pub fn var_def(name: &str, tpt: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::new(NodeKind::ValDef {
            name: Arc::from(name),
            mutable: true,
            tpt: Box::new(tpt),
            rhs: Box::new(rhs),
        })
    }

    pub fn assign(lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        Self::new(NodeKind::Assign {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn if_else(cond: SyntaxNode, then_branch: SyntaxNode, else_branch: SyntaxNode) -> Self {
        Self::new(NodeKind::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    pub fn while_loop(cond: SyntaxNode, body: SyntaxNode) -> Self {
        Self::new(NodeKind::While {
            cond: Box::new(cond),
            body: Box::new(body),
        })
    }

    pub fn ret(expr: SyntaxNode) -> Self {
        Self::new(NodeKind::Return {
            expr: Box::new(expr),
        })
    }

    pub fn lambda(params: Vec<SyntaxNode>, body: SyntaxNode) -> Self {
        Self::new(NodeKind::Lambda {
            params,
            body: Box::new(body),
        })
    }

    pub fn method_def(
        name: &str,
        params: Vec<SyntaxNode>,
        tpt: SyntaxNode,
        body: SyntaxNode,
    ) -> Self {
        Self::new(NodeKind::MethodDef {
            name: Arc::from(name),
            params,
            tpt: Box::new(tpt),
            body: Box::new(body),
        })
    }

    pub fn class_def(name: &str, body: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::ClassDef {
            name: Arc::from(name),
            body,
        })
    }

    pub fn module_def(name: &str, body: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::ModuleDef {
            name: Arc::from(name),
            body,
        })
    }

    // =========================================================================
    // Stamping
    // =========================================================================

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_binding(mut self, binding: BindingId) -> Self {
        self.binding = Some(binding);
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Drop the resolved binding and type, keeping kind, span and attachments.
    #[must_use]
    pub fn without_semantics(mut self) -> Self {
        self.binding = None;
        self.ty = None;
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    /// A type-annotation placeholder with neither an assigned type nor an
    /// original form: re-elaboration has to infer it.
    pub fn is_empty_type_tree(&self) -> bool {
        matches!(self.kind, NodeKind::TypeTree { original: None, .. }) && self.ty.is_none()
    }

    /// Declared or referenced name for kinds that have one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident { name }
            | NodeKind::Select { name, .. }
            | NodeKind::ValDef { name, .. }
            | NodeKind::MethodDef { name, .. }
            | NodeKind::ClassDef { name, .. }
            | NodeKind::ModuleDef { name, .. } => Some(name),
            NodeKind::This { qualifier } => Some(qualifier),
            _ => None,
        }
    }

    /// Whether this kind can carry a resolved binding.
    pub const fn has_binding_slot(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Ident { .. }
                | NodeKind::This { .. }
                | NodeKind::Select { .. }
                | NodeKind::ValDef { .. }
                | NodeKind::Lambda { .. }
                | NodeKind::MethodDef { .. }
                | NodeKind::ClassDef { .. }
                | NodeKind::ModuleDef { .. }
        )
    }

    /// Nested declarations and lambdas start their own unit of execution.
    pub const fn is_scope_boundary(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Lambda { .. }
                | NodeKind::MethodDef { .. }
                | NodeKind::ClassDef { .. }
                | NodeKind::ModuleDef { .. }
        )
    }

    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Empty => "Empty",
            NodeKind::Ident { .. } => "Ident",
            NodeKind::This { .. } => "This",
            NodeKind::Select { .. } => "Select",
            NodeKind::Literal(_) => "Literal",
            NodeKind::Apply { .. } => "Apply",
            NodeKind::TypeApply { .. } => "TypeApply",
            NodeKind::TypeTree { .. } => "TypeTree",
            NodeKind::Block { .. } => "Block",
            NodeKind::ValDef { .. } => "ValDef",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::If { .. } => "If",
            NodeKind::While { .. } => "While",
            NodeKind::Return { .. } => "Return",
            NodeKind::Lambda { .. } => "Lambda",
            NodeKind::MethodDef { .. } => "MethodDef",
            NodeKind::ClassDef { .. } => "ClassDef",
            NodeKind::ModuleDef { .. } => "ModuleDef",
        }
    }

    /// Render the tree as pretty JSON for trace output and test failures.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| format!("<unserializable: {err}>"))
    }
}
