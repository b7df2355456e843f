//! Resolved types.
//!
//! Only the parts of a type that the transform inspects are modelled: type
//! names with arguments (for default literals and diagnostics) and method
//! signatures (for by-name parameter classification).

use serde::Serialize;
use smallvec::SmallVec;
use std::sync::Arc;

/// A resolved type assigned to a syntax node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Type {
    /// Named type with optional type arguments: `Int`, `List[String]`
    Named { name: Arc<str>, args: Vec<Type> },

    /// Monomorphic method type: `(x: Int, y: => Boolean)Unit`
    Method(Arc<MethodSignature>),

    /// Polymorphic method type awaiting type arguments: `[T](x: T)T`
    Poly {
        type_params: Vec<Arc<str>>,
        result: Box<Type>,
    },

    /// Overloaded alternatives without a chosen overload
    Overloaded(Vec<Type>),

    /// Resolution failed upstream
    Error,
}

/// Parameter list and result of a method type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSignature {
    pub params: Vec<ParamInfo>,
    pub result: Type,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamInfo {
    pub name: Arc<str>,
    pub ty: Type,
    /// Argument is passed unevaluated and evaluated by the callee.
    pub by_name: bool,
}

impl ParamInfo {
    pub fn new(name: &str, ty: Type) -> Self {
        ParamInfo {
            name: Arc::from(name),
            ty,
            by_name: false,
        }
    }

    pub fn by_name(name: &str, ty: Type) -> Self {
        ParamInfo {
            name: Arc::from(name),
            ty,
            by_name: true,
        }
    }
}

impl Type {
    pub fn named(name: &str) -> Self {
        Type::Named {
            name: Arc::from(name),
            args: Vec::new(),
        }
    }

    pub fn applied(name: &str, args: Vec<Type>) -> Self {
        Type::Named {
            name: Arc::from(name),
            args,
        }
    }

    pub fn method(params: Vec<ParamInfo>, result: Type) -> Self {
        Type::Method(Arc::new(MethodSignature { params, result }))
    }

    /// The signature of a monomorphic method type; `None` for anything else,
    /// including polymorphic and overloaded methods.
    pub fn as_method(&self) -> Option<&MethodSignature> {
        match self {
            Type::Method(sig) => Some(sig),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Type::Named { name, args } if args.is_empty() => PrimitiveKind::from_name(name),
            _ => None,
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Named { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "[")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
            Type::Method(sig) => {
                write!(f, "(")?;
                for (i, param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    let arrow = if param.by_name { "=> " } else { "" };
                    write!(f, "{}: {arrow}{}", param.name, param.ty)?;
                }
                write!(f, "){}", sig.result)
            }
            Type::Poly {
                type_params,
                result,
            } => write!(f, "[{}]{result}", type_params.join(", ")),
            Type::Overloaded(alts) => write!(f, "<overloaded: {} alternatives>", alts.len()),
            Type::Error => write!(f, "<error>"),
        }
    }
}

/// Per-parameter laziness flags of a callable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterShape {
    by_name: SmallVec<[bool; 4]>,
}

impl ParameterShape {
    pub fn new(flags: impl IntoIterator<Item = bool>) -> Self {
        ParameterShape {
            by_name: flags.into_iter().collect(),
        }
    }

    pub fn of(sig: &MethodSignature) -> Self {
        Self::new(sig.params.iter().map(|p| p.by_name))
    }

    /// Declared laziness of parameter `index`. Positions past the declared
    /// parameter list are eager.
    pub fn is_by_name(&self, index: usize) -> bool {
        self.by_name.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn has_by_name(&self) -> bool {
        self.by_name.iter().any(|&flag| flag)
    }
}

/// Primitive value types with a zero literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveKind {
    Unit,
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Unit" => PrimitiveKind::Unit,
            "Boolean" => PrimitiveKind::Boolean,
            "Byte" => PrimitiveKind::Byte,
            "Short" => PrimitiveKind::Short,
            "Char" => PrimitiveKind::Char,
            "Int" => PrimitiveKind::Int,
            "Long" => PrimitiveKind::Long,
            "Float" => PrimitiveKind::Float,
            "Double" => PrimitiveKind::Double,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Unit => "Unit",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }
}
