//! Zero literals for lifted variables.
//!
//! Locals that live across a suspension point are lifted into fields of the
//! state machine and must be initialised before the state that assigns them
//! runs.

use unawait_syntax::{Constant, PrimitiveKind, SyntaxNode, Type};

/// The zero literal for `ty`: `0`, `0L`, `0.0`, `false`, `'\0'`, `()` for
/// primitives and `null` for everything else. The literal carries its type.
pub fn default_value(ty: &Type) -> SyntaxNode {
    let Some(kind) = ty.primitive() else {
        return SyntaxNode::literal(Constant::Null).with_type(Type::named("Null"));
    };
    let value = match kind {
        PrimitiveKind::Unit => Constant::Unit,
        PrimitiveKind::Boolean => Constant::Bool(false),
        PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int => Constant::Int(0),
        PrimitiveKind::Char => Constant::Char('\0'),
        PrimitiveKind::Long => Constant::Long(0),
        PrimitiveKind::Float => Constant::Float(0.0),
        PrimitiveKind::Double => Constant::Double(0.0),
    };
    SyntaxNode::literal(value).with_type(Type::named(kind.name()))
}
