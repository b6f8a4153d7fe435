//! Category bits for a type, mirroring the checker's own flag families.
//!
//! Unions carry only [`TypeFlags::UNION`]; none of their members' category
//! bits are lifted onto the union itself.

use bitflags::bitflags;

use crate::db::TypeDatabase;
use crate::types::{IntrinsicKind, LiteralValue, TypeData, TypeId};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY             = 1 << 0;
        const UNKNOWN         = 1 << 1;
        const STRING          = 1 << 2;
        const NUMBER          = 1 << 3;
        const BOOLEAN         = 1 << 4;
        const BIGINT          = 1 << 5;
        const ES_SYMBOL       = 1 << 6;
        const VOID            = 1 << 7;
        const UNDEFINED       = 1 << 8;
        const NULL            = 1 << 9;
        const NEVER           = 1 << 10;
        const STRING_LITERAL  = 1 << 11;
        const NUMBER_LITERAL  = 1 << 12;
        const BIGINT_LITERAL  = 1 << 13;
        const BOOLEAN_LITERAL = 1 << 14;
        const ENUM_LITERAL    = 1 << 15;
        const OBJECT          = 1 << 16;
        const UNION           = 1 << 17;
        const NON_PRIMITIVE   = 1 << 18;

        const STRING_LIKE    = Self::STRING.bits() | Self::STRING_LITERAL.bits();
        const NUMBER_LIKE    = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits();
        const BIGINT_LIKE    = Self::BIGINT.bits() | Self::BIGINT_LITERAL.bits();
        const BOOLEAN_LIKE   = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
        const ES_SYMBOL_LIKE = Self::ES_SYMBOL.bits();
        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BIGINT_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits();
        const STRUCTURED = Self::OBJECT.bits() | Self::UNION.bits();
    }
}

impl TypeFlags {
    /// Families whose members count as "like" each other.
    pub const LIKE_FAMILIES: [TypeFlags; 6] = [
        TypeFlags::STRING_LIKE,
        TypeFlags::NUMBER_LIKE,
        TypeFlags::BOOLEAN_LIKE,
        TypeFlags::BIGINT_LIKE,
        TypeFlags::ES_SYMBOL_LIKE,
        TypeFlags::ENUM_LITERAL,
    ];
}

fn literal_flags(value: &LiteralValue) -> TypeFlags {
    match value {
        LiteralValue::String(_) => TypeFlags::STRING_LITERAL,
        LiteralValue::Number(_) => TypeFlags::NUMBER_LITERAL,
        LiteralValue::BigInt(_) => TypeFlags::BIGINT_LITERAL,
        LiteralValue::Boolean(_) => TypeFlags::BOOLEAN_LITERAL,
    }
}

pub fn type_flags(db: &dyn TypeDatabase, id: TypeId) -> TypeFlags {
    match db.lookup(id) {
        Some(TypeData::Intrinsic(kind)) => match kind {
            IntrinsicKind::Any => TypeFlags::ANY,
            IntrinsicKind::Unknown => TypeFlags::UNKNOWN,
            IntrinsicKind::Never => TypeFlags::NEVER,
            IntrinsicKind::Void => TypeFlags::VOID,
            IntrinsicKind::Undefined => TypeFlags::UNDEFINED,
            IntrinsicKind::Null => TypeFlags::NULL,
            IntrinsicKind::String => TypeFlags::STRING,
            IntrinsicKind::Number => TypeFlags::NUMBER,
            IntrinsicKind::Boolean => TypeFlags::BOOLEAN,
            IntrinsicKind::Bigint => TypeFlags::BIGINT,
            IntrinsicKind::Symbol => TypeFlags::ES_SYMBOL,
            IntrinsicKind::Object => TypeFlags::NON_PRIMITIVE,
        },
        Some(TypeData::Literal(value)) => literal_flags(&value),
        Some(TypeData::EnumLiteral { value, .. }) => TypeFlags::ENUM_LITERAL | literal_flags(&value),
        Some(TypeData::Array(_) | TypeData::Object(_) | TypeData::Function(_)) => TypeFlags::OBJECT,
        Some(TypeData::Union(_)) => TypeFlags::UNION,
        None => TypeFlags::UNKNOWN,
    }
}
