//! Core type representation.
//!
//! Every type is interned into a [`TypeId`]. Structural payloads that do not
//! fit inline (union member lists, object and function shapes) live in side
//! pools and are referenced by their own ids.

use hound_ast::{FileId, NodeIndex};
use serde::Serialize;

/// Stable handle to an interned type.
///
/// Ids are only meaningful for the interner that produced them. The first
/// few are reserved for intrinsics so they can be named without a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const UNDEFINED: TypeId = TypeId(4);
    pub const NULL: TypeId = TypeId(5);
    pub const STRING: TypeId = TypeId(6);
    pub const NUMBER: TypeId = TypeId(7);
    pub const BOOLEAN: TypeId = TypeId(8);
    pub const BIGINT: TypeId = TypeId(9);
    pub const SYMBOL: TypeId = TypeId(10);
    /// The non-primitive `object` type.
    pub const OBJECT: TypeId = TypeId(11);
    pub const BOOLEAN_TRUE: TypeId = TypeId(12);
    pub const BOOLEAN_FALSE: TypeId = TypeId(13);
    /// `{}`
    pub const EMPTY_OBJECT: TypeId = TypeId(14);

    /// First id handed out for non-reserved types.
    pub const FIRST_USER: u32 = 15;

    #[inline]
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    String,
    Number,
    Boolean,
    Bigint,
    Symbol,
    Object,
}

impl IntrinsicKind {
    pub fn name(self) -> &'static str {
        match self {
            IntrinsicKind::Any => "any",
            IntrinsicKind::Unknown => "unknown",
            IntrinsicKind::Never => "never",
            IntrinsicKind::Void => "void",
            IntrinsicKind::Undefined => "undefined",
            IntrinsicKind::Null => "null",
            IntrinsicKind::String => "string",
            IntrinsicKind::Number => "number",
            IntrinsicKind::Boolean => "boolean",
            IntrinsicKind::Bigint => "bigint",
            IntrinsicKind::Symbol => "symbol",
            IntrinsicKind::Object => "object",
        }
    }
}

/// Literal values keep their source spelling; numbers are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(String),
    Number(String),
    BigInt(String),
    Boolean(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectShapeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionShapeId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    /// A member of an enum, e.g. `Color.Red`.
    EnumLiteral {
        enum_name: String,
        member: String,
        value: LiteralValue,
    },
    Array(TypeId),
    Union(TypeListId),
    Object(ObjectShapeId),
    Function(FunctionShapeId),
}

/// Where a property or parameter was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DeclRef {
    pub file: FileId,
    pub node: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: String,
    pub type_id: TypeId,
    pub optional: bool,
    pub declaration: Option<DeclRef>,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            name: name.into(),
            type_id,
            optional: false,
            declaration: None,
        }
    }

    pub fn opt(name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            optional: true,
            ..Self::new(name, type_id)
        }
    }

    pub fn declared_at(mut self, declaration: DeclRef) -> Self {
        self.declaration = Some(declaration);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexSignature {
    pub key_type: TypeId,
    pub value_type: TypeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectShape {
    /// Interface, class or alias name; anonymous object literals have none.
    pub name: Option<String>,
    pub properties: Vec<PropertyInfo>,
    pub index_signatures: Vec<IndexSignature>,
    /// Declaration of the named type itself.
    pub declaration: Option<DeclRef>,
}

impl ObjectShape {
    pub fn anonymous(properties: Vec<PropertyInfo>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    pub fn named(name: impl Into<String>, properties: Vec<PropertyInfo>) -> Self {
        Self {
            name: Some(name.into()),
            properties,
            ..Self::default()
        }
    }

    pub fn with_index(mut self, key_type: TypeId, value_type: TypeId) -> Self {
        self.index_signatures.push(IndexSignature {
            key_type,
            value_type,
        });
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|prop| prop.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamInfo {
    pub name: String,
    pub type_id: TypeId,
    pub optional: bool,
    pub declaration: Option<DeclRef>,
}

impl ParamInfo {
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            name: name.into(),
            type_id,
            optional: false,
            declaration: None,
        }
    }

    pub fn opt(name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            optional: true,
            ..Self::new(name, type_id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub params: Vec<ParamInfo>,
    pub return_type: TypeId,
}
