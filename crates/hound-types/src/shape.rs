//! Tagged view of a type for structural comparison.
//!
//! [`classify_type`] looks a type up once and returns the one fact the
//! comparator branches on, so callers match on [`TypeShape`] instead of
//! probing several predicates in sequence.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::db::TypeDatabase;
use crate::flags::{TypeFlags, type_flags};
use crate::types::{FunctionShape, ObjectShape, TypeData, TypeId};

#[derive(Debug, Clone)]
pub enum TypeShape {
    /// Anything compared by rendered text: primitives, literals, enum
    /// members, and the nullish intrinsics (carried in the flags).
    Simple(TypeFlags),
    ArrayOf(TypeId),
    Union(SmallVec<[TypeId; 4]>),
    Structured(Arc<ObjectShape>),
    Function(Arc<FunctionShape>),
    Never,
}

impl TypeShape {
    pub fn is_array(&self) -> bool {
        matches!(self, TypeShape::ArrayOf(_))
    }

    /// Has properties worth diffing one by one.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            TypeShape::Structured(_) | TypeShape::Function(_) | TypeShape::Union(_)
        )
    }
}

pub fn classify_type(db: &dyn TypeDatabase, id: TypeId) -> TypeShape {
    match db.lookup(id) {
        Some(TypeData::Array(element)) => TypeShape::ArrayOf(element),
        Some(TypeData::Union(list)) => TypeShape::Union(db.type_list(list).iter().copied().collect()),
        Some(TypeData::Object(shape_id)) => TypeShape::Structured(db.object_shape(shape_id)),
        Some(TypeData::Function(shape_id)) => TypeShape::Function(db.function_shape(shape_id)),
        _ if id == TypeId::NEVER => TypeShape::Never,
        _ => TypeShape::Simple(type_flags(db, id)),
    }
}
