//! Free-standing type queries.
//!
//! These answer the yes/no questions the resolver asks about a type without
//! matching on [`TypeData`] at every call site.

use std::sync::Arc;

use smallvec::{SmallVec, smallvec};

use crate::db::TypeDatabase;
use crate::flags::{TypeFlags, type_flags};
use crate::types::{FunctionShape, IndexSignature, ObjectShape, PropertyInfo, TypeData, TypeId};

pub fn is_array_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeData::Array(_)))
}

pub fn array_element_type(db: &dyn TypeDatabase, id: TypeId) -> Option<TypeId> {
    match db.lookup(id) {
        Some(TypeData::Array(element)) => Some(element),
        _ => None,
    }
}

pub fn is_union_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeData::Union(_)))
}

/// Members of a union, or the type itself as a single member.
pub fn union_members(db: &dyn TypeDatabase, id: TypeId) -> SmallVec<[TypeId; 4]> {
    match db.lookup(id) {
        Some(TypeData::Union(list)) => db.type_list(list).iter().copied().collect(),
        _ => smallvec![id],
    }
}

pub fn is_function_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeData::Function(_)))
}

pub fn function_shape_of(db: &dyn TypeDatabase, id: TypeId) -> Option<Arc<FunctionShape>> {
    match db.lookup(id) {
        Some(TypeData::Function(shape_id)) => Some(db.function_shape(shape_id)),
        _ => None,
    }
}

pub fn object_shape_of(db: &dyn TypeDatabase, id: TypeId) -> Option<Arc<ObjectShape>> {
    match db.lookup(id) {
        Some(TypeData::Object(shape_id)) => Some(db.object_shape(shape_id)),
        _ => None,
    }
}

/// Named properties of an object type. Everything else has none.
pub fn properties_of(db: &dyn TypeDatabase, id: TypeId) -> Vec<PropertyInfo> {
    object_shape_of(db, id)
        .map(|shape| shape.properties.clone())
        .unwrap_or_default()
}

pub fn find_property(db: &dyn TypeDatabase, id: TypeId, name: &str) -> Option<PropertyInfo> {
    object_shape_of(db, id).and_then(|shape| shape.property(name).cloned())
}

pub fn index_signatures_of(db: &dyn TypeDatabase, id: TypeId) -> Vec<IndexSignature> {
    object_shape_of(db, id)
        .map(|shape| shape.index_signatures.clone())
        .unwrap_or_default()
}

/// `never`, or an array whose element type is `never` (e.g. the type of `[]`
/// under some configurations).
pub fn is_never_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    let id = array_element_type(db, id).unwrap_or(id);
    id == TypeId::NEVER
}

/// Objects, arrays, functions and unions.
pub fn is_structured_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    type_flags(db, id).intersects(TypeFlags::STRUCTURED)
}

/// Primitive-ish types that compare by text alone. A union counts as simple
/// when all of its members are.
pub fn is_simple_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    if let Some(TypeData::Union(list)) = db.lookup(id) {
        return db.type_list(list).iter().all(|&member| is_simple_type(db, member));
    }
    !type_flags(db, id).intersects(
        TypeFlags::STRUCTURED | TypeFlags::UNDEFINED | TypeFlags::NEVER | TypeFlags::NULL,
    )
}

pub fn is_literal_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    type_flags(db, id).intersects(TypeFlags::LITERAL | TypeFlags::ENUM_LITERAL)
}

/// Both types belong to the same primitive family (string-like,
/// number-like, boolean-like, bigint-like, symbol-like or enum literal).
pub fn is_like_types(db: &dyn TypeDatabase, source: TypeId, target: TypeId) -> bool {
    let source_flags = type_flags(db, source);
    let target_flags = type_flags(db, target);
    TypeFlags::LIKE_FAMILIES
        .iter()
        .any(|family| source_flags.intersects(*family) && target_flags.intersects(*family))
}

/// Drop `undefined` from a union. Returns the narrowed type and whether
/// anything was removed.
pub fn remove_undefined(db: &dyn TypeDatabase, id: TypeId) -> (TypeId, bool) {
    let members = union_members(db, id);
    if members.len() < 2 || !members.contains(&TypeId::UNDEFINED) {
        return (id, false);
    }
    let kept: Vec<TypeId> = members
        .into_iter()
        .filter(|&member| member != TypeId::UNDEFINED)
        .collect();
    (db.union(kept), true)
}
