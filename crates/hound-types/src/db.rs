use std::sync::Arc;

use crate::types::{
    FunctionShape, FunctionShapeId, ObjectShape, ObjectShapeId, TypeData, TypeId, TypeListId,
};

/// Read access to interned types, plus the one constructor the resolver
/// needs at run time (building unions when narrowing parameter types).
///
/// Resolver code takes `&dyn TypeDatabase` so hosts can back it with their
/// own storage.
pub trait TypeDatabase {
    fn lookup(&self, id: TypeId) -> Option<TypeData>;

    fn type_list(&self, id: TypeListId) -> Arc<[TypeId]>;

    fn object_shape(&self, id: ObjectShapeId) -> Arc<ObjectShape>;

    fn function_shape(&self, id: FunctionShapeId) -> Arc<FunctionShape>;

    /// Normalized union: flattened, deduplicated, `never` dropped, and
    /// collapsed to the single member when only one remains.
    fn union(&self, members: Vec<TypeId>) -> TypeId;
}
