//! Single-threaded type interner.
//!
//! This is the per-run type arena: every type the host reports is interned
//! once and referred to by [`TypeId`] from then on. Interior mutability lets
//! the resolver build unions through a shared `&dyn TypeDatabase`.

use std::cell::RefCell;
use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::trace;

use crate::db::TypeDatabase;
use crate::types::{
    FunctionShape, FunctionShapeId, IntrinsicKind, LiteralValue, ObjectShape, ObjectShapeId,
    ParamInfo, PropertyInfo, TypeData, TypeId, TypeListId,
};

#[derive(Default)]
struct InternerState {
    types: Vec<TypeData>,
    type_map: FxHashMap<TypeData, TypeId>,
    lists: Vec<Arc<[TypeId]>>,
    list_map: FxHashMap<Arc<[TypeId]>, TypeListId>,
    objects: Vec<Arc<ObjectShape>>,
    object_map: FxHashMap<Arc<ObjectShape>, ObjectShapeId>,
    functions: Vec<Arc<FunctionShape>>,
    function_map: FxHashMap<Arc<FunctionShape>, FunctionShapeId>,
}

impl InternerState {
    fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.type_map.get(&data) {
            return id;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(data.clone());
        self.type_map.insert(data, id);
        id
    }

    fn intern_list(&mut self, members: Vec<TypeId>) -> TypeListId {
        let members: Arc<[TypeId]> = members.into();
        if let Some(&id) = self.list_map.get(&members) {
            return id;
        }
        let id = TypeListId(self.lists.len() as u32);
        self.lists.push(members.clone());
        self.list_map.insert(members, id);
        id
    }

    fn intern_object(&mut self, shape: ObjectShape) -> ObjectShapeId {
        let shape = Arc::new(shape);
        if let Some(&id) = self.object_map.get(&shape) {
            return id;
        }
        let id = ObjectShapeId(self.objects.len() as u32);
        self.objects.push(shape.clone());
        self.object_map.insert(shape, id);
        id
    }

    fn intern_function(&mut self, shape: FunctionShape) -> FunctionShapeId {
        let shape = Arc::new(shape);
        if let Some(&id) = self.function_map.get(&shape) {
            return id;
        }
        let id = FunctionShapeId(self.functions.len() as u32);
        self.functions.push(shape.clone());
        self.function_map.insert(shape, id);
        id
    }
}

pub struct TypeInterner {
    state: RefCell<InternerState>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let mut state = InternerState::default();
        // Order must match the reserved `TypeId` constants.
        for kind in [
            IntrinsicKind::Any,
            IntrinsicKind::Unknown,
            IntrinsicKind::Never,
            IntrinsicKind::Void,
            IntrinsicKind::Undefined,
            IntrinsicKind::Null,
            IntrinsicKind::String,
            IntrinsicKind::Number,
            IntrinsicKind::Boolean,
            IntrinsicKind::Bigint,
            IntrinsicKind::Symbol,
            IntrinsicKind::Object,
        ] {
            state.intern(TypeData::Intrinsic(kind));
        }
        state.intern(TypeData::Literal(LiteralValue::Boolean(true)));
        state.intern(TypeData::Literal(LiteralValue::Boolean(false)));
        let empty = state.intern_object(ObjectShape::default());
        state.intern(TypeData::Object(empty));
        debug_assert_eq!(state.types.len() as u32, TypeId::FIRST_USER);

        Self {
            state: RefCell::new(state),
        }
    }

    pub fn len(&self) -> usize {
        self.state.borrow().types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn intern(&self, data: TypeData) -> TypeId {
        self.state.borrow_mut().intern(data)
    }

    pub fn literal_string(&self, value: &str) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::String(value.to_string())))
    }

    pub fn literal_number(&self, text: &str) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Number(text.to_string())))
    }

    pub fn literal_bigint(&self, text: &str) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::BigInt(text.to_string())))
    }

    pub fn literal_boolean(&self, value: bool) -> TypeId {
        if value {
            TypeId::BOOLEAN_TRUE
        } else {
            TypeId::BOOLEAN_FALSE
        }
    }

    pub fn enum_literal(&self, enum_name: &str, member: &str, value: LiteralValue) -> TypeId {
        self.intern(TypeData::EnumLiteral {
            enum_name: enum_name.to_string(),
            member: member.to_string(),
            value,
        })
    }

    pub fn array(&self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    /// Anonymous object type (`{ a: string }`).
    pub fn object(&self, properties: Vec<PropertyInfo>) -> TypeId {
        self.object_with_shape(ObjectShape::anonymous(properties))
    }

    pub fn object_with_shape(&self, shape: ObjectShape) -> TypeId {
        let mut state = self.state.borrow_mut();
        let shape_id = state.intern_object(shape);
        state.intern(TypeData::Object(shape_id))
    }

    pub fn function(&self, params: Vec<ParamInfo>, return_type: TypeId) -> TypeId {
        let mut state = self.state.borrow_mut();
        let shape_id = state.intern_function(FunctionShape {
            params,
            return_type,
        });
        state.intern(TypeData::Function(shape_id))
    }

    /// Reserve a named object type whose shape is supplied later through
    /// [`define_object`](Self::define_object). This is how self-referential
    /// interfaces are built. The reserved id is never shared with another
    /// structurally equal type.
    pub fn declare_object(&self, name: &str) -> TypeId {
        let mut state = self.state.borrow_mut();
        let shape_id = ObjectShapeId(state.objects.len() as u32);
        state
            .objects
            .push(Arc::new(ObjectShape::named(name, Vec::new())));
        state.intern(TypeData::Object(shape_id))
    }

    /// Fill in the shape of a type reserved with `declare_object`.
    /// Returns `false` when `id` is not an object type.
    pub fn define_object(&self, id: TypeId, shape: ObjectShape) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(TypeData::Object(shape_id)) = state.types.get(id.0 as usize).cloned() else {
            return false;
        };
        match state.objects.get_mut(shape_id.0 as usize) {
            Some(slot) => {
                *slot = Arc::new(shape);
                true
            }
            None => false,
        }
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDatabase for TypeInterner {
    fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.state.borrow().types.get(id.0 as usize).cloned()
    }

    fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        self.state
            .borrow()
            .lists
            .get(id.0 as usize)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    fn object_shape(&self, id: ObjectShapeId) -> Arc<ObjectShape> {
        self.state
            .borrow()
            .objects
            .get(id.0 as usize)
            .cloned()
            .unwrap_or_default()
    }

    fn function_shape(&self, id: FunctionShapeId) -> Arc<FunctionShape> {
        self.state
            .borrow()
            .functions
            .get(id.0 as usize)
            .cloned()
            .unwrap_or_else(|| {
                Arc::new(FunctionShape {
                    params: Vec::new(),
                    return_type: TypeId::UNKNOWN,
                })
            })
    }

    fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: IndexSet<TypeId, FxBuildHasher> = IndexSet::default();
        for member in members {
            match self.lookup(member) {
                Some(TypeData::Union(list)) => flat.extend(self.type_list(list).iter().copied()),
                _ => {
                    flat.insert(member);
                }
            }
        }
        flat.shift_remove(&TypeId::NEVER);

        if flat.contains(&TypeId::ANY) {
            return TypeId::ANY;
        }
        if flat.contains(&TypeId::UNKNOWN) {
            return TypeId::UNKNOWN;
        }
        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => {
                let mut state = self.state.borrow_mut();
                let list = state.intern_list(flat.into_iter().collect());
                let id = state.intern(TypeData::Union(list));
                trace!(union = id.0, "interned union");
                id
            }
        }
    }
}
