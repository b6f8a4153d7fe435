//! Renders types the way the checker prints them in diagnostics.
//!
//! Text equality of two rendered types is meaningful to the resolver (two
//! types that print the same are treated as the same), so this output must
//! stay deterministic.

use crate::db::TypeDatabase;
use crate::flags::{TypeFlags, type_flags};
use crate::types::{LiteralValue, TypeData, TypeId};

pub struct TypeFormatter<'a> {
    db: &'a dyn TypeDatabase,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self { db }
    }

    pub fn format(&self, id: TypeId) -> String {
        match self.db.lookup(id) {
            Some(TypeData::Intrinsic(kind)) => kind.name().to_string(),
            Some(TypeData::Literal(value)) => format_literal(&value),
            Some(TypeData::EnumLiteral {
                enum_name, member, ..
            }) => format!("{enum_name}.{member}"),
            Some(TypeData::Array(element)) => {
                let inner = self.format(element);
                match self.db.lookup(element) {
                    Some(TypeData::Union(_) | TypeData::Function(_)) => format!("({inner})[]"),
                    _ => format!("{inner}[]"),
                }
            }
            Some(TypeData::Union(list)) => self
                .db
                .type_list(list)
                .iter()
                .map(|&member| self.format(member))
                .collect::<Vec<_>>()
                .join(" | "),
            Some(TypeData::Object(shape_id)) => {
                let shape = self.db.object_shape(shape_id);
                if let Some(name) = &shape.name {
                    return name.clone();
                }
                let mut members: Vec<String> = shape
                    .properties
                    .iter()
                    .map(|prop| {
                        let marker = if prop.optional { "?" } else { "" };
                        format!("{}{}: {}", prop.name, marker, self.format(prop.type_id))
                    })
                    .collect();
                members.extend(shape.index_signatures.iter().map(|sig| {
                    format!(
                        "[key: {}]: {}",
                        self.format(sig.key_type),
                        self.format(sig.value_type)
                    )
                }));
                if members.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {}; }}", members.join("; "))
                }
            }
            Some(TypeData::Function(shape_id)) => {
                let shape = self.db.function_shape(shape_id);
                let params = shape
                    .params
                    .iter()
                    .map(|param| {
                        let marker = if param.optional { "?" } else { "" };
                        format!("{}{}: {}", param.name, marker, self.format(param.type_id))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({}) => {}", params, self.format(shape.return_type))
            }
            None => "unknown".to_string(),
        }
    }

    /// Like [`format`](Self::format), but literal types print as the
    /// primitive they widen to (`"a"` becomes `string`).
    pub fn format_widened(&self, id: TypeId) -> String {
        let flags = type_flags(self.db, id);
        if flags.intersects(TypeFlags::STRING_LIKE) {
            "string".to_string()
        } else if flags.intersects(TypeFlags::NUMBER_LIKE) {
            "number".to_string()
        } else if flags.intersects(TypeFlags::BOOLEAN_LIKE) {
            "boolean".to_string()
        } else if flags.intersects(TypeFlags::BIGINT_LIKE) {
            "bigint".to_string()
        } else {
            self.format(id)
        }
    }
}

fn format_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => format!("\"{s}\""),
        LiteralValue::Number(n) => n.clone(),
        LiteralValue::BigInt(n) => format!("{n}n"),
        LiteralValue::Boolean(b) => b.to_string(),
    }
}

pub fn type_to_string(db: &dyn TypeDatabase, id: TypeId) -> String {
    TypeFormatter::new(db).format(id)
}

pub fn type_to_string_like(db: &dyn TypeDatabase, id: TypeId) -> String {
    TypeFormatter::new(db).format_widened(id)
}
