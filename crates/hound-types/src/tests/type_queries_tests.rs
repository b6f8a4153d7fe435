use super::*;
use crate::type_queries::*;

#[test]
fn test_never_includes_never_array() {
    let interner = TypeInterner::new();

    assert!(is_never_type(&interner, TypeId::NEVER));
    assert!(is_never_type(&interner, interner.array(TypeId::NEVER)));
    assert!(!is_never_type(&interner, interner.array(TypeId::STRING)));
    assert!(!is_never_type(&interner, TypeId::UNDEFINED));
}

#[test]
fn test_simple_and_structured() {
    let interner = TypeInterner::new();
    let obj = interner.object(vec![PropertyInfo::new("a", TypeId::STRING)]);
    let colors = interner.union(vec![interner.literal_string("red"), interner.literal_string("blue")]);
    let maybe = interner.union(vec![TypeId::STRING, TypeId::UNDEFINED]);

    assert!(is_simple_type(&interner, TypeId::STRING));
    assert!(is_simple_type(&interner, colors));
    assert!(!is_simple_type(&interner, maybe));
    assert!(!is_simple_type(&interner, TypeId::UNDEFINED));
    assert!(!is_simple_type(&interner, TypeId::NULL));
    assert!(!is_simple_type(&interner, obj));

    assert!(is_structured_type(&interner, obj));
    assert!(is_structured_type(&interner, colors));
    assert!(is_structured_type(&interner, interner.array(TypeId::NUMBER)));
    assert!(!is_structured_type(&interner, TypeId::NUMBER));
}

#[test]
fn test_like_families() {
    let interner = TypeInterner::new();
    let red = interner.literal_string("red");
    let one = interner.literal_number("1");
    let big = interner.literal_bigint("10");
    let member = interner.enum_literal("Color", "Red", LiteralValue::Number("0".into()));
    let colors = interner.union(vec![red, interner.literal_string("blue")]);

    assert!(is_like_types(&interner, red, TypeId::STRING));
    assert!(is_like_types(&interner, one, TypeId::NUMBER));
    assert!(is_like_types(&interner, big, TypeId::BIGINT));
    assert!(is_like_types(&interner, TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN));
    assert!(is_like_types(&interner, member, TypeId::NUMBER));
    assert!(!is_like_types(&interner, red, TypeId::NUMBER));
    // unions carry no family bits of their own
    assert!(!is_like_types(&interner, TypeId::STRING, colors));
}

#[test]
fn test_remove_undefined() {
    let interner = TypeInterner::new();
    let maybe = interner.union(vec![TypeId::STRING, TypeId::UNDEFINED]);
    let wide = interner.union(vec![TypeId::STRING, TypeId::NUMBER, TypeId::UNDEFINED]);

    assert_eq!(remove_undefined(&interner, maybe), (TypeId::STRING, true));
    let (narrowed, removed) = remove_undefined(&interner, wide);
    assert!(removed);
    assert_eq!(union_members(&interner, narrowed).as_slice(), &[TypeId::STRING, TypeId::NUMBER]);
    assert_eq!(remove_undefined(&interner, TypeId::UNDEFINED), (TypeId::UNDEFINED, false));
}

#[test]
fn test_classify_type_tags() {
    let interner = TypeInterner::new();
    let arr = interner.array(TypeId::STRING);
    let obj = interner.object(vec![PropertyInfo::new("a", TypeId::STRING)]);
    let func = interner.function(vec![], TypeId::VOID);
    let either = interner.union(vec![TypeId::STRING, TypeId::NUMBER]);

    assert!(matches!(classify_type(&interner, arr), TypeShape::ArrayOf(e) if e == TypeId::STRING));
    assert!(matches!(classify_type(&interner, obj), TypeShape::Structured(_)));
    assert!(matches!(classify_type(&interner, func), TypeShape::Function(_)));
    assert!(matches!(classify_type(&interner, either), TypeShape::Union(ref m) if m.len() == 2));
    assert!(matches!(classify_type(&interner, TypeId::NEVER), TypeShape::Never));
    assert!(matches!(
        classify_type(&interner, TypeId::UNDEFINED),
        TypeShape::Simple(flags) if flags.contains(TypeFlags::UNDEFINED)
    ));
    assert!(classify_type(&interner, either).is_structured());
    assert!(!classify_type(&interner, arr).is_structured());
}
