//! Structural comparator benchmarks.
//!
//! Measures how comparison cost grows with object width, nesting depth and
//! the number of union members a source has to be matched against.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hound::checker::{CompareMode, Comparator, ComparisonLayer, NodeInfo, RunContext, Stack};
use hound::types::{ObjectShape, PropertyInfo, TypeDatabase, TypeId};
use hound::{HoundOptions, ProgramSnapshot};

/// `{ p0: string; ...; p{n-1}: string }`, with the last property typed
/// `last` so target and source differ in exactly one place.
fn wide_object(program: &ProgramSnapshot, width: usize, last: TypeId) -> TypeId {
    let properties = (0..width)
        .map(|i| {
            let ty = if i + 1 == width { last } else { TypeId::STRING };
            PropertyInfo::new(format!("p{i}"), ty)
        })
        .collect();
    program.interner().object(properties)
}

/// `{ next: { next: ... { leaf: <leaf> } } }`
fn nested_object(program: &ProgramSnapshot, depth: usize, leaf: TypeId) -> TypeId {
    let types = program.interner();
    let mut current = types.object(vec![PropertyInfo::new("leaf", leaf)]);
    for _ in 0..depth {
        current = types.object(vec![
            PropertyInfo::new("next", current),
            PropertyInfo::new("id", TypeId::NUMBER),
        ]);
    }
    current
}

fn compare(program: &ProgramSnapshot, target: TypeId, source: TypeId) -> bool {
    let options = HoundOptions::default();
    let run = RunContext::new(program, &options);
    let stack = Stack::new().push(ComparisonLayer::new(NodeInfo::default(), NodeInfo::default()));
    Comparator::new(run, CompareMode::default())
        .compare(target, source, &stack)
        .is_ok()
}

fn bench_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_width");
    for width in [4usize, 32, 256] {
        let program = ProgramSnapshot::new();
        let target = wide_object(&program, width, TypeId::STRING);
        let source = wide_object(&program, width, TypeId::NUMBER);
        group.bench_with_input(BenchmarkId::new("properties", width), &width, |b, _| {
            b.iter(|| black_box(compare(&program, target, source)));
        });
    }
    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_depth");
    for depth in [2usize, 16, 64] {
        let program = ProgramSnapshot::new();
        let target = nested_object(&program, depth, TypeId::STRING);
        let source = nested_object(&program, depth, TypeId::BOOLEAN);
        group.bench_with_input(BenchmarkId::new("nesting", depth), &depth, |b, _| {
            b.iter(|| black_box(compare(&program, target, source)));
        });
    }
    group.finish();
}

fn bench_union_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_union");
    for members in [2usize, 8, 32] {
        let program = ProgramSnapshot::new();
        let types = program.interner();
        let variants: Vec<TypeId> = (0..members)
            .map(|i| {
                types.object_with_shape(ObjectShape::named(
                    format!("Variant{i}"),
                    vec![
                        PropertyInfo::new("kind", types.literal_string(&format!("v{i}"))),
                        PropertyInfo::new(format!("payload{i}"), TypeId::NUMBER),
                    ],
                ))
            })
            .collect();
        let target = types.union(variants);
        let source = types.object(vec![
            PropertyInfo::new("kind", TypeId::STRING),
            PropertyInfo::new("payload0", TypeId::STRING),
        ]);
        group.bench_with_input(BenchmarkId::new("members", members), &members, |b, _| {
            b.iter(|| black_box(compare(&program, target, source)));
        });
    }
    group.finish();
}

criterion_group!(compare_benches, bench_width, bench_depth, bench_union_selection);
criterion_main!(compare_benches);
