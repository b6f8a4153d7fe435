//! End-to-end resolution: build a small program, report a diagnostic, and
//! check which problem comes back.

use hound_ast::{FileId, NodeIndex, SourceFileBuilder};
use hound_checker::{
    Diff, ErrorType, Hound, HoundError, HoundOptions, HoundReport, HostDiagnostic, LayerSource,
    ProgramSnapshot, UnsupportedReason, resolve,
};
use hound_types::{ObjectShape, ParamInfo, PropertyInfo, TypeId};

const NOT_ASSIGNABLE: u32 = 2322;
const ARGUMENT_MISMATCH: u32 = 2345;
const CANNOT_FIND_NAME: u32 = 2304;

fn run(program: &ProgramSnapshot, diagnostics: &[HostDiagnostic]) -> HoundReport {
    resolve(program, &HoundOptions::default(), diagnostics).expect("known nodes")
}

fn named_object(builder: &mut SourceFileBuilder, value: NodeIndex) -> NodeIndex {
    let property = builder.property_assignment("name", value);
    builder.object_literal(&[property])
}

struct ItemsFixture {
    program: ProgramSnapshot,
    file: FileId,
    elements: Vec<NodeIndex>,
    declaration: NodeIndex,
}

/// `const items: Item[] = [{ name: "a" }, { name: 1 }, { name: "c" }];`
fn items_fixture() -> ItemsFixture {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let item = types.object_with_shape(ObjectShape::named(
        "Item",
        vec![PropertyInfo::new("name", TypeId::STRING)],
    ));
    let items = types.array(item);
    let good = types.object(vec![PropertyInfo::new("name", TypeId::STRING)]);
    let bad = types.object(vec![PropertyInfo::new("name", TypeId::NUMBER)]);

    let mut builder = SourceFileBuilder::new("src/items.ts");
    let a = builder.string_literal("a");
    let first = named_object(&mut builder, a);
    let one = builder.numeric_literal("1");
    let second = named_object(&mut builder, one);
    let c = builder.string_literal("c");
    let third = named_object(&mut builder, c);
    let literal = builder.array_literal(&[first, second, third]);
    let declaration = builder.variable_declaration("items", Some("Item[]"), Some(literal));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, declaration, items)
        .set_type(file, first, good)
        .set_type(file, second, bad)
        .set_type(file, third, good);

    ItemsFixture {
        program,
        file,
        elements: vec![first, second, third],
        declaration,
    }
}

#[test]
fn test_array_literal_points_at_the_failing_element() {
    let fixture = items_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, fixture.elements[1])],
    );

    assert!(report.unsupported.is_empty());
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.root, fixture.declaration);
    assert_eq!(problem.source_node, Some(fixture.elements[1]));
    assert_eq!(problem.remaining, 1);
    assert_eq!(problem.classification, ErrorType::PropMismatch);
    assert_eq!(problem.stack.len(), 1);
    let layer = problem.stack.last().expect("layer");
    assert_eq!(layer.target.display_text, "items");
    assert_eq!(layer.target.type_text, "Item");
}

#[test]
fn test_array_literal_reports_only_the_first_of_several_failures() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let item = types.object_with_shape(ObjectShape::named(
        "Item",
        vec![PropertyInfo::new("name", TypeId::STRING)],
    ));
    let items = types.array(item);
    let good = types.object(vec![PropertyInfo::new("name", TypeId::STRING)]);
    let numeric = types.object(vec![PropertyInfo::new("name", TypeId::NUMBER)]);
    let flagged = types.object(vec![PropertyInfo::new("name", TypeId::BOOLEAN)]);

    // `[{ name: "a" }, { name: 1 }, { name: true }, { name: "d" }]`
    let mut builder = SourceFileBuilder::new("src/items.ts");
    let a = builder.string_literal("a");
    let first = named_object(&mut builder, a);
    let one = builder.numeric_literal("1");
    let second = named_object(&mut builder, one);
    let yes = builder.boolean_literal(true);
    let third = named_object(&mut builder, yes);
    let d = builder.string_literal("d");
    let fourth = named_object(&mut builder, d);
    let literal = builder.array_literal(&[first, second, third, fourth]);
    let declaration = builder.variable_declaration("items", Some("Item[]"), Some(literal));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, declaration, items)
        .set_type(file, first, good)
        .set_type(file, second, numeric)
        .set_type(file, third, flagged)
        .set_type(file, fourth, good);

    let report = run(
        &program,
        &[
            HostDiagnostic::new(NOT_ASSIGNABLE, file, second),
            HostDiagnostic::new(NOT_ASSIGNABLE, file, third),
        ],
    );
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.source_node, Some(second));
    assert_eq!(problem.remaining, 2);
    assert_eq!(problem.classification, ErrorType::PropMismatch);
}

#[test]
fn test_diagnostics_sharing_a_root_are_explained_once() {
    let fixture = items_fixture();
    let report = run(
        &fixture.program,
        &[
            HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, fixture.elements[1]),
            HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, fixture.elements[2]),
            HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, fixture.declaration),
        ],
    );
    assert_eq!(report.problems.len(), 1);
    assert!(report.unsupported.is_empty());
}

#[test]
fn test_ignored_codes_are_skipped() {
    let fixture = items_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(CANNOT_FIND_NAME, fixture.file, fixture.elements[1])],
    );
    assert!(report.is_empty());
}

#[test]
fn test_unknown_file_and_node_are_errors() {
    let fixture = items_fixture();
    let options = HoundOptions::default();

    let err = resolve(
        &fixture.program,
        &options,
        &[HostDiagnostic::new(NOT_ASSIGNABLE, FileId(7), fixture.declaration)],
    )
    .unwrap_err();
    assert!(matches!(err, HoundError::UnknownFile { code: NOT_ASSIGNABLE, .. }));

    let err = resolve(
        &fixture.program,
        &options,
        &[HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, NodeIndex(10_000))],
    )
    .unwrap_err();
    assert!(matches!(err, HoundError::UnknownNode { ref file_name, .. } if file_name == "src/items.ts"));
}

#[test]
fn test_empty_array_literal_compares_an_empty_shape() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let item = types.object_with_shape(ObjectShape::named(
        "Item",
        vec![PropertyInfo::new("name", TypeId::STRING)],
    ));
    let items = types.array(item);

    let mut builder = SourceFileBuilder::new("src/empty.ts");
    let literal = builder.array_literal(&[]);
    let declaration = builder.variable_declaration("items", Some("Item[]"), Some(literal));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program.set_type(file, declaration, items);

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, declaration)]);
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.source_node, None);
    assert_eq!(problem.remaining, 0);
    assert_eq!(problem.classification, ErrorType::TargetPropMissing);
    let Diff::Shapes(candidates) = &problem.diff else {
        panic!("expected shapes");
    };
    assert_eq!(candidates[0].missing, ["name"]);
}

#[test]
fn test_function_initializer_is_checked_through_its_returns() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let outcome = types.object_with_shape(ObjectShape::named(
        "Outcome",
        vec![PropertyInfo::new("ok", TypeId::BOOLEAN)],
    ));
    let handler = types.function(vec![ParamInfo::new("input", TypeId::STRING)], outcome);
    let returned = types.object(vec![PropertyInfo::new("ok", TypeId::STRING)]);

    let mut builder = SourceFileBuilder::new("src/handler.ts");
    let yes = builder.string_literal("yes");
    let property = builder.property_assignment("ok", yes);
    let value = builder.object_literal(&[property]);
    let ret = builder.return_statement(Some(value));
    let body = builder.block(&[ret]);
    let arrow = builder.arrow_function(&[], body);
    let declaration = builder.variable_declaration("handler", Some("Handler"), Some(arrow));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, declaration, handler)
        .set_type(file, value, returned);

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, declaration)]);
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.source_node, Some(value));
    assert_eq!(problem.classification, ErrorType::PropMismatch);
    let layer = problem.stack.last().expect("layer");
    assert_eq!(layer.target.display_text, "handler");
    assert_eq!(layer.target.type_text, "Outcome");
}

struct ReturnFixture {
    program: ProgramSnapshot,
    file: FileId,
    value: NodeIndex,
}

/// `function make(): Config { return { a: "x", extra: 1 }; }`
fn return_fixture() -> ReturnFixture {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let config = types.object_with_shape(ObjectShape::named(
        "Config",
        vec![PropertyInfo::new("a", TypeId::STRING)],
    ));
    let make = types.function(Vec::new(), config);
    let returned = types.object(vec![
        PropertyInfo::new("a", TypeId::STRING),
        PropertyInfo::new("extra", TypeId::NUMBER),
    ]);

    let mut builder = SourceFileBuilder::new("src/make.ts");
    let x = builder.string_literal("x");
    let a = builder.property_assignment("a", x);
    let one = builder.numeric_literal("1");
    let extra = builder.property_assignment("extra", one);
    let value = builder.object_literal(&[a, extra]);
    let ret = builder.return_statement(Some(value));
    let body = builder.block(&[ret]);
    let function = builder.function_declaration("make", &[], Some("Config"), body);
    let file = program.add_file(builder.finish(&[function]));
    program
        .set_type(file, function, make)
        .set_type(file, value, returned);

    ReturnFixture {
        program,
        file,
        value,
    }
}

#[test]
fn test_returns_compare_both_ways_by_default() {
    let fixture = return_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, fixture.value)],
    );
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.classification, ErrorType::SourcePropMissing);
    let layer = problem.stack.last().expect("layer");
    assert_eq!(layer.target.display_text, "make");
    assert_eq!(layer.target.full_label, "make: Config");
}

#[test]
fn test_relaxed_function_types_compare_returns_one_way() {
    let fixture = return_fixture();
    let options = HoundOptions {
        strict_function_types: Some(false),
        ..HoundOptions::default()
    };
    let mut hound = Hound::with_options(&fixture.program, &options);
    let report = hound
        .run(&[HostDiagnostic::new(NOT_ASSIGNABLE, fixture.file, fixture.value)])
        .expect("known nodes");
    assert!(report.problems.is_empty());
    assert_eq!(report.unsupported.len(), 1);
    assert_eq!(report.unsupported[0].reason, UnsupportedReason::NoConflictFound);
}

/// `const make: () => Config = () => { return { a: "x", extra: 1 }; };`
fn arrow_return_fixture() -> (ProgramSnapshot, FileId, NodeIndex) {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let config = types.object_with_shape(ObjectShape::named(
        "Config",
        vec![PropertyInfo::new("a", TypeId::STRING)],
    ));
    let make = types.function(Vec::new(), config);
    let returned = types.object(vec![
        PropertyInfo::new("a", TypeId::STRING),
        PropertyInfo::new("extra", TypeId::NUMBER),
    ]);

    let mut builder = SourceFileBuilder::new("src/make.ts");
    let x = builder.string_literal("x");
    let a = builder.property_assignment("a", x);
    let one = builder.numeric_literal("1");
    let extra = builder.property_assignment("extra", one);
    let value = builder.object_literal(&[a, extra]);
    let ret = builder.return_statement(Some(value));
    let body = builder.block(&[ret]);
    let arrow = builder.arrow_function(&[], body);
    let declaration = builder.variable_declaration("make", Some("() => Config"), Some(arrow));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, declaration, make)
        .set_type(file, value, returned);
    (program, file, declaration)
}

#[test]
fn test_function_initializer_returns_follow_strict_function_types() {
    let (program, file, declaration) = arrow_return_fixture();
    let diagnostics = [HostDiagnostic::new(NOT_ASSIGNABLE, file, declaration)];

    let report = run(&program, &diagnostics);
    assert_eq!(report.problems.len(), 1);
    assert_eq!(report.problems[0].classification, ErrorType::SourcePropMissing);

    let options = HoundOptions {
        strict_function_types: Some(false),
        ..HoundOptions::default()
    };
    let report = resolve(&program, &options, &diagnostics).expect("known nodes");
    assert!(report.problems.is_empty());
    assert_eq!(report.unsupported[0].reason, UnsupportedReason::NoConflictFound);
}

#[test]
fn test_function_initializer_array_return_points_at_the_element() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let item = types.object_with_shape(ObjectShape::named(
        "Item",
        vec![PropertyInfo::new("name", TypeId::STRING)],
    ));
    let list = types.function(Vec::new(), types.array(item));
    let good = types.object(vec![PropertyInfo::new("name", TypeId::STRING)]);
    let bad = types.object(vec![PropertyInfo::new("name", TypeId::NUMBER)]);

    // `const list: () => Item[] = () => { return [{ name: "a" }, { name: 1 }]; };`
    let mut builder = SourceFileBuilder::new("src/list.ts");
    let a = builder.string_literal("a");
    let first = named_object(&mut builder, a);
    let one = builder.numeric_literal("1");
    let second = named_object(&mut builder, one);
    let literal = builder.array_literal(&[first, second]);
    let ret = builder.return_statement(Some(literal));
    let body = builder.block(&[ret]);
    let arrow = builder.arrow_function(&[], body);
    let declaration = builder.variable_declaration("list", Some("() => Item[]"), Some(arrow));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, declaration, list)
        .set_type(file, first, good)
        .set_type(file, second, bad);

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, declaration)]);
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.source_node, Some(second));
    assert_eq!(problem.remaining, 0);
    assert_eq!(problem.classification, ErrorType::PropMismatch);
    let layer = problem.stack.last().expect("layer");
    assert_eq!(layer.target.type_text, "Item");
}

#[test]
fn test_element_access_with_a_rejected_key_needs_an_index() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let table_type = types.object_with_shape(
        ObjectShape::anonymous(Vec::new()).with_index(TypeId::STRING, TypeId::STRING),
    );

    let mut builder = SourceFileBuilder::new("src/lookup.ts");
    let table = builder.identifier("table");
    let flag = builder.identifier("flag");
    let access = builder.element_access(table, flag);
    let declaration = builder.variable_declaration("label", Some("string"), Some(access));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, declaration, TypeId::STRING)
        .set_type(file, table, table_type)
        .set_type(file, flag, TypeId::BOOLEAN)
        .set_type(file, access, TypeId::STRING);

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, access)]);
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.classification, ErrorType::MissingIndex);
    assert_eq!(problem.source_node, Some(flag));
    assert_eq!(problem.target_node, Some(table));
    let target = problem.placeholder_target.as_ref().expect("placeholder target");
    assert_eq!(target.key, "[key: boolean]");
    let layer = problem.stack.last().expect("layer");
    assert!(matches!(&layer.source, LayerSource::Placeholder(p) if p.info.type_text == "any"));
}

#[test]
fn test_numeric_keys_fit_string_indexes() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let table_type = types.object_with_shape(
        ObjectShape::anonymous(vec![PropertyInfo::new("size", TypeId::NUMBER)])
            .with_index(TypeId::STRING, TypeId::STRING),
    );

    let mut builder = SourceFileBuilder::new("src/lookup.ts");
    let table = builder.identifier("table");
    let zero = builder.numeric_literal("0");
    let access = builder.element_access(table, zero);
    let declaration = builder.variable_declaration("label", Some("string"), Some(access));
    let statement = builder.variable_statement(declaration);
    let file = program.add_file(builder.finish(&[statement]));
    let zero_type = program.interner().literal_number("0");
    program
        .set_type(file, declaration, TypeId::STRING)
        .set_type(file, table, table_type)
        .set_type(file, zero, zero_type)
        .set_type(file, access, TypeId::STRING);

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, access)]);
    assert!(report.problems.is_empty());
    assert_eq!(report.unsupported.len(), 1);
    assert_eq!(report.unsupported[0].reason, UnsupportedReason::NoConflictFound);
}

#[test]
fn test_undeclared_property_write_uses_a_placeholder() {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let settings = types.object_with_shape(ObjectShape::named(
        "Settings",
        vec![PropertyInfo::new("name", TypeId::STRING)],
    ));

    let mut builder = SourceFileBuilder::new("src/settings.ts");
    let object = builder.identifier("settings");
    let access = builder.property_access(object, "debug");
    let value = builder.boolean_literal(true);
    let assignment = builder.assignment(access, value);
    let statement = builder.expression_statement(assignment);
    let file = program.add_file(builder.finish(&[statement]));
    program
        .set_type(file, object, settings)
        .set_type(file, access, TypeId::ANY)
        .set_type(file, value, TypeId::BOOLEAN_TRUE);

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, access)]);
    assert_eq!(report.problems.len(), 1);
    let problem = &report.problems[0];
    assert_eq!(problem.root, access);
    assert_eq!(problem.classification, ErrorType::TargetPropMissing);
    assert_eq!(problem.placeholder_target.as_ref().map(|t| t.key.as_str()), Some("debug"));
    let Diff::Shapes(candidates) = &problem.diff else {
        panic!("expected shapes");
    };
    assert_eq!(candidates[0].missing, ["debug"]);
    assert_eq!(candidates[0].source_info.full_label, "debug: boolean");
    let reversed = candidates[0].reversed.as_ref().expect("reversed");
    assert_eq!(reversed.contextual, ["name"]);
}

struct CallFixture {
    program: ProgramSnapshot,
    file: FileId,
    calls: Vec<NodeIndex>,
    args: Vec<Vec<NodeIndex>>,
}

/// `greet(name: string, title?: string)` called as `greet("a")`,
/// `greet()`, `greet("a", "b", "c")` and `greet(1)`.
fn call_fixture() -> CallFixture {
    let mut program = ProgramSnapshot::new();
    let types = program.interner();
    let greet = types.function(
        vec![
            ParamInfo::new("name", TypeId::STRING),
            ParamInfo::opt("title", TypeId::STRING),
        ],
        TypeId::VOID,
    );
    let literal_a = types.literal_string("a");
    let literal_b = types.literal_string("b");
    let literal_c = types.literal_string("c");
    let literal_one = types.literal_number("1");

    let mut builder = SourceFileBuilder::new("src/greet.ts");
    let mut calls = Vec::new();
    let mut args = Vec::new();
    let mut callees = Vec::new();
    let mut statements = Vec::new();
    let arg_sets: [&[&str]; 4] = [&["a"], &[], &["a", "b", "c"], &["1"]];
    for set in arg_sets {
        let callee = builder.identifier("greet");
        let nodes: Vec<NodeIndex> = set
            .iter()
            .map(|text| match *text {
                "1" => builder.numeric_literal("1"),
                other => builder.string_literal(other),
            })
            .collect();
        let call = builder.call(callee, &nodes);
        statements.push(builder.expression_statement(call));
        builder.newline();
        callees.push(callee);
        calls.push(call);
        args.push(nodes);
    }
    let file = program.add_file(builder.finish(&statements));
    for callee in callees {
        program.set_type(file, callee, greet);
    }
    for (set, nodes) in arg_sets.iter().zip(&args) {
        for (text, &node) in set.iter().zip(nodes) {
            let type_id = match *text {
                "a" => literal_a,
                "b" => literal_b,
                "c" => literal_c,
                _ => literal_one,
            };
            program.set_type(file, node, type_id);
        }
    }

    CallFixture {
        program,
        file,
        calls,
        args,
    }
}

#[test]
fn test_absent_optional_argument_is_not_a_conflict() {
    let fixture = call_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(ARGUMENT_MISMATCH, fixture.file, fixture.args[0][0])],
    );
    assert!(report.problems.is_empty());
    assert_eq!(report.unsupported[0].reason, UnsupportedReason::NoConflictFound);
    assert_eq!(report.unsupported[0].node, fixture.calls[0]);
}

#[test]
fn test_missing_required_argument() {
    let fixture = call_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(ARGUMENT_MISMATCH, fixture.file, fixture.calls[1])],
    );
    let problem = &report.problems[0];
    assert_eq!(problem.classification, ErrorType::TooFewArgs);
    assert_eq!(problem.diff, Diff::Arity);
    let call = problem.call.as_ref().expect("call details");
    assert_eq!(call.calling_pairs.len(), 2);
    assert!(call.calling_pairs[1].optional);
    assert_eq!(problem.remaining, 1);
}

#[test]
fn test_extra_arguments() {
    let fixture = call_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(ARGUMENT_MISMATCH, fixture.file, fixture.args[2][2])],
    );
    let problem = &report.problems[0];
    assert_eq!(problem.classification, ErrorType::TooManyArgs);
    assert_eq!(problem.source_node, Some(fixture.args[2][2]));
    let call = problem.call.as_ref().expect("call details");
    assert_eq!(call.error_index, Some(2));
    assert!(call.calling_pairs[2].target.is_none());
}

#[test]
fn test_argument_of_the_wrong_family() {
    let fixture = call_fixture();
    let report = run(
        &fixture.program,
        &[HostDiagnostic::new(ARGUMENT_MISMATCH, fixture.file, fixture.args[3][0])],
    );
    let problem = &report.problems[0];
    assert_eq!(problem.classification, ErrorType::Mismatch);
    assert_eq!(problem.remaining, 0);
    let call = problem.call.as_ref().expect("call details");
    assert_eq!(call.error_index, Some(0));
    let source = call.calling_pairs[0].source.as_ref().expect("argument");
    assert_eq!(source.type_text, "number");
}

#[test]
fn test_untyped_callee_has_no_signature() {
    let mut program = ProgramSnapshot::new();
    let mut builder = SourceFileBuilder::new("src/unknown.ts");
    let callee = builder.identifier("mystery");
    let arg = builder.numeric_literal("1");
    let call = builder.call(callee, &[arg]);
    let statement = builder.expression_statement(call);
    let file = program.add_file(builder.finish(&[statement]));
    program.set_type(file, arg, TypeId::NUMBER);

    let report = run(&program, &[HostDiagnostic::new(ARGUMENT_MISMATCH, file, arg)]);
    assert_eq!(report.unsupported.len(), 1);
    assert_eq!(report.unsupported[0].reason, UnsupportedReason::MissingSignature);
}

#[test]
fn test_unrelated_roots_are_unsupported() {
    let mut program = ProgramSnapshot::new();
    let mut builder = SourceFileBuilder::new("src/types.ts");
    let member = builder.property_signature("id", false, "string");
    let interface = builder.interface_declaration("Entity", &[member]);
    let file = program.add_file(builder.finish(&[interface]));

    let report = run(&program, &[HostDiagnostic::new(NOT_ASSIGNABLE, file, member)]);
    assert!(report.problems.is_empty());
    assert_eq!(report.unsupported[0].reason, UnsupportedReason::UnsupportedKind);
    assert_eq!(report.unsupported[0].link, "src/types.ts:1");
}
