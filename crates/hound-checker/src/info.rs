//! Builds the [`NodeInfo`] describing one side of a comparison layer.

use hound_ast::{NodeIndex, SourceFile};
use hound_types::{DeclRef, PropertyInfo, TypeId};

use crate::context::RunContext;
use crate::problem::NodeInfo;

/// Collapse multi-line node text onto one line.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `name: type`, or whichever half is worth showing on its own.
pub fn full_label(name: &str, type_text: &str, is_literal: bool) -> String {
    if is_literal || name == type_text || type_text.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        type_text.to_string()
    } else {
        format!("{name}: {type_text}")
    }
}

/// Info for a node whose type is already known.
pub fn node_info(run: &RunContext<'_>, file: &SourceFile, node: NodeIndex, type_id: TypeId) -> NodeInfo {
    let type_text = run.format(type_id);
    labelled(file, node, type_text, type_id)
}

/// Like [`node_info`] with literal types printed as their primitive.
pub fn widened_node_info(
    run: &RunContext<'_>,
    file: &SourceFile,
    node: NodeIndex,
    type_id: TypeId,
) -> NodeInfo {
    let type_text = run.format_widened(type_id);
    labelled(file, node, type_text, type_id)
}

fn labelled(file: &SourceFile, node: NodeIndex, type_text: String, type_id: TypeId) -> NodeInfo {
    let display_text = clean_text(file.text(node));
    let is_literal = file.kind(node).is_some_and(|kind| kind.is_literal());
    NodeInfo {
        full_label: full_label(&display_text, &type_text, is_literal),
        display_text,
        type_text,
        link: file.node_link(node),
        type_id: Some(type_id),
    }
}

/// Info for a bare type with no node of its own. Named types link to their
/// declaration.
pub fn type_info(run: &RunContext<'_>, type_id: TypeId) -> NodeInfo {
    let type_text = run.format(type_id);
    let link = hound_types::type_queries::object_shape_of(run.db(), type_id)
        .and_then(|shape| shape.declaration)
        .map(|decl| declaration_link(run, decl))
        .unwrap_or_default();
    NodeInfo {
        display_text: type_text.clone(),
        full_label: type_text.clone(),
        type_text,
        link,
        type_id: Some(type_id),
    }
}

/// Info for a property, preferring its declared text (`b?: number`).
pub fn property_info(run: &RunContext<'_>, prop: &PropertyInfo) -> NodeInfo {
    let formatted = run.format(prop.type_id);
    let declared = prop.declaration.and_then(|decl| declaration_text(run, decl));
    let (type_text, label) = match declared {
        Some(text) => {
            let type_text = annotation_of(&text)
                .filter(|tail| !tail.is_empty())
                .map_or_else(|| formatted.clone(), str::to_string);
            (type_text, text)
        }
        None => {
            let marker = if prop.optional { "?" } else { "" };
            let name = format!("{}{marker}", prop.name);
            let label = full_label(&name, &formatted, false);
            (formatted, label)
        }
    };
    NodeInfo {
        display_text: prop.name.clone(),
        type_text,
        full_label: label,
        link: prop
            .declaration
            .map(|decl| declaration_link(run, decl))
            .unwrap_or_default(),
        type_id: Some(prop.type_id),
    }
}

/// The type annotation of a member declaration: everything after the first
/// `:` outside brackets, so `[key: string]: T` and `cb: (a: A) => B` keep
/// their whole type.
fn annotation_of(declaration: &str) -> Option<&str> {
    let mut depth = 0usize;
    for (at, ch) in declaration.char_indices() {
        match ch {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return Some(declaration[at + 1..].trim()),
            _ => {}
        }
    }
    None
}

/// Source text of a declaration, trailing `;` dropped.
pub fn declaration_text(run: &RunContext<'_>, decl: DeclRef) -> Option<String> {
    let file = run.source_file(decl.file)?;
    let text = clean_text(file.text(decl.node));
    let text = text.trim_end_matches(';').trim_end().to_string();
    (!text.is_empty()).then_some(text)
}

pub fn declaration_link(run: &RunContext<'_>, decl: DeclRef) -> String {
    run.source_file(decl.file)
        .map(|file| file.node_link(decl.node))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/info_tests.rs"]
mod tests;
