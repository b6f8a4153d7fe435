use hound_ast::{NodeIndex, SourceFile, SyntaxKind};
use hound_types::TypeId;

/// Nearest ancestor-or-self of the flagged node that a conflict can be
/// explained from. A property access only qualifies when the checker gave
/// the flagged node the error type `any`, which is how writes to
/// undeclared properties surface.
pub fn locate_root(file: &SourceFile, flagged: NodeIndex, flagged_type: Option<TypeId>) -> NodeIndex {
    let flagged_any = flagged_type == Some(TypeId::ANY);
    file.find_ancestor(flagged, |node| match node.kind {
        SyntaxKind::ReturnStatement
        | SyntaxKind::VariableDeclaration
        | SyntaxKind::ExpressionStatement
        | SyntaxKind::CallExpression => true,
        SyntaxKind::PropertyAccessExpression => flagged_any,
        _ => false,
    })
    .unwrap_or(flagged)
}
