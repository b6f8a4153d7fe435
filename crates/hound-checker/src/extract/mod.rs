//! Splits a conflict root into the target/source pairs to compare.
//!
//! Each root kind has its own extractor. An extractor either records
//! problems on the [`DiagnosticContext`] or explains why it could not.

mod array_items;
mod assignment;
mod calls;
mod property_access;
mod returns;

use hound_ast::SyntaxKind;

use crate::context::DiagnosticContext;
use crate::problem::UnsupportedReason;

pub(crate) type Extracted = std::result::Result<(), UnsupportedReason>;

pub(crate) fn extract(ctx: &mut DiagnosticContext<'_>) -> Extracted {
    match ctx.root_kind {
        SyntaxKind::VariableDeclaration => assignment::from_declaration(ctx),
        SyntaxKind::ExpressionStatement => assignment::from_statement(ctx),
        SyntaxKind::ReturnStatement => returns::from_return(ctx),
        SyntaxKind::CallExpression => calls::from_call(ctx),
        SyntaxKind::PropertyAccessExpression => property_access::from_property_write(ctx),
        _ => Err(UnsupportedReason::UnsupportedKind),
    }
}
