use crate::error::CheckError;
use crate::model::{NodeKind, SyntaxNode, TypeTable};
use crate::policy::Policy;
use gramguard_types::ViolationKind;

mod declarations;
mod expressions;
mod inclusion;
mod statements;
mod types;

pub use inclusion::normalize_lexically;
pub use types::classify_type;

/// A violation before it is attached to a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub kind: ViolationKind,
    pub message: Option<String>,
}

impl Detection {
    pub fn new(kind: ViolationKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn with_message(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }
}

/// Dispatch one node to the check for its kind, appending detections in check order.
pub fn classify_node(
    node: &SyntaxNode,
    types: &TypeTable,
    policy: &Policy,
    out: &mut Vec<Detection>,
) -> Result<(), CheckError> {
    match &node.kind {
        NodeKind::InclusionDirective { included_file } => {
            inclusion::run(included_file.as_deref(), &policy.header, out);
        }
        NodeKind::VarDecl(decl) | NodeKind::ParmDecl(decl) | NodeKind::FieldDecl(decl) => {
            declarations::variable(decl, types, &policy.grammar, out)?;
        }
        NodeKind::FunctionDecl { result_type } => {
            declarations::function(&node.spelling, *result_type, types, &policy.grammar, out)?;
        }
        NodeKind::StructDecl => {
            declarations::record(ViolationKind::Struct, policy.grammar.disable_struct, out);
        }
        NodeKind::ClassDecl => {
            declarations::record(ViolationKind::Class, policy.grammar.disable_class, out);
        }
        NodeKind::BinaryOperator { operator } => {
            expressions::binary(*operator, &policy.grammar, out);
        }
        NodeKind::UnaryOperator { token } => {
            expressions::unary(token, &policy.grammar, out);
        }
        NodeKind::ArraySubscriptExpr => {
            expressions::subscript(&policy.grammar, out);
        }
        NodeKind::IntegerLiteral { ty } => {
            if let Some(kind) = classify_type(*ty, types, &policy.grammar)? {
                out.push(kind);
            }
        }
        NodeKind::ConditionalOperator | NodeKind::IfStmt | NodeKind::SwitchStmt => {
            statements::branch(&policy.grammar, out);
        }
        NodeKind::GotoStmt => statements::goto(&policy.grammar, out),
        NodeKind::WhileStmt | NodeKind::ForStmt | NodeKind::DoStmt => {
            statements::looping(&policy.grammar, out);
        }
        NodeKind::TranslationUnit
        | NodeKind::UnionDecl
        | NodeKind::EnumDecl
        | NodeKind::TypedefDecl
        | NodeKind::Namespace
        | NodeKind::CallExpr
        | NodeKind::DeclRefExpr
        | NodeKind::MemberRefExpr
        | NodeKind::ParenExpr
        | NodeKind::CastExpr
        | NodeKind::FloatingLiteral
        | NodeKind::StringLiteral
        | NodeKind::CharacterLiteral
        | NodeKind::CompoundStmt
        | NodeKind::DeclStmt
        | NodeKind::ReturnStmt
        | NodeKind::BreakStmt
        | NodeKind::ContinueStmt
        | NodeKind::CaseStmt
        | NodeKind::DefaultStmt
        | NodeKind::LabelStmt
        | NodeKind::Unexposed => {}
    }
    Ok(())
}
