use crate::model::{
    BinaryOperator, Linkage, NodeKind, SourceLocation, StorageClass, SyntaxNode, TranslationUnit,
    TypeEntry, TypeId, TypeKind, TypeTable, VariableDecl,
};
use crate::policy::{GrammarPolicy, Policy};

pub fn at(line: u32, column: u32) -> SourceLocation {
    SourceLocation {
        file: Some("main.cpp".to_string()),
        ..SourceLocation::new(line, column)
    }
}

pub fn unit(types: TypeTable, children: Vec<SyntaxNode>) -> TranslationUnit {
    TranslationUnit {
        source: Some("main.cpp".to_string()),
        types,
        root: SyntaxNode::new(NodeKind::TranslationUnit, SourceLocation::new(0, 0))
            .named("main.cpp")
            .with_children(children),
    }
}

/// A table whose entry #0 is `void`, the result type [`function`] uses.
pub fn basic_types() -> TypeTable {
    let mut types = TypeTable::new();
    types.push(TypeEntry::new("void", TypeKind::Builtin)).expect("push type");
    types
}

pub fn policy_with(configure: impl FnOnce(&mut GrammarPolicy)) -> Policy {
    let mut policy = Policy::default();
    configure(&mut policy.grammar);
    policy
}

pub fn function(name: &str, line: u32, body: Vec<SyntaxNode>) -> SyntaxNode {
    function_returning(name, TypeId(0), line, body)
}

pub fn function_returning(
    name: &str,
    result_type: TypeId,
    line: u32,
    body: Vec<SyntaxNode>,
) -> SyntaxNode {
    SyntaxNode::new(NodeKind::FunctionDecl { result_type }, at(line, 1))
        .named(name)
        .with_children(vec![
            SyntaxNode::new(NodeKind::CompoundStmt, at(line, 20)).with_children(body),
        ])
}

pub fn struct_decl(name: &str, line: u32, members: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::StructDecl, at(line, 1))
        .named(name)
        .with_children(members)
}

pub fn class_decl(name: &str, line: u32, members: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::ClassDecl, at(line, 1))
        .named(name)
        .with_children(members)
}

pub fn for_stmt(line: u32, body: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::ForStmt, at(line, 5)).with_children(body)
}

pub fn if_stmt(line: u32, body: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::IfStmt, at(line, 5)).with_children(body)
}

pub fn goto_stmt(line: u32) -> SyntaxNode {
    SyntaxNode::new(NodeKind::GotoStmt, at(line, 5))
}

pub fn binary(op: BinaryOperator, line: u32, column: u32) -> SyntaxNode {
    SyntaxNode::new(NodeKind::BinaryOperator { operator: op }, at(line, column))
}

pub fn unary(token: &str, line: u32, column: u32) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::UnaryOperator {
            token: token.to_string(),
        },
        at(line, column),
    )
}

pub fn local_var(name: &str, ty: TypeId, line: u32) -> SyntaxNode {
    SyntaxNode::new(NodeKind::VarDecl(VariableDecl::local(ty)), at(line, 5)).named(name)
}

pub fn var(
    name: &str,
    ty: TypeId,
    linkage: Linkage,
    storage_class: StorageClass,
    line: u32,
) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::VarDecl(VariableDecl {
            ty,
            linkage,
            storage_class,
        }),
        at(line, 1),
    )
    .named(name)
}

pub fn include(path: Option<&str>, line: u32) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::InclusionDirective {
            included_file: path.map(Into::into),
        },
        at(line, 1),
    )
}
