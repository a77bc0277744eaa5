//! The type-resolved syntax tree handed over by the front end.
//!
//! Nodes own their children; types live in a [`TypeTable`] arena and are referenced by
//! [`TypeId`]. The engine only ever borrows this model.

use crate::error::CheckError;
use camino::Utf8PathBuf;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranslationUnit {
    /// Main source file, as the front end recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub types: TypeTable,
    pub root: SyntaxNode,
}

// ============================================================================
// Types
// ============================================================================

/// Index into a [`TypeTable`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeEntry {
    /// The type as written, e.g. `std::string` or `const long long`.
    pub spelling: String,

    /// Local `const` qualification.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_const: bool,

    /// Where the named type (record, typedef) is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<SourceLocation>,

    #[serde(flatten)]
    pub kind: TypeKind,
}

impl TypeEntry {
    pub fn new(spelling: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            spelling: spelling.into(),
            is_const: false,
            declaration: None,
            kind,
        }
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn declared_at(mut self, location: SourceLocation) -> Self {
        self.declaration = Some(location);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    /// `typedef` / `using` alias.
    Typedef { underlying: TypeId },
    /// Elaborated spelling such as `struct S` or `std::string`.
    Elaborated { named: TypeId },
    Record,
    Enum,
    ConstantArray { element: TypeId, size: u64 },
    VariableArray { element: TypeId },
    IncompleteArray { element: TypeId },
    Pointer { pointee: TypeId },
    #[serde(rename = "lvalue_reference")]
    LValueReference { pointee: TypeId },
    #[serde(rename = "rvalue_reference")]
    RValueReference { pointee: TypeId },
    LongLong,
    #[serde(rename = "ulong_long")]
    ULongLong,
    Int128,
    #[serde(rename = "uint128")]
    UInt128,
    Function { result: TypeId },
    /// Every other scalar builtin (`int`, `char`, `double`, `void`, ...).
    Builtin,
    Unexposed,
}

impl TypeKind {
    pub fn is_alias(&self) -> bool {
        matches!(self, TypeKind::Typedef { .. } | TypeKind::Elaborated { .. })
    }
}

/// Arena of every type referenced by the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TypeTable(Vec<TypeEntry>);

fn id_for_index(index: usize) -> Result<TypeId, CheckError> {
    u32::try_from(index)
        .map(TypeId)
        .map_err(|_| CheckError::TypeTableFull { len: index })
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Fails once every `u32` id is taken.
    pub fn push(&mut self, entry: TypeEntry) -> Result<TypeId, CheckError> {
        let id = id_for_index(self.0.len())?;
        self.0.push(entry);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeEntry)> {
        (0..=u32::MAX)
            .zip(self.0.iter())
            .map(|(i, entry)| (TypeId(i), entry))
    }

    pub fn get(&self, id: TypeId) -> Result<&TypeEntry, CheckError> {
        self.0
            .get(id.0 as usize)
            .ok_or(CheckError::DanglingType {
                id,
                len: self.0.len(),
            })
    }

    /// Strip every alias layer and return the underlying structural type.
    pub fn canonical(&self, id: TypeId) -> Result<(TypeId, &TypeEntry), CheckError> {
        let mut current = id;
        for _ in 0..=self.0.len() {
            let entry = self.get(current)?;
            match entry.kind {
                TypeKind::Typedef { underlying } => current = underlying,
                TypeKind::Elaborated { named } => current = named,
                _ => return Ok((current, entry)),
            }
        }
        Err(CheckError::TypeCycle(id))
    }

    /// `const` on the type as written or on its canonical form.
    pub fn is_const(&self, id: TypeId) -> Result<bool, CheckError> {
        if self.get(id)?.is_const {
            return Ok(true);
        }
        Ok(self.canonical(id)?.1.is_const)
    }

    /// The type an entry wraps or aliases, if any.
    pub fn referenced_type(entry: &TypeEntry) -> Option<TypeId> {
        match entry.kind {
            TypeKind::Typedef { underlying } => Some(underlying),
            TypeKind::Elaborated { named } => Some(named),
            TypeKind::ConstantArray { element, .. }
            | TypeKind::VariableArray { element }
            | TypeKind::IncompleteArray { element } => Some(element),
            TypeKind::Pointer { pointee }
            | TypeKind::LValueReference { pointee }
            | TypeKind::RValueReference { pointee } => Some(pointee),
            TypeKind::Function { result } => Some(result),
            TypeKind::Record
            | TypeKind::Enum
            | TypeKind::LongLong
            | TypeKind::ULongLong
            | TypeKind::Int128
            | TypeKind::UInt128
            | TypeKind::Builtin
            | TypeKind::Unexposed => None,
        }
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub line: u32,
    pub column: u32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub in_system_header: bool,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            file: None,
            line,
            column,
            in_system_header: false,
        }
    }

    pub fn system(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: Some(file.into()),
            line,
            column,
            in_system_header: true,
        }
    }
}

/// Byte range of a node in its source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceExtent {
    pub start: u32,
    pub end: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SyntaxNode {
    #[serde(flatten)]
    pub kind: NodeKind,

    /// Declared name for declarations, file name for the translation unit.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub spelling: String,

    pub location: SourceLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<SourceExtent>,

    /// In source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, location: SourceLocation) -> Self {
        Self {
            kind,
            spelling: String::new(),
            location,
            extent: None,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, spelling: impl Into<String>) -> Self {
        self.spelling = spelling.into();
        self
    }

    pub fn spanning(mut self, start: u32, end: u32) -> Self {
        self.extent = Some(SourceExtent { start, end });
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    Invalid,
    #[default]
    NoLinkage,
    Internal,
    UniqueExternal,
    External,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    Invalid,
    #[default]
    None,
    Extern,
    Static,
    PrivateExtern,
    Auto,
    Register,
}

/// Variable, parameter and field declarations share one payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VariableDecl {
    #[serde(rename = "type")]
    pub ty: TypeId,
    #[serde(default)]
    pub linkage: Linkage,
    #[serde(default)]
    pub storage_class: StorageClass,
}

impl VariableDecl {
    pub fn local(ty: TypeId) -> Self {
        Self {
            ty,
            linkage: Linkage::NoLinkage,
            storage_class: StorageClass::None,
        }
    }
}

/// Binary and compound-assignment operators, serialized as their token spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BinaryOperator {
    #[serde(rename = ".*")]
    PtrMemD,
    #[serde(rename = "->*")]
    PtrMemI,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = "<=>")]
    Cmp,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "&")]
    And,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "&&")]
    LAnd,
    #[serde(rename = "||")]
    LOr,
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    RemAssign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "<<=")]
    ShlAssign,
    #[serde(rename = ">>=")]
    ShrAssign,
    #[serde(rename = "&=")]
    AndAssign,
    #[serde(rename = "^=")]
    XorAssign,
    #[serde(rename = "|=")]
    OrAssign,
    #[serde(rename = ",")]
    Comma,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    TranslationUnit,
    InclusionDirective {
        /// Absolute path of the included file; `None` when the front end could not resolve it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        #[schemars(with = "Option<String>")]
        included_file: Option<Utf8PathBuf>,
    },

    // Declarations
    VarDecl(VariableDecl),
    ParmDecl(VariableDecl),
    FieldDecl(VariableDecl),
    FunctionDecl {
        result_type: TypeId,
    },
    StructDecl,
    ClassDecl,
    UnionDecl,
    EnumDecl,
    TypedefDecl,
    Namespace,

    // Expressions
    BinaryOperator {
        operator: BinaryOperator,
    },
    UnaryOperator {
        /// Operator token text, e.g. `!` or `~`.
        token: String,
    },
    ArraySubscriptExpr,
    ConditionalOperator,
    IntegerLiteral {
        #[serde(rename = "type")]
        ty: TypeId,
    },
    CallExpr,
    DeclRefExpr,
    MemberRefExpr,
    ParenExpr,
    CastExpr,
    FloatingLiteral,
    StringLiteral,
    CharacterLiteral,

    // Statements
    IfStmt,
    SwitchStmt,
    GotoStmt,
    WhileStmt,
    ForStmt,
    DoStmt,
    CompoundStmt,
    DeclStmt,
    ReturnStmt,
    BreakStmt,
    ContinueStmt,
    CaseStmt,
    DefaultStmt,
    LabelStmt,

    Unexposed,
}

impl NodeKind {
    /// Functions, structs and classes become the reporting context of their subtree.
    pub fn opens_scope(&self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDecl { .. } | NodeKind::StructDecl | NodeKind::ClassDecl
        )
    }

    /// Stable snake_case name, identical to the serialized tag.
    pub fn code(&self) -> &'static str {
        match self {
            NodeKind::TranslationUnit => "translation_unit",
            NodeKind::InclusionDirective { .. } => "inclusion_directive",
            NodeKind::VarDecl(_) => "var_decl",
            NodeKind::ParmDecl(_) => "parm_decl",
            NodeKind::FieldDecl(_) => "field_decl",
            NodeKind::FunctionDecl { .. } => "function_decl",
            NodeKind::StructDecl => "struct_decl",
            NodeKind::ClassDecl => "class_decl",
            NodeKind::UnionDecl => "union_decl",
            NodeKind::EnumDecl => "enum_decl",
            NodeKind::TypedefDecl => "typedef_decl",
            NodeKind::Namespace => "namespace",
            NodeKind::BinaryOperator { .. } => "binary_operator",
            NodeKind::UnaryOperator { .. } => "unary_operator",
            NodeKind::ArraySubscriptExpr => "array_subscript_expr",
            NodeKind::ConditionalOperator => "conditional_operator",
            NodeKind::IntegerLiteral { .. } => "integer_literal",
            NodeKind::CallExpr => "call_expr",
            NodeKind::DeclRefExpr => "decl_ref_expr",
            NodeKind::MemberRefExpr => "member_ref_expr",
            NodeKind::ParenExpr => "paren_expr",
            NodeKind::CastExpr => "cast_expr",
            NodeKind::FloatingLiteral => "floating_literal",
            NodeKind::StringLiteral => "string_literal",
            NodeKind::CharacterLiteral => "character_literal",
            NodeKind::IfStmt => "if_stmt",
            NodeKind::SwitchStmt => "switch_stmt",
            NodeKind::GotoStmt => "goto_stmt",
            NodeKind::WhileStmt => "while_stmt",
            NodeKind::ForStmt => "for_stmt",
            NodeKind::DoStmt => "do_stmt",
            NodeKind::CompoundStmt => "compound_stmt",
            NodeKind::DeclStmt => "decl_stmt",
            NodeKind::ReturnStmt => "return_stmt",
            NodeKind::BreakStmt => "break_stmt",
            NodeKind::ContinueStmt => "continue_stmt",
            NodeKind::CaseStmt => "case_stmt",
            NodeKind::DefaultStmt => "default_stmt",
            NodeKind::LabelStmt => "label_stmt",
            NodeKind::Unexposed => "unexposed",
        }
    }

    /// Type ids carried directly by the node payload.
    pub fn type_ref(&self) -> Option<TypeId> {
        match self {
            NodeKind::VarDecl(decl) | NodeKind::ParmDecl(decl) | NodeKind::FieldDecl(decl) => {
                Some(decl.ty)
            }
            NodeKind::FunctionDecl { result_type } => Some(*result_type),
            NodeKind::IntegerLiteral { ty } => Some(*ty),
            _ => None,
        }
    }
}
