use crate::fingerprint::fingerprint_for_violation;
use crate::model::{SourceLocation, SyntaxNode};
use gramguard_types::ViolationKind;
use std::fmt;

/// One breach of the policy, tied to the node that triggered it and its enclosing scope.
///
/// Both node references borrow from the checked tree; nothing is copied.
#[derive(Clone, Debug, PartialEq)]
pub struct Violation<'a> {
    pub kind: ViolationKind,
    pub node: &'a SyntaxNode,
    /// Innermost enclosing function/struct/class, or the translation unit root.
    pub context: &'a SyntaxNode,
    pub message: Option<String>,
}

impl Violation<'_> {
    pub fn location(&self) -> &SourceLocation {
        &self.node.location
    }

    pub fn fingerprint(&self) -> String {
        let location = self.location();
        fingerprint_for_violation(
            self.kind.code(),
            location.file.as_deref(),
            location.line,
            location.column,
            &self.context.spelling,
        )
    }
}

impl fmt::Display for Violation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.location();
        write!(
            f,
            "{} ({}, {})",
            self.kind.label(),
            location.line,
            location.column
        )
    }
}
