use crate::checks::{self, Detection};
use crate::error::CheckError;
use crate::model::{SyntaxNode, TranslationUnit};
use crate::policy::Policy;
use crate::violation::Violation;

/// Walk the tree in pre-order and collect every violation in visitation order.
///
/// Children originating in system headers are pruned together with their subtrees.
/// A malformed tree aborts the whole check; no partial list is returned.
pub fn check<'a>(
    unit: &'a TranslationUnit,
    policy: &Policy,
) -> Result<Vec<Violation<'a>>, CheckError> {
    let mut violations = Vec::new();
    let mut detections: Vec<Detection> = Vec::new();

    // (node, context of its parent). Children are pushed in reverse to keep pre-order.
    let mut stack: Vec<(&'a SyntaxNode, &'a SyntaxNode)> = vec![(&unit.root, &unit.root)];

    while let Some((node, inherited)) = stack.pop() {
        let context = if node.kind.opens_scope() {
            node
        } else {
            inherited
        };

        checks::classify_node(node, &unit.types, policy, &mut detections)?;
        violations.extend(detections.drain(..).map(|d| Violation {
            kind: d.kind,
            node,
            context,
            message: d.message,
        }));

        stack.extend(
            node.children
                .iter()
                .rev()
                .filter(|child| !child.location.in_system_header)
                .map(|child| (child, context)),
        );
    }

    Ok(violations)
}
