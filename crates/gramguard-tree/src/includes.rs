use gramguard_domain::TranslationUnit;
use gramguard_domain::model::{NodeKind, SyntaxNode};

/// Replace every include target that exists on disk by its canonical path.
///
/// Targets that cannot be canonicalized are kept as the front end recorded them. Returns the
/// number of targets rewritten.
pub fn canonicalize_includes(unit: &mut TranslationUnit) -> usize {
    let mut rewritten = 0;
    let mut stack: Vec<&mut SyntaxNode> = vec![&mut unit.root];

    while let Some(node) = stack.pop() {
        if let NodeKind::InclusionDirective {
            included_file: Some(path),
        } = &mut node.kind
        {
            match path.canonicalize_utf8() {
                Ok(real) => {
                    if real != *path {
                        tracing::debug!(from = %path, to = %real, "canonicalized include");
                        *path = real;
                        rewritten += 1;
                    }
                }
                Err(err) => {
                    tracing::debug!(include = %path, error = %err, "include not canonicalized");
                }
            }
        }
        stack.extend(node.children.iter_mut());
    }
    rewritten
}
