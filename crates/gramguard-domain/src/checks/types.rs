use super::Detection;
use crate::error::CheckError;
use crate::model::{TypeEntry, TypeId, TypeKind, TypeTable};
use crate::policy::GrammarPolicy;
use gramguard_types::ViolationKind;

/// Classify a type by unwrapping pointer, reference and array layers.
///
/// The outermost forbidden layer wins. A permitted wrapper is transparent: its target's
/// classification is the result.
pub fn classify_type(
    id: TypeId,
    types: &TypeTable,
    policy: &GrammarPolicy,
) -> Result<Option<Detection>, CheckError> {
    let mut current = id;
    // Every iteration moves to a different entry, so a well-formed table never needs more.
    for _ in 0..=types.len() {
        let written = types.get(current)?;
        let (_, canonical) = types.canonical(current)?;

        let next = match canonical.kind {
            TypeKind::Record => return system_class(written, canonical, policy),
            TypeKind::ConstantArray { element, .. }
            | TypeKind::VariableArray { element }
            | TypeKind::IncompleteArray { element } => {
                if policy.disable_array {
                    return Ok(Some(Detection::new(ViolationKind::Array)));
                }
                element
            }
            TypeKind::Pointer { pointee } => {
                if policy.disable_pointers {
                    return Ok(Some(Detection::new(ViolationKind::Pointer)));
                }
                pointee
            }
            TypeKind::LValueReference { pointee } | TypeKind::RValueReference { pointee } => {
                if policy.disable_reference {
                    return Ok(Some(Detection::new(ViolationKind::Reference)));
                }
                pointee
            }
            TypeKind::LongLong | TypeKind::ULongLong | TypeKind::Int128 | TypeKind::UInt128 => {
                return Ok(policy
                    .disable_int64_or_larger
                    .then(|| Detection::new(ViolationKind::Int64OrLarger)));
            }
            TypeKind::Typedef { .. }
            | TypeKind::Elaborated { .. }
            | TypeKind::Enum
            | TypeKind::Function { .. }
            | TypeKind::Builtin
            | TypeKind::Unexposed => return Ok(None),
        };
        current = next;
    }
    Err(CheckError::TypeCycle(id))
}

fn system_class(
    written: &TypeEntry,
    canonical: &TypeEntry,
    policy: &GrammarPolicy,
) -> Result<Option<Detection>, CheckError> {
    let rule = &policy.system_class;
    if !rule.disable {
        return Ok(None);
    }

    let declaration = written
        .declaration
        .as_ref()
        .or(canonical.declaration.as_ref())
        .ok_or_else(|| CheckError::MissingRecordDeclaration {
            spelling: written.spelling.clone(),
        })?;
    if !declaration.in_system_header {
        return Ok(None);
    }
    if rule.allows(&written.spelling) || rule.allows(&canonical.spelling) {
        return Ok(None);
    }

    Ok(Some(Detection::with_message(
        ViolationKind::SystemClass,
        written.spelling.clone(),
    )))
}
