use super::{Detection, classify_type};
use crate::error::CheckError;
use crate::model::{Linkage, StorageClass, TypeId, TypeTable, VariableDecl};
use crate::policy::GrammarPolicy;
use gramguard_types::ViolationKind;

const ENTRY_POINT: &str = "main";

/// Type check first, then linkage. Both may fire on the same declaration.
pub fn variable(
    decl: &VariableDecl,
    types: &TypeTable,
    policy: &GrammarPolicy,
    out: &mut Vec<Detection>,
) -> Result<(), CheckError> {
    if let Some(found) = classify_type(decl.ty, types, policy)? {
        out.push(found);
    }

    if policy.disable_internal_global_var
        && decl.linkage == Linkage::Internal
        && !types.is_const(decl.ty)?
    {
        out.push(Detection::new(ViolationKind::InternalGlobal));
    }

    if policy.disable_external_global_var
        && matches!(decl.linkage, Linkage::External | Linkage::UniqueExternal)
    {
        out.push(Detection::new(ViolationKind::ExternalGlobal));
    }

    if policy.disable_static_local_var
        && decl.storage_class == StorageClass::Static
        && decl.linkage == Linkage::NoLinkage
    {
        out.push(Detection::new(ViolationKind::StaticLocal));
    }

    Ok(())
}

pub fn function(
    name: &str,
    result_type: TypeId,
    types: &TypeTable,
    policy: &GrammarPolicy,
    out: &mut Vec<Detection>,
) -> Result<(), CheckError> {
    if policy.disable_function && name != ENTRY_POINT {
        out.push(Detection::with_message(ViolationKind::FreeFunction, name));
    }

    if let Some(found) = classify_type(result_type, types, policy)? {
        out.push(found);
    }
    Ok(())
}

pub fn record(kind: ViolationKind, disabled: bool, out: &mut Vec<Detection>) {
    if disabled {
        out.push(Detection::new(kind));
    }
}
