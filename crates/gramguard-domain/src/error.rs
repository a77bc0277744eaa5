use crate::model::TypeId;

/// A tree that breaks the front-end contract.
///
/// Any of these aborts the whole check: a partial violation list could read as a clean result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("type {id} is referenced but the type table has {len} entries")]
    DanglingType { id: TypeId, len: usize },

    #[error("type {0} never reaches a canonical type (cyclic type chain)")]
    TypeCycle(TypeId),

    #[error("type table is full: {len} entries exhaust the type id range")]
    TypeTableFull { len: usize },

    #[error("record type `{spelling}` has no declaration to locate")]
    MissingRecordDeclaration { spelling: String },
}
