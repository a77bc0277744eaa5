use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every reason a translation unit can be rejected.
///
/// The set is closed: each kind maps to exactly one policy toggle (or header list) and is derived
/// by its own structural rule.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Header,
    Int64OrLarger,
    Pointer,
    Reference,
    Array,
    Struct,
    Class,
    FreeFunction,
    Branch,
    Goto,
    Loop,
    BitOperation,
    SystemClass,
    InternalGlobal,
    ExternalGlobal,
    StaticLocal,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 16] = [
        ViolationKind::Header,
        ViolationKind::Int64OrLarger,
        ViolationKind::Pointer,
        ViolationKind::Reference,
        ViolationKind::Array,
        ViolationKind::Struct,
        ViolationKind::Class,
        ViolationKind::FreeFunction,
        ViolationKind::Branch,
        ViolationKind::Goto,
        ViolationKind::Loop,
        ViolationKind::BitOperation,
        ViolationKind::SystemClass,
        ViolationKind::InternalGlobal,
        ViolationKind::ExternalGlobal,
        ViolationKind::StaticLocal,
    ];

    /// Stable snake_case code used in reports.
    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::Header => ids::CODE_HEADER,
            ViolationKind::Int64OrLarger => ids::CODE_INT64_OR_LARGER,
            ViolationKind::Pointer => ids::CODE_POINTER,
            ViolationKind::Reference => ids::CODE_REFERENCE,
            ViolationKind::Array => ids::CODE_ARRAY,
            ViolationKind::Struct => ids::CODE_STRUCT,
            ViolationKind::Class => ids::CODE_CLASS,
            ViolationKind::FreeFunction => ids::CODE_FREE_FUNCTION,
            ViolationKind::Branch => ids::CODE_BRANCH,
            ViolationKind::Goto => ids::CODE_GOTO,
            ViolationKind::Loop => ids::CODE_LOOP,
            ViolationKind::BitOperation => ids::CODE_BIT_OPERATION,
            ViolationKind::SystemClass => ids::CODE_SYSTEM_CLASS,
            ViolationKind::InternalGlobal => ids::CODE_INTERNAL_GLOBAL,
            ViolationKind::ExternalGlobal => ids::CODE_EXTERNAL_GLOBAL,
            ViolationKind::StaticLocal => ids::CODE_STATIC_LOCAL,
        }
    }

    pub fn from_code(code: &str) -> Option<ViolationKind> {
        ViolationKind::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Console label, e.g. `INT64_OR_LARGER`.
    pub fn label(self) -> String {
        self.code().to_ascii_uppercase()
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for kind in ViolationKind::ALL {
            assert_eq!(ViolationKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ViolationKind::from_code("int64"), None);
    }

    #[test]
    fn serde_name_matches_code() {
        for kind in ViolationKind::ALL {
            let json = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(json, serde_json::Value::String(kind.code().to_string()));
        }
    }

    #[test]
    fn label_is_screaming_snake_case() {
        assert_eq!(ViolationKind::Int64OrLarger.label(), "INT64_OR_LARGER");
        assert_eq!(ViolationKind::Goto.label(), "GOTO");
    }
}
