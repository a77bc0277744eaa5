//! Stable identifiers for violation kinds and document schemas.
//!
//! Codes are short snake_case discriminators; they appear in reports and in `gramguard explain`.

// Codes: headers
pub const CODE_HEADER: &str = "header";

// Codes: types
pub const CODE_INT64_OR_LARGER: &str = "int64_or_larger";
pub const CODE_POINTER: &str = "pointer";
pub const CODE_REFERENCE: &str = "reference";
pub const CODE_ARRAY: &str = "array";
pub const CODE_SYSTEM_CLASS: &str = "system_class";

// Codes: declarations
pub const CODE_STRUCT: &str = "struct";
pub const CODE_CLASS: &str = "class";
pub const CODE_FREE_FUNCTION: &str = "free_function";
pub const CODE_INTERNAL_GLOBAL: &str = "internal_global";
pub const CODE_EXTERNAL_GLOBAL: &str = "external_global";
pub const CODE_STATIC_LOCAL: &str = "static_local";

// Codes: control flow and operators
pub const CODE_BRANCH: &str = "branch";
pub const CODE_GOTO: &str = "goto";
pub const CODE_LOOP: &str = "loop";
pub const CODE_BIT_OPERATION: &str = "bit_operation";

// Documents
pub const SCHEMA_REPORT_V1: &str = "gramguard.report.v1";
pub const SCHEMA_TREE_V1: &str = "gramguard.tree.v1";
pub const SCHEMA_CONFIG_V1: &str = "gramguard.config.v1";
