use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `gramguard.toml` schema v1.
///
/// Strict: an unknown key is an error, so a misspelled toggle cannot silently leave a feature
/// allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GramguardConfigV1 {
    /// Optional schema string for tooling (`gramguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub common: CommonConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub grammar: GrammarConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CommonConfig {
    /// Source encoding label (WHATWG), e.g. `utf-8` or `gbk`. Default: `utf-8`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Raise log verbosity to `debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    /// Project root. Headers below it are never policed. Relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Header basenames that may not be included. Exclusive with `whitelist`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<String>,

    /// The only header basenames that may be included. Exclusive with `blacklist`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitelist: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    #[serde(default)]
    pub disable_int64_or_larger: bool,
    #[serde(default)]
    pub disable_pointers: bool,
    #[serde(default)]
    pub disable_reference: bool,
    #[serde(default)]
    pub disable_array: bool,
    #[serde(default)]
    pub disable_struct: bool,
    #[serde(default)]
    pub disable_class: bool,
    /// Every function except `main`.
    #[serde(default)]
    pub disable_function: bool,
    /// `if`, `switch`, `?:`, relational and logical operators.
    #[serde(default)]
    pub disable_branch: bool,
    #[serde(default)]
    pub disable_goto: bool,
    #[serde(default)]
    pub disable_loop: bool,
    #[serde(default)]
    pub disable_bit_operation: bool,
    #[serde(default)]
    pub disable_external_global_var: bool,
    /// `static` globals and globals in anonymous namespaces. Constants are exempt.
    #[serde(default)]
    pub disable_internal_global_var: bool,
    #[serde(default)]
    pub disable_static_local_var: bool,

    #[serde(default)]
    pub system_class: SystemClassConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SystemClassConfig {
    /// Forbid record types declared in system headers.
    #[serde(default)]
    pub disable: bool,

    /// System types still allowed, by spelling (`std::string`).
    #[serde(default)]
    pub whitelist: Vec<String>,
}
