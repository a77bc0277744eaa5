use camino::Utf8PathBuf;
use std::collections::BTreeSet;

/// The validated policy a check is evaluated against. Immutable for the duration of a check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub header: HeaderPolicy,
    pub grammar: GrammarPolicy,
    /// Encoding label for decoding snippets; only the reporting side reads it.
    pub encoding: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            header: HeaderPolicy::default(),
            grammar: GrammarPolicy::default(),
            encoding: "utf-8".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderPolicy {
    /// Headers located under this directory belong to the project and are never policed.
    pub base_path: Utf8PathBuf,
    pub list: HeaderList,
}

/// Blacklist and whitelist are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderList {
    #[default]
    Unrestricted,
    Blacklist(BTreeSet<String>),
    Whitelist(BTreeSet<String>),
}

impl HeaderList {
    /// Whether a non-local header with this basename is disallowed.
    pub fn rejects(&self, basename: &str) -> bool {
        match self {
            HeaderList::Unrestricted => false,
            HeaderList::Blacklist(names) => names.contains(basename),
            HeaderList::Whitelist(names) => !names.contains(basename),
        }
    }
}

/// Independent feature toggles; `true` means the feature is forbidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrammarPolicy {
    pub disable_int64_or_larger: bool,
    pub disable_pointers: bool,
    pub disable_reference: bool,
    pub disable_array: bool,
    pub disable_struct: bool,
    pub disable_class: bool,
    pub disable_function: bool,
    pub disable_branch: bool,
    pub disable_goto: bool,
    pub disable_loop: bool,
    pub disable_bit_operation: bool,
    pub disable_external_global_var: bool,
    /// `static` globals and globals in anonymous namespaces.
    pub disable_internal_global_var: bool,
    pub disable_static_local_var: bool,
    pub system_class: SystemClassPolicy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClassPolicy {
    pub disable: bool,
    /// Type spellings still allowed when `disable` is set, e.g. `std::string`.
    pub whitelist: BTreeSet<String>,
}

impl SystemClassPolicy {
    pub fn allows(&self, spelling: &str) -> bool {
        self.whitelist.contains(strip_qualifiers(spelling))
    }
}

fn strip_qualifiers(spelling: &str) -> &str {
    let mut rest = spelling.trim();
    loop {
        if let Some(r) = rest.strip_prefix("const ") {
            rest = r.trim_start();
        } else if let Some(r) = rest.strip_prefix("volatile ") {
            rest = r.trim_start();
        } else {
            return rest;
        }
    }
}
