use crate::model::{GramguardConfigV1, SystemClassConfig};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gramguard_domain::policy::{
    GrammarPolicy, HeaderList, HeaderPolicy, Policy, SystemClassPolicy,
};
use gramguard_types::ids;
use std::collections::BTreeSet;

const DEFAULT_ENCODING: &str = "utf-8";

/// Values supplied by the caller that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Directory the config file lives in; relative config paths are resolved against it.
    pub config_dir: Option<Utf8PathBuf>,
    pub base_path: Option<Utf8PathBuf>,
    pub encoding: Option<String>,
    pub debug: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: Policy,
    pub debug: bool,
}

pub fn resolve_config(
    cfg: GramguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != ids::SCHEMA_CONFIG_V1 {
            anyhow::bail!(
                "unsupported config schema: {schema} (expected {})",
                ids::SCHEMA_CONFIG_V1
            );
        }
    }

    let encoding = overrides
        .encoding
        .clone()
        .or(cfg.common.encoding.clone())
        .unwrap_or_else(|| DEFAULT_ENCODING.to_string());
    validate_encoding(&encoding)?;

    let base_path = match overrides.base_path.clone() {
        Some(path) => path,
        None => resolve_base_path(
            cfg.header.base_path.as_deref(),
            overrides.config_dir.as_deref(),
        ),
    };

    let list = header_list(&cfg.header.blacklist, &cfg.header.whitelist)?;
    let system_class = system_class(&cfg.grammar.system_class)?;

    let g = &cfg.grammar;
    let grammar = GrammarPolicy {
        disable_int64_or_larger: g.disable_int64_or_larger,
        disable_pointers: g.disable_pointers,
        disable_reference: g.disable_reference,
        disable_array: g.disable_array,
        disable_struct: g.disable_struct,
        disable_class: g.disable_class,
        disable_function: g.disable_function,
        disable_branch: g.disable_branch,
        disable_goto: g.disable_goto,
        disable_loop: g.disable_loop,
        disable_bit_operation: g.disable_bit_operation,
        disable_external_global_var: g.disable_external_global_var,
        disable_internal_global_var: g.disable_internal_global_var,
        disable_static_local_var: g.disable_static_local_var,
        system_class,
    };

    Ok(ResolvedConfig {
        policy: Policy {
            header: HeaderPolicy { base_path, list },
            grammar,
            encoding,
        },
        debug: overrides.debug.or(cfg.common.debug).unwrap_or(false),
    })
}

fn validate_encoding(label: &str) -> anyhow::Result<()> {
    if encoding_rs::Encoding::for_label(label.trim().as_bytes()).is_none() {
        anyhow::bail!("{label} is not a valid encoding");
    }
    Ok(())
}

fn resolve_base_path(configured: Option<&str>, config_dir: Option<&Utf8Path>) -> Utf8PathBuf {
    let configured = Utf8Path::new(configured.unwrap_or("."));
    match config_dir {
        Some(dir) if configured.is_relative() => dir.join(configured),
        _ => configured.to_path_buf(),
    }
}

fn header_list(blacklist: &[String], whitelist: &[String]) -> anyhow::Result<HeaderList> {
    match (blacklist.is_empty(), whitelist.is_empty()) {
        (false, false) => anyhow::bail!("header.blacklist and header.whitelist cannot both be set"),
        (false, true) => Ok(HeaderList::Blacklist(
            names(blacklist).context("invalid header.blacklist")?,
        )),
        (true, false) => Ok(HeaderList::Whitelist(
            names(whitelist).context("invalid header.whitelist")?,
        )),
        (true, true) => Ok(HeaderList::Unrestricted),
    }
}

fn system_class(cfg: &SystemClassConfig) -> anyhow::Result<SystemClassPolicy> {
    Ok(SystemClassPolicy {
        disable: cfg.disable,
        whitelist: names(&cfg.whitelist).context("invalid grammar.system_class.whitelist")?,
    })
}

fn names(items: &[String]) -> anyhow::Result<BTreeSet<String>> {
    items
        .iter()
        .map(|item| {
            let trimmed = item.trim();
            if trimmed.is_empty() {
                anyhow::bail!("entries must not be empty");
            }
            Ok(trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn resolve(toml: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, overrides)
    }

    #[test]
    fn defaults_allow_everything() {
        let resolved = resolve("", Overrides::default()).expect("resolve");
        assert_eq!(resolved.policy.grammar, GrammarPolicy::default());
        assert_eq!(resolved.policy.header.list, HeaderList::Unrestricted);
        assert_eq!(resolved.policy.encoding, "utf-8");
        assert_eq!(resolved.policy.header.base_path, Utf8PathBuf::from("."));
        assert!(!resolved.debug);
    }

    #[test]
    fn both_header_lists_are_rejected() {
        let err = resolve(
            "[header]\nblacklist = [\"a.h\"]\nwhitelist = [\"b.h\"]\n",
            Overrides::default(),
        )
        .expect_err("exclusive lists");
        assert!(err.to_string().contains("cannot both be set"), "{err}");
    }

    #[test]
    fn empty_lists_do_not_count_as_set() {
        let resolved = resolve(
            "[header]\nblacklist = []\nwhitelist = [\"iostream\"]\n",
            Overrides::default(),
        )
        .expect("resolve");
        assert_eq!(
            resolved.policy.header.list,
            HeaderList::Whitelist(["iostream".to_string()].into_iter().collect())
        );
    }

    #[test]
    fn empty_entries_are_rejected() {
        let err = resolve("[header]\nblacklist = [\" \"]\n", Overrides::default())
            .expect_err("blank entry");
        assert!(format!("{err:#}").contains("header.blacklist"), "{err:#}");

        assert!(
            resolve(
                "[grammar.system_class]\nwhitelist = [\"\"]\n",
                Overrides::default()
            )
            .is_err()
        );
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        let err = resolve("[common]\nencoding = \"klingon\"\n", Overrides::default())
            .expect_err("bad encoding");
        assert!(err.to_string().contains("klingon"), "{err}");

        let err = resolve(
            "",
            Overrides {
                encoding: Some("nope".to_string()),
                ..Overrides::default()
            },
        )
        .expect_err("bad override");
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn legacy_encodings_are_accepted() {
        let resolved = resolve("[common]\nencoding = \"gbk\"\n", Overrides::default())
            .expect("resolve");
        assert_eq!(resolved.policy.encoding, "gbk");
    }

    #[test]
    fn relative_base_path_is_joined_onto_config_dir() {
        let resolved = resolve(
            "[header]\nbase_path = \"include\"\n",
            Overrides {
                config_dir: Some(Utf8PathBuf::from("/work/project")),
                ..Overrides::default()
            },
        )
        .expect("resolve");
        assert_eq!(
            resolved.policy.header.base_path,
            Utf8PathBuf::from("/work/project/include")
        );

        let resolved = resolve(
            "",
            Overrides {
                config_dir: Some(Utf8PathBuf::from("/work/project")),
                ..Overrides::default()
            },
        )
        .expect("resolve");
        assert_eq!(
            resolved.policy.header.base_path,
            Utf8PathBuf::from("/work/project/.")
        );
    }

    #[test]
    fn overrides_win_over_config() {
        let resolved = resolve(
            "[common]\nencoding = \"gbk\"\ndebug = false\n[header]\nbase_path = \"/a\"\n",
            Overrides {
                config_dir: None,
                base_path: Some(Utf8PathBuf::from("/b")),
                encoding: Some("utf-8".to_string()),
                debug: Some(true),
            },
        )
        .expect("resolve");
        assert_eq!(resolved.policy.header.base_path, Utf8PathBuf::from("/b"));
        assert_eq!(resolved.policy.encoding, "utf-8");
        assert!(resolved.debug);
    }

    #[test]
    fn grammar_toggles_carry_over() {
        let resolved = resolve(
            r#"
[grammar]
disable_goto = true
disable_internal_global_var = true

[grammar.system_class]
disable = true
whitelist = ["std::string", " std::vector<int> "]
"#,
            Overrides::default(),
        )
        .expect("resolve");
        let g = &resolved.policy.grammar;
        assert!(g.disable_goto);
        assert!(g.disable_internal_global_var);
        assert!(!g.disable_loop);
        assert!(g.system_class.disable);
        assert!(g.system_class.whitelist.contains("std::vector<int>"));
    }

    #[test]
    fn unknown_schema_is_rejected() {
        assert!(resolve("schema = \"gramguard.config.v9\"\n", Overrides::default()).is_err());
        assert!(resolve("schema = \"gramguard.config.v1\"\n", Overrides::default()).is_ok());
    }
}
