use super::Detection;
use crate::policy::HeaderPolicy;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use gramguard_types::ViolationKind;

pub fn run(included_file: Option<&Utf8Path>, policy: &HeaderPolicy, out: &mut Vec<Detection>) {
    // Unresolved includes cannot be policed.
    let Some(path) = included_file else { return };

    let path = normalize_lexically(path);
    // A base that normalizes to nothing (`.`, `src/..`) names no project tree: nothing is local.
    let base = normalize_lexically(&policy.base_path);
    if !base.as_str().is_empty() && path.starts_with(&base) {
        return;
    }

    let Some(name) = path.file_name() else { return };
    if policy.list.rejects(name) {
        out.push(Detection::with_message(
            ViolationKind::Header,
            format!("included header `{name}`"),
        ));
    }
}

/// Drop `.` components and fold `..` into its parent without touching the filesystem.
pub fn normalize_lexically(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match out.components().next_back() {
                Some(Utf8Component::Normal(_)) => {
                    out.pop();
                }
                Some(Utf8Component::RootDir | Utf8Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
