use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

const TREE_SUFFIX: &str = ".tree.json";

/// Expand the caller's inputs into tree documents.
///
/// Files are taken as given. Directories are searched recursively for `*.tree.json`, and the
/// matches of each directory are sorted so the result does not depend on filesystem order.
pub fn discover_trees(inputs: &[Utf8PathBuf]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = trees_under(input)?;
            found.sort();
            out.extend(found);
        } else {
            out.push(input.clone());
        }
    }
    Ok(out)
}

fn trees_under(dir: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.with_context(|| format!("walk {dir}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|p| anyhow::anyhow!("non-UTF-8 path: {}", p.display()))?;
        if path.as_str().ends_with(TREE_SUFFIX) {
            found.push(path);
        }
    }
    Ok(found)
}
