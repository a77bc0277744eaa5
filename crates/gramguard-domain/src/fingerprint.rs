use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - kind code
/// - file (if the front end recorded one)
/// - line and column
/// - name of the enclosing context
pub fn fingerprint_for_violation(
    code: &str,
    file: Option<&str>,
    line: u32,
    column: u32,
    context: &str,
) -> String {
    let line = line.to_string();
    let column = column.to_string();
    let parts = [code, file.unwrap_or(""), &line, &column, context];
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
