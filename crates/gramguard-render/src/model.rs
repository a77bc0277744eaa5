#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    /// Console label, e.g. `INT64_OR_LARGER`.
    pub label: String,
    /// Stable code, e.g. `int64_or_larger`.
    pub code: String,
    pub file: Option<String>,
    pub line: u32,
    pub col: u32,
    /// Name of the enclosing function/struct/class.
    pub context: Option<String>,
    pub snippet: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub source: Option<String>,
    pub violations: Vec<RenderableViolation>,
}

impl RenderableReport {
    pub fn display_source(&self) -> &str {
        self.source.as_deref().unwrap_or("<unknown source>")
    }
}
