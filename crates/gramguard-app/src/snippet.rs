use anyhow::Context;
use camino::Utf8Path;
use encoding_rs::Encoding;
use gramguard_domain::model::SourceExtent;

/// Raw bytes of a checked source file plus the encoding used to decode slices of it.
pub struct SourceText {
    bytes: Vec<u8>,
    encoding: &'static Encoding,
}

impl SourceText {
    pub fn read(path: &Utf8Path, label: &str) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
        Self::from_bytes(bytes, label)
    }

    pub fn from_bytes(bytes: Vec<u8>, label: &str) -> anyhow::Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .with_context(|| format!("{label} is not a valid encoding"))?;
        Ok(Self { bytes, encoding })
    }

    /// Decode the bytes an extent covers.
    ///
    /// Extents outside the file yield `None`. Malformed sequences are replaced with U+FFFD.
    pub fn snippet(&self, extent: Option<SourceExtent>) -> Option<String> {
        let extent = extent?;
        let (start, end) = (extent.start as usize, extent.end as usize);
        if start > end || end > self.bytes.len() {
            tracing::debug!(start, end, len = self.bytes.len(), "extent outside source");
            return None;
        }

        let (text, had_errors) = self
            .encoding
            .decode_without_bom_handling(&self.bytes[start..end]);
        if had_errors {
            tracing::warn!(
                encoding = self.encoding.name(),
                start,
                end,
                "source snippet is not valid in the configured encoding"
            );
        }
        Some(text.into_owned())
    }
}
