use anyhow::Context;
use gramguard_domain::model::{SyntaxNode, TypeId, TypeTable};
use gramguard_domain::TranslationUnit;
use gramguard_types::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// On-disk shape of a `gramguard.tree.v1` document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TreeDocument {
    pub schema: String,
    /// Main source file of the translation unit, relative to the document or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub types: TypeTable,
    pub root: SyntaxNode,
}

impl TreeDocument {
    pub fn into_unit(self) -> TranslationUnit {
        TranslationUnit {
            source: self.source,
            types: self.types,
            root: self.root,
        }
    }
}

/// Parse and validate a tree document. No filesystem access.
///
/// Rejects unknown schema ids and any `TypeId` that points outside the type table, so the
/// engine only ever sees references it can resolve.
pub fn parse_tree_json(text: &str) -> anyhow::Result<TranslationUnit> {
    let doc: TreeDocument = serde_json::from_str(text).context("parse tree JSON")?;
    if doc.schema != ids::SCHEMA_TREE_V1 {
        anyhow::bail!(
            "unsupported tree schema: {} (expected {})",
            doc.schema,
            ids::SCHEMA_TREE_V1
        );
    }
    validate_type_refs(&doc.types, &doc.root)?;
    Ok(doc.into_unit())
}

fn validate_type_refs(types: &TypeTable, root: &SyntaxNode) -> anyhow::Result<()> {
    if types.len() as u64 > u64::from(u32::MAX) + 1 {
        anyhow::bail!("type table has {} entries; type ids are 32-bit", types.len());
    }
    let in_range = |id: TypeId| (id.0 as usize) < types.len();

    for (id, entry) in types.iter() {
        if let Some(target) = TypeTable::referenced_type(entry) {
            if !in_range(target) {
                anyhow::bail!(
                    "type {id} (`{}`) references {target}, but only {} types exist",
                    entry.spelling,
                    types.len()
                );
            }
        }
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if let Some(target) = node.kind.type_ref() {
            if !in_range(target) {
                anyhow::bail!(
                    "{} at {}:{} references type {target}, but only {} types exist",
                    node.kind.code(),
                    node.location.line,
                    node.location.column,
                    types.len()
                );
            }
        }
        stack.extend(node.children.iter());
    }
    Ok(())
}
