use serde::{Deserialize, Serialize};

/// List envelope as the CMS returns it: `{ "data": [...], "meta": {...} }`.
/// Only `data` is consumed; `meta` (pagination etc.) is ignored.
#[derive(Debug, Deserialize)]
pub struct ProjectList {
    pub data: Vec<ProjectItem>,
}

/// One portfolio project record as served by the content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: i64,
    pub attributes: ProjectAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAttributes {
    pub title: String,
    pub description: Option<Vec<RichTextBlock>>,
    pub thumbnail: Option<ImageRelation>,
    /// External project URL; the CMS allows this to be empty.
    #[serde(default)]
    pub project_link: String,
    /// Single comma-separated string, e.g. "Web Dev, UI/UX".
    #[serde(default)]
    pub tags: String,
    pub date_completed: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: String,
}

/// Media relation wrapper: `thumbnail.data` is null when no image is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRelation {
    pub data: Option<ImageData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    pub attributes: ImageAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttributes {
    /// Relative to the content store's base URL.
    pub url: String,
    pub alternative_text: Option<String>,
}

/// One structured rich-text block. Only `"paragraph"` carries text we use;
/// other types (headings, lists) are kept on the wire but reduce to nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub children: Vec<RichTextChild>,
}

/// Leaf node of a rich-text block. The CMS attaches formatting marks and
/// other fields we do not know about; those land in `extra` instead of
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextChild {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
