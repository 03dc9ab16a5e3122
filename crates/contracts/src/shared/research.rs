use serde::{Deserialize, Serialize};

/// One category's worth of research text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchFinding {
    /// Machine key for the research category, underscore-delimited
    /// (e.g. "cultural_context")
    pub category: String,
    /// Markdown-formatted research text; may be empty
    pub findings: String,
    /// Prompt that produced the findings; present on the wire but not
    /// displayed by the panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Response carrying the full ordered list of research findings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchFindingsResponse {
    /// Findings in display order
    pub findings: Vec<ResearchFinding>,
}
