use serde::{Deserialize, Serialize};

/// Structured form of one AI-generated plan response.
///
/// Every field is always present; absent sections come back as empty
/// strings or empty vectors so rendering never has to null-check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedPlan {
    /// Free text appearing before the first task block
    #[serde(default)]
    pub intro: String,

    /// Suggested activities, in order of appearance
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Trailing "Pro Tip:" remark, if any
    #[serde(default)]
    pub pro_tip: String,
}

/// One suggested activity from the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Bulleted "Small Tips" lines, bullet prefix stripped, de-duplicated
    #[serde(default)]
    pub tips: Vec<String>,

    // Older backend responses used Why / Build / Resources sections
    #[serde(default)]
    pub why: String,

    #[serde(default)]
    pub build: String,

    #[serde(default)]
    pub resources: String,
}
