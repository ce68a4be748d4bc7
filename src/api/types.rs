use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Reply to both sign-in and sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,

    /// Display name stored with the account, when the backend knows it
    #[serde(default)]
    pub name: Option<String>,
}

/// Profile and preference fields the plan is generated from.
///
/// All values travel as strings; the backend template-fills them into
/// its prompt as-is.
#[derive(Debug, Clone, Serialize)]
pub struct PlanRequest {
    pub name: String,
    pub age: String,
    pub domain: String,
    pub topic: String,
    pub time_available: String,
    pub context: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    /// The freeform plan text; empty when the backend returned nothing
    #[serde(default)]
    pub response: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub prompt_summary: String,

    #[serde(default)]
    pub response_summary: String,

    /// Unix seconds, possibly fractional
    #[serde(default)]
    pub timestamp: f64,
}
