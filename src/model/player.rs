use serde::Serialize;

/// A member of a team's active roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub position: Option<String>,
    /// `DD-MM-YYYY` when the wiki gives an ISO date, otherwise the raw text.
    pub join_date: Option<String>,
}
