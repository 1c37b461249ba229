use serde::Serialize;

/// A single row of a team's tournament results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    /// `DD-MM-YYYY` when the wiki gives an ISO date, otherwise the raw text.
    pub date: Option<String>,
    pub placement: String,
    pub tier: String,
    pub tournament: ResultTournament,
    pub score: ResultScore,
    pub prize: Option<f64>,
    /// `None` when neither the score nor the placement settles the outcome.
    pub is_win: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTournament {
    pub name: Option<String>,
    pub game: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultScore {
    pub team_left: ResultTeam,
    pub team_right: ResultTeam,
}

/// A team and its series score as shown in a results row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTeam {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub score: Option<String>,
}
