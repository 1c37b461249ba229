use chrono::{DateTime, Utc};
use serde::Serialize;

/// A list of upcoming matches for a team.
pub type MatchList = Vec<Match>;

/// An upcoming match as listed in a team page's match infobox.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub team_left: Team,
    pub team_right: Team,
    pub tournament: Tournament,
    pub date_time: Option<DateTime<Utc>>,
    pub format: Option<String>,
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub name: String,
    pub tag: String,
    pub icon: Option<String>,
}

/// The tournament a match is played in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub name: String,
    pub game: Option<String>,
    pub link: Option<String>,
}
