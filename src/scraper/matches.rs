use tracing::debug;

use crate::model::{Match, MatchList};
use crate::scraper::{fields, Document, Node, PageContext};

const MATCH_TABLE_SELECTOR: &str =
    ".fo-nttax-infobox.panel table.wikitable.wikitable-striped.infobox_matches_content";

/// Upcoming matches listed in the team page's infobox, in document order.
///
/// Tables without a countdown timestamp are skipped.
pub fn extract_matches(document: &Document, page: &PageContext) -> MatchList {
    let tables = document.find_all(MATCH_TABLE_SELECTOR);
    let candidates = tables.len();
    let matches: MatchList = tables
        .iter()
        .filter_map(|table| parse_match_table(table, page))
        .collect();
    debug!(
        candidates,
        count = matches.len(),
        team = page.team,
        game = page.game,
        "parsed upcoming matches"
    );
    matches
}

fn parse_match_table(table: &Node, page: &PageContext) -> Option<Match> {
    let date_time = fields::date_time(table)?;
    Some(Match {
        team_left: fields::team(table, ".team-left", page.base_url),
        team_right: fields::team(table, ".team-right", page.base_url),
        tournament: fields::tournament(table, page.base_url, Some(page.game_name())),
        date_time: Some(date_time),
        format: fields::format(table),
    })
}
