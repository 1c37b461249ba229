use itertools::Itertools;
use tracing::debug;

use crate::dates;
use crate::model::{ResultScore, ResultTeam, ResultTournament, TournamentResult};
use crate::scraper::{absolute_url, Document, Node, PageContext};

const RESULTS_TABLE_SELECTOR: &str = "table.wikitable.sortable";
const FOOTER_ROW_CLASS: &str = "sortbottom";

/// Rows of the team's results table, in document order.
///
/// Header rows, the footer row and separator rows (empty first cell, used
/// for year dividers) are skipped.
pub fn extract_results(document: &Document, page: &PageContext) -> Vec<TournamentResult> {
    let Some(table) = document.find(RESULTS_TABLE_SELECTOR) else {
        debug!(team = page.team, game = page.game, "no results table found");
        return Vec::new();
    };

    let results = table
        .children_named("tbody")
        .iter()
        .flat_map(|body| body.children_named("tr"))
        .filter(is_result_row)
        .map(|row| parse_result_row(&row, page))
        .collect_vec();
    debug!(
        count = results.len(),
        team = page.team,
        game = page.game,
        "parsed tournament results"
    );
    results
}

fn is_result_row(row: &Node) -> bool {
    row.children_named("th").is_empty()
        && !row.has_class(FOOTER_ROW_CLASS)
        && row
            .children_named("td")
            .first()
            .is_some_and(|cell| !cell.text().is_empty())
}

fn parse_result_row(row: &Node, page: &PageContext) -> TournamentResult {
    let cells = row.children_named("td");
    // 1-indexed to match the column layout of the wiki table.
    let cell = |column: usize| cells.get(column - 1);
    let cell_text = |column: usize| {
        cell(column)
            .map(|c| c.text())
            .filter(|t| !t.is_empty())
    };

    let date = cell_text(1).map(|d| dates::normalize_date(&d));

    let placement_node = cell(2).and_then(|c| c.find(".placement-text"));
    let placement = placement_node.map(|p| p.text()).unwrap_or_default();
    let placement_classes = cell(2)
        .into_iter()
        .chain(placement_node.as_ref())
        .flat_map(|n| n.classes())
        .collect_vec();

    let tier = cell(3)
        .and_then(|c| c.find("a"))
        .map(|a| a.text())
        .unwrap_or_default();

    let tournament = ResultTournament {
        name: cell(5)
            .and_then(|c| c.find("a"))
            .map(|a| a.text())
            .filter(|t| !t.is_empty())
            .or_else(|| cell_text(5)),
        game: Some(page.game_name()),
        icon: image_url(cell(4), page.base_url),
    };

    let (left_score, right_score) = split_score(cell_text(6).as_deref());

    let opponent = cell(7).and_then(|c| c.find("a"));
    let opponent_name = opponent
        .as_ref()
        .and_then(|a| a.attr("title"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| opponent.map(|a| a.text()))
        .filter(|n| !n.is_empty());

    let is_win = infer_win(&OutcomeSignals {
        left_score: left_score.as_deref(),
        right_score: right_score.as_deref(),
        placement: &placement,
        placement_classes: &placement_classes,
    });

    TournamentResult {
        date,
        placement,
        tier,
        tournament,
        score: ResultScore {
            team_left: ResultTeam {
                name: Some(page.team.replace('_', " ")),
                icon: None,
                score: left_score,
            },
            team_right: ResultTeam {
                name: opponent_name,
                icon: image_url(cell(7), page.base_url),
                score: right_score,
            },
        },
        prize: cell(8).and_then(|c| parse_prize(&c.text())),
        is_win,
    }
}

fn image_url(cell: Option<&Node>, base_url: &str) -> Option<String> {
    cell.and_then(|c| c.find("img"))
        .and_then(|img| img.attr("src"))
        .map(|src| absolute_url(base_url, src))
}

/// Split a `2:1` style score into its two sides.
fn split_score(raw: Option<&str>) -> (Option<String>, Option<String>) {
    match raw.and_then(|s| s.split_once(':')) {
        Some((left, right)) => (Some(left.trim().to_string()), Some(right.trim().to_string())),
        None => (None, None),
    }
}

/// Parse a prize cell such as `$12,345`. Empty, `-` and non-numeric cells
/// have no prize.
fn parse_prize(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return None;
    }
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .parse()
        .ok()
}

/// Everything in a results row that hints at whether the team won.
struct OutcomeSignals<'a> {
    left_score: Option<&'a str>,
    right_score: Option<&'a str>,
    placement: &'a str,
    placement_classes: &'a [&'a str],
}

/// Returns `Some` only when the rule is conclusive.
type OutcomeRule = fn(&OutcomeSignals) -> Option<bool>;

/// Evaluated top to bottom; the first conclusive rule decides.
///
/// Any placement below first counts as a loss. That is a heuristic: a
/// 3rd place in a round robin group is not necessarily a lost match.
const OUTCOME_RULES: [OutcomeRule; 3] = [
    outcome_by_score,
    outcome_by_win_marker,
    outcome_by_loss_marker,
];

fn infer_win(signals: &OutcomeSignals) -> Option<bool> {
    OUTCOME_RULES.iter().find_map(|rule| rule(signals))
}

fn outcome_by_score(signals: &OutcomeSignals) -> Option<bool> {
    let left = signals.left_score?.parse::<i64>().ok()?;
    let right = signals.right_score?.parse::<i64>().ok()?;
    Some(left > right)
}

fn outcome_by_win_marker(signals: &OutcomeSignals) -> Option<bool> {
    let marked = signals
        .placement_classes
        .iter()
        .any(|c| matches!(*c, "placement-win" | "placement-1"))
        || matches!(signals.placement, "W" | "1st");
    marked.then_some(true)
}

fn outcome_by_loss_marker(signals: &OutcomeSignals) -> Option<bool> {
    let marked = signals.placement_classes.contains(&"placement-lose")
        || signals.placement == "L"
        || ordinal(signals.placement).is_some_and(|rank| rank > 1);
    marked.then_some(false)
}

/// Leading rank of an ordinal label: `2nd` is 2, `3rd-4th` is 3.
fn ordinal(label: &str) -> Option<u32> {
    let first = label.split(['-', '–']).next()?.trim();
    let digits_end = first
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(first.len());
    let (digits, suffix) = first.split_at(digits_end);
    if !matches!(suffix.to_ascii_lowercase().as_str(), "st" | "nd" | "rd" | "th") {
        return None;
    }
    digits.parse().ok()
}
