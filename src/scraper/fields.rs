//! Single-value extractors shared by the page extractors. Each one is total:
//! a missing node or attribute resolves to a fixed default.

use chrono::{DateTime, Utc};

use crate::model::{Team, Tournament};
use crate::scraper::{absolute_url, select_text, Node};

pub(crate) const UNKNOWN_TEAM: &str = "Unknown Team";
pub(crate) const UNKNOWN_TAG: &str = "UNK";
pub(crate) const UNKNOWN_TOURNAMENT: &str = "Unknown Tournament";

/// Team on the side of a match table selected by `side` (e.g. `.team-left`).
pub(crate) fn team(scope: &Node, side: &str, base_url: &str) -> Team {
    let icon = scope.find(&format!("{side} .team-template-image-icon img"));

    let name = icon
        .as_ref()
        .and_then(|img| img.attr("title").or_else(|| img.attr("alt")))
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_TEAM)
        .to_string();

    let tag = select_text(scope, &format!("{side} .team-template-text a"))
        .unwrap_or_else(|| UNKNOWN_TAG.to_string());

    let icon = icon
        .and_then(|img| img.attr("src"))
        .map(|src| absolute_url(base_url, src));

    Team { name, tag, icon }
}

/// Tournament linked from the match table's tournament text.
pub(crate) fn tournament(scope: &Node, base_url: &str, game: Option<String>) -> Tournament {
    let anchor = scope.find(".tournament-text-flex a");

    let name = anchor
        .as_ref()
        .map(|a| a.text())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_TOURNAMENT.to_string());

    let link = anchor
        .and_then(|a| a.attr("href"))
        .map(|href| absolute_url(base_url, href));

    Tournament { name, game, link }
}

/// Start time from the countdown timer's `data-timestamp` (unix seconds).
pub(crate) fn date_time(scope: &Node) -> Option<DateTime<Utc>> {
    scope
        .find(".timer-object")
        .and_then(|timer| timer.attr("data-timestamp"))
        .and_then(|ts| parse_epoch_seconds(ts.trim()))
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Whole seconds, also written as an integral float (`1717095600.0`).
fn parse_epoch_seconds(raw: &str) -> Option<i64> {
    if let Ok(secs) = raw.parse::<i64>() {
        return Some(secs);
    }
    let secs = raw.parse::<f64>().ok().filter(|s| s.is_finite())?;
    (secs.fract() == 0.0 && secs.abs() < i64::MAX as f64).then_some(secs as i64)
}

/// Series format such as `BO3`.
pub(crate) fn format(scope: &Node) -> Option<String> {
    select_text(scope, ".versus-lower abbr").map(|f| f.to_uppercase())
}
