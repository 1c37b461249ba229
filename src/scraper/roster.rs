use tracing::debug;

use crate::dates;
use crate::model::Player;
use crate::scraper::{select_text, Document, Node, PageContext};

const UNKNOWN_PLAYER: &str = "Unknown Player";
const POSITION_LABELS: [&str; 2] = ["Position:", "Role:"];
const JOIN_DATE_LABEL: &str = "Join Date:";

/// One way of finding the block that lists the active roster.
type RosterLocator = for<'a> fn(&'a Document) -> Option<Node<'a>>;

/// Tried in order; the first hit is used.
const ROSTER_LOCATORS: [(&str, RosterLocator); 3] = [
    ("active heading id", active_by_heading_id),
    ("active heading class", active_by_heading_class),
    ("first roster card", first_roster_card),
];

/// Players listed in the team page's active roster.
///
/// Falls back to the first roster card on the page when there is no
/// "Active" heading, which may include inactive members.
pub fn extract_players(document: &Document, page: &PageContext) -> Vec<Player> {
    let Some((strategy, scope)) = locate_roster(document) else {
        debug!(team = page.team, game = page.game, "no roster section found");
        return Vec::new();
    };

    let players: Vec<Player> = scope.find_all("tr.Player").iter().map(parse_player).collect();
    debug!(
        strategy,
        count = players.len(),
        team = page.team,
        game = page.game,
        "parsed roster"
    );
    players
}

fn locate_roster(document: &Document) -> Option<(&'static str, Node<'_>)> {
    ROSTER_LOCATORS
        .iter()
        .find_map(|(name, locate)| locate(document).map(|scope| (*name, scope)))
}

/// The block right after the heading section holding an `#Active` anchor.
fn active_by_heading_id(document: &Document) -> Option<Node<'_>> {
    section_after(document.find("#Active")?)
}

/// Same as [`active_by_heading_id`] for headings whose id was
/// disambiguated (`Active_2`) but whose text still reads "Active".
fn active_by_heading_class(document: &Document) -> Option<Node<'_>> {
    let heading = document
        .find_all(".mw-headline, .mw-heading h3")
        .into_iter()
        .find(|h| h.text() == "Active")?;
    section_after(heading)
}

fn first_roster_card(document: &Document) -> Option<Node<'_>> {
    document.find(".roster-card")
}

fn section_after(heading: Node<'_>) -> Option<Node<'_>> {
    heading.parent()?.next_sibling()
}

fn parse_player(row: &Node) -> Player {
    let tag = row
        .find_all("td.ID a")
        .into_iter()
        .map(|a| a.text())
        .find(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());

    let name = row
        .find("td.Name")
        .map(|n| {
            n.text()
                .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
                .to_string()
        })
        .filter(|n| !n.is_empty());

    let country = row
        .find(".flag img")
        .and_then(|img| img.attr("title").or_else(|| img.attr("alt")))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let position = row
        .find("td.Position")
        .and_then(|p| parse_position(&p.text()));

    let join_date = select_text(row, "td.Date i")
        .or_else(|| select_text(row, "td.Date"))
        .and_then(|d| parse_join_date(&d));

    Player {
        tag,
        name,
        country,
        position,
        join_date,
    }
}

/// A parenthesised role such as `(Coach)` wins over the plain position text.
fn parse_position(raw: &str) -> Option<String> {
    let parenthesised = raw
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(inner, _)| inner.trim())
        .filter(|inner| !inner.is_empty());
    if let Some(role) = parenthesised {
        return Some(role.to_string());
    }

    let mut position = raw.trim();
    for label in POSITION_LABELS {
        if let Some(rest) = position.strip_prefix(label) {
            position = rest.trim_start();
        }
    }
    let position = position.split('(').next().unwrap_or_default().trim();
    (!position.is_empty()).then(|| position.to_string())
}

/// Drops the mobile label and trailing citation markers, then converts ISO
/// dates to `DD-MM-YYYY`.
fn parse_join_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = raw
        .strip_prefix(JOIN_DATE_LABEL)
        .unwrap_or(raw)
        .split(['<', '['])
        .next()
        .unwrap_or_default()
        .trim();
    (!date.is_empty()).then(|| dates::normalize_date(date))
}
