//! Document adapter over `scraper::Html` and the extractors that turn
//! Liquipedia team pages into records.

pub(crate) mod fields;
pub(crate) mod matches;
pub(crate) mod results;
pub(crate) mod roster;

use ::scraper::{ElementRef, Html, Selector};
use itertools::Itertools;
use tracing::warn;

use crate::error::LiquipediaError;
use crate::games::GameRegistry;

pub(crate) const BASE_URL: &str = "https://liquipedia.net";

/// Which team page a document was fetched from, plus the lookup tables the
/// extractors need.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub base_url: &'a str,
    /// Wiki page name of the team, e.g. `Team_Liquid`.
    pub team: &'a str,
    /// Wiki game code, e.g. `valorant`.
    pub game: &'a str,
    pub games: &'a GameRegistry,
}

impl PageContext<'_> {
    pub(crate) fn game_name(&self) -> String {
        self.games.display_name(self.game)
    }
}

/// A parsed HTML page.
///
/// Parsing never fails: malformed markup yields a best-effort, possibly
/// near-empty tree.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> Node<'_> {
        Node(self.html.root_element())
    }

    /// First element anywhere in the document matching `css`.
    pub fn find(&self, css: &str) -> Option<Node<'_>> {
        let selector = selector(css)?;
        self.html.select(&selector).next().map(Node)
    }

    /// All elements matching `css`, in document order.
    pub fn find_all(&self, css: &str) -> Vec<Node<'_>> {
        selector(css)
            .map(|s| self.html.select(&s).map(Node).collect_vec())
            .unwrap_or_default()
    }
}

/// An element inside a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant matching `css`.
    pub fn find(&self, css: &str) -> Option<Node<'a>> {
        let selector = selector(css)?;
        self.0.select(&selector).next().map(Node)
    }

    /// All descendants matching `css`, in document order.
    pub fn find_all(&self, css: &str) -> Vec<Node<'a>> {
        selector(css)
            .map(|s| self.0.select(&s).map(Node).collect_vec())
            .unwrap_or_default()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Concatenated text content, trimmed.
    pub fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    pub fn name(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.0.value().classes()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.0.parent().and_then(ElementRef::wrap).map(Node)
    }

    /// The next sibling that is an element, skipping text and comments.
    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.0.next_siblings().find_map(ElementRef::wrap).map(Node)
    }

    /// Direct child elements named `tag`.
    pub fn children_named(&self, tag: &str) -> Vec<Node<'a>> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == tag)
            .map(Node)
            .collect_vec()
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            let e = LiquipediaError::from(e);
            warn!(css, error = %e, "skipping invalid selector");
            None
        }
    }
}

/// Trimmed text of the first element matching `css` inside `node`, or
/// `None` when there is no such element or it has no text.
pub(crate) fn select_text(node: &Node, css: &str) -> Option<String> {
    node.find(css)
        .map(|n| n.text())
        .filter(|t| !t.is_empty())
}

/// Make a wiki-relative path absolute against `base_url`.
pub(crate) fn absolute_url(base_url: &str, src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        format!("{base_url}{src}")
    }
}
