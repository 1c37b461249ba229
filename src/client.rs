use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use crate::dates::filter_by_date;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::games::{Game, GameRegistry};
use crate::model::{MatchList, Player, TournamentResult};
use crate::scraper::matches::extract_matches;
use crate::scraper::results::extract_results;
use crate::scraper::roster::extract_players;
use crate::scraper::{Document, PageContext, BASE_URL};

/// Which page of a team's wiki entry to read.
#[derive(Debug, Clone, Copy)]
enum TeamPage {
    /// `/{game}/{team}`: infobox matches and roster.
    Overview,
    /// `/{game}/{team}/Results`: the full results table.
    Results,
}

/// The main entry point for reading team pages from Liquipedia.
///
/// Every `get_*` method is total: if the page cannot be fetched the failure
/// is logged and an empty collection is returned.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use liquipedia_scraper::LiquipediaClient;
///
/// let client = LiquipediaClient::new();
/// let matches = client
///     .get_upcoming_matches("Team_Liquid", "valorant", Some("10-05-2025"))
///     .await;
/// println!("Found {} matches", matches.len());
/// # }
/// ```
pub struct LiquipediaClient<F = HttpFetcher> {
    fetcher: Arc<F>,
    base_url: Arc<str>,
    games: Arc<GameRegistry>,
}

impl LiquipediaClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_fetcher(HttpFetcher::default())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_fetcher(HttpFetcher::new(client))
    }
}

impl Default for LiquipediaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for LiquipediaClient<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            base_url: Arc::clone(&self.base_url),
            games: Arc::clone(&self.games),
        }
    }
}

impl<F: Fetcher> LiquipediaClient<F> {
    /// Create a client that reads pages through a custom [`Fetcher`].
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            base_url: Arc::from(BASE_URL),
            games: Arc::new(GameRegistry::default()),
        }
    }

    /// Use another wiki origin, e.g. a mirror.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Arc::from(base_url.trim_end_matches('/'));
        self
    }

    /// Replace the game code to display name table.
    pub fn with_games(mut self, games: GameRegistry) -> Self {
        self.games = Arc::new(games);
        self
    }

    /// Upcoming matches of `team` in `game`, optionally only those on `date`
    /// (`DD-MM-YYYY`).
    #[instrument(skip(self))]
    pub async fn get_upcoming_matches(
        &self,
        team: &str,
        game: &str,
        date: Option<&str>,
    ) -> MatchList {
        let matches = filter_by_date(self.get_matches(team, game).await, date);
        debug!(count = matches.len(), "upcoming matches after date filter");
        matches
    }

    /// All matches listed on the team page.
    #[instrument(skip(self))]
    pub async fn get_matches(&self, team: &str, game: &str) -> MatchList {
        let Some(html) = self.fetch_page(team, game, TeamPage::Overview).await else {
            return MatchList::new();
        };
        extract_matches(&Document::parse(&html), &self.context(team, game))
    }

    /// Tournament results of `team` in `game`, optionally only those on
    /// `date` (`DD-MM-YYYY`).
    #[instrument(skip(self))]
    pub async fn get_tournament_results(
        &self,
        team: &str,
        game: &str,
        date: Option<&str>,
    ) -> Vec<TournamentResult> {
        let Some(html) = self.fetch_page(team, game, TeamPage::Results).await else {
            return Vec::new();
        };
        let results = extract_results(&Document::parse(&html), &self.context(team, game));
        filter_by_date(results, date)
    }

    /// Active roster of `team` in `game`.
    #[instrument(skip(self))]
    pub async fn get_players(&self, team: &str, game: &str) -> Vec<Player> {
        let Some(html) = self.fetch_page(team, game, TeamPage::Overview).await else {
            return Vec::new();
        };
        extract_players(&Document::parse(&html), &self.context(team, game))
    }

    /// Upcoming matches of `team` across several games.
    ///
    /// Pages are fetched concurrently. A game whose page cannot be fetched
    /// contributes nothing; the order of the merged list is not specified.
    #[instrument(skip(self, games))]
    pub async fn get_upcoming_matches_for_games<G: AsRef<str>>(
        &self,
        team: &str,
        games: &[G],
        date: Option<&str>,
    ) -> MatchList {
        let mut tasks = JoinSet::new();
        for game in games {
            let client = self.clone();
            let team = team.to_owned();
            let game = game.as_ref().to_owned();
            let date = date.map(str::to_owned);
            tasks.spawn(async move {
                client
                    .get_upcoming_matches(&team, &game, date.as_deref())
                    .await
            });
        }

        let mut matches = MatchList::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(found) => matches.extend(found),
                Err(e) => warn!(error = %e, "upcoming matches task failed"),
            }
        }
        debug!(count = matches.len(), games = games.len(), "merged upcoming matches");
        matches
    }

    /// Upcoming matches of `team` across [`Game::DEFAULT_SET`].
    pub async fn get_upcoming_matches_for_all_games(
        &self,
        team: &str,
        date: Option<&str>,
    ) -> MatchList {
        let games = Game::DEFAULT_SET.map(|g| g.to_string());
        self.get_upcoming_matches_for_games(team, &games, date)
            .await
    }

    fn page_url(&self, team: &str, game: &str, page: TeamPage) -> String {
        match page {
            TeamPage::Overview => format!("{}/{game}/{team}", self.base_url),
            TeamPage::Results => format!("{}/{game}/{team}/Results", self.base_url),
        }
    }

    /// Fetch a team page, logging and swallowing transport failures.
    async fn fetch_page(&self, team: &str, game: &str, page: TeamPage) -> Option<String> {
        let url = self.page_url(team, game, page);
        match self.fetcher.fetch(&url).await {
            Ok(html) => Some(html),
            Err(e) => {
                warn!(team, game, url = %url, error = %e, "failed to fetch team page");
                None
            }
        }
    }

    fn context<'a>(&'a self, team: &'a str, game: &'a str) -> PageContext<'a> {
        PageContext {
            base_url: &self.base_url,
            team,
            game,
            games: &self.games,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::{LiquipediaError, Result};

    /// Serves canned pages; any other URL fails like a 404.
    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, String)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.clone()))
                    .collect(),
            }
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| LiquipediaError::UnexpectedStatus {
                    url: url.to_owned(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }

    fn team_page(tournament: &str, timestamp: i64) -> String {
        format!(
            r#"<html><body>
            <div class="fo-nttax-infobox panel">
              <table class="wikitable wikitable-striped infobox_matches_content">
                <tr><td class="team-left"><span class="team-template-text"><a>TL</a></span></td></tr>
                <tr><td><span class="timer-object" data-timestamp="{timestamp}"></span>
                  <div class="tournament-text-flex"><a href="/x">{tournament}</a></div></td></tr>
              </table>
            </div>
            <div class="mw-heading mw-heading3"><h3 id="Active">Active</h3></div>
            <div><table class="wikitable roster-card">
              <tr class="Player"><td class="ID"><a>keiko</a></td><td class="Position">Sentinel</td></tr>
            </table></div>
            </body></html>"#
        )
    }

    const RESULTS_PAGE: &str = r#"<html><body>
        <table class="wikitable sortable"><tbody>
          <tr><th>Date</th></tr>
          <tr><td>2023-05-10</td><td><span class="placement-text">1st</span></td><td></td><td></td>
              <td><a>Example Cup</a></td><td>3:1</td><td><a title="Rivals">RIV</a></td><td>$1,000</td></tr>
          <tr><td>2023-05-11</td><td><span class="placement-text">2nd</span></td></tr>
        </tbody></table></body></html>"#;

    fn client() -> LiquipediaClient<StubFetcher> {
        // 2023-05-10T12:00:00Z and 2023-05-11T12:00:00Z
        LiquipediaClient::with_fetcher(StubFetcher::new(&[
            (
                "https://liquipedia.net/valorant/Team_Liquid",
                team_page("VCT", 1_683_720_000),
            ),
            (
                "https://liquipedia.net/leagueoflegends/Team_Liquid",
                team_page("LCS", 1_683_806_400),
            ),
            (
                "https://liquipedia.net/valorant/Team_Liquid/Results",
                RESULTS_PAGE.to_string(),
            ),
        ]))
    }

    #[tokio::test]
    async fn test_get_upcoming_matches() {
        let client = client();

        let matches = client
            .get_upcoming_matches("Team_Liquid", "valorant", None)
            .await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].tournament.name, "VCT");
        assert_eq!(matches[0].tournament.game.as_deref(), Some("Valorant"));

        let on_day = client
            .get_upcoming_matches("Team_Liquid", "valorant", Some("10-05-2023"))
            .await;
        assert_eq!(on_day.len(), 1);

        let other_day = client
            .get_upcoming_matches("Team_Liquid", "valorant", Some("11-05-2023"))
            .await;
        assert!(other_day.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty() {
        let client = client();
        assert!(client.get_matches("Team_Liquid", "tft").await.is_empty());
        assert!(client.get_players("Nobody", "valorant").await.is_empty());
        assert!(client
            .get_tournament_results("Team_Liquid", "tft", None)
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_players() {
        let players = client().get_players("Team_Liquid", "valorant").await;
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].tag, "keiko");
        assert_eq!(players[0].position.as_deref(), Some("Sentinel"));
    }

    #[tokio::test]
    async fn test_get_tournament_results() {
        let client = client();

        let results = client
            .get_tournament_results("Team_Liquid", "valorant", None)
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score.team_left.name.as_deref(), Some("Team Liquid"));
        assert_eq!(results[0].score.team_right.name.as_deref(), Some("Rivals"));
        assert_eq!(results[0].prize, Some(1000.0));
        assert_eq!(results[0].is_win, Some(true));
        assert_eq!(results[1].is_win, Some(false));

        let filtered = client
            .get_tournament_results("Team_Liquid", "valorant", Some("11-05-2023"))
            .await;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].placement, "2nd");
    }

    #[tokio::test]
    async fn test_fan_out_keeps_partial_results() {
        let client = client();

        let mut names: Vec<_> = client
            .get_upcoming_matches_for_games(
                "Team_Liquid",
                &["valorant", "tft", "leagueoflegends"],
                None,
            )
            .await
            .into_iter()
            .map(|m| m.tournament.name)
            .collect();
        names.sort();
        assert_eq!(names, ["LCS", "VCT"]);

        let all = client
            .get_upcoming_matches_for_all_games("Team_Liquid", Some("11-05-2023"))
            .await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tournament.game.as_deref(), Some("League of Legends"));
    }

    #[tokio::test]
    async fn test_custom_base_url_and_games() {
        let client = LiquipediaClient::with_fetcher(StubFetcher::new(&[(
            "http://mirror.local/valorant/Team_Liquid",
            team_page("VCT", 1_683_720_000),
        )]))
        .with_base_url("http://mirror.local/")
        .with_games(GameRegistry::empty().with("valorant", "VALORANT"));

        let matches = client.get_matches("Team_Liquid", "valorant").await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].tournament.game.as_deref(), Some("VALORANT"));
        assert_eq!(
            matches[0].tournament.link.as_deref(),
            Some("http://mirror.local/x")
        );
    }
}
