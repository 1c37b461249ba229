use std::collections::HashMap;

use strum::IntoEnumIterator;

/// Games known to have Liquipedia wikis, keyed by their wiki path segment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Game {
    Valorant,
    LeagueOfLegends,
    RocketLeague,
    Tft,
    CounterStrike,
    Overwatch,
    ApexLegends,
    CallOfDuty,
    RainbowSix,
}

impl Game {
    /// Games queried when a caller asks for "all games".
    pub const DEFAULT_SET: [Game; 4] = [
        Game::Valorant,
        Game::LeagueOfLegends,
        Game::RocketLeague,
        Game::Tft,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Game::Valorant => "Valorant",
            Game::LeagueOfLegends => "League of Legends",
            Game::RocketLeague => "Rocket League",
            Game::Tft => "Teamfight Tactics",
            Game::CounterStrike => "Counter-Strike",
            Game::Overwatch => "Overwatch",
            Game::ApexLegends => "Apex Legends",
            Game::CallOfDuty => "Call of Duty",
            Game::RainbowSix => "Rainbow Six Siege",
        }
    }
}

/// Immutable lookup from a wiki game code to its human-readable name.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    names: HashMap<String, String>,
}

impl GameRegistry {
    /// An empty registry: every code is displayed as-is.
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// Return a copy of this registry with `code` mapped to `name`.
    pub fn with(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(code.into(), name.into());
        self
    }

    /// Display name for `code`, or `code` itself when it is not registered.
    pub fn display_name(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Game::iter().fold(Self::empty(), |registry, game| {
            registry.with(game.to_string(), game.display_name())
        })
    }
}
