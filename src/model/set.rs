use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::Side;

/// Points scored by each team in a tie-break.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreaker {
    pub team1_points: i32,
    pub team2_points: i32,
}

/// Final score of one completed set.
///
/// Game counts are signed so raw user input can be carried through and
/// rejected by validation rather than by parsing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub team1_games: i32,
    pub team2_games: i32,
    pub tie_breaker: Option<TieBreaker>,
}

impl SetScore {
    pub fn new(team1_games: i32, team2_games: i32) -> Self {
        Self {
            team1_games,
            team2_games,
            tie_breaker: None,
        }
    }

    pub fn with_tie_breaker(mut self, team1_points: i32, team2_points: i32) -> Self {
        self.tie_breaker = Some(TieBreaker {
            team1_points,
            team2_points,
        });
        self
    }
}

/// How many sets a match is played over.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
pub enum MatchFormat {
    #[default]
    #[serde(rename = "best_of_3")]
    #[strum(serialize = "best_of_3")]
    BestOf3,
    #[serde(rename = "best_of_5")]
    #[strum(serialize = "best_of_5")]
    BestOf5,
}

impl MatchFormat {
    /// Sets a team must win to take the match outright.
    pub fn sets_to_win(self) -> u32 {
        match self {
            MatchFormat::BestOf3 => 2,
            MatchFormat::BestOf5 => 3,
        }
    }

    /// Most sets that can be entered for a match in this format.
    pub fn max_sets(self) -> usize {
        match self {
            MatchFormat::BestOf3 => 3,
            MatchFormat::BestOf5 => 5,
        }
    }
}

/// The per-set detail stored alongside a match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScores {
    pub sets: Vec<SetScore>,
    pub match_format: MatchFormat,
}

/// Outcome of a match, always derived from its ordered sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team1_sets_won: u32,
    pub team2_sets_won: u32,
    pub winner: Option<Side>,
    pub game_scores: GameScores,
}
