use crate::model::{SetScore, TieBreaker};
use crate::scoring::TennisScoring;

const INVALID_SET_MESSAGE: &str = "Please enter a valid score. At least one team must win a game.";
const INVALID_TIE_BREAK_MESSAGE: &str = "Please enter a valid tie-break score.";

/// A single edit to a set's input fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetScoreEdit {
    Team1Games(String),
    Team2Games(String),
    TieBreakerEnabled(bool),
    Team1TieBreakPoints(String),
    Team2TieBreakPoints(String),
}

/// Editable text state for one set, from which a [`SetScore`] is derived.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetScoreInput {
    team1_games: String,
    team2_games: String,
    tie_breaker_enabled: bool,
    team1_tie_break: String,
    team2_tie_break: String,
}

/// Parse the leading integer of `text`, or `0` when there is none.
///
/// Never fails so that typing is never blocked; `"6x"` reads as `6`.
pub(crate) fn parse_count(text: &str) -> i32 {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digits_len = text[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    text[..sign_len + digits_len].parse().unwrap_or(0)
}

impl SetScoreInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the fields from an existing set, e.g. when re-editing a match.
    pub fn from_set_score(set: &SetScore) -> Self {
        Self {
            team1_games: set.team1_games.to_string(),
            team2_games: set.team2_games.to_string(),
            tie_breaker_enabled: set.tie_breaker.is_some(),
            team1_tie_break: set
                .tie_breaker
                .map(|tb| tb.team1_points.to_string())
                .unwrap_or_default(),
            team2_tie_break: set
                .tie_breaker
                .map(|tb| tb.team2_points.to_string())
                .unwrap_or_default(),
        }
    }

    /// Apply an edit and return the freshly derived set score.
    pub fn apply(&mut self, edit: SetScoreEdit) -> SetScore {
        match edit {
            SetScoreEdit::Team1Games(text) => self.team1_games = text,
            SetScoreEdit::Team2Games(text) => self.team2_games = text,
            SetScoreEdit::TieBreakerEnabled(enabled) => {
                self.tie_breaker_enabled = enabled;
                if !enabled {
                    self.team1_tie_break.clear();
                    self.team2_tie_break.clear();
                }
            }
            SetScoreEdit::Team1TieBreakPoints(text) => self.team1_tie_break = text,
            SetScoreEdit::Team2TieBreakPoints(text) => self.team2_tie_break = text,
        }
        self.set_score()
    }

    /// Like [`apply`](Self::apply), handing the result to `on_change`.
    pub fn apply_with<F: FnOnce(SetScore)>(&mut self, edit: SetScoreEdit, on_change: F) {
        on_change(self.apply(edit));
    }

    pub fn team1_games(&self) -> &str {
        &self.team1_games
    }

    pub fn team2_games(&self) -> &str {
        &self.team2_games
    }

    pub fn tie_breaker_enabled(&self) -> bool {
        self.tie_breaker_enabled
    }

    pub fn team1_tie_break(&self) -> &str {
        &self.team1_tie_break
    }

    pub fn team2_tie_break(&self) -> &str {
        &self.team2_tie_break
    }

    fn games(&self) -> (i32, i32) {
        (parse_count(&self.team1_games), parse_count(&self.team2_games))
    }

    fn tie_break_points(&self) -> (i32, i32) {
        (
            parse_count(&self.team1_tie_break),
            parse_count(&self.team2_tie_break),
        )
    }

    /// The canonical set score for the current text.
    ///
    /// A tie-break is only attached when enabled and at least one side has
    /// a positive point count.
    pub fn set_score(&self) -> SetScore {
        let (team1_games, team2_games) = self.games();
        let (team1_points, team2_points) = self.tie_break_points();
        let tie_breaker = (self.tie_breaker_enabled && (team1_points > 0 || team2_points > 0))
            .then_some(TieBreaker {
                team1_points,
                team2_points,
            });
        SetScore {
            team1_games,
            team2_games,
            tie_breaker,
        }
    }

    /// Both game counts are at 6, so a tie-break should be offered.
    pub fn suggests_tie_breaker(&self) -> bool {
        let (team1, team2) = self.games();
        TennisScoring::needs_tie_breaker(team1, team2)
    }

    pub fn is_valid_set(&self) -> bool {
        let (team1, team2) = self.games();
        if !TennisScoring::is_valid_set_score(team1, team2) {
            return false;
        }
        if self.tie_breaker_enabled {
            let (team1_points, team2_points) = self.tie_break_points();
            return TennisScoring::is_valid_tie_breaker(team1_points, team2_points);
        }
        true
    }

    /// Inline error text, or `None` while valid or not yet attempted.
    pub fn validation_message(&self) -> Option<&'static str> {
        let (team1, team2) = self.games();
        if team1 == 0 && team2 == 0 {
            return None;
        }
        if !TennisScoring::is_valid_set_score(team1, team2) {
            return Some(INVALID_SET_MESSAGE);
        }
        if self.tie_breaker_enabled {
            let (team1_points, team2_points) = self.tie_break_points();
            if !TennisScoring::is_valid_tie_breaker(team1_points, team2_points) {
                return Some(INVALID_TIE_BREAK_MESSAGE);
            }
        }
        None
    }
}
