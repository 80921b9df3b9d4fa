use std::str::FromStr;

use tracing::debug;

use crate::error::{FifteenAllError, Result};
use crate::model::{GamePlayer, GameScore, Side, TennisScore};

impl TennisScore {
    /// Strict parse, rejecting anything outside `0`, `15`, `30`, `40`, `AD`.
    pub fn parse_strict(raw: &str) -> Result<TennisScore> {
        TennisScore::from_str(raw.trim())
            .map_err(|_| FifteenAllError::InvalidScoreState(raw.to_string()))
    }

    /// Lenient parse: unrecognised input counts as `0`.
    pub fn parse_lenient(raw: &str) -> TennisScore {
        TennisScore::parse_strict(raw).unwrap_or_else(|_| {
            debug!(raw, "unrecognised point score, treating as 0");
            TennisScore::Love
        })
    }
}

/// Successor of a point score. `AD` is a fixed point.
pub fn get_next_score(current: TennisScore) -> TennisScore {
    match current {
        TennisScore::Love => TennisScore::Fifteen,
        TennisScore::Fifteen => TennisScore::Thirty,
        TennisScore::Thirty => TennisScore::Forty,
        TennisScore::Forty | TennisScore::Advantage => TennisScore::Advantage,
    }
}

/// Advance a raw, possibly corrupt score. Unknown input restarts from `0`.
pub fn next_score_from_raw(raw: &str) -> TennisScore {
    get_next_score(TennisScore::parse_lenient(raw))
}

pub fn format_tennis_score(score: TennisScore) -> String {
    score.to_string()
}

/// Winner of a game, or `None` while it is still in play (including deuce).
///
/// Player 1's advantage is checked first, so a (never legitimately reached)
/// `AD`-`AD` state goes to player 1.
pub fn check_game_winner(score: &GameScore) -> Option<GamePlayer> {
    use TennisScore::*;

    match (score.player1, score.player2) {
        (Forty, Love | Fifteen | Thirty) | (Advantage, _) => Some(GamePlayer::Player1),
        (Love | Fifteen | Thirty, Forty) | (_, Advantage) => Some(GamePlayer::Player2),
        _ => None,
    }
}

impl GameScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point won by `side`.
    ///
    /// Winning a point against an opponent holding advantage returns the
    /// game to deuce instead of advancing.
    pub fn award_point(&mut self, side: Side) {
        let (scorer, opponent) = match side {
            Side::One => (&mut self.player1, &mut self.player2),
            Side::Two => (&mut self.player2, &mut self.player1),
        };
        if *opponent == TennisScore::Advantage {
            *opponent = TennisScore::Forty;
        } else {
            *scorer = get_next_score(*scorer);
        }
    }

    pub fn winner(&self) -> Option<GamePlayer> {
        check_game_winner(self)
    }
}
