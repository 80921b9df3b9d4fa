//! Point, game, set and match scoring.

mod engine;
pub mod game;
pub mod input;

pub use engine::TennisScoring;
pub use game::{check_game_winner, format_tennis_score, get_next_score, next_score_from_raw};
pub use input::{SetScoreEdit, SetScoreInput};
