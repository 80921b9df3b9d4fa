//! Display helpers for member records and ratings.

use crate::model::ClubMemberWithRating;

/// Whole-percent share of matches won; `0` when nothing has been played.
pub fn win_rate(matches_won: u32, matches_played: u32) -> u32 {
    if matches_played == 0 {
        return 0;
    }
    (f64::from(matches_won) * 100.0 / f64::from(matches_played)).round() as u32
}

pub fn format_rating(rating: f64) -> String {
    (rating.round() as i64).to_string()
}

/// Signed rating change, e.g. `+12`, `-8` or `0`.
pub fn format_rating_delta(delta: f64) -> String {
    let delta = delta.round() as i64;
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

impl ClubMemberWithRating {
    pub fn win_rate(&self) -> u32 {
        win_rate(self.matches_won, self.matches_played)
    }

    pub fn rating_label(&self) -> String {
        format_rating(self.elo_rating)
    }
}
