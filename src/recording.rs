//! State behind the match-recording form.

use chrono::NaiveDate;
use itertools::{Either, Itertools};
use tracing::debug;

use crate::error::{FifteenAllError, Result};
use crate::model::{
    MatchFormat, MatchResult, MatchType, PlayerOption, RecordMatchRequest, SetScore, Side,
};
use crate::scoring::{SetScoreEdit, SetScoreInput, TennisScoring};

const TEAM1_INCOMPLETE: &str = "Select every player for team 1";
const TEAM2_INCOMPLETE: &str = "Select every player for team 2";
const DUPLICATE_PLAYER: &str = "A player cannot be selected more than once";
const INVALID_SETS: &str = "Every set needs a valid score";

#[derive(Debug, Clone)]
pub struct MatchForm {
    club_id: String,
    match_type: MatchType,
    match_format: MatchFormat,
    team1: Vec<PlayerOption>,
    team2: Vec<PlayerOption>,
    sets: Vec<SetScoreInput>,
    played_at: NaiveDate,
    notes: Option<String>,
}

impl MatchForm {
    /// A singles, best-of-3 form with one empty set.
    pub fn new(club_id: impl Into<String>, played_at: NaiveDate) -> Self {
        Self {
            club_id: club_id.into(),
            match_type: MatchType::default(),
            match_format: MatchFormat::default(),
            team1: Vec::new(),
            team2: Vec::new(),
            sets: vec![SetScoreInput::new()],
            played_at,
            notes: None,
        }
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Switching to singles drops the second player of each team.
    pub fn set_match_type(&mut self, match_type: MatchType) {
        self.match_type = match_type;
        self.team1.truncate(match_type.players_per_team());
        self.team2.truncate(match_type.players_per_team());
    }

    pub fn match_format(&self) -> MatchFormat {
        self.match_format
    }

    /// Switching to a shorter format drops sets beyond its maximum.
    pub fn set_match_format(&mut self, match_format: MatchFormat) {
        self.match_format = match_format;
        self.sets.truncate(match_format.max_sets());
    }

    pub fn set_played_at(&mut self, played_at: NaiveDate) {
        self.played_at = played_at;
    }

    pub fn set_notes(&mut self, notes: &str) {
        let notes = notes.trim();
        self.notes = (!notes.is_empty()).then(|| notes.to_string());
    }

    pub fn team(&self, side: Side) -> &[PlayerOption] {
        match side {
            Side::One => &self.team1,
            Side::Two => &self.team2,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut Vec<PlayerOption> {
        match side {
            Side::One => &mut self.team1,
            Side::Two => &mut self.team2,
        }
    }

    /// Add a player to a team. Returns `false` if the team is already full.
    pub fn add_player(&mut self, side: Side, player: PlayerOption) -> bool {
        let capacity = self.match_type.players_per_team();
        let team = self.team_mut(side);
        if team.len() >= capacity {
            return false;
        }
        team.push(player);
        true
    }

    pub fn remove_player(&mut self, side: Side, player_id: &str) -> bool {
        let team = self.team_mut(side);
        let before = team.len();
        team.retain(|p| p.id() != player_id);
        team.len() != before
    }

    pub fn set_inputs(&self) -> &[SetScoreInput] {
        &self.sets
    }

    /// Append an empty set. Returns `false` once the format's maximum is reached.
    pub fn add_set(&mut self) -> bool {
        if self.sets.len() >= self.match_format.max_sets() {
            return false;
        }
        self.sets.push(SetScoreInput::new());
        true
    }

    /// Remove a set, always keeping at least one.
    pub fn remove_set(&mut self, index: usize) -> bool {
        if self.sets.len() <= 1 || index >= self.sets.len() {
            return false;
        }
        self.sets.remove(index);
        true
    }

    /// Apply an edit to one set, returning its new score.
    pub fn edit_set(&mut self, index: usize, edit: SetScoreEdit) -> Option<SetScore> {
        self.sets.get_mut(index).map(|input| input.apply(edit))
    }

    pub fn sets(&self) -> Vec<SetScore> {
        self.sets.iter().map(SetScoreInput::set_score).collect()
    }

    pub fn result(&self) -> MatchResult {
        TennisScoring::calculate_match_result(&self.sets(), self.match_format)
    }

    /// Problems blocking submission; empty when the form can be submitted.
    pub fn validate(&self) -> Vec<&'static str> {
        let needed = self.match_type.players_per_team();
        let mut problems = Vec::new();
        if self.team1.len() != needed {
            problems.push(TEAM1_INCOMPLETE);
        }
        if self.team2.len() != needed {
            problems.push(TEAM2_INCOMPLETE);
        }
        if self
            .team1
            .iter()
            .chain(&self.team2)
            .map(PlayerOption::id)
            .duplicates()
            .next()
            .is_some()
        {
            problems.push(DUPLICATE_PLAYER);
        }
        if !self.sets.iter().all(SetScoreInput::is_valid_set) {
            problems.push(INVALID_SETS);
        }
        problems
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Build the payload for the remote match-recording call.
    pub fn to_request(&self) -> Result<RecordMatchRequest> {
        let problems = self.validate();
        if !problems.is_empty() {
            return Err(FifteenAllError::InvalidMatch(problems.join("; ")));
        }

        let result = self.result();
        let (team1_players, team1_guests) = split_players(&self.team1);
        let (team2_players, team2_guests) = split_players(&self.team2);
        debug!(
            sets = result.game_scores.sets.len(),
            winner = ?result.winner,
            "built match request"
        );

        Ok(RecordMatchRequest {
            club_id: self.club_id.clone(),
            match_type: self.match_type,
            team1_players,
            team2_players,
            team1_guests,
            team2_guests,
            winner: result.winner,
            team1_sets_won: result.team1_sets_won,
            team2_sets_won: result.team2_sets_won,
            game_scores: result.game_scores,
            played_at: self.played_at,
            notes: self.notes.clone(),
        })
    }
}

/// Member user ids and guest names.
fn split_players(team: &[PlayerOption]) -> (Vec<String>, Vec<String>) {
    team.iter().partition_map(|player| match player {
        PlayerOption::Member(member) => Either::Left(member.user_id.clone()),
        PlayerOption::Guest(guest) => Either::Right(guest.name.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClubMemberWithRating, GuestPlayer};

    fn member(id: &str) -> PlayerOption {
        PlayerOption::Member(ClubMemberWithRating {
            user_id: id.to_string(),
            full_name: Some(format!("Player {id}")),
            elo_rating: 1200.0,
            matches_played: 0,
            matches_won: 0,
        })
    }

    fn guest(name: &str) -> PlayerOption {
        PlayerOption::Guest(GuestPlayer {
            id: format!("guest-{name}"),
            name: name.to_string(),
        })
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 3).unwrap()
    }

    fn enter_set(form: &mut MatchForm, index: usize, team1: &str, team2: &str) {
        form.edit_set(index, SetScoreEdit::Team1Games(team1.to_string()));
        form.edit_set(index, SetScoreEdit::Team2Games(team2.to_string()));
    }

    #[test]
    fn test_new_form_is_incomplete() {
        let form = MatchForm::new("club-1", date());
        assert_eq!(form.set_inputs().len(), 1);
        assert_eq!(
            form.validate(),
            vec![TEAM1_INCOMPLETE, TEAM2_INCOMPLETE, INVALID_SETS]
        );
        assert!(matches!(
            form.to_request(),
            Err(FifteenAllError::InvalidMatch(_))
        ));
    }

    #[test]
    fn test_team_capacity_follows_match_type() {
        let mut form = MatchForm::new("club-1", date());
        assert!(form.add_player(Side::One, member("a")));
        assert!(!form.add_player(Side::One, member("b")));

        form.set_match_type(MatchType::Doubles);
        assert!(form.add_player(Side::One, guest("Sam")));
        assert_eq!(form.team(Side::One).len(), 2);

        form.set_match_type(MatchType::Singles);
        assert_eq!(form.team(Side::One).len(), 1);
        assert!(form.remove_player(Side::One, "a"));
        assert!(!form.remove_player(Side::One, "a"));
    }

    #[test]
    fn test_set_count_bounded_by_format() {
        let mut form = MatchForm::new("club-1", date());
        assert!(form.add_set());
        assert!(form.add_set());
        assert!(!form.add_set());

        form.set_match_format(MatchFormat::BestOf5);
        assert!(form.add_set());
        assert!(form.add_set());
        assert_eq!(form.set_inputs().len(), 5);

        form.set_match_format(MatchFormat::BestOf3);
        assert_eq!(form.set_inputs().len(), 3);

        assert!(form.remove_set(0));
        assert!(form.remove_set(0));
        assert!(!form.remove_set(0));
        assert!(!form.remove_set(4));
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut form = MatchForm::new("club-1", date());
        form.add_player(Side::One, member("a"));
        form.add_player(Side::Two, member("a"));
        enter_set(&mut form, 0, "6", "2");
        assert_eq!(form.validate(), vec![DUPLICATE_PLAYER]);
    }

    #[test]
    fn test_to_request_carries_result() {
        let mut form = MatchForm::new("club-9", date());
        form.set_match_type(MatchType::Doubles);
        form.add_player(Side::One, member("a"));
        form.add_player(Side::One, guest("Robin"));
        form.add_player(Side::Two, member("c"));
        form.add_player(Side::Two, member("d"));
        form.set_notes("  windy  ");

        enter_set(&mut form, 0, "4", "6");
        form.add_set();
        enter_set(&mut form, 1, "6", "6");
        form.edit_set(1, SetScoreEdit::TieBreakerEnabled(true));
        form.edit_set(1, SetScoreEdit::Team1TieBreakPoints("7".into()));
        form.edit_set(1, SetScoreEdit::Team2TieBreakPoints("5".into()));
        form.add_set();
        enter_set(&mut form, 2, "6", "1");

        let request = form.to_request().unwrap();
        assert_eq!(request.club_id, "club-9");
        assert_eq!(request.team1_players, vec!["a"]);
        assert_eq!(request.team1_guests, vec!["Robin"]);
        assert_eq!(request.team2_players, vec!["c", "d"]);
        assert!(request.team2_guests.is_empty());
        assert_eq!(request.winner, Some(Side::One));
        assert_eq!((request.team1_sets_won, request.team2_sets_won), (2, 1));
        assert_eq!(request.game_scores.sets, form.sets());
        assert_eq!(request.notes.as_deref(), Some("windy"));
    }

    #[test]
    fn test_drawn_match_is_submittable() {
        let mut form = MatchForm::new("club-1", date());
        form.add_player(Side::One, member("a"));
        form.add_player(Side::Two, guest("Lee"));
        enter_set(&mut form, 0, "6", "4");
        form.add_set();
        enter_set(&mut form, 1, "3", "6");

        let request = form.to_request().unwrap();
        assert_eq!(request.winner, None);
        assert_eq!((request.team1_sets_won, request.team2_sets_won), (1, 1));
    }
}
