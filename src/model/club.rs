use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GameScores, ResolvedLocation, Side};

/// A club returned by the nearby-clubs lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyClub {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    #[serde(default)]
    pub member_count: u32,
}

/// A club member together with their rating record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubMemberWithRating {
    pub user_id: String,
    pub full_name: Option<String>,
    pub elo_rating: f64,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub matches_won: u32,
}

/// A non-member who played in a recorded match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPlayer {
    pub id: String,
    pub name: String,
}

/// A selectable player on the match form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayerOption {
    Member(ClubMemberWithRating),
    Guest(GuestPlayer),
}

impl PlayerOption {
    /// Identity used to detect the same player picked twice.
    pub fn id(&self) -> &str {
        match self {
            PlayerOption::Member(member) => &member.user_id,
            PlayerOption::Guest(guest) => &guest.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PlayerOption::Member(member) => member.full_name.as_deref().unwrap_or("Unknown"),
            PlayerOption::Guest(guest) => &guest.name,
        }
    }
}

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
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchType {
    #[default]
    Singles,
    Doubles,
}

impl MatchType {
    pub fn players_per_team(self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::Doubles => 2,
        }
    }
}

/// Payload of the remote match-recording call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordMatchRequest {
    pub club_id: String,
    pub match_type: MatchType,
    pub team1_players: Vec<String>,
    pub team2_players: Vec<String>,
    pub team1_guests: Vec<String>,
    pub team2_guests: Vec<String>,
    pub game_scores: GameScores,
    pub winner: Option<Side>,
    pub team1_sets_won: u32,
    pub team2_sets_won: u32,
    pub played_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Clubs found around a resolved location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubDiscovery {
    pub location: ResolvedLocation,
    pub clubs: Vec<NearbyClub>,
}
