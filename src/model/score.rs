use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// A single side's point count within one game.
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
#[strum(ascii_case_insensitive)]
pub enum TennisScore {
    #[default]
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    Love,
    #[serde(rename = "15")]
    #[strum(serialize = "15")]
    Fifteen,
    #[serde(rename = "30")]
    #[strum(serialize = "30")]
    Thirty,
    #[serde(rename = "40")]
    #[strum(serialize = "40")]
    Forty,
    #[serde(rename = "AD")]
    #[strum(serialize = "AD")]
    Advantage,
}

/// Point score of both sides within one game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub player1: TennisScore,
    pub player2: TennisScore,
}

/// Winner of a single game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GamePlayer {
    Player1,
    Player2,
}

/// One of the two teams in a set or match. Serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Side {
    One,
    Two,
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        match side {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(format!("side must be 1 or 2, got {other}")),
        }
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}
