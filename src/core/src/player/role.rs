use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub const PLAYER_ROLES: [PlayerRole; 4] = [
    PlayerRole::Batsman,
    PlayerRole::Bowler,
    PlayerRole::AllRounder,
    PlayerRole::WicketKeeper,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerRole {
    #[default]
    Batsman,
    Bowler,
    #[serde(rename = "All Rounder", alias = "AllRounder")]
    AllRounder,
    #[serde(rename = "WK", alias = "WicketKeeper")]
    WicketKeeper,
}

impl PlayerRole {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All Rounder",
            PlayerRole::WicketKeeper => "WK",
        }
    }
}

impl Display for PlayerRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for PlayerRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Batsman" => Ok(PlayerRole::Batsman),
            "Bowler" => Ok(PlayerRole::Bowler),
            "All Rounder" | "AllRounder" => Ok(PlayerRole::AllRounder),
            "WK" | "WicketKeeper" => Ok(PlayerRole::WicketKeeper),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
