pub mod player;
pub mod roster;

pub use player::{Player, PlayerBuilder, PlayerRole, UnknownRole, PLAYER_ROLES};
pub use roster::{
    FilterCriteria, Roster, RosterError, RosterResult, RosterSettings, TeamLeadership,
};
