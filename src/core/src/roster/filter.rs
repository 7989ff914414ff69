use crate::{Player, PlayerRole};
use serde::{Deserialize, Serialize};

/// Conjunctive roster filter. Unset fields place no constraint on the result.
///
/// The leadership flags only filter positively: `is_captain: false` means
/// "any player", never "only non-captains".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub role: Option<PlayerRole>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: PlayerRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn captains(mut self) -> Self {
        self.is_captain = true;
        self
    }

    pub fn vice_captains(mut self) -> Self {
        self.is_vice_captain = true;
        self
    }

    /// Team constraint, with a blank team treated as absent.
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.team().is_none() && !self.is_captain && !self.is_vice_captain
    }

    pub fn matches(&self, player: &Player) -> bool {
        if let Some(role) = self.role {
            if player.role != role {
                return false;
            }
        }

        if let Some(team) = self.team() {
            if player.team != team {
                return false;
            }
        }

        if self.is_captain && !player.is_captain {
            return false;
        }

        if self.is_vice_captain && !player.is_vice_captain {
            return false;
        }

        true
    }

    /// Matching players, in roster order.
    pub fn apply(&self, players: &[Player]) -> Vec<Player> {
        players
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
