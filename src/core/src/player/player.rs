use crate::player::builder::PlayerBuilder;
use crate::PlayerRole;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub role: PlayerRole,
    pub team: String,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn plays_for(&self, team: &str) -> bool {
        self.team == team
    }
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} - {} - {}", self.name, self.role, self.team)?;

        if self.is_captain {
            write!(f, " (Captain)")?;
        }

        if self.is_vice_captain {
            write!(f, " (Vice-Captain)")?;
        }

        Ok(())
    }
}
