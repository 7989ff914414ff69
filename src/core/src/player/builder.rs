use crate::{Player, PlayerRole};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    role: Option<PlayerRole>,
    team: Option<String>,
    is_captain: bool,
    is_vice_captain: bool,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: PlayerRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn captain(mut self, is_captain: bool) -> Self {
        self.is_captain = is_captain;
        self
    }

    pub fn vice_captain(mut self, is_vice_captain: bool) -> Self {
        self.is_vice_captain = is_vice_captain;
        self
    }

    /// Name and team are required and must not be blank.
    pub fn build(self) -> Result<Player, String> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or("name is required")?;

        let team = self
            .team
            .filter(|t| !t.trim().is_empty())
            .ok_or("team is required")?;

        Ok(Player {
            name,
            role: self.role.unwrap_or_default(),
            team,
            is_captain: self.is_captain,
            is_vice_captain: self.is_vice_captain,
        })
    }
}
