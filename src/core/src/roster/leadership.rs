use crate::Player;

/// Current captain and vice-captain of one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeamLeadership<'p> {
    pub captain: Option<&'p Player>,
    pub vice_captain: Option<&'p Player>,
}

impl<'p> TeamLeadership<'p> {
    pub fn of(players: impl IntoIterator<Item = &'p Player>, team: &str) -> Self {
        let mut leadership = TeamLeadership::default();

        for player in players.into_iter().filter(|p| p.plays_for(team)) {
            if player.is_captain && leadership.captain.is_none() {
                leadership.captain = Some(player);
            }

            if player.is_vice_captain && leadership.vice_captain.is_none() {
                leadership.vice_captain = Some(player);
            }
        }

        leadership
    }

    pub fn is_complete(&self) -> bool {
        self.captain.is_some() && self.vice_captain.is_some()
    }
}

/// Which leadership slots are taken in `team`, ignoring records named `exclude_name`.
pub(crate) struct TakenSlots {
    pub has_captain: bool,
    pub has_vice_captain: bool,
}

impl TakenSlots {
    pub fn scan(players: &[Player], team: &str, exclude_name: Option<&str>) -> Self {
        let mut slots = TakenSlots {
            has_captain: false,
            has_vice_captain: false,
        };

        for p in players
            .iter()
            .filter(|p| p.plays_for(team) && Some(p.name.as_str()) != exclude_name)
        {
            slots.has_captain |= p.is_captain;
            slots.has_vice_captain |= p.is_vice_captain;
        }

        slots
    }
}
