use roster::{FilterCriteria, Player, PLAYER_ROLES};

pub struct RoleOption {
    pub label: String,
    pub selected: bool,
}

/// Role options for a `<select>`, with `selected_label` marked.
pub fn role_options(selected_label: &str) -> Vec<RoleOption> {
    PLAYER_ROLES
        .iter()
        .map(|role| RoleOption {
            label: role.get_short_name().to_string(),
            selected: role.get_short_name() == selected_label,
        })
        .collect()
}

pub struct PlayerListItem {
    pub name: String,
    pub role: String,
    pub team: String,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub is_being_edited: bool,
}

impl PlayerListItem {
    pub fn new(player: &Player, editing: Option<&Player>) -> Self {
        PlayerListItem {
            name: player.name.clone(),
            role: player.role.get_short_name().to_string(),
            team: player.team.clone(),
            is_captain: player.is_captain,
            is_vice_captain: player.is_vice_captain,
            is_being_edited: editing.is_some_and(|e| e.name == player.name),
        }
    }
}

/// Values shown in the add / update form.
pub struct PlayerFormModel {
    pub name: String,
    pub team: String,
    pub roles: Vec<RoleOption>,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub is_editing: bool,
}

impl PlayerFormModel {
    pub fn empty() -> Self {
        PlayerFormModel {
            name: String::new(),
            team: String::new(),
            roles: role_options(roster::PlayerRole::default().get_short_name()),
            is_captain: false,
            is_vice_captain: false,
            is_editing: false,
        }
    }

    pub fn editing(player: &Player) -> Self {
        PlayerFormModel {
            name: player.name.clone(),
            team: player.team.clone(),
            roles: role_options(player.role.get_short_name()),
            is_captain: player.is_captain,
            is_vice_captain: player.is_vice_captain,
            is_editing: true,
        }
    }

    pub fn for_roster_editor(editing: Option<&Player>) -> Self {
        editing.map_or_else(Self::empty, Self::editing)
    }
}

/// Values shown in the filter form.
pub struct FilterFormModel {
    pub team: String,
    pub roles: Vec<RoleOption>,
    pub any_role: bool,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

impl FilterFormModel {
    pub fn new(criteria: Option<&FilterCriteria>) -> Self {
        let criteria = criteria.cloned().unwrap_or_default();
        let role_label = criteria.role.map(|r| r.get_short_name()).unwrap_or("");

        FilterFormModel {
            team: criteria.team().unwrap_or("").to_string(),
            roles: role_options(role_label),
            any_role: criteria.role.is_none(),
            is_captain: criteria.is_captain,
            is_vice_captain: criteria.is_vice_captain,
        }
    }
}
