pub mod routes;

use crate::{ApiError, ApiResult, RosterAppData};
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use roster::{FilterCriteria, PlayerRole};
use serde::Deserialize;

/// Filter form. An empty role or team means "any".
#[derive(Deserialize, Default)]
pub struct PlayerFilterRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl PlayerFilterRequest {
    pub fn to_criteria(&self) -> ApiResult<FilterCriteria> {
        let role = match self.role.as_str() {
            "" => None,
            label => Some(
                label
                    .parse::<PlayerRole>()
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            ),
        };

        Ok(FilterCriteria {
            role,
            team: Some(self.team.clone()).filter(|t| !t.is_empty()),
            is_captain: self.is_captain,
            is_vice_captain: self.is_vice_captain,
        })
    }
}

pub async fn player_filter_action(
    State(state): State<RosterAppData>,
    Form(request): Form<PlayerFilterRequest>,
) -> ApiResult<Redirect> {
    let criteria = request.to_criteria()?;

    state.roster.write().await.filter(criteria);

    Ok(Redirect::to("/"))
}

pub async fn player_filter_clear_action(State(state): State<RosterAppData>) -> Redirect {
    state.roster.write().await.clear_filter();

    Redirect::to("/")
}
