pub mod routes;

use crate::players::page::RosterPageTemplate;
use crate::views::{role_options, PlayerFormModel};
use crate::{ApiError, ApiResult, RosterAppData};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use roster::{Player, PlayerRole};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerSubmitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
    #[serde(default)]
    pub is_editing: bool,
}

impl PlayerSubmitRequest {
    pub fn to_candidate(&self) -> ApiResult<Player> {
        let role: PlayerRole = self
            .role
            .parse()
            .map_err(|e: roster::UnknownRole| ApiError::BadRequest(e.to_string()))?;

        Player::builder()
            .name(self.name.as_str())
            .role(role)
            .team(self.team.as_str())
            .captain(self.is_captain)
            .vice_captain(self.is_vice_captain)
            .build()
            .map_err(ApiError::BadRequest)
    }

    /// Echoes the submitted values back into the form.
    fn to_form(&self) -> PlayerFormModel {
        PlayerFormModel {
            name: self.name.clone(),
            team: self.team.clone(),
            roles: role_options(&self.role),
            is_captain: self.is_captain,
            is_vice_captain: self.is_vice_captain,
            is_editing: self.is_editing,
        }
    }
}

pub async fn player_submit_action(
    State(state): State<RosterAppData>,
    Form(request): Form<PlayerSubmitRequest>,
) -> ApiResult<Response> {
    let candidate = request.to_candidate()?;

    let mut roster = state.roster.write().await;

    match roster.submit_player(candidate, request.is_editing) {
        Ok(()) => Ok(Redirect::to("/").into_response()),
        Err(err) if err.is_conflict() => {
            let page = RosterPageTemplate::new(&roster, request.to_form(), Some(err.to_string()));

            Ok((StatusCode::CONFLICT, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}
