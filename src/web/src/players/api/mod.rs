pub mod routes;

use crate::{ApiError, ApiResult, RosterAppData};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster::{FilterCriteria, Player};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSubmitPayload {
    pub player: Player,
    #[serde(default)]
    pub is_editing: bool,
}

pub async fn api_players_list_action(State(state): State<RosterAppData>) -> Json<Vec<Player>> {
    let roster = state.roster.read().await;

    Json(roster.players().to_vec())
}

pub async fn api_players_view_action(State(state): State<RosterAppData>) -> Json<Vec<Player>> {
    let roster = state.roster.read().await;

    Json(roster.displayed().to_vec())
}

pub async fn api_player_submit_action(
    State(state): State<RosterAppData>,
    Json(payload): Json<PlayerSubmitPayload>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let player = payload.player;

    if player.name.trim().is_empty() || player.team.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "name and team are required".to_string(),
        ));
    }

    let status = if payload.is_editing {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    state
        .roster
        .write()
        .await
        .submit_player(player.clone(), payload.is_editing)?;

    Ok((status, Json(player)))
}

pub async fn api_players_filter_action(
    State(state): State<RosterAppData>,
    Json(criteria): Json<FilterCriteria>,
) -> Json<Vec<Player>> {
    let mut roster = state.roster.write().await;

    Json(roster.filter(criteria).to_vec())
}
