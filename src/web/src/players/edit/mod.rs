pub mod routes;

use crate::{ApiResult, RosterAppData};
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerEditRequest {
    pub name: String,
}

pub async fn player_edit_action(
    State(state): State<RosterAppData>,
    Form(request): Form<PlayerEditRequest>,
) -> ApiResult<Redirect> {
    let mut roster = state.roster.write().await;

    roster.begin_edit(&request.name)?;

    Ok(Redirect::to("/"))
}

pub async fn player_edit_cancel_action(State(state): State<RosterAppData>) -> Redirect {
    state.roster.write().await.cancel_edit();

    Redirect::to("/")
}
