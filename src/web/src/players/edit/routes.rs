use crate::RosterAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<RosterAppData> {
    Router::new()
        .route("/players/edit", post(super::player_edit_action))
        .route("/players/edit/cancel", post(super::player_edit_cancel_action))
}
