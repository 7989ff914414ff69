use crate::RosterAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<RosterAppData> {
    Router::new().route("/players", post(super::player_submit_action))
}
