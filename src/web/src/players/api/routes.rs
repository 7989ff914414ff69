use crate::RosterAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router<RosterAppData> {
    Router::new()
        .route(
            "/api/players",
            get(super::api_players_list_action).post(super::api_player_submit_action),
        )
        .route("/api/players/view", get(super::api_players_view_action))
        .route("/api/players/filter", post(super::api_players_filter_action))
}
