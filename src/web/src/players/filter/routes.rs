use crate::RosterAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<RosterAppData> {
    Router::new()
        .route("/players/filter", post(super::player_filter_action))
        .route("/players/filter/clear", post(super::player_filter_clear_action))
}
