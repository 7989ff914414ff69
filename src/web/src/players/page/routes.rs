use crate::RosterAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<RosterAppData> {
    Router::new().route("/", get(super::roster_page_action))
}
