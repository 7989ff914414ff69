pub mod api;
pub mod edit;
pub mod filter;
pub mod page;
pub mod submit;

use crate::RosterAppData;
use axum::Router;

pub fn player_routes() -> Router<RosterAppData> {
    Router::new()
        .merge(page::routes::routes())
        .merge(submit::routes::routes())
        .merge(edit::routes::routes())
        .merge(filter::routes::routes())
        .merge(api::routes::routes())
}
