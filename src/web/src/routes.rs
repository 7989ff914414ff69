use crate::common::default_handler::default_handler;
use crate::players::player_routes;
use crate::RosterAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<RosterAppData> {
        Router::<RosterAppData>::new()
            .merge(player_routes())
            .fallback(default_handler)
    }
}
