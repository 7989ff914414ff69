mod common;
pub mod config;
mod error;
mod players;
mod routes;
mod views;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use log::{error, info};
use roster::Roster;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct RosterServer {
    data: RosterAppData,
    addr: SocketAddr,
}

impl RosterServer {
    pub fn new(data: RosterAppData, addr: SocketAddr) -> Self {
        RosterServer { data, addr }
    }

    pub fn app(&self) -> axum::Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", self.addr, e);
        })?;

        info!("listen at: http://localhost:{}", self.addr.port());

        axum::serve(listener, self.app()).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

pub struct RosterAppData {
    pub roster: Arc<RwLock<Roster>>,
}

impl RosterAppData {
    pub fn new(roster: Roster) -> Self {
        RosterAppData {
            roster: Arc::new(RwLock::new(roster)),
        }
    }
}

impl Clone for RosterAppData {
    fn clone(&self) -> Self {
        RosterAppData {
            roster: Arc::clone(&self.roster),
        }
    }
}
