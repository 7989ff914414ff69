use env_logger::Env;
use log::info;
use roster::Roster;
use web::{RosterAppData, RosterServer, ServerConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let config = ServerConfig::from_env()?;

    info!(
        "starting roster on port {}, duplicate player names {}",
        config.port,
        if config.roster.reject_duplicate_names { "rejected" } else { "allowed" }
    );

    let data = RosterAppData::new(Roster::new(config.roster));

    RosterServer::new(data, config.addr()).run().await?;

    Ok(())
}
