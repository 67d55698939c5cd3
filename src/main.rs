use std::net::SocketAddr;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::ServerError;
use server::{BookStore, make_app, make_schema};

mod config;
mod datamodel;
mod error;
mod server;

#[cfg(test)]
mod client;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::parse();

    if config.print_schema {
        print!("{}", make_schema(BookStore::default()).sdl());
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    serve(config.addr())
        .await
        .inspect_err(|err| error!("{err}"))
}

async fn serve(addr: SocketAddr) -> Result<(), ServerError> {
    let app = make_app(BookStore::seeded());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("GraphQL server listening on http://{addr}/");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
