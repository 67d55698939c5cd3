use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Serves a small in-memory book collection over GraphQL.
#[derive(Parser, Debug)]
#[command(name = "books")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BOOKS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "BOOKS_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Print the GraphQL schema (SDL) to stdout and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
