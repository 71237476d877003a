use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(name = "cookbook-server")]
#[command(about = "Recipe catalog HTTP API", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    /// Print the OpenAPI document as JSON and exit
    #[arg(long)]
    pub openapi: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "cookery.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Replace the catalog with the demonstration recipes
    Seed,
}
