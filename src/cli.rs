use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "job-board", version, about = "Job board API server and terminal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (the default)
    Serve,
    /// Open the terminal board against a running server
    Board(BoardArgs),
}

#[derive(Debug, Parser)]
pub struct BoardArgs {
    /// Base URL of the API server
    #[arg(long = "api-url", default_value = "http://127.0.0.1:5000")]
    pub api_url: String,
}
