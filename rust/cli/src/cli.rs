use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "setgame", version, about = "Set card game engine harness")]
pub struct SetgameCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a new game and show the table with every Set on it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print the game snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Auto-play games by following hints
    Sim {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
