//! Card CLI
//!
//! Ball-by-ball CSV -> batting/bowling summary cards.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cric_core::{
    analyze_player, batting_card_text, bowling_card_text, AnalysisMode, PlayerSummary,
};

#[derive(Parser)]
#[command(name = "cric_cli")]
#[command(about = "Batting and bowling cards from ball-by-ball CSV data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a player's summary card
    Card {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Player name as it appears in the data
        #[arg(long)]
        player: String,

        /// Analysis mode: auto | batting | bowling
        #[arg(long, default_value = "auto")]
        mode: String,

        /// Emit the summary as JSON instead of a text card
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List players present in the data
    Players {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Card {
            csv,
            player,
            mode,
            json,
        } => {
            let (table, stats) = cric_cli::load_deliveries(&csv)?;
            eprintln!(
                "✅ Loaded {} deliveries (failed: {}, total rows: {})",
                stats.parsed, stats.failed, stats.total_rows
            );

            let mode = AnalysisMode::from_label(&mode);
            let (role, summary) = analyze_player(&table, &player, mode);
            match summary {
                Some(summary) if json => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                Some(PlayerSummary::Batting(card)) => println!("{}", batting_card_text(&card)),
                Some(PlayerSummary::Bowling(card)) => println!("{}", bowling_card_text(&card)),
                // Missing player data is a notice, not a failure
                None => println!("No {} data for {}.", role.label(), player),
            }
        }

        Commands::Players { csv } => {
            let (table, stats) = cric_cli::load_deliveries(&csv)?;
            println!(
                "✅ Loaded {} deliveries (failed: {}, total rows: {})",
                stats.parsed, stats.failed, stats.total_rows
            );
            println!("{:<30} {:>6} {:>6}", "Player", "Faced", "Bowled");
            for name in table.player_names() {
                println!(
                    "{:<30} {:>6} {:>6}",
                    name,
                    table.balls_faced(&name),
                    table.balls_bowled(&name)
                );
            }
        }
    }

    Ok(())
}
