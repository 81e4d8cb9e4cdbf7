use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use bot_arena::arena::{run_match, MatchOverrides, MatchSettings};
use bot_arena::config::ArenaConfig;
use bot_arena::json_output;
use chess_ai::AiLevel;
use chess_core::{Board, Color};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bot-arena")]
#[command(about = "Plays the chess AI levels against each other")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a match between two AI levels
    Match {
        /// White level (1-5)
        #[arg(value_parser = parse_level)]
        white: AiLevel,
        /// Black level (1-5)
        #[arg(value_parser = parse_level)]
        black: AiLevel,
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,
        /// Preset configuration to use
        #[arg(short, long)]
        preset: Option<String>,
        /// Base seed; game N uses seed + N
        #[arg(long)]
        seed: Option<u64>,
        /// Plies after which a game is scored as a draw
        #[arg(long)]
        max_plies: Option<u32>,
        /// Write the match results as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Count move-generation leaf nodes from the initial position
    Perft {
        /// Search depth in plies
        #[arg(short, long, default_value = "3")]
        depth: u32,
    },
}

fn parse_level(s: &str) -> Result<AiLevel, String> {
    let n: u8 = s.parse().map_err(|e| format!("{e}"))?;
    AiLevel::try_from(n).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            white,
            black,
            games,
            preset,
            seed,
            max_plies,
            json,
        } => {
            let config = ArenaConfig::load().context("loading arena.toml")?;
            let overrides = MatchOverrides {
                games,
                preset,
                seed,
                max_plies,
            };
            let settings = MatchSettings::resolve(white, black, &overrides, &config)?;

            println!(
                "Running {} games: {} vs {}",
                settings.games, settings.white, settings.black
            );

            let summary = run_match(&settings, |game| {
                println!(
                    "Game {}: {:?} ({} plies, {})",
                    game.game,
                    game.result,
                    game.plies(),
                    game.final_status
                );
            });

            println!(
                "\nResults: W:{} D:{} L:{}  Score: {} - {}",
                summary.white_wins,
                summary.draws,
                summary.black_wins,
                summary.white_score(),
                summary.black_score()
            );

            if let Some(path) = json {
                json_output::write_json(&path, &summary)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Results written to {}", path.display());
            }
        }
        Commands::Perft { depth } => {
            let start = Instant::now();
            let divide = chess_engine::perft_divide(&Board::initial(), Color::White, depth);
            for (mv, nodes) in &divide {
                println!("{mv}: {nodes}");
            }
            let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
            println!("\nNodes searched: {total}");
            tracing::info!(depth, total, elapsed = ?start.elapsed(), "perft finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_match_command_with_preset() {
        let cli = Cli::try_parse_from(["bot-arena", "match", "5", "1", "-p", "quick"]).unwrap();
        match cli.command {
            Commands::Match {
                white,
                black,
                games,
                preset,
                seed,
                max_plies,
                json,
            } => {
                assert_eq!(white, AiLevel::Minimax3);
                assert_eq!(black, AiLevel::Random);
                assert_eq!(games, None);
                assert_eq!(preset, Some("quick".to_string()));
                assert_eq!(seed, None);
                assert_eq!(max_plies, None);
                assert!(json.is_none());
            }
            Commands::Perft { .. } => panic!("expected match command"),
        }
    }

    #[test]
    fn test_cli_parses_match_command_with_all_options() {
        let cli = Cli::try_parse_from([
            "bot-arena",
            "match",
            "3",
            "2",
            "-g",
            "50",
            "--seed",
            "9",
            "--max-plies",
            "80",
            "--json",
            "out.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Match {
                games,
                seed,
                max_plies,
                json,
                ..
            } => {
                assert_eq!(games, Some(50));
                assert_eq!(seed, Some(9));
                assert_eq!(max_plies, Some(80));
                assert_eq!(json, Some(PathBuf::from("out.json")));
            }
            Commands::Perft { .. } => panic!("expected match command"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_level() {
        assert!(Cli::try_parse_from(["bot-arena", "match", "0", "1"]).is_err());
        assert!(Cli::try_parse_from(["bot-arena", "match", "1", "6"]).is_err());
        assert!(Cli::try_parse_from(["bot-arena", "match", "one", "2"]).is_err());
    }

    #[test]
    fn test_cli_parses_perft() {
        let cli = Cli::try_parse_from(["bot-arena", "perft"]).unwrap();
        assert!(matches!(cli.command, Commands::Perft { depth: 3 }));

        let cli = Cli::try_parse_from(["bot-arena", "perft", "--depth", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Perft { depth: 2 }));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("4"), Ok(AiLevel::Minimax2));
        assert_eq!(
            parse_level("7"),
            Err("invalid AI level 7, expected 1-5".to_string())
        );
    }

    #[test]
    fn test_cli_help_lists_commands() {
        let mut cmd = Cli::command();
        let help = cmd.render_help().to_string();
        assert!(help.contains("match"));
        assert!(help.contains("perft"));
    }
}
