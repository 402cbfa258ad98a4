use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use pairing_rank::config::Config;
use pairing_rank::scoring::ScoredPairing;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List pairings sorted by score (default if no subcommand)
    Rank {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Refuse to rank when a preference value is malformed
        #[arg(long)]
        strict: bool,

        /// Show only the first N pairings
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Ask a question about the ranked list ("longest layovers?", "europe", "most block hours")
    Ask {
        /// The question, in plain words
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Check the configured preferences for malformed values
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "pairing-rank")]
#[command(about = "Crew pairing ranking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pairing-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the pairings JSON file (overrides pairings_file in config)
    #[arg(short, long, global = true)]
    pairings: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Rank {
        format: OutputFormat::default(),
        strict: false,
        limit: None,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match pairing_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let preference_errors =
        pairing_rank::scoring::validate_preferences(&config.preferences).err();

    if let Commands::Check = command {
        match preference_errors {
            None => {
                println!("{} preferences OK", config.preferences.len());
                std::process::exit(EXIT_SUCCESS);
            }
            Some(errors) => {
                eprintln!("Preference errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Malformed values score nothing; say so unless asked to be strict
    if let Some(errors) = &preference_errors {
        let strict = matches!(command, Commands::Rank { strict: true, .. });
        for error in errors {
            if strict {
                eprintln!("Preference error: {}", error);
            } else {
                tracing::warn!("{} (preference will not score)", error);
            }
        }
        if strict {
            std::process::exit(EXIT_CONFIG);
        }
    }

    let ranked = match rank_from(&config, cli.pairings.map(PathBuf::from)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Pairings error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    match command {
        Commands::Rank { format, limit, .. } => {
            let shown = &ranked[..limit.unwrap_or(ranked.len()).min(ranked.len())];
            let use_colors = pairing_rank::output::should_use_colors();

            match format {
                OutputFormat::Table if cli.verbose && !shown.is_empty() => {
                    for scored in shown {
                        println!(
                            "{}",
                            pairing_rank::output::format_pairing_detail(scored, use_colors)
                        );
                        println!();
                    }
                }
                OutputFormat::Table => {
                    println!(
                        "{}",
                        pairing_rank::output::format_scored_table(shown, use_colors)
                    );
                }
                OutputFormat::Tsv => {
                    println!("{}", pairing_rank::output::format_tsv(shown));
                }
                OutputFormat::Json => match pairing_rank::output::format_json(shown) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_DATA);
                    }
                },
            }

            tracing::info!(
                total = ranked.len(),
                elapsed = ?start_time.elapsed(),
                "ranking complete"
            );
        }
        Commands::Ask { query } => {
            let query = query.join(" ");
            let answer = pairing_rank::analyze_schedule(&ranked, &query).await;
            println!("{}", answer);
        }
        Commands::Check => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

fn rank_from(config: &Config, pairings: Option<PathBuf>) -> anyhow::Result<Vec<ScoredPairing>> {
    let path = pairing_rank::load::resolve_pairings_path(pairings, config)?;
    pairing_rank::load::load_and_rank_pairings(&path, config)
}
