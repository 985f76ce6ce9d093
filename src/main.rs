use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dementia_risk::catalog::{resolve_catalog, save_catalog};
use dementia_risk::selection::{FactorKind, Selection};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CATALOG: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_IO: i32 = 5;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive calculator (default if no subcommand)
    Tui,
    /// Score a selection once and print the result
    Score {
        /// Risk factor id; repeat or comma-separate for several
        #[arg(short, long = "risk", value_name = "ID", value_delimiter = ',')]
        risks: Vec<String>,

        /// Prevention id; repeat or comma-separate for several
        #[arg(short, long = "prevention", value_name = "ID", value_delimiter = ',')]
        preventions: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print the per-factor breakdown (text format only)
        #[arg(short, long)]
        breakdown: bool,
    },
    /// List catalog entries with their weights
    Factors {
        /// Only list one catalog
        #[arg(short, long, value_enum)]
        kind: Option<FactorKind>,
    },
    /// Write the effective catalog as YAML, as a starting point for a custom one
    ExportCatalog {
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "dementia-risk")]
#[command(about = "Alzheimer-type dementia risk simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/dementia-risk/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Custom catalog file (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Reject catalogs that break the weight convention
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool, quiet: bool) {
    // The TUI owns the terminal; anything on stderr would corrupt the display
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        let default = if verbose { "dementia_risk=debug" } else { "warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    init_logging(cli.verbose, matches!(command, Commands::Tui));

    let config = match dementia_risk::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let catalog_path = cli.catalog.or_else(|| config.catalog.clone());
    let strict = cli.strict || config.strict_catalog;
    let loaded = match resolve_catalog(catalog_path.as_deref(), strict) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            std::process::exit(EXIT_CATALOG);
        }
    };
    let catalog = loaded.catalog;

    match command {
        Commands::Tui => {
            let theme = dementia_risk::tui::resolve_theme(config.theme);
            let colors = dementia_risk::tui::ThemeColors::for_theme(theme);
            let mut app = dementia_risk::tui::App::new(catalog, colors);

            if !loaded.warnings.is_empty() {
                app.show_flash(
                    format!(
                        "Catalog: {} convention warning(s): {}",
                        loaded.warnings.len(),
                        loaded.warnings[0]
                    ),
                    dementia_risk::tui::FlashKind::Warning,
                );
            }

            if let Err(e) = dementia_risk::tui::run_tui(app, config.tick_rate_ms).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Score {
            risks,
            preventions,
            format,
            breakdown,
        } => {
            let selection = Selection::from_ids(risks, preventions);
            let summary = dementia_risk::scoring::evaluate(&catalog, &selection);

            match format {
                OutputFormat::Text => {
                    let use_colors = dementia_risk::output::should_use_colors();
                    println!("{}", dementia_risk::output::format_summary(&summary, use_colors));
                    if breakdown {
                        println!();
                        println!("{}", dementia_risk::output::format_breakdown(&summary));
                    }
                }
                OutputFormat::Json => match dementia_risk::output::format_json(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                },
                OutputFormat::Tsv => println!("{}", dementia_risk::output::format_tsv(&summary)),
            }
        }
        Commands::Factors { kind } => {
            let use_colors = dementia_risk::output::should_use_colors();
            let kinds = match kind {
                Some(k) => vec![k],
                None => vec![FactorKind::Risk, FactorKind::Prevention],
            };
            for (i, kind) in kinds.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let heading = match kind {
                    FactorKind::Risk => "リスク要因",
                    FactorKind::Prevention => "予防効果",
                };
                println!("{}", heading);
                println!(
                    "{}",
                    dementia_risk::output::format_factor_list(&catalog, kind, use_colors)
                );
            }
        }
        Commands::ExportCatalog { path } => {
            if let Err(e) = save_catalog(&path, &catalog) {
                eprintln!("Failed to export catalog: {:#}", e);
                std::process::exit(EXIT_IO);
            }
            tracing::debug!(path = %path.display(), "catalog exported");
            println!("Wrote catalog to {}", path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
