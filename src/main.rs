use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one or more weekly response files
    Score {
        /// Response files (JSON or YAML object of question id -> answer)
        #[arg(required = true)]
        responses: Vec<PathBuf>,

        /// Print tab-separated category rows instead of tables
        #[arg(long)]
        tsv: bool,
    },
    /// Show the maximum attainable points per category
    Max,
    /// Check the catalog for mistakes
    Validate,
}

#[derive(Parser, Debug)]
#[command(name = "lock-in")]
#[command(about = "Score weekly surveys for The Great Lock-In", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lock-in/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file, overriding the config (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match lock_in::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Load catalog: CLI flag, then config, then built-in
    let catalog_path = cli.catalog.or(config.catalog.take());
    let catalog = match catalog_path {
        Some(ref path) => lock_in::catalog::load_catalog(path),
        None => lock_in::catalog::builtin_catalog(),
    };
    let catalog = match catalog {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        match catalog_path {
            Some(ref path) => eprintln!("Loaded catalog from {}", path.display()),
            None => eprintln!("Using built-in catalog"),
        }
        eprintln!(
            "  {} categories, {} questions",
            catalog.categories.len(),
            catalog.question_count()
        );
    }

    let validation = lock_in::catalog::validate_catalog(&catalog);

    let use_colors = config
        .colors
        .unwrap_or_else(lock_in::output::should_use_colors);

    match cli.command {
        Commands::Validate => match validation {
            Ok(()) => println!(
                "Catalog OK: {} categories, {} questions",
                catalog.categories.len(),
                catalog.question_count()
            ),
            Err(errors) => {
                print_catalog_errors(&errors);
                std::process::exit(EXIT_CONFIG);
            }
        },
        Commands::Max => {
            require_valid(validation);
            println!("{}", lock_in::output::format_max_table(&catalog));
        }
        Commands::Score { responses, tsv } => {
            require_valid(validation);
            let mut submissions = Vec::new();

            for path in &responses {
                let answers = match lock_in::submission::load_responses(path) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Response error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                };

                let label = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let submission =
                    lock_in::submission::score_submission(&catalog, label, &answers);

                if !submission.unknown_questions.is_empty() {
                    eprintln!(
                        "{}: ignoring {} answer(s) for unknown questions",
                        submission.label,
                        submission.unknown_questions.len()
                    );
                    if cli.verbose {
                        for id in &submission.unknown_questions {
                            eprintln!("  - {}", id);
                        }
                    }
                }

                if cli.verbose {
                    for scored in &submission.responses {
                        eprintln!(
                            "  {} = {} -> {} pts",
                            scored.question_id, scored.value, scored.points
                        );
                    }
                }

                submissions.push(submission);
            }

            if tsv {
                let lines: Vec<String> = submissions
                    .iter()
                    .map(lock_in::output::format_tsv)
                    .collect();
                println!("{}", lines.join("\n"));
            } else {
                let blocks: Vec<String> = submissions
                    .iter()
                    .map(|s| lock_in::output::format_submission(s, use_colors))
                    .collect();
                println!("{}", blocks.join("\n\n"));

                if submissions.len() > 1 {
                    println!();
                    println!(
                        "Grand total: {}",
                        lock_in::submission::grand_total(&submissions)
                    );
                }
            }
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_catalog_errors(errors: &[String]) {
    eprintln!("Catalog errors:");
    for error in errors {
        eprintln!("  - {}", error);
    }
}

/// Refuse to score against a broken catalog
fn require_valid(validation: Result<(), Vec<String>>) {
    if let Err(errors) = validation {
        print_catalog_errors(&errors);
        eprintln!("Run `lock-in validate` after fixing the catalog.");
        std::process::exit(EXIT_CONFIG);
    }
}
