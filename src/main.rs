use bip32::DerivationPath;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::time::Duration;

mod derive;
mod permute;
mod search;

use derive::TronDeriver;
use permute::Multiset;
use search::{run_search, SearchConfig, SearchOutcome};

/// Word counts of well-formed BIP-39 phrases.
const PHRASE_LENGTHS: [usize; 5] = [12, 15, 18, 21, 24];

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "seedseek")]
#[command(about = "seedseek - recovers the lost word order of a mnemonic phrase")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every distinct word ordering for one that derives the target address
    Recover {
        /// Mnemonic words in any order, space separated (prompted on stdin when omitted)
        #[arg(long)]
        words: Option<String>,
        /// Address the correct ordering must derive (prompted on stdin when omitted)
        #[arg(long)]
        target: Option<String>,
        /// BIP-44 derivation path used for every candidate
        #[arg(long, default_value = TronDeriver::DEFAULT_PATH)]
        path: String,
        /// Number of worker threads (defaults to the available cores)
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
        /// Candidates per dispatched batch
        #[arg(long, default_value = "1000")]
        batch_size: usize,
        /// Progress report interval in milliseconds
        #[arg(long, default_value = "100")]
        report_interval: u64,
        /// Suppress progress output
        #[arg(long, short)]
        quiet: bool,
    },
    /// Print the number of distinct orderings a word list has
    Count {
        /// Mnemonic words, space separated
        words: Vec<String>,
    },
}

/// Options for the recovery search.
struct RecoverOptions {
    words: Option<String>,
    target: Option<String>,
    path: String,
    jobs: Option<usize>,
    batch_size: usize,
    report_interval: u64,
    quiet: bool,
}

// --- Recovery ---

fn recover(options: RecoverOptions) -> Result<(), Box<dyn std::error::Error>> {
    let words = match options.words {
        Some(list) => split_words(&list),
        None => split_words(&prompt_line("Enter the mnemonic words (space separated): ")?),
    };
    if !PHRASE_LENGTHS.contains(&words.len()) {
        return Err(format!(
            "expected 12, 15, 18, 21 or 24 words, got {}",
            words.len()
        )
        .into());
    }

    let target = match options.target {
        Some(target) => target.trim().to_string(),
        None => prompt_line("Enter the target address: ")?,
    };
    if target.is_empty() {
        return Err("the target address is empty".into());
    }

    let path: DerivationPath = options.path.parse()?;
    let deriver = TronDeriver::new(path);

    let total = Multiset::new(&words)
        .distinct_permutation_count()
        .ok_or_else(|| format!("the search space for {} words exceeds 64 bits", words.len()))?;
    println!("Distinct orderings to check: {}", total);

    let mut config = SearchConfig::default()
        .with_batch_size(options.batch_size)
        .with_report_interval(Duration::from_millis(options.report_interval))
        .with_progress(!options.quiet);
    if let Some(jobs) = options.jobs {
        config = config.with_workers(jobs);
    }
    println!("Workers: {}", config.num_workers);

    let report = run_search(&words, &target, &deriver, &config)?;
    match report.outcome {
        SearchOutcome::AlreadyCorrect(order) => {
            println!("The phrase is already in the correct order:");
            println!("  {}", order.join(" "));
        }
        SearchOutcome::Found(order) => {
            println!("Found the matching order:");
            println!("  {}", order.join(" "));
            print_statistics(&report.statistics);
        }
        SearchOutcome::Exhausted => {
            println!("No ordering of these words derives the target address.");
            print_statistics(&report.statistics);
        }
    }
    Ok(())
}

fn print_statistics(statistics: &search::SearchStatistics) {
    println!(
        "Checked {} of {} orderings in {:.2?} ({:.1} candidates/sec)",
        statistics.evaluated,
        statistics.total,
        statistics.elapsed,
        statistics.throughput()
    );
}

fn split_words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn prompt_line(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// --- Entry Point ---

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Recover {
            words,
            target,
            path,
            jobs,
            batch_size,
            report_interval,
            quiet,
        } => {
            let options = RecoverOptions {
                words,
                target,
                path,
                jobs,
                batch_size,
                report_interval,
                quiet,
            };
            if let Err(e) = recover(options) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Count { words } => {
            if words.is_empty() {
                eprintln!("Error: no words given");
                std::process::exit(1);
            }
            match Multiset::new(&words).distinct_permutation_count() {
                Some(total) => println!("{}", total),
                None => {
                    eprintln!(
                        "Error: the ordering count for {} words exceeds 64 bits",
                        words.len()
                    );
                    std::process::exit(1);
                }
            }
        }
    }
}
