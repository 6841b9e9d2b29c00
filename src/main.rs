use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::{
    collections::HashSet,
    error::Error,
    io::{self, BufRead},
    path::PathBuf,
    sync::Arc,
    thread,
};

use tsiruf::config::{ConfigStore, FileConfigStore};
use tsiruf::dictionary::{Dictionary, MapDictionary};
use tsiruf::engine::{RunSummary, SearchEngine, MIN_LENGTH};
use tsiruf::permute::Permutations;
use tsiruf::pool::build_pool;
use tsiruf::run_log::RunLog;
use tsiruf::wiktionary::WiktionaryDictionary;

/// search hebrew dictionary entries among the permutations of your letters
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Builds a character pool from the given terms (final-form letters normalized), \
generates every permutation of each eligible length, and streams the candidates that have a \
dictionary definition. Press Enter during a run to stop it; partial results are kept."
)]
pub struct Cli {
    /// terms whose letters form the search pool
    #[clap(required_unless_present = "history")]
    terms: Vec<String>,

    /// permutation length to skip (repeatable, e.g. --skip 2 --skip 3)
    #[clap(short = 'k', long = "skip")]
    skip_lengths: Vec<usize>,

    /// keep duplicate results instead of deduplicating them
    #[clap(long)]
    no_dedup: bool,

    /// where definitions come from
    #[clap(short = 's', long, value_enum)]
    source: Option<DictionarySource>,

    /// JSON word->definition file for the file source
    #[clap(short = 'd', long)]
    dict_file: Option<PathBuf>,

    /// MediaWiki api.php endpoint for the wiktionary source
    #[clap(long)]
    endpoint: Option<String>,

    /// write the results to this file as "candidate: definition" lines
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// print past runs and exit
    #[clap(long)]
    history: bool,

    /// persist the effective skip/dedup/source settings as defaults
    #[clap(long)]
    save_defaults: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum DictionarySource {
    Wiktionary,
    File,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.history {
        return print_history();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();

    let skip_lengths: Vec<usize> = if cli.skip_lengths.is_empty() {
        config.skip_lengths.clone()
    } else {
        cli.skip_lengths.clone()
    };
    let dedup = if cli.no_dedup { false } else { config.dedup };
    let source = cli.source.unwrap_or_else(|| {
        DictionarySource::from_str(&config.source, true).unwrap_or(DictionarySource::Wiktionary)
    });
    let endpoint = cli.endpoint.clone().unwrap_or_else(|| config.endpoint.clone());

    if cli.save_defaults {
        config.skip_lengths = skip_lengths.clone();
        config.dedup = dedup;
        config.source = source.to_string().to_lowercase();
        config.endpoint = endpoint.clone();
        store.save(&config)?;
    }

    let dictionary: Box<dyn Dictionary + Send + Sync> = match source {
        DictionarySource::Wiktionary => Box::new(WiktionaryDictionary::with_endpoint(&endpoint)),
        DictionarySource::File => {
            let Some(path) = cli.dict_file.as_ref() else {
                let mut cmd = Cli::command();
                cmd.error(
                    ErrorKind::MissingRequiredArgument,
                    "--dict-file is required with --source file",
                )
                .exit();
            };
            Box::new(MapDictionary::load(path)?)
        }
    };

    let skips: HashSet<usize> = skip_lengths.iter().copied().collect();
    let pool = build_pool(&cli.terms);
    let planned: u64 = (MIN_LENGTH..=pool.len())
        .filter(|len| !skips.contains(len))
        .map(|len| Permutations::count(pool.len(), len))
        .sum();
    eprintln!(
        "pool of {} letters, {} candidates to check (press Enter to stop)",
        pool.len(),
        planned
    );

    let engine = Arc::new(SearchEngine::with_dedup(dictionary, dedup));

    // Enter on stdin requests cancellation; EOF means nobody is listening.
    let watcher = Arc::clone(&engine);
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => watcher.stop(),
            }
        }
    });

    let summary = engine.start(&cli.terms, &skips, |candidate, definition| {
        println!("{candidate}: {definition}");
    })?;

    report(&summary);
    if let Err(e) = RunLog::new().append(&summary, &skip_lengths) {
        eprintln!("could not record run history: {e}");
    }

    if let Some(path) = cli.output.as_ref() {
        std::fs::write(path, engine.export())?;
        eprintln!("results written to {}", path.display());
    }

    Ok(())
}

fn report(summary: &RunSummary) {
    let status = if summary.completed {
        "completed"
    } else {
        "stopped"
    };
    eprintln!(
        "{}: {} candidates checked, {} matches",
        status, summary.candidates_checked, summary.matches
    );
}

fn print_history() -> Result<(), Box<dyn Error>> {
    let records = RunLog::new().read_all()?;
    if records.is_empty() {
        println!("no recorded runs");
        return Ok(());
    }
    for rec in records {
        let status = if rec.completed { "completed" } else { "stopped" };
        let skipped = if rec.skipped.is_empty() {
            "none".to_string()
        } else {
            rec.skipped.clone()
        };
        println!(
            "{} | pool {} | skipped {} | {} checked | {} matches | {}",
            rec.date, rec.pool_size, skipped, rec.candidates_checked, rec.matches, status
        );
    }
    Ok(())
}
