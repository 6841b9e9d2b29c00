// Library surface for the permutation search engine and its collaborators.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod hebrew;
pub mod permute;
pub mod pool;
pub mod run_log;
pub mod wiktionary;

pub use dictionary::{Dictionary, MapDictionary};
pub use engine::{
    AlreadyRunningError, RunState, RunSummary, SearchEngine, SearchResult, MIN_LENGTH,
};
pub use wiktionary::WiktionaryDictionary;
