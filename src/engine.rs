use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use itertools::Itertools;

use crate::dictionary::Dictionary;
use crate::permute::Permutations;
use crate::pool::build_pool;

/// Shortest permutation length the search will attempt. Single letters are
/// not meaningful word candidates, so the lower bound is fixed rather than
/// configurable.
pub const MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Returned by `start` when a run is already in progress. The existing run
/// is unaffected; the rejected call is neither queued nor retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyRunningError;

impl fmt::Display for AlreadyRunningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search is already running")
    }
}

impl Error for AlreadyRunningError {}

/// One accepted match: a candidate permutation plus its dictionary
/// definition. The definition is never empty when stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub candidate: String,
    pub definition: String,
}

impl SearchResult {
    /// The `"candidate: definition"` record format; also the text that
    /// uniqueness is enforced on.
    pub fn as_line(&self) -> String {
        format!("{}: {}", self.candidate, self.definition)
    }
}

/// Outcome of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pool_size: usize,
    pub candidates_checked: u64,
    pub matches: usize,
    /// False when the run was cancelled before exhausting all lengths.
    pub completed: bool,
}

/// Permutation search over a character pool with an injected dictionary.
///
/// One engine owns one run at a time: `start` walks every eligible
/// permutation length in ascending order, queries the dictionary once per
/// candidate, and streams non-duplicate matches to the caller's callback in
/// discovery order. `stop` requests cooperative cancellation, observed
/// before each lookup; an in-flight lookup finishes and its match, if any,
/// is still recorded.
///
/// All run state lives on the instance, so independent engines never
/// interfere with each other.
pub struct SearchEngine<D: Dictionary> {
    dictionary: D,
    dedup: bool,
    running: AtomicBool,
    cancel: AtomicBool,
    results: Mutex<Vec<SearchResult>>,
}

impl<D: Dictionary> SearchEngine<D> {
    pub fn new(dictionary: D) -> Self {
        Self::with_dedup(dictionary, true)
    }

    /// `dedup: false` reproduces the legacy behavior that records every
    /// positive lookup, duplicates included.
    pub fn with_dedup(dictionary: D, dedup: bool) -> Self {
        Self {
            dictionary,
            dedup,
            running: AtomicBool::new(false),
            cancel: AtomicBool::new(false),
            results: Mutex::new(Vec::new()),
        }
    }

    pub fn state(&self) -> RunState {
        if self.running.load(Ordering::SeqCst) {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Run a search to completion (or cancellation).
    ///
    /// Clears the previous run's results, builds the character pool from
    /// `inputs`, and for each length from `MIN_LENGTH` up to the pool size
    /// (skipping `skip_lengths`) checks every permutation against the
    /// dictionary. `on_result` fires synchronously for each newly accepted
    /// match. Degenerate inputs (empty pool, everything skipped) complete
    /// immediately with an empty result set.
    pub fn start<S, F>(
        &self,
        inputs: &[S],
        skip_lengths: &HashSet<usize>,
        mut on_result: F,
    ) -> Result<RunSummary, AlreadyRunningError>
    where
        S: AsRef<str>,
        F: FnMut(&str, &str),
    {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AlreadyRunningError);
        }
        self.cancel.store(false, Ordering::SeqCst);
        self.results.lock().unwrap().clear();

        let pool = build_pool(inputs);
        let mut candidates_checked = 0u64;
        let mut cancelled = false;

        'lengths: for length in MIN_LENGTH..=pool.len() {
            if skip_lengths.contains(&length) {
                continue;
            }
            for candidate in Permutations::new(pool.clone(), length) {
                // Cancellation is polled once per candidate, before the
                // lookup; an in-flight lookup is never interrupted.
                if self.cancel.load(Ordering::SeqCst) {
                    cancelled = true;
                    break 'lengths;
                }
                candidates_checked += 1;
                if let Some(definition) = self.dictionary.lookup(&candidate) {
                    if self.record(&candidate, &definition) {
                        on_result(&candidate, &definition);
                    }
                }
            }
        }

        self.running.store(false, Ordering::SeqCst);
        Ok(RunSummary {
            pool_size: pool.len(),
            candidates_checked,
            matches: self.results.lock().unwrap().len(),
            completed: !cancelled,
        })
    }

    /// Request cancellation of the current run. Cooperative: the loop exits
    /// at the next candidate boundary. No-op while idle.
    pub fn stop(&self) {
        if self.running.load(Ordering::SeqCst) {
            self.cancel.store(true, Ordering::SeqCst);
        }
    }

    /// Append unless the formatted line is already present (when dedup is
    /// on). Returns whether the result was accepted.
    fn record(&self, candidate: &str, definition: &str) -> bool {
        let result = SearchResult {
            candidate: candidate.to_string(),
            definition: definition.to_string(),
        };
        let mut results = self.results.lock().unwrap();
        if self.dedup {
            let line = result.as_line();
            if results.iter().any(|r| r.as_line() == line) {
                return false;
            }
        }
        results.push(result);
        true
    }

    /// Snapshot of the accepted results so far, in discovery order. Valid
    /// both mid-run and after completion; cleared by the next `start`.
    pub fn results(&self) -> Vec<SearchResult> {
        self.results.lock().unwrap().clone()
    }

    /// Newline-joined `"candidate: definition"` records, ready for export.
    pub fn export(&self) -> String {
        self.results
            .lock()
            .unwrap()
            .iter()
            .map(SearchResult::as_line)
            .join("\n")
    }
}
