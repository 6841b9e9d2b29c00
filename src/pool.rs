use crate::hebrew;

/// Build the combined character pool from raw user inputs.
///
/// Each input is trimmed and dropped if empty, normalized (final-form
/// letters to standard forms), then concatenated in caller order and split
/// into individual characters. Splitting is at code-point granularity;
/// duplicate letters stay in the pool as distinct positions.
pub fn build_pool<S: AsRef<str>>(inputs: &[S]) -> Vec<char> {
    let mut pool = Vec::new();
    for input in inputs {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        pool.extend(hebrew::normalize(trimmed).chars());
    }
    pool
}
