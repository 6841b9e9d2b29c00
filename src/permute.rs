/// Lazy generator of fixed-length permutations over character positions.
///
/// Positions are distinguished by index, not by value: a pool with repeated
/// letters yields the same string more than once, from distinct position
/// selections. Output order is depth-first, picking the leftmost unused
/// position first at every depth, which keeps candidate order deterministic
/// across runs.
pub struct Permutations {
    pool: Vec<char>,
    length: usize,
    chosen: Vec<usize>,
    used: Vec<bool>,
    started: bool,
    done: bool,
}

impl Permutations {
    pub fn new(pool: Vec<char>, length: usize) -> Self {
        let used = vec![false; pool.len()];
        Self {
            pool,
            length,
            chosen: Vec::with_capacity(length),
            used,
            started: false,
            done: false,
        }
    }

    /// Number of permutations of `length` positions drawn from a pool of
    /// `pool_len`: `pool_len! / (pool_len - length)!`. Saturates on overflow.
    pub fn count(pool_len: usize, length: usize) -> u64 {
        if length > pool_len {
            return 0;
        }
        ((pool_len - length + 1)..=pool_len)
            .fold(1u64, |acc, k| acc.saturating_mul(k as u64))
    }

    fn push(&mut self, index: usize) {
        self.used[index] = true;
        self.chosen.push(index);
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.chosen.pop()?;
        self.used[index] = false;
        Some(index)
    }

    fn current(&self) -> String {
        self.chosen.iter().map(|&i| self.pool[i]).collect()
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if self.length == 0 {
            self.done = true;
            return Some(String::new());
        }
        if self.length > self.pool.len() {
            self.done = true;
            return None;
        }

        // Resume the depth-first walk: on the first call start scanning at
        // index 0; afterwards unwind the deepest choice and continue to its
        // right.
        let mut scan_from = if self.started {
            match self.pop() {
                Some(index) => index + 1,
                None => {
                    self.done = true;
                    return None;
                }
            }
        } else {
            self.started = true;
            0
        };

        loop {
            match (scan_from..self.pool.len()).find(|&i| !self.used[i]) {
                Some(index) => {
                    self.push(index);
                    if self.chosen.len() == self.length {
                        return Some(self.current());
                    }
                    scan_from = 0;
                }
                None => match self.pop() {
                    Some(index) => scan_from = index + 1,
                    None => {
                        self.done = true;
                        return None;
                    }
                },
            }
        }
    }
}
