//! Mixed-radix counter over per-player distribution indices.

use std::ops::Index;

/// A mixed-radix counter.
///
/// Digit `i` runs over `0..sizes[i]`; the last digit turns fastest, like the
/// innermost of a set of nested loops. A counter with any zero-size dimension
/// has no tuples at all.
#[derive(Debug, Clone)]
pub struct Odometer {
    sizes: Vec<usize>,
    digits: Vec<usize>,
    done: bool,
}

impl Odometer {
    /// Create a counter positioned on the first tuple (all zeros).
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            digits: vec![0; sizes.len()],
            done: sizes.iter().any(|&s| s == 0),
        }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Check if the counter has no dimensions.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Total number of tuples (product of the sizes).
    pub fn total(&self) -> u64 {
        self.sizes
            .iter()
            .fold(1u64, |acc, &s| acc.saturating_mul(s as u64))
    }

    /// True once every tuple has been visited.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current digits.
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Advance to the next tuple. Returns `false` when the counter wraps.
    pub fn next(&mut self) -> bool {
        if self.done {
            return false;
        }
        for i in (0..self.digits.len()).rev() {
            self.digits[i] += 1;
            if self.digits[i] < self.sizes[i] {
                return true;
            }
            self.digits[i] = 0;
        }
        self.done = true;
        false
    }

    /// Jump to the tuple with the given linear index (0-based, last digit
    /// fastest). Past-the-end indices mark the counter done.
    pub fn seek(&mut self, linear: u64) {
        if linear >= self.total() {
            self.done = true;
            return;
        }
        self.done = false;
        let mut rest = linear;
        for i in (0..self.digits.len()).rev() {
            let size = self.sizes[i] as u64;
            self.digits[i] = (rest % size) as usize;
            rest /= size;
        }
    }
}

impl Index<usize> for Odometer {
    type Output = usize;

    fn index(&self, dim: usize) -> &usize {
        &self.digits[dim]
    }
}
