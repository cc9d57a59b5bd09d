//! Fibonacci numbers `F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2)`.
//!
//! Every value that fits in an `i64` (indices `0..=92`) is computed once up
//! front; later indices are outside the source's domain.

use numfind_core::SequenceSource;

#[derive(Debug, Clone)]
pub struct Fibonacci {
    table: Vec<i64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        let mut table = vec![0i64, 1];
        while let Some(next) = table[table.len() - 2].checked_add(table[table.len() - 1]) {
            table.push(next);
        }
        Self { table }
    }

    /// Index of the last representable Fibonacci number.
    pub fn last_index(&self) -> u64 {
        self.table.len() as u64 - 1
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for Fibonacci {
    fn value(&self, index: u64) -> Option<i64> {
        self.table.value(index)
    }

    fn describe(&self) -> String {
        "fibonacci".to_string()
    }
}
