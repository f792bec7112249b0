//! This module contains the pure, stateless kernel for tallying symbol
//! frequencies over a byte stream.
//!
//! Counting is a single linear pass. An empty input yields an all-zero table,
//! which callers must treat as the distinct "nothing to encode" case rather
//! than an error.

/// The number of distinct symbols a byte alphabet can hold.
pub const ALPHABET_SIZE: usize = 256;

/// A dense frequency table, indexed by symbol value.
pub type FrequencyTable = [u64; ALPHABET_SIZE];

/// Tallies the occurrences of each byte value in `input`.
pub fn count(input: &[u8]) -> FrequencyTable {
    let mut table = [0u64; ALPHABET_SIZE];
    for &symbol in input {
        table[symbol as usize] += 1;
    }
    table
}

/// Returns the number of symbols with a non-zero count.
pub fn distinct_symbols(table: &FrequencyTable) -> usize {
    table.iter().filter(|&&w| w > 0).count()
}
