//! Seeds, defaults, and process exit codes.

/// Default inclusive bound (the classic Project Euler 2 limit).
pub const DEFAULT_BOUND: u64 = 4_000_000;

/// Seed pair for the full sequence: first two terms are 1 and 2.
pub const FIB_SEED: (u64, u64) = (1, 2);

/// Seed pair for the even subsequence: E(1) = 2, E(2) = 8.
///
/// Every third term of the full sequence is even and satisfies
/// E(n) = 4·E(n−1) + E(n−2).
pub const EVEN_FIB_SEED: (u64, u64) = (2, 8);

/// Number of qualifying terms past the bound reported by a Dedekind cut.
pub const UPPER_WINDOW: usize = 3;

/// Exit codes for the `fibbound` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A term or sum overflowed `u64`.
    pub const ERROR_OVERFLOW: i32 = 2;
    /// Filtered sums did not partition the full sum.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_seed_is_even_recurrence_prefix() {
        // 8 = 4*2 + 0; the next term from the seed must be 4*8 + 2 = 34.
        let (a, b) = EVEN_FIB_SEED;
        assert_eq!(4 * b + a, 34);
    }

    #[test]
    fn seeds_are_ascending() {
        assert!(FIB_SEED.0 < FIB_SEED.1);
        assert!(EVEN_FIB_SEED.0 < EVEN_FIB_SEED.1);
    }
}
