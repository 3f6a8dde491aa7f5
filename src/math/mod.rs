//! Integer utilities

/// Greatest common divisor and least common multiple
pub mod divisors;
