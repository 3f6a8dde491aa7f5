//! Cross-cutting pieces shared by every module

/// Algorithm constants and default budgets
pub mod configuration;
/// Error types and constructor helpers
pub mod error;
