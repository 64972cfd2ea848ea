//! Holding-level and portfolio-level analytics.
//!
//! This module provides:
//! - Per-holding valuation and gain/loss
//! - Portfolio performance totals
//! - Position summaries with price statistics
//!
//! All functions are pure - they take holdings and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod parallel;
mod performance;
mod summary;

pub use parallel::*;
pub use performance::*;
pub use summary::*;
