//! Analytics configuration.

use folio_core::types::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};

/// Configuration for analytics calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Maximum number of bars kept in a series' display slice.
    pub display_limit: usize,

    /// Currency code used when an asset or price history carries none.
    pub default_currency: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100, // Use parallel if >=100 holdings
            display_limit: 50,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the display slice cap for historical series.
    #[must_use]
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Sets the fallback currency code.
    #[must_use]
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
