//! Conditional parallel iteration over holdings.
//!
//! Uses rayon when the `parallel` feature is enabled and
//! [`AnalyticsConfig::should_parallelize`] agrees. Output order always
//! matches input order, so results are identical on either path.

use crate::config::AnalyticsConfig;

/// Evaluates `f` for every holding, in input order.
///
/// # Example
///
/// ```ignore
/// let values = maybe_parallel_map(&holdings, &config, |h| h.current_value());
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Keeps the `Some` results of `f`, in input order.
///
/// Used where only priced holdings contribute to an aggregate.
#[allow(unused_variables)]
pub fn maybe_parallel_filter_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().filter_map(f).collect();
        }
    }

    items.iter().filter_map(f).collect()
}
