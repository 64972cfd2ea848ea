//! CLI command implementations.

pub mod allocation;
pub mod config;
pub mod diversification;
pub mod history;
pub mod performance;
pub mod refresh;
pub mod replay;
pub mod summary;

// Re-export submodules for convenience
pub use allocation::AllocationArgs;
pub use config::ConfigArgs;
pub use diversification::DiversificationArgs;
pub use history::HistoryArgs;
pub use performance::PerformanceArgs;
pub use refresh::RefreshArgs;
pub use replay::ReplayArgs;
pub use summary::SummaryArgs;

use std::io::Read;
use std::path::Path;

use folio_core::types::Holding;
use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

/// Reads and parses a JSON file; `-` reads stdin.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let read_err = |source: std::io::Error| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };

    serde_json::from_str(&content).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON array of holdings and validates each one.
pub fn read_holdings(path: &Path) -> CliResult<Vec<Holding>> {
    let holdings: Vec<Holding> = read_json(path)?;
    for (index, holding) in holdings.iter().enumerate() {
        holding.validate().map_err(|source| CliError::InvalidRecord {
            path: path.to_path_buf(),
            index,
            source,
        })?;
    }
    tracing::debug!(path = %path.display(), count = holdings.len(), "loaded holdings");
    Ok(holdings)
}
