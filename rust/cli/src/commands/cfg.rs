//! Configuration command handler.
//!
//! Displays the resolved game configuration with the source of each value
//! (default, config file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "initial_table_size": {
//!     "value": 12,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "initial_table_size": {
            "value": config.initial_table_size,
            "source": sources.initial_table_size,
        },
        "match_reward": {
            "value": config.match_reward,
            "source": sources.match_reward,
        },
        "mismatch_penalty": {
            "value": config.mismatch_penalty,
            "source": sources.mismatch_penalty,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
