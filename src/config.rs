//! Configuration for the rolodex REPL.
//!
//! Settings come from environment variables with defaults, so the program
//! runs with no environment at all. A `.env` file is honored if present;
//! loading it never prints to stdout, which belongs to the REPL.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Runtime settings for the REPL.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level for the stderr tracing subscriber (default: "error")
    pub log_level: String,

    /// Where to load/save the address book; `None` disables persistence
    pub book_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: tracing filter level (default: "error")
    /// - `ADDRESS_BOOK_PATH`: JSON file to load at startup and save on exit
    pub fn from_env() -> ConfigResult<Self> {
        // Don't fail if there is no .env file
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => val,
            Err(_) => "error".to_string(),
        };

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => Some(PathBuf::from(val)),
            Err(_) => None,
        };

        Ok(Config {
            log_level,
            book_path,
        })
    }
}
