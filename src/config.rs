use std::env;
use std::path::PathBuf;

pub const AUCTIONS_FILE_VAR: &str = "AUCTIONS_FILE";
pub const PAYMENTS_FILE_VAR: &str = "PAYMENTS_FILE";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub auctions_path: PathBuf,
    pub payments_path: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auctions_path: PathBuf::from("auctions.json"),
            payments_path: PathBuf::from("payments.jsonl"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Settings {
            auctions_path: value(AUCTIONS_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.auctions_path),
            payments_path: value(PAYMENTS_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.payments_path),
            log_filter: value(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }
}
