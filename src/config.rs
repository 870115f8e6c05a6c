use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::filter::FilterCriteria;

static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").unwrap());

// Defaults; every field can be overridden through the environment.
const DEFAULT_PINCODES: &str = "400057,400056,400055,400058";
const DEFAULT_DATE: &str = "07-08-2021";
const DEFAULT_MIN_AGE_LIMIT: u32 = 18;
const DEFAULT_VACCINE: &str = "COVISHIELD";
const DEFAULT_QUERY_INTERVAL_MINS: f64 = 0.1;
const DEFAULT_LOG_PATH: &str = "logs.txt";

/// Immutable search configuration, built once at startup and handed to the
/// watcher. Nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub pincodes: Vec<String>,
    /// Target date, `dd-mm-yyyy`.
    pub date: String,
    pub min_age_limit: u32,
    pub vaccine: String,
    pub poll_interval_mins: f64,
    /// Declared alongside the other knobs but not consulted by any filtering
    /// or reporting logic.
    pub free_only: bool,
    pub log_path: String,
}

impl WatchConfig {
    pub fn from_env() -> Result<Self> {
        let pincodes: Vec<String> = env::var("PINCODES")
            .unwrap_or_else(|_| DEFAULT_PINCODES.to_string())
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if pincodes.is_empty() {
            bail!("PINCODES must list at least one pincode");
        }
        for pincode in &pincodes {
            if !PINCODE_RE.is_match(pincode) {
                bail!("invalid pincode {pincode:?}: expected six digits");
            }
        }

        let min_age_limit = match env::var("MIN_AGE_LIMIT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MIN_AGE_LIMIT {raw:?} is not an integer"))?,
            Err(_) => DEFAULT_MIN_AGE_LIMIT,
        };

        let poll_interval_mins = match env::var("QUERY_INTERVAL_MINS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("QUERY_INTERVAL_MINS {raw:?} is not a number"))?,
            Err(_) => DEFAULT_QUERY_INTERVAL_MINS,
        };
        if poll_interval_mins <= 0.0 {
            bail!("QUERY_INTERVAL_MINS must be positive");
        }

        let free_only = match env::var("FREE") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("FREE {raw:?} is not a boolean"))?,
            Err(_) => true,
        };

        Ok(WatchConfig {
            pincodes,
            date: env::var("DATE").unwrap_or_else(|_| DEFAULT_DATE.to_string()),
            min_age_limit,
            vaccine: env::var("VACCINE").unwrap_or_else(|_| DEFAULT_VACCINE.to_string()),
            poll_interval_mins,
            free_only,
            log_path: env::var("LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string()),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.poll_interval_mins * 60.0)
    }

    /// The fixed two-field criteria every sweep filters with.
    pub fn filter_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        criteria.insert("min_age_limit".to_string(), json!(self.min_age_limit));
        criteria.insert("vaccine".to_string(), json!(self.vaccine.clone()));
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WatchConfig {
        WatchConfig {
            pincodes: vec!["400057".to_string(), "400056".to_string()],
            date: "07-08-2021".to_string(),
            min_age_limit: 18,
            vaccine: "COVISHIELD".to_string(),
            poll_interval_mins: 0.1,
            free_only: true,
            log_path: "logs.txt".to_string(),
        }
    }

    #[test]
    fn poll_interval_converts_minutes() {
        assert_eq!(config().poll_interval(), Duration::from_secs(6));
    }

    #[test]
    fn criteria_hold_age_and_vaccine() {
        let criteria = config().filter_criteria();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria["min_age_limit"], json!(18));
        assert_eq!(criteria["vaccine"], json!("COVISHIELD"));
    }

    #[test]
    fn pincode_shape_is_six_digits() {
        assert!(PINCODE_RE.is_match("400057"));
        assert!(!PINCODE_RE.is_match("4000"));
        assert!(!PINCODE_RE.is_match("40005a"));
        assert!(!PINCODE_RE.is_match("4000571"));
    }
}
