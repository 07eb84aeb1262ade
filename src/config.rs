use std::env;

use chrono::NaiveTime;

use crate::errors::AppError;

const DEFAULT_RESERVATION_DATE: &str = "2024-12-21";
const DEFAULT_RESTAURANT: &str = "ChesilRectory";
const DEFAULT_COVERS: &str = "2";
const DEFAULT_CUTOFF_HOUR: u32 = 21;
const DEFAULT_CUTOFF_MINUTE: u32 = 0;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub restaurant_names: Vec<String>,
    pub reservation_date: String,
    pub covers: String,
    pub pushover_api_key: String,
    pub pushover_recipient: String,
    /// Slots at or after this clock time are ignored.
    pub cutoff: NaiveTime,
    pub disable_pushover: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers other than `main`
    /// never have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let disable_pushover = match lookup("DISABLE_PUSHOVER") {
            Some(v) => parse_bool("DISABLE_PUSHOVER", &v)?,
            None => false,
        };

        let pushover_api_key = required(&lookup, "PUSHOVER_API_KEY")?;
        let pushover_recipient = required(&lookup, "PUSHOVER_RECIPIENT")?;

        let names_raw = lookup("RESTAURANT_NAMES")
            .or_else(|| lookup("RESTAURANT_NAME"))
            .unwrap_or_else(|| DEFAULT_RESTAURANT.to_string());
        let restaurant_names = parse_restaurant_list(&names_raw);
        if restaurant_names.is_empty() {
            return Err(AppError::Config(
                "RESTAURANT_NAMES must name at least one restaurant".to_string(),
            ));
        }

        let hour = match lookup("RESERVATION_IGNORE_THRESHOLD_HOUR") {
            Some(v) => parse_bounded("RESERVATION_IGNORE_THRESHOLD_HOUR", &v, 23)?,
            None => DEFAULT_CUTOFF_HOUR,
        };
        let minute = match lookup("RESERVATION_IGNORE_THRESHOLD_MINUTE") {
            Some(v) => parse_bounded("RESERVATION_IGNORE_THRESHOLD_MINUTE", &v, 59)?,
            None => DEFAULT_CUTOFF_MINUTE,
        };
        let cutoff = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            AppError::Config(format!("invalid cutoff time {hour:02}:{minute:02}"))
        })?;

        Ok(Self {
            restaurant_names,
            reservation_date: lookup("RESERVATION_DATE")
                .unwrap_or_else(|| DEFAULT_RESERVATION_DATE.to_string()),
            covers: lookup("RESTAURANT_COVERS").unwrap_or_else(|| DEFAULT_COVERS.to_string()),
            pushover_api_key,
            pushover_recipient,
            cutoff,
            disable_pushover,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Config(format!("{key} must be set")))
}

pub fn parse_restaurant_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}

fn parse_bounded(key: &str, value: &str, max: u32) -> Result<u32, AppError> {
    let n: u32 = value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{key} must be an integer, got {value:?}")))?;
    if n > max {
        return Err(AppError::Config(format!(
            "{key} must be between 0 and {max}, got {n}"
        )));
    }
    Ok(n)
}
