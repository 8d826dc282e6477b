use time::macros::format_description;
use time::{Date, Time};

use crate::constants::*;
use crate::errors::{ClientError, ClientResult};

/// Composite editable field shown to the user, `"<date> <time>"`.
pub fn join_datetime(date: Option<&str>, time: Option<&str>) -> Option<String> {
    match (date, time) {
        (Some(date), Some(time)) => Some(format!("{} {}", date, time)),
        (Some(date), None) => Some(date.to_string()),
        (None, Some(time)) => Some(time.to_string()),
        (None, None) => None,
    }
}

pub fn split_datetime(datetime: &str) -> (Option<String>, Option<String>) {
    let mut parts = datetime.trim().splitn(2, ' ');
    let date = parts
        .next()
        .filter(|part| !part.is_empty())
        .map(str::to_string);
    let time = parts
        .next()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string);
    (date, time)
}

pub fn format_query_date(date: Date) -> ClientResult<String> {
    date.format(format_description!("[year]/[month]/[day]"))
        .map_err(|e| ClientError::validation(format!("Invalid date: {}", e)))
}

/// The backend parses time filters as a full timestamp on a fixed day.
pub fn format_query_time(time: Time) -> ClientResult<String> {
    let formatted = time
        .format(format_description!("[hour]:[minute]"))
        .map_err(|e| ClientError::validation(format!("Invalid time: {}", e)))?;
    Ok(format!("{} {}", TIME_QUERY_DATE_PREFIX, formatted))
}

pub fn parse_date(value: &str) -> ClientResult<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ClientError::validation(format!("Invalid date: {}", value)))
}

pub fn parse_time(value: &str) -> ClientResult<Time> {
    Time::parse(value.trim(), format_description!("[hour]:[minute]"))
        .map_err(|_| ClientError::validation(format!("Invalid time: {}", value)))
}

pub fn validate_threshold(value: i64) -> ClientResult<u64> {
    u64::try_from(value).map_err(|_| ClientError::validation(ERR_NEGATIVE_THRESHOLD))
}
