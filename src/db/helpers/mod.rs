use std::convert::TryFrom;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Emotion, Polarity};

pub fn to_u32(value: i64, field: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| anyhow!("{field} contains out-of-range value {value}"))
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_emotion(value: &str) -> Result<Emotion> {
    match value {
        "angry" => Ok(Emotion::Angry),
        "happy" => Ok(Emotion::Happy),
        "neutral" => Ok(Emotion::Neutral),
        "sad" => Ok(Emotion::Sad),
        "surprised" => Ok(Emotion::Surprised),
        "tired" => Ok(Emotion::Tired),
        other => Err(anyhow!("unknown emotion label {other}")),
    }
}

pub fn parse_polarity(value: &str) -> Result<Polarity> {
    match value {
        "positive" => Ok(Polarity::Positive),
        "negative" => Ok(Polarity::Negative),
        "neutral" => Ok(Polarity::Neutral),
        other => Err(anyhow!("unknown streak polarity {other}")),
    }
}
