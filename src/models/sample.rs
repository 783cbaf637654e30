use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Emotion;

/// One classifier observation. Immutable once appended to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSample {
    pub id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub confidence: f64,
    pub notes: Option<String>,
    pub session_id: Option<String>,
}

impl EmotionSample {
    /// Confidence is clamped into [0, 1]; the calendar date is derived from
    /// the timestamp.
    pub fn new(emotion: Emotion, confidence: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: None,
            timestamp,
            date: timestamp.date_naive(),
            emotion,
            confidence: confidence.clamp(0.0, 1.0),
            notes: None,
            session_id: None,
        }
    }

    pub fn observed_now(emotion: Emotion, confidence: f64) -> Self {
        Self::new(emotion, confidence, Utc::now())
    }
}

/// One row of the per-day summary (date x emotion sample count).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEmotionCount {
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        let now = Utc::now();
        assert_eq!(EmotionSample::new(Emotion::Happy, 1.4, now).confidence, 1.0);
        assert_eq!(EmotionSample::new(Emotion::Happy, -0.1, now).confidence, 0.0);
        assert_eq!(EmotionSample::new(Emotion::Happy, 0.73, now).confidence, 0.73);
    }

    #[test]
    fn date_tracks_timestamp() {
        let sample = EmotionSample::observed_now(Emotion::Neutral, 0.5);
        assert_eq!(sample.date, sample.timestamp.date_naive());
    }
}
