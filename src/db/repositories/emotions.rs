use std::collections::HashMap;

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use rusqlite::{params, Row};

use crate::db::{
    connection::Database,
    helpers::{parse_date, parse_datetime, parse_emotion, to_u32},
};
use crate::models::{DailyEmotionCount, Emotion, EmotionSample};

fn row_to_sample(row: &Row) -> Result<EmotionSample> {
    let timestamp: String = row.get("timestamp")?;
    let date: String = row.get("date")?;
    let emotion: String = row.get("emotion")?;

    Ok(EmotionSample {
        id: row.get("id")?,
        timestamp: parse_datetime(&timestamp, "timestamp")?,
        date: parse_date(&date, "date")?,
        emotion: parse_emotion(&emotion)?,
        confidence: row.get("confidence")?,
        notes: row.get("notes")?,
        session_id: row.get("session_id")?,
    })
}

impl Database {
    /// Append one observation. Rows are never updated afterwards; duplicate
    /// timestamps are allowed.
    pub async fn insert_emotion(&self, sample: &EmotionSample) -> Result<i64> {
        let record = sample.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO emotions (timestamp, date, emotion, confidence, notes, session_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.timestamp.to_rfc3339(),
                    record.date.to_string(),
                    record.emotion.as_str(),
                    record.confidence,
                    record.notes,
                    record.session_id,
                    Utc::now().to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    /// All samples with date in [today - window_days, today], newest first.
    pub async fn get_emotion_history(&self, window_days: u32) -> Result<Vec<EmotionSample>> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(window_days as i64);
        self.get_emotion_history_between(start, end).await
    }

    pub async fn get_emotion_history_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<EmotionSample>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, timestamp, date, emotion, confidence, notes, session_id
                 FROM emotions
                 WHERE date >= ?1 AND date <= ?2
                 ORDER BY timestamp DESC, id DESC",
            )?;

            let mut rows = stmt.query(params![start.to_string(), end.to_string()])?;
            let mut samples = Vec::new();
            while let Some(row) = rows.next()? {
                samples.push(row_to_sample(row)?);
            }

            Ok(samples)
        })
        .await
    }

    /// Per-day sample counts for the window, newest date first.
    pub async fn get_daily_emotion_counts(
        &self,
        window_days: u32,
    ) -> Result<Vec<DailyEmotionCount>> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(window_days as i64);
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT date, emotion, COUNT(*) AS count
                 FROM emotions
                 WHERE date >= ?1 AND date <= ?2
                 GROUP BY date, emotion
                 ORDER BY date DESC",
            )?;

            let mut rows = stmt.query(params![start.to_string(), end.to_string()])?;
            let mut counts = Vec::new();
            while let Some(row) = rows.next()? {
                let date: String = row.get("date")?;
                let emotion: String = row.get("emotion")?;
                let count: i64 = row.get("count")?;
                counts.push(DailyEmotionCount {
                    date: parse_date(&date, "date")?,
                    emotion: parse_emotion(&emotion)?,
                    count: to_u32(count, "count")?,
                });
            }

            Ok(counts)
        })
        .await
    }

    pub async fn count_emotions(&self, window_days: u32) -> Result<HashMap<Emotion, u32>> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(window_days as i64);
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT emotion, COUNT(*) AS count
                 FROM emotions
                 WHERE date >= ?1 AND date <= ?2
                 GROUP BY emotion",
            )?;

            let mut rows = stmt.query(params![start.to_string(), end.to_string()])?;
            let mut counts = HashMap::new();
            while let Some(row) = rows.next()? {
                let emotion: String = row.get("emotion")?;
                let count: i64 = row.get("count")?;
                counts.insert(parse_emotion(&emotion)?, to_u32(count, "count")?);
            }

            Ok(counts)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    async fn open_store() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::new(dir.path().join("moodmirror.sqlite3")).unwrap();
        (dir, db)
    }

    fn sample_days_ago(emotion: Emotion, days_ago: i64) -> EmotionSample {
        EmotionSample::new(emotion, 0.8, Utc::now() - Duration::days(days_ago))
    }

    #[tokio::test]
    async fn append_then_query_returns_all_newest_first() {
        let (_dir, db) = open_store().await;

        for days_ago in [4, 2, 0] {
            db.insert_emotion(&sample_days_ago(Emotion::Happy, days_ago))
                .await
                .unwrap();
        }

        let history = db.get_emotion_history(7).await.unwrap();
        assert_eq!(history.len(), 3);
        for pair in history.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn window_excludes_older_samples() {
        let (_dir, db) = open_store().await;

        db.insert_emotion(&sample_days_ago(Emotion::Sad, 10))
            .await
            .unwrap();
        db.insert_emotion(&sample_days_ago(Emotion::Happy, 1))
            .await
            .unwrap();

        let history = db.get_emotion_history(7).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].emotion, Emotion::Happy);
    }

    #[tokio::test]
    async fn duplicate_timestamps_are_permitted() {
        let (_dir, db) = open_store().await;

        let sample = sample_days_ago(Emotion::Neutral, 0);
        let first = db.insert_emotion(&sample).await.unwrap();
        let second = db.insert_emotion(&sample).await.unwrap();
        assert_ne!(first, second);

        let history = db.get_emotion_history(1).await.unwrap();
        assert_eq!(history.len(), 2);
        // Equal timestamps fall back to insertion order, newest row first.
        assert_eq!(history[0].id, Some(second));
        assert_eq!(history[1].id, Some(first));
    }

    #[tokio::test]
    async fn daily_counts_group_by_date_and_emotion() {
        let (_dir, db) = open_store().await;

        db.insert_emotion(&sample_days_ago(Emotion::Happy, 1))
            .await
            .unwrap();
        db.insert_emotion(&sample_days_ago(Emotion::Happy, 1))
            .await
            .unwrap();
        db.insert_emotion(&sample_days_ago(Emotion::Sad, 0))
            .await
            .unwrap();

        let counts = db.get_daily_emotion_counts(7).await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].emotion, Emotion::Sad);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].emotion, Emotion::Happy);
        assert_eq!(counts[1].count, 2);

        let totals = db.count_emotions(7).await.unwrap();
        assert_eq!(totals.get(&Emotion::Happy), Some(&2));
        assert_eq!(totals.get(&Emotion::Sad), Some(&1));
    }
}
