use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::{
    connection::Database,
    helpers::{parse_date, parse_polarity, to_u32},
};
use crate::models::{MoodStreak, Polarity};

fn row_to_streak(row: &Row) -> Result<MoodStreak> {
    let polarity: String = row.get("polarity")?;
    let start_date: String = row.get("start_date")?;
    let end_date: String = row.get("end_date")?;
    let current_count: i64 = row.get("current_count")?;
    let best_count: i64 = row.get("best_count")?;

    Ok(MoodStreak {
        id: row.get("id")?,
        polarity: parse_polarity(&polarity)?,
        start_date: parse_date(&start_date, "start_date")?,
        end_date: parse_date(&end_date, "end_date")?,
        current_count: to_u32(current_count, "current_count")?,
        best_count: to_u32(best_count, "best_count")?,
    })
}

impl Database {
    /// The most recent streak record for a polarity, active or not.
    pub async fn latest_streak(&self, polarity: Polarity) -> Result<Option<MoodStreak>> {
        self.execute(move |conn| {
            let streak = conn
                .query_row(
                    "SELECT id, polarity, start_date, end_date, current_count, best_count
                     FROM mood_streaks
                     WHERE polarity = ?1
                     ORDER BY id DESC
                     LIMIT 1",
                    params![polarity.as_str()],
                    |row| Ok(row_to_streak(row)),
                )
                .optional()?
                .transpose()?;
            Ok(streak)
        })
        .await
    }

    pub async fn insert_streak(&self, streak: &MoodStreak) -> Result<i64> {
        let record = streak.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO mood_streaks (polarity, start_date, end_date, current_count, best_count, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.polarity.as_str(),
                    record.start_date.to_string(),
                    record.end_date.to_string(),
                    record.current_count,
                    record.best_count,
                    Utc::now().to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    pub async fn update_streak(&self, streak: &MoodStreak) -> Result<()> {
        let record = streak.clone();
        let id = record
            .id
            .ok_or_else(|| anyhow!("cannot update a streak that was never inserted"))?;
        self.execute(move |conn| {
            conn.execute(
                "UPDATE mood_streaks
                 SET end_date = ?1,
                     current_count = ?2,
                     best_count = ?3
                 WHERE id = ?4",
                params![
                    record.end_date.to_string(),
                    record.current_count,
                    record.best_count,
                    id,
                ],
            )?;
            Ok(())
        })
        .await
    }

    /// Latest streak per polarity, keyed — only polarities with an active
    /// (current_count > 0) streak appear.
    pub async fn current_streaks(&self) -> Result<HashMap<Polarity, MoodStreak>> {
        let mut streaks = HashMap::new();
        for polarity in Polarity::ALL {
            if let Some(streak) = self.latest_streak(polarity).await? {
                if streak.current_count > 0 {
                    streaks.insert(polarity, streak);
                }
            }
        }
        Ok(streaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, n).unwrap()
    }

    async fn open_store() -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::new(dir.path().join("moodmirror.sqlite3")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn latest_streak_is_the_newest_row_per_polarity() {
        let (_dir, db) = open_store().await;

        let first = MoodStreak::start(Polarity::Positive, day(1), 0);
        db.insert_streak(&first).await.unwrap();
        let second = MoodStreak::start(Polarity::Positive, day(9), first.best_count);
        let second_id = db.insert_streak(&second).await.unwrap();

        let latest = db.latest_streak(Polarity::Positive).await.unwrap().unwrap();
        assert_eq!(latest.id, Some(second_id));
        assert_eq!(latest.start_date, day(9));

        assert!(db.latest_streak(Polarity::Negative).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_round_trips() {
        let (_dir, db) = open_store().await;

        let mut streak = MoodStreak::start(Polarity::Negative, day(3), 0);
        let id = db.insert_streak(&streak).await.unwrap();
        streak.id = Some(id);
        streak.extend(day(4));
        db.update_streak(&streak).await.unwrap();

        let stored = db.latest_streak(Polarity::Negative).await.unwrap().unwrap();
        assert_eq!(stored, streak);
    }

    #[tokio::test]
    async fn current_streaks_is_keyed_by_polarity() {
        let (_dir, db) = open_store().await;

        db.insert_streak(&MoodStreak::start(Polarity::Positive, day(1), 0))
            .await
            .unwrap();
        db.insert_streak(&MoodStreak::start(Polarity::Neutral, day(2), 0))
            .await
            .unwrap();

        let streaks = db.current_streaks().await.unwrap();
        assert_eq!(streaks.len(), 2);
        assert!(streaks.contains_key(&Polarity::Positive));
        assert!(streaks.contains_key(&Polarity::Neutral));
        assert!(!streaks.contains_key(&Polarity::Negative));
    }
}
