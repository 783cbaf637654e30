use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Duration, Utc};
use log::error;
use uuid::Uuid;

use crate::analysis::{
    analyze, mood_insights, weekly_comparison, AnalysisConfig, MoodInsights, PatternSnapshot,
    WeeklyComparison,
};
use crate::db::Database;
use crate::export;
use crate::models::{DailyEmotionCount, Emotion, EmotionSample, MoodStreak, Polarity};
use crate::tips::{select_tip, Tip};

// Set to true to log every appended sample (one per camera tick)
const ENABLE_LOGS: bool = false;

use crate::log_info;

/// Controller tying the emotion store, streak tracker, pattern analyzer and
/// tip selector together. Cheap to clone; all clones share one store.
#[derive(Clone)]
pub struct EmotionJournal {
    db: Database,
    session_id: String,
    config: AnalysisConfig,
}

impl EmotionJournal {
    pub fn open(db_path: PathBuf) -> Result<Self> {
        Ok(Self::with_database(Database::new(db_path)?))
    }

    pub fn with_database(db: Database) -> Self {
        Self {
            db,
            session_id: Uuid::new_v4().to_string(),
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Append one classifier observation and roll the matching polarity
    /// streak. A storage failure on the append propagates; a streak-roll
    /// failure after a durable append is logged and degraded.
    pub async fn log_emotion(
        &self,
        emotion: Emotion,
        confidence: f64,
        notes: Option<String>,
    ) -> Result<EmotionSample> {
        let mut sample = EmotionSample::observed_now(emotion, confidence);
        sample.notes = notes;
        sample.session_id = Some(self.session_id.clone());

        let id = self.db.insert_emotion(&sample).await?;
        sample.id = Some(id);
        log_info!("logged {} sample (confidence {:.2})", emotion, sample.confidence);

        if let Err(err) = self.roll_streak(emotion.polarity(), &sample).await {
            error!("Failed to update {} streak: {err:#}", emotion.polarity());
        }

        Ok(sample)
    }

    async fn roll_streak(&self, polarity: Polarity, sample: &EmotionSample) -> Result<()> {
        match self.db.latest_streak(polarity).await? {
            Some(mut streak) if streak.continues(sample.date) => {
                streak.extend(sample.date);
                self.db.update_streak(&streak).await
            }
            Some(previous) => {
                let fresh = MoodStreak::start(polarity, sample.date, previous.best_count);
                self.db.insert_streak(&fresh).await.map(|_| ())
            }
            None => {
                let fresh = MoodStreak::start(polarity, sample.date, 0);
                self.db.insert_streak(&fresh).await.map(|_| ())
            }
        }
    }

    /// Samples from the last `days` calendar days, newest first.
    pub async fn history(&self, days: u32) -> Result<Vec<EmotionSample>> {
        self.db.get_emotion_history(days).await
    }

    pub async fn daily_summary(&self, days: u32) -> Result<Vec<DailyEmotionCount>> {
        self.db.get_daily_emotion_counts(days).await
    }

    pub async fn current_streaks(&self) -> Result<HashMap<Polarity, MoodStreak>> {
        self.db.current_streaks().await
    }

    pub async fn insights(&self, days: u32) -> Result<MoodInsights> {
        let history = self.db.get_emotion_history(days).await?;
        Ok(mood_insights(&history, days))
    }

    /// This trailing week against the one before it.
    pub async fn weekly_comparison(&self) -> Result<WeeklyComparison> {
        let today = Utc::now().date_naive();
        let this_week = self
            .db
            .get_emotion_history_between(today - Duration::days(6), today)
            .await?;
        let last_week = self
            .db
            .get_emotion_history_between(today - Duration::days(13), today - Duration::days(7))
            .await?;
        Ok(weekly_comparison(&this_week, &last_week))
    }

    /// Analyze recent history and pick a tip for the current emotion. This
    /// surface never fails: a storage error degrades to the empty snapshot
    /// and that emotion's default tip pool so the mirror always has
    /// something to show.
    pub async fn adaptive_tip(&self, current: Emotion) -> (Tip, PatternSnapshot) {
        let recent = self.db.get_emotion_history(self.config.recent_window_days).await;
        let longer = self
            .db
            .get_emotion_history(self.config.comparison_window_days)
            .await;

        let snapshot = match (recent, longer) {
            (Ok(recent), Ok(longer)) => analyze(&recent, &longer, current, &self.config),
            (recent, longer) => {
                for err in [recent.err(), longer.err()].into_iter().flatten() {
                    error!("Failed to load history for tip selection: {err:#}");
                }
                PatternSnapshot::empty(current)
            }
        };

        (select_tip(current, &snapshot), snapshot)
    }

    /// Export the last `days` of history as a delimited snapshot in `dir`.
    pub async fn export_csv(&self, days: u32, dir: &Path) -> Result<PathBuf> {
        let history = self.db.get_emotion_history(days).await?;
        export::write_csv(&history, dir)
    }
}
