pub mod analysis;
pub mod db;
pub mod export;
pub mod journal;
pub mod messages;
pub mod models;
pub mod quotes;
pub mod settings;
pub mod tips;
pub mod utils;
pub mod voice;

pub use analysis::{
    analyze, AnalysisConfig, ConcernLevel, FrequencyBand, MoodInsights, PatternKind,
    PatternSnapshot, Trend, WeeklyComparison,
};
pub use db::Database;
pub use journal::EmotionJournal;
pub use messages::{message_for, BilingualMessage};
pub use models::{DailyEmotionCount, Emotion, EmotionSample, MoodStreak, Polarity};
pub use settings::{SettingsStore, SpeechSettings};
pub use tips::{select_tip, Tip, TipCategory};
pub use voice::{AnnouncePolicy, Announcement};
