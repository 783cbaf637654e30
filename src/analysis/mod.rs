mod config;
mod insights;
mod patterns;
mod trend;

pub use config::AnalysisConfig;
pub use insights::{mood_insights, weekly_comparison, EmotionChange, MoodInsights, WeeklyComparison};
pub use patterns::{
    analyze, ConcernLevel, FrequencyBand, PatternKind, PatternSnapshot, Trend,
};
pub use trend::classify_trend;
