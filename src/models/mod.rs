pub mod emotion;
pub mod sample;
pub mod streak;

pub use emotion::{Emotion, Polarity};
pub use sample::{DailyEmotionCount, EmotionSample};
pub use streak::MoodStreak;
