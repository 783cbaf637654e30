/// Tunable thresholds for pattern analysis.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Window the snapshot is computed over
    pub recent_window_days: u32,

    /// Longer window whose remainder forms the "older" period for trends
    pub comparison_window_days: u32,

    /// Consecutive concerning days that raise concern to moderate / high
    pub moderate_concern_days: u32,
    pub high_concern_days: u32,

    /// Consecutive happy days that flag a positive streak
    pub positive_streak_days: u32,

    /// Frequency-ratio bucket boundaries
    pub high_frequency: f64,
    pub moderate_frequency: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
            comparison_window_days: 14,
            moderate_concern_days: 2,
            high_concern_days: 3,
            positive_streak_days: 3,
            high_frequency: 0.6,
            moderate_frequency: 0.3,
        }
    }
}
