use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Polarity;

/// A streak survives a gap of up to this many calendar days between
/// contributing samples.
pub const GAP_TOLERANCE_DAYS: i64 = 2;

/// Running per-polarity streak counter. One active streak per polarity; a
/// sample either extends the latest streak or starts a new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodStreak {
    pub id: Option<i64>,
    pub polarity: Polarity,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub current_count: u32,
    pub best_count: u32,
}

impl MoodStreak {
    /// Start a fresh streak of length 1, carrying the previous best forward
    /// as a floor.
    pub fn start(polarity: Polarity, date: NaiveDate, prior_best: u32) -> Self {
        Self {
            id: None,
            polarity,
            start_date: date,
            end_date: date,
            current_count: 1,
            best_count: prior_best.max(1),
        }
    }

    /// Whether a sample on `date` continues this streak.
    pub fn continues(&self, date: NaiveDate) -> bool {
        (date - self.end_date).num_days() <= GAP_TOLERANCE_DAYS
    }

    /// Extend the streak with one more sample. Callers check `continues`
    /// first.
    pub fn extend(&mut self, date: NaiveDate) {
        self.current_count += 1;
        self.best_count = self.best_count.max(self.current_count);
        self.end_date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, n).unwrap()
    }

    #[test]
    fn extend_keeps_current_at_most_best() {
        let mut streak = MoodStreak::start(Polarity::Positive, day(1), 0);
        assert_eq!(streak.current_count, 1);
        assert_eq!(streak.best_count, 1);

        for n in 2..=9 {
            assert!(streak.continues(day(n)));
            streak.extend(day(n));
            assert!(streak.current_count <= streak.best_count);
        }
        assert_eq!(streak.current_count, 9);
        assert_eq!(streak.best_count, 9);
    }

    #[test]
    fn within_tolerance_gap_continues() {
        let streak = MoodStreak::start(Polarity::Negative, day(5), 0);
        assert!(streak.continues(day(5)));
        assert!(streak.continues(day(6)));
        assert!(streak.continues(day(7)));
        assert!(!streak.continues(day(8)));
    }

    #[test]
    fn broken_streak_restarts_at_one_with_best_floor() {
        let mut streak = MoodStreak::start(Polarity::Positive, day(1), 0);
        streak.extend(day(2));
        streak.extend(day(3));
        assert_eq!(streak.best_count, 3);

        // Gap of more than two days: a new streak starts at 1 but the best
        // carries over.
        assert!(!streak.continues(day(9)));
        let fresh = MoodStreak::start(Polarity::Positive, day(9), streak.best_count);
        assert_eq!(fresh.current_count, 1);
        assert_eq!(fresh.best_count, 3);
        assert_eq!(fresh.start_date, day(9));
        assert_eq!(fresh.end_date, day(9));
    }

    #[test]
    fn same_day_samples_each_extend() {
        let mut streak = MoodStreak::start(Polarity::Positive, day(1), 0);
        streak.extend(day(1));
        streak.extend(day(1));
        assert_eq!(streak.current_count, 3);
        assert_eq!(streak.end_date, day(1));
    }
}
