use serde::{Deserialize, Serialize};
use std::fmt;

/// The six labels the facial classifier emits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Angry,
    Happy,
    Neutral,
    Sad,
    Surprised,
    Tired,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Angry,
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Tired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Angry => "angry",
            Emotion::Happy => "happy",
            Emotion::Neutral => "neutral",
            Emotion::Sad => "sad",
            Emotion::Surprised => "surprised",
            Emotion::Tired => "tired",
        }
    }

    /// Coarse grouping used by the streak tracker. Tired counts as neutral
    /// here, unlike the pattern-analysis concerning set.
    pub fn polarity(&self) -> Polarity {
        match self {
            Emotion::Happy | Emotion::Surprised => Polarity::Positive,
            Emotion::Sad | Emotion::Angry => Polarity::Negative,
            Emotion::Neutral | Emotion::Tired => Polarity::Neutral,
        }
    }

    /// Emotions that escalate tip tiers when they persist across days.
    pub fn is_concerning(&self) -> bool {
        matches!(self, Emotion::Sad | Emotion::Angry | Emotion::Tired)
    }

    /// Positive set for trend comparisons.
    pub fn is_positive(&self) -> bool {
        matches!(self, Emotion::Happy | Emotion::Surprised)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub const ALL: [Polarity; 3] = [Polarity::Positive, Polarity::Negative, Polarity::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_grouping_matches_streak_rules() {
        assert_eq!(Emotion::Happy.polarity(), Polarity::Positive);
        assert_eq!(Emotion::Surprised.polarity(), Polarity::Positive);
        assert_eq!(Emotion::Sad.polarity(), Polarity::Negative);
        assert_eq!(Emotion::Angry.polarity(), Polarity::Negative);
        assert_eq!(Emotion::Neutral.polarity(), Polarity::Neutral);
        // Tired is concerning for pattern analysis but neutral for streaks.
        assert_eq!(Emotion::Tired.polarity(), Polarity::Neutral);
        assert!(Emotion::Tired.is_concerning());
    }
}
