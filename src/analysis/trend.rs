use crate::analysis::patterns::Trend;
use crate::models::EmotionSample;

/// Compare the recent window against the older remainder of the longer
/// window. Declaring a trend requires BOTH the positive count to move and
/// the negative count to move the other way; partial shifts stay stable.
pub fn classify_trend(recent: &[EmotionSample], longer: &[EmotionSample]) -> Trend {
    if longer.len() <= recent.len() {
        return Trend::Stable;
    }

    // Both slices are newest-first and `longer` starts with the recent
    // window, so the remainder is the older period.
    let older = &longer[recent.len()..];

    let (recent_positive, recent_negative) = polarity_counts(recent);
    let (older_positive, older_negative) = polarity_counts(older);

    if recent_positive > older_positive && recent_negative < older_negative {
        Trend::Improving
    } else if recent_positive < older_positive && recent_negative > older_negative {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn polarity_counts(samples: &[EmotionSample]) -> (usize, usize) {
    let positive = samples.iter().filter(|s| s.emotion.is_positive()).count();
    let negative = samples.iter().filter(|s| s.emotion.is_concerning()).count();
    (positive, negative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Emotion;
    use chrono::{Duration, Utc};

    fn samples(emotions: &[Emotion]) -> Vec<EmotionSample> {
        let now = Utc::now();
        emotions
            .iter()
            .enumerate()
            .map(|(i, &emotion)| {
                EmotionSample::new(emotion, 0.9, now - Duration::hours(i as i64))
            })
            .collect()
    }

    #[test]
    fn more_positive_and_fewer_negative_is_improving() {
        // Recent: 3 positive, 0 negative. Older: 1 positive, 2 negative.
        let recent = samples(&[Emotion::Happy, Emotion::Happy, Emotion::Surprised]);
        let mut longer = recent.clone();
        longer.extend(samples(&[Emotion::Happy, Emotion::Sad, Emotion::Angry]));

        assert_eq!(classify_trend(&recent, &longer), Trend::Improving);
    }

    #[test]
    fn fewer_positive_and_more_negative_is_declining() {
        let recent = samples(&[Emotion::Sad, Emotion::Tired, Emotion::Neutral]);
        let mut longer = recent.clone();
        longer.extend(samples(&[Emotion::Happy, Emotion::Happy, Emotion::Neutral]));

        assert_eq!(classify_trend(&recent, &longer), Trend::Declining);
    }

    #[test]
    fn partial_shift_stays_stable() {
        // Positive count rises but negative count holds steady.
        let recent = samples(&[Emotion::Happy, Emotion::Happy, Emotion::Sad]);
        let mut longer = recent.clone();
        longer.extend(samples(&[Emotion::Happy, Emotion::Sad, Emotion::Neutral]));

        assert_eq!(classify_trend(&recent, &longer), Trend::Stable);
    }

    #[test]
    fn no_older_period_is_stable() {
        let recent = samples(&[Emotion::Happy, Emotion::Happy]);
        assert_eq!(classify_trend(&recent, &recent), Trend::Stable);
    }
}
