use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::patterns::Trend;
use crate::models::{Emotion, EmotionSample};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodInsights {
    pub total_entries: usize,
    pub dominant_emotion: Emotion,
    pub average_confidence: f64,
    /// Emotion counts, descending, ties by first appearance
    pub distribution: Vec<(Emotion, u32)>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionChange {
    pub emotion: Emotion,
    pub this_week: u32,
    pub last_week: u32,
    pub change: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    pub this_week_total: usize,
    pub last_week_total: usize,
    pub changes: Vec<EmotionChange>,
    pub overall_trend: Trend,
}

fn emoji_for(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "😊",
        Emotion::Sad => "😔",
        Emotion::Angry => "😡",
        Emotion::Neutral => "😐",
        Emotion::Tired => "😴",
        Emotion::Surprised => "😮",
    }
}

/// Summarize a history window into counts and canned insight lines for the
/// journal view.
pub fn mood_insights(history: &[EmotionSample], window_days: u32) -> MoodInsights {
    if history.is_empty() {
        return MoodInsights {
            total_entries: 0,
            dominant_emotion: Emotion::Neutral,
            average_confidence: 0.0,
            distribution: Vec::new(),
            insights: vec!["No data available for analysis.".to_string()],
        };
    }

    let total = history.len();
    let distribution = distribution(history);
    let (dominant, dominant_count) = distribution[0];
    let average_confidence =
        history.iter().map(|s| s.confidence).sum::<f64>() / total as f64;

    let mut insights = Vec::new();

    let dominant_pct = dominant_count as f64 / total as f64 * 100.0;
    insights.push(format!(
        "{} You've been predominantly {} ({:.1}% of the time)",
        emoji_for(dominant),
        dominant,
        dominant_pct
    ));

    if total >= 2 {
        let recent: Vec<Emotion> = history.iter().take(5).map(|s| s.emotion).collect();
        if recent.iter().all(|&e| e == recent[0]) {
            insights.push("🔄 Your mood has been consistent recently".to_string());
        } else {
            insights.push("🌈 Your emotions show healthy variation".to_string());
        }
    }

    let positive = history.iter().filter(|s| s.emotion.is_positive()).count();
    let negative = history.iter().filter(|s| s.emotion.is_concerning()).count();
    if positive > negative {
        insights.push("✨ You're experiencing more positive emotions - keep it up!".to_string());
    } else if negative > positive * 2 {
        insights.push("💙 Consider some self-care activities to boost your mood".to_string());
    }

    if window_days >= 7 {
        insights.push(format!(
            "📊 You had {total} emotion detections in the last {window_days} days"
        ));
    }

    MoodInsights {
        total_entries: total,
        dominant_emotion: dominant,
        average_confidence,
        distribution,
        insights,
    }
}

/// Compare two adjacent week-long windows. The overall trend counts how many
/// positive-set vs negative-set emotions rose week over week.
pub fn weekly_comparison(
    this_week: &[EmotionSample],
    last_week: &[EmotionSample],
) -> WeeklyComparison {
    let this_counts = counts(this_week);
    let last_counts = counts(last_week);

    let mut changes = Vec::new();
    for emotion in Emotion::ALL {
        let this = this_counts.get(&emotion).copied().unwrap_or(0);
        let last = last_counts.get(&emotion).copied().unwrap_or(0);
        if this == 0 && last == 0 {
            continue;
        }
        changes.push(EmotionChange {
            emotion,
            this_week: this,
            last_week: last,
            change: this as i64 - last as i64,
        });
    }

    let positive_risers = changes
        .iter()
        .filter(|c| c.emotion.is_positive() && c.change > 0)
        .count();
    let negative_risers = changes
        .iter()
        .filter(|c| c.emotion.is_concerning() && c.change > 0)
        .count();

    let overall_trend = if positive_risers > negative_risers {
        Trend::Improving
    } else if negative_risers > positive_risers {
        Trend::Declining
    } else {
        Trend::Stable
    };

    WeeklyComparison {
        this_week_total: this_week.len(),
        last_week_total: last_week.len(),
        changes,
        overall_trend,
    }
}

fn counts(samples: &[EmotionSample]) -> HashMap<Emotion, u32> {
    let mut counts = HashMap::new();
    for sample in samples {
        *counts.entry(sample.emotion).or_insert(0u32) += 1;
    }
    counts
}

fn distribution(samples: &[EmotionSample]) -> Vec<(Emotion, u32)> {
    let mut order: Vec<Emotion> = Vec::new();
    let mut tally: HashMap<Emotion, u32> = HashMap::new();
    for sample in samples {
        let entry = tally.entry(sample.emotion).or_insert(0);
        if *entry == 0 {
            order.push(sample.emotion);
        }
        *entry += 1;
    }

    let mut distribution: Vec<(Emotion, u32)> =
        order.into_iter().map(|e| (e, tally[&e])).collect();
    // Stable sort keeps first-appearance order among equal counts.
    distribution.sort_by(|a, b| b.1.cmp(&a.1));
    distribution
}
