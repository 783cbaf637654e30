use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::config::AnalysisConfig;
use crate::analysis::trend::classify_trend;
use crate::models::{Emotion, EmotionSample};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    None,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyBand {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    Stable,
    FrequentNegative,
    PersistentNegative,
    PositiveStreak,
}

/// Derived summary of recent emotional trends, computed fresh for each tip
/// decision. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatternSnapshot {
    pub current_emotion: Emotion,
    pub dominant_emotion: Emotion,
    pub frequency_ratio: f64,
    pub frequency: FrequencyBand,
    pub consecutive_concern_days: u32,
    pub pattern: PatternKind,
    pub concern: ConcernLevel,
    pub trend: Trend,
}

impl PatternSnapshot {
    /// Safe default for an empty window or a failed history read.
    pub fn empty(current_emotion: Emotion) -> Self {
        Self {
            current_emotion,
            dominant_emotion: Emotion::Neutral,
            frequency_ratio: 0.0,
            frequency: FrequencyBand::Low,
            consecutive_concern_days: 0,
            pattern: PatternKind::Stable,
            concern: ConcernLevel::None,
            trend: Trend::Stable,
        }
    }
}

/// Analyze a recent window against a longer comparison window. Both slices
/// are expected newest-first, the way the store returns them; `longer`
/// contains the recent window as its prefix.
pub fn analyze(
    recent: &[EmotionSample],
    longer: &[EmotionSample],
    current: Emotion,
    config: &AnalysisConfig,
) -> PatternSnapshot {
    if recent.is_empty() {
        return PatternSnapshot::empty(current);
    }

    let dominant_emotion = dominant(recent).unwrap_or(Emotion::Neutral);

    let mut consecutive_concern_days = 0;
    let mut pattern = PatternKind::Stable;
    let mut concern = ConcernLevel::None;

    if current.is_concerning() {
        consecutive_concern_days = consecutive_days(recent, |emotion| emotion.is_concerning());
        if consecutive_concern_days >= config.high_concern_days {
            concern = ConcernLevel::High;
            pattern = PatternKind::PersistentNegative;
        } else if consecutive_concern_days >= config.moderate_concern_days {
            concern = ConcernLevel::Moderate;
            pattern = PatternKind::FrequentNegative;
        }
    }

    if current == Emotion::Happy {
        let happy_days = consecutive_days(recent, |emotion| emotion == Emotion::Happy);
        if happy_days >= config.positive_streak_days {
            pattern = PatternKind::PositiveStreak;
        }
    }

    let matching = recent.iter().filter(|s| s.emotion == current).count();
    let frequency_ratio = matching as f64 / recent.len() as f64;
    let frequency = if frequency_ratio > config.high_frequency {
        FrequencyBand::High
    } else if frequency_ratio > config.moderate_frequency {
        FrequencyBand::Moderate
    } else {
        FrequencyBand::Low
    };

    PatternSnapshot {
        current_emotion: current,
        dominant_emotion,
        frequency_ratio,
        frequency,
        consecutive_concern_days,
        pattern,
        concern,
        trend: classify_trend(recent, longer),
    }
}

/// Most frequent emotion; ties go to the one seen first (stable insertion
/// order).
fn dominant(samples: &[EmotionSample]) -> Option<Emotion> {
    let mut order: Vec<Emotion> = Vec::new();
    let mut counts: HashMap<Emotion, usize> = HashMap::new();
    for sample in samples {
        let entry = counts.entry(sample.emotion).or_insert(0);
        if *entry == 0 {
            order.push(sample.emotion);
        }
        *entry += 1;
    }

    let mut best: Option<(Emotion, usize)> = None;
    for emotion in order {
        let count = counts[&emotion];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((emotion, count));
        }
    }
    best.map(|(emotion, _)| emotion)
}

/// Count trailing calendar days (newest-first) where at least one sample
/// matches, stopping at the first day none does.
fn consecutive_days(samples: &[EmotionSample], matches: impl Fn(Emotion) -> bool) -> u32 {
    let mut days = 0;
    let mut idx = 0;
    while idx < samples.len() {
        let day = samples[idx].date;
        let mut any = false;
        while idx < samples.len() && samples[idx].date == day {
            if matches(samples[idx].emotion) {
                any = true;
            }
            idx += 1;
        }
        if !any {
            break;
        }
        days += 1;
    }
    days
}
