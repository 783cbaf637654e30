use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::{ConcernLevel, PatternKind, PatternSnapshot};
use crate::models::Emotion;
use crate::tips::catalog;

/// Drives UI styling only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Urgent,
    Attention,
    Celebrate,
    Normal,
}

impl TipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Urgent => "urgent",
            TipCategory::Attention => "attention",
            TipCategory::Celebrate => "celebrate",
            TipCategory::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub text: &'static str,
    pub category: TipCategory,
}

/// Pick a tip for the current emotion given the pattern snapshot. Priority:
/// high concern, then moderate concern, then a positive streak, then the
/// emotion's default tier.
pub fn select_tip_with<R: Rng + ?Sized>(
    rng: &mut R,
    emotion: Emotion,
    snapshot: &PatternSnapshot,
) -> Tip {
    let (pool, category) = if snapshot.concern == ConcernLevel::High && emotion.is_concerning() {
        (catalog::severe_pool(emotion), TipCategory::Urgent)
    } else if snapshot.concern == ConcernLevel::Moderate && emotion.is_concerning() {
        (catalog::escalated_pool(emotion), TipCategory::Attention)
    } else if snapshot.pattern == PatternKind::PositiveStreak {
        (catalog::celebration_pool(), TipCategory::Celebrate)
    } else {
        (catalog::default_pool(emotion), TipCategory::Normal)
    };

    Tip {
        text: pool.choose(rng).copied().unwrap_or(catalog::FALLBACK),
        category,
    }
}

pub fn select_tip(emotion: Emotion, snapshot: &PatternSnapshot) -> Tip {
    select_tip_with(&mut rand::thread_rng(), emotion, snapshot)
}
