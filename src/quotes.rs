//! Motivational quotes for the mirror's idle display. A quote is chosen with
//! the same preference cascade the mirror always used: sometimes one tuned
//! to the current emotion, usually one for the time of day, otherwise a
//! general motivational or wellness line.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Emotion;

/// Probability of preferring an emotion-specific quote when one exists.
const EMOTION_QUOTE_CHANCE: f64 = 0.3;
/// Probability of preferring a time-of-day quote.
const PERIOD_QUOTE_CHANCE: f64 = 0.6;

pub const FALLBACK_QUOTE: &str =
    "🌟 'Take care of yourself today. You are worth it.' - Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

/// Map an hour of day (0-23) to a display period.
pub fn period_of(hour: u32) -> DayPeriod {
    match hour {
        5..=11 => DayPeriod::Morning,
        12..=16 => DayPeriod::Afternoon,
        _ => DayPeriod::Evening,
    }
}

const MORNING: &[&str] = &[
    "🌅 'Today is a new beginning. Make it count!' - Unknown",
    "☀️ 'Every morning is a chance to rewrite your story.' - Anonymous",
    "🌟 'Rise up and attack the day with enthusiasm!' - Unknown",
    "💫 'Wake up with determination. Go to bed with satisfaction.' - Unknown",
];

const AFTERNOON: &[&str] = &[
    "💪 'Success is the sum of small efforts repeated day in and day out.' - Robert Collier",
    "⚡ 'Energy and persistence conquer all things.' - Benjamin Franklin",
    "🚀 'Don't watch the clock; do what it does. Keep going.' - Sam Levenson",
    "💎 'Difficult roads often lead to beautiful destinations.' - Zig Ziglar",
];

const EVENING: &[&str] = &[
    "🌙 'Rest when you're weary. Refresh and renew yourself.' - Unknown",
    "💤 'Sleep is the best meditation.' - Dalai Lama",
    "🌟 'End your day with gratitude and begin tomorrow with hope.' - Unknown",
    "🌃 'As the sun sets, let your worries fade away.' - Anonymous",
];

const MOTIVATIONAL: &[&str] = &[
    "💪 'Believe you can and you're halfway there.' - Theodore Roosevelt",
    "🎯 'The only impossible journey is the one you never begin.' - Tony Robbins",
    "🌱 'Progress, not perfection.' - Unknown",
    "✨ 'Self-care is not selfish. You cannot serve from an empty vessel.' - Eleanor Brown",
];

const WELLNESS: &[&str] = &[
    "🧘 'Peace comes from within. Do not seek it without.' - Buddha",
    "💚 'Take care of your body. It's the only place you have to live.' - Jim Rohn",
    "🌊 'You can't calm the storm, so stop trying. Calm yourself and the storm will pass.' - Timber Hawkeye",
    "🌺 'Healing takes time, and asking for help is a courageous step.' - Mariska Hargitay",
];

const HAPPY_QUOTES: &[&str] = &[
    "😊 'Happiness is not something ready-made. It comes from your own actions.' - Dalai Lama",
    "✨ 'Joy is the simplest form of gratitude.' - Karl Barth",
    "🌟 'Happiness radiates like the fragrance from a flower.' - Unknown",
];

const SAD_QUOTES: &[&str] = &[
    "💙 'It's okay not to be okay. Just don't give up.' - Unknown",
    "🌱 'Even the darkest night will end and the sun will rise.' - Victor Hugo",
    "💫 'Your current situation is not your final destination.' - Unknown",
];

const ANGRY_QUOTES: &[&str] = &[
    "🌬️ 'When anger rises, think of the consequences.' - Confucius",
    "🧘 'You will not be punished for your anger, you will be punished by your anger.' - Buddha",
    "⚡ 'Channel your anger into positive action.' - Unknown",
];

const TIRED_QUOTES: &[&str] = &[
    "😴 'Rest is not idleness, it is restoration.' - Unknown",
    "🛌 'Sleep is the golden chain that ties health and our bodies together.' - Thomas Dekker",
    "🌙 'Your body needs rest. Your mind needs peace.' - Unknown",
];

const NEUTRAL_QUOTES: &[&str] = &[
    "⚖️ 'Sometimes the most productive thing you can do is relax.' - Mark Black",
    "🌊 'Calm minds bring inner strength and self-confidence.' - Dalai Lama",
    "🕯️ 'Quiet the mind and the soul will speak.' - Unknown",
];

fn period_pool(period: DayPeriod) -> &'static [&'static str] {
    match period {
        DayPeriod::Morning => MORNING,
        DayPeriod::Afternoon => AFTERNOON,
        DayPeriod::Evening => EVENING,
    }
}

fn emotion_pool(emotion: Emotion) -> Option<&'static [&'static str]> {
    match emotion {
        Emotion::Happy => Some(HAPPY_QUOTES),
        Emotion::Sad => Some(SAD_QUOTES),
        Emotion::Angry => Some(ANGRY_QUOTES),
        Emotion::Tired => Some(TIRED_QUOTES),
        Emotion::Neutral => Some(NEUTRAL_QUOTES),
        Emotion::Surprised => None,
    }
}

pub fn quote_for_with<R: Rng + ?Sized>(
    rng: &mut R,
    period: DayPeriod,
    emotion: Option<Emotion>,
) -> &'static str {
    if let Some(pool) = emotion.and_then(emotion_pool) {
        if rng.gen::<f64>() < EMOTION_QUOTE_CHANCE {
            return pool.choose(rng).copied().unwrap_or(FALLBACK_QUOTE);
        }
    }

    if rng.gen::<f64>() < PERIOD_QUOTE_CHANCE {
        return period_pool(period).choose(rng).copied().unwrap_or(FALLBACK_QUOTE);
    }

    let general = if rng.gen_bool(0.5) { MOTIVATIONAL } else { WELLNESS };
    general.choose(rng).copied().unwrap_or(FALLBACK_QUOTE)
}

pub fn quote_for(period: DayPeriod, emotion: Option<Emotion>) -> &'static str {
    quote_for_with(&mut rand::thread_rng(), period, emotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hour_boundaries_map_to_periods() {
        assert_eq!(period_of(5), DayPeriod::Morning);
        assert_eq!(period_of(11), DayPeriod::Morning);
        assert_eq!(period_of(12), DayPeriod::Afternoon);
        assert_eq!(period_of(16), DayPeriod::Afternoon);
        assert_eq!(period_of(17), DayPeriod::Evening);
        assert_eq!(period_of(0), DayPeriod::Evening);
    }

    #[test]
    fn always_produces_a_quote() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let quote = quote_for_with(&mut rng, DayPeriod::Morning, Some(Emotion::Surprised));
            assert!(!quote.is_empty());
        }
    }
}
