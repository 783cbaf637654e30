//! Fixed tip pools, grouped per emotion into escalation tiers. Selection is
//! uniform-random within a pool; the tier is chosen by the selector from the
//! pattern snapshot.

use crate::models::Emotion;

pub const FALLBACK: &str = "Take care of yourself today. 💚";

const SAD_IMMEDIATE: &[&str] = &[
    "💙 It's okay to feel down sometimes. Be gentle with yourself.",
    "🤗 Consider reaching out to a friend or loved one for support.",
    "🌿 Try some light exercise or go for a walk in nature.",
    "🛁 Practice self-care: take a warm bath, listen to music, or read.",
    "📝 Sometimes journaling your thoughts can help process feelings.",
];

const SAD_PERSISTENT: &[&str] = &[
    "💙 You've been feeling down lately. Consider talking to a counselor or therapist.",
    "🎵 Music therapy might help - create a playlist of uplifting songs.",
    "🧘 Try mindfulness or meditation apps for emotional balance.",
    "🌅 Establishing a morning routine can help stabilize your mood.",
    "👥 Consider joining a support group or community activity.",
];

const SAD_SEVERE: &[&str] = &[
    "💙 You've been experiencing sadness frequently. Please consider professional support.",
    "📞 Reach out to a mental health professional - you don't have to handle this alone.",
    "🆘 If you're having thoughts of self-harm, please contact a crisis helpline immediately.",
    "👨‍⚕️ Talk to your doctor about how you've been feeling lately.",
    "🤝 Lean on your support network - friends and family want to help.",
];

const ANGRY_IMMEDIATE: &[&str] = &[
    "😤 Take a deep breath. Try counting to 10 or the 4-7-8 breathing technique.",
    "🏃 Physical exercise can be a great outlet for angry energy.",
    "🚶 Step away from stressful situations if possible.",
    "💪 Try progressive muscle relaxation: tense and release muscle groups.",
    "🧘 Channel this energy productively - clean, organize, or workout.",
];

const ANGRY_FREQUENT: &[&str] = &[
    "😤 You've been stressed frequently. Consider stress management techniques.",
    "🧘 Regular meditation or yoga might help manage anger triggers.",
    "📝 Keep an anger journal to identify patterns and triggers.",
    "🎯 Consider anger management strategies or counseling.",
    "💤 Ensure you're getting enough sleep - fatigue increases irritability.",
];

const ANGRY_CHRONIC: &[&str] = &[
    "😤 Chronic stress detected. Consider professional stress management support.",
    "🏥 Talk to a healthcare provider about stress-related health impacts.",
    "🧠 Cognitive behavioral therapy can be very effective for anger management.",
    "⚖️ Work-life balance assessment might be needed.",
    "🌱 Consider lifestyle changes to reduce chronic stressors.",
];

const TIRED_IMMEDIATE: &[&str] = &[
    "😴 You look exhausted! Consider a 10-20 minute power nap if possible.",
    "💧 Make sure you're staying hydrated and eating regular meals.",
    "🌬️ Try some gentle stretching or step outside for fresh air.",
    "☕ Check your caffeine timing - avoid late-day caffeine.",
    "🛏️ Prioritize rest today and plan for better sleep tonight.",
];

const TIRED_FREQUENT: &[&str] = &[
    "😴 You've been tired frequently. Review your sleep hygiene habits.",
    "📱 Consider limiting screen time before bed for better sleep quality.",
    "🏃 Regular exercise can improve energy levels and sleep quality.",
    "🍎 Evaluate your diet - proper nutrition affects energy levels.",
    "⏰ Try to maintain consistent sleep and wake times.",
];

const TIRED_CHRONIC: &[&str] = &[
    "😴 Chronic fatigue detected. Consider consulting a healthcare provider.",
    "🏥 Rule out underlying health conditions that might cause fatigue.",
    "🧪 Consider a sleep study if sleep issues persist.",
    "💊 Review medications with your doctor - some can cause fatigue.",
    "🧘 Stress and mental health can significantly impact energy levels.",
];

const HAPPY_MAINTAIN: &[&str] = &[
    "🌟 You're radiating positive energy! Keep doing what you're doing.",
    "😊 Your happiness is wonderful! Share it with others - it's contagious.",
    "✨ Great mood detected! Use this energy for creative activities.",
    "🎉 You look fantastic! Remember what contributed to this mood.",
    "💫 Perfect time to tackle challenging tasks you've been avoiding.",
];

const HAPPY_BUILD_ON: &[&str] = &[
    "🌱 Consider starting a new positive habit while you're feeling great!",
    "📝 Journal about what's making you happy to remember for tough days.",
    "🤝 Reach out to someone you care about and spread the joy.",
    "🎯 Set a meaningful goal while your confidence is high.",
    "💪 This is a great time to try something new or challenging.",
];

const NEUTRAL_STABLE: &[&str] = &[
    "😐 You seem balanced today. This stability is a strength.",
    "⚖️ Steady mood is great for productivity and decision-making.",
    "🧘 Use this calm state for reflection or planning.",
    "📚 Good time for learning or tackling detail-oriented tasks.",
    "🎯 Consider setting goals or organizing your priorities.",
];

const SURPRISED_PROCESS: &[&str] = &[
    "😮 Life keeps you on your toes! Take time to process unexpected events.",
    "🧘 Use grounding techniques if the surprise was overwhelming.",
    "🎢 Embrace life's unpredictability when you can.",
    "📝 Journal about unexpected events to process them better.",
    "🌟 Surprise can bring excitement and new opportunities.",
];

/// Default tier shown when no pattern escalates the tip.
pub fn default_pool(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Sad => SAD_IMMEDIATE,
        Emotion::Angry => ANGRY_IMMEDIATE,
        Emotion::Tired => TIRED_IMMEDIATE,
        Emotion::Happy => HAPPY_MAINTAIN,
        Emotion::Neutral => NEUTRAL_STABLE,
        Emotion::Surprised => SURPRISED_PROCESS,
    }
}

/// Intermediate tier for a moderate concern pattern. Non-concerning emotions
/// fall back to their default pool.
pub fn escalated_pool(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Sad => SAD_PERSISTENT,
        Emotion::Angry => ANGRY_FREQUENT,
        Emotion::Tired => TIRED_FREQUENT,
        other => default_pool(other),
    }
}

/// Severest tier for a high concern pattern.
pub fn severe_pool(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Sad => SAD_SEVERE,
        Emotion::Angry => ANGRY_CHRONIC,
        Emotion::Tired => TIRED_CHRONIC,
        other => default_pool(other),
    }
}

/// Celebratory tier for a sustained positive streak.
pub fn celebration_pool() -> &'static [&'static str] {
    HAPPY_BUILD_ON
}
