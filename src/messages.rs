//! Canned bilingual mirror messages (English + romanized Hindi), one pool
//! per emotion.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::Emotion;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BilingualMessage {
    pub english: &'static str,
    pub hindi: &'static str,
}

const FALLBACK: (&str, &str) = ("Take care of yourself today.", "Aaj apna khayal rakhiye.");

const HAPPY: &[(&str, &str)] = &[
    (
        "You look happy today, keep it up!",
        "Aaj aap khush dikh rahe ho, aise hi bane rahiye!",
    ),
    (
        "Great positive energy detected!",
        "Bahut acchi positive energy dekhi ja rahi hai!",
    ),
    ("Your smile is contagious!", "Aapki muskurahat bahut pyaari hai!"),
    ("What a wonderful mood!", "Kitna sundar mood hai aapka!"),
    ("Keep spreading that joy!", "Is khushi ko failate rahiye!"),
];

const SAD: &[(&str, &str)] = &[
    (
        "You seem a bit down today, take care of yourself.",
        "Aaj aap thode udaas lag rahe ho, apna khayal rakhiye.",
    ),
    (
        "It's okay to feel low sometimes.",
        "Kabhi kabhi udaas feel karna normal hai.",
    ),
    (
        "Remember, this feeling will pass.",
        "Yaad rakhiye, ye feeling kuch samay baad chali jayegi.",
    ),
    (
        "You're stronger than you think.",
        "Aap jitna sochte hai usse zyada strong hai.",
    ),
    ("Tomorrow will be a better day.", "Kal ka din behtar hoga."),
];

const ANGRY: &[(&str, &str)] = &[
    (
        "You seem a bit stressed today, try some deep breathing.",
        "Aaj aap thode stressed lag rahe ho, gehri saans lene ki koshish kijiye.",
    ),
    (
        "Take a moment to calm down.",
        "Thoda sa shaant hone ki koshish kijiye.",
    ),
    (
        "Deep breaths can help reduce stress.",
        "Gehri saans lene se stress kam ho sakta hai.",
    ),
    (
        "Try counting to ten slowly.",
        "Das tak ginti karne ki koshish kijiye.",
    ),
    (
        "Channel this energy into something positive.",
        "Is energy ko kisi positive kaam me lagaye.",
    ),
];

const TIRED: &[(&str, &str)] = &[
    (
        "You look exhausted, please rest.",
        "Aap thake hue lag rahe ho, thoda aaram kijiye.",
    ),
    (
        "Consider taking a short break.",
        "Thoda sa break lene ki sochiye.",
    ),
    (
        "Make sure you're getting enough sleep.",
        "Puri neend lene ka khayal rakhiye.",
    ),
    (
        "Your body needs some rest.",
        "Aapke sharir ko aaram ki zarurat hai.",
    ),
    ("Hydrate and rest well.", "Paani piye aur acche se aaram kijiye."),
];

const NEUTRAL: &[(&str, &str)] = &[
    (
        "You look calm and centered today.",
        "Aaj aap shaant aur balanced lag rahe ho.",
    ),
    (
        "A steady mood is good for productivity.",
        "Steady mood productivity ke liye accha hai.",
    ),
    ("You seem well-balanced.", "Aap bilkul balanced lag rahe ho."),
    ("This stability is a strength.", "Ye stability ek strength hai."),
    (
        "Keep maintaining this balance.",
        "Is balance ko banakar rakhiye.",
    ),
];

const SURPRISED: &[(&str, &str)] = &[
    (
        "Life keeps you on your toes!",
        "Zindagi me surprises aate rahte hai!",
    ),
    (
        "Unexpected moments make life interesting.",
        "Achanak ke moments zindagi ko interesting banate hai.",
    ),
    (
        "Take time to process what just happened.",
        "Jo hua hai usse samjhne ke liye time lijiye.",
    ),
    ("Surprise can be energizing.", "Surprise energy de sakta hai."),
    (
        "Embrace the unexpected.",
        "Achanak ki cheezoo ko accept kijiye.",
    ),
];

fn pool_for(emotion: Emotion) -> &'static [(&'static str, &'static str)] {
    match emotion {
        Emotion::Happy => HAPPY,
        Emotion::Sad => SAD,
        Emotion::Angry => ANGRY,
        Emotion::Tired => TIRED,
        Emotion::Neutral => NEUTRAL,
        Emotion::Surprised => SURPRISED,
    }
}

pub fn message_for_with<R: Rng + ?Sized>(rng: &mut R, emotion: Emotion) -> BilingualMessage {
    let (english, hindi) = pool_for(emotion).choose(rng).copied().unwrap_or(FALLBACK);
    BilingualMessage { english, hindi }
}

pub fn message_for(emotion: Emotion) -> BilingualMessage {
    message_for_with(&mut rand::thread_rng(), emotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_emotion_has_a_message_pair() {
        let mut rng = StdRng::seed_from_u64(3);
        for emotion in Emotion::ALL {
            let message = message_for_with(&mut rng, emotion);
            assert!(!message.english.is_empty());
            assert!(!message.hindi.is_empty());
        }
    }

    #[test]
    fn messages_come_from_the_emotion_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let message = message_for_with(&mut rng, Emotion::Sad);
            assert!(SAD
                .iter()
                .any(|&(en, hi)| en == message.english && hi == message.hindi));
        }
    }
}
