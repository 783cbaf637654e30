//! The speak-trigger decision for the mirror's voice line. Playback itself
//! runs on an external worker; this module only decides whether a freshly
//! detected emotion should be announced, with the previous announcement and
//! the clock passed in explicitly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Emotion;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub emotion: Emotion,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncePolicy {
    pub cooldown: Duration,
}

impl Default for AnnouncePolicy {
    fn default() -> Self {
        Self {
            cooldown: Duration::seconds(3),
        }
    }
}

impl AnnouncePolicy {
    pub fn with_cooldown_secs(secs: u64) -> Self {
        Self {
            cooldown: Duration::seconds(secs.min(i64::MAX as u64) as i64),
        }
    }

    /// Announce only when the emotion changed since the last announcement
    /// AND the cooldown has elapsed. The first detection always speaks.
    pub fn should_announce(
        &self,
        emotion: Emotion,
        last: Option<&Announcement>,
        now: DateTime<Utc>,
    ) -> bool {
        match last {
            None => true,
            Some(previous) => emotion != previous.emotion && now - previous.at > self.cooldown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_750_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn first_detection_always_announces() {
        let policy = AnnouncePolicy::default();
        assert!(policy.should_announce(Emotion::Happy, None, at(0)));
    }

    #[test]
    fn unchanged_emotion_stays_silent() {
        let policy = AnnouncePolicy::default();
        let last = Announcement {
            emotion: Emotion::Happy,
            at: at(0),
        };
        assert!(!policy.should_announce(Emotion::Happy, Some(&last), at(60)));
    }

    #[test]
    fn changed_emotion_inside_cooldown_stays_silent() {
        let policy = AnnouncePolicy::default();
        let last = Announcement {
            emotion: Emotion::Happy,
            at: at(0),
        };
        assert!(!policy.should_announce(Emotion::Sad, Some(&last), at(2)));
    }

    #[test]
    fn changed_emotion_after_cooldown_announces() {
        let policy = AnnouncePolicy::default();
        let last = Announcement {
            emotion: Emotion::Happy,
            at: at(0),
        };
        assert!(policy.should_announce(Emotion::Sad, Some(&last), at(4)));
    }

    #[test]
    fn custom_cooldown_is_respected() {
        let policy = AnnouncePolicy::with_cooldown_secs(10);
        let last = Announcement {
            emotion: Emotion::Happy,
            at: at(0),
        };
        assert!(!policy.should_announce(Emotion::Sad, Some(&last), at(8)));
        assert!(policy.should_announce(Emotion::Sad, Some(&last), at(11)));
    }
}
