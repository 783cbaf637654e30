use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::voice::AnnouncePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    pub auto_speak: bool,
    pub language: String,
    pub cooldown_secs: u64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            auto_speak: true,
            language: "en".into(),
            cooldown_secs: 3,
        }
    }
}

impl SpeechSettings {
    pub fn announce_policy(&self) -> AnnouncePolicy {
        AnnouncePolicy::with_cooldown_secs(self.cooldown_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct UserSettings {
    speech: SpeechSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn speech(&self) -> SpeechSettings {
        self.data.read().unwrap().speech.clone()
    }

    pub fn update_speech(&self, settings: SpeechSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.speech = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        let speech = store.speech();
        assert!(speech.auto_speak);
        assert_eq!(speech.language, "en");
        assert_eq!(speech.cooldown_secs, 3);
    }

    #[test]
    fn updates_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store
            .update_speech(SpeechSettings {
                auto_speak: false,
                language: "hi".into(),
                cooldown_secs: 10,
            })
            .unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        let speech = reopened.speech();
        assert!(!speech.auto_speak);
        assert_eq!(speech.language, "hi");
        assert_eq!(speech.cooldown_secs, 10);
        assert_eq!(
            speech.announce_policy().cooldown,
            chrono::Duration::seconds(10)
        );
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert!(store.speech().auto_speak);
    }
}
