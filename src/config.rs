use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::audio::SoundLibrary;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to read sound library {path}: {source}")]
    SoundLibraryIo {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed sound library {path}: {source}")]
    SoundLibraryFormat {
        path: String,
        source: serde_json::Error,
    },
}

/// Starting values and tunables for a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub starting_score: i32,
    pub starting_lives: i32,
    /// How long score / life-lost popups stay up
    pub popup_close_delay: Duration,
    pub sounds: SoundLibrary,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_score: 0,
            starting_lives: 3,
            popup_close_delay: Duration::from_secs(1),
            sounds: SoundLibrary::default(),
        }
    }
}

impl GameConfig {
    /// Build a config from the process environment, falling back to defaults
    ///
    /// - `STARTING_SCORE`, `STARTING_LIVES`: non-negative integers
    /// - `POPUP_CLOSE_DELAY_MS`: milliseconds
    /// - `SOUND_LIBRARY_PATH`: JSON file with `[{"name": ..., "path": ...}]`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let starting_score =
            parse_var(&lookup, "STARTING_SCORE")?.unwrap_or(defaults.starting_score);
        let starting_lives =
            parse_var(&lookup, "STARTING_LIVES")?.unwrap_or(defaults.starting_lives);
        let popup_close_delay = parse_var::<u64, _>(&lookup, "POPUP_CLOSE_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.popup_close_delay);

        ensure_non_negative("STARTING_SCORE", starting_score)?;
        ensure_non_negative("STARTING_LIVES", starting_lives)?;

        let sounds = match lookup("SOUND_LIBRARY_PATH") {
            Some(path) => load_sound_library(&path)?,
            None => defaults.sounds,
        };

        debug!(
            starting_score = starting_score,
            starting_lives = starting_lives,
            popup_close_delay = ?popup_close_delay,
            clips = sounds.len(),
            "Loaded game config"
        );

        Ok(Self {
            starting_score,
            starting_lives,
            popup_close_delay,
            sounds,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}

fn ensure_non_negative(key: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < 0 {
        return Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn load_sound_library(path: &str) -> Result<SoundLibrary, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::SoundLibraryIo {
        path: path.to_string(),
        source,
    })?;

    SoundLibrary::from_json_str(&json).map_err(|source| ConfigError::SoundLibraryFormat {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.starting_score, 0);
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.popup_close_delay, Duration::from_secs(1));
        assert_eq!(config.sounds, SoundLibrary::default());
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("STARTING_SCORE", "10"),
            ("STARTING_LIVES", " 5 "),
            ("POPUP_CLOSE_DELAY_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.starting_score, 10);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.popup_close_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = GameConfig::from_lookup(lookup_from(&[("STARTING_LIVES", "three")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "STARTING_LIVES",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_start() {
        let result = GameConfig::from_lookup(lookup_from(&[("STARTING_SCORE", "-1")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_missing_sound_library_file() {
        let result = GameConfig::from_lookup(lookup_from(&[(
            "SOUND_LIBRARY_PATH",
            "/nonexistent/sounds.json",
        )]));
        assert!(matches!(result, Err(ConfigError::SoundLibraryIo { .. })));
    }

    #[test]
    fn test_sound_library_from_file() {
        let path = std::env::temp_dir().join(format!("sounds-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"[{"name": "Scored", "path": "sfx/coin.wav"}]"#).unwrap();

        let config = GameConfig::from_lookup(lookup_from(&[(
            "SOUND_LIBRARY_PATH",
            path.to_str().unwrap(),
        )]))
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.sounds.len(), 1);
        assert!(config.sounds.find("Scored").is_some());
        assert!(config.sounds.find("GameStart").is_none());
    }
}
