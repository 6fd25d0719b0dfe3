use serde::{Deserialize, Serialize};

/// Clip names the audio listener asks for
pub const GAME_START_SOUND: &str = "GameStart";
pub const SCORED_SOUND: &str = "Scored";
pub const LIFE_LOST_SOUND: &str = "LifeLost";
pub const GAME_END_SOUND: &str = "GameEnd";
pub const TRANSITION_SOUND: &str = "Transition";

/// A named sound asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    pub name: String,
    /// Where the asset lives; playback backends decide what to do with it
    #[serde(default)]
    pub path: Option<String>,
}

impl AudioClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// The configured list of clips, searched by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundLibrary {
    clips: Vec<AudioClip>,
}

impl SoundLibrary {
    pub fn new(clips: Vec<AudioClip>) -> Self {
        Self { clips }
    }

    /// Parse a JSON array of `{"name": ..., "path": ...}` entries
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// First clip whose name matches exactly
    pub fn find(&self, name: &str) -> Option<&AudioClip> {
        self.clips.iter().find(|clip| clip.name == name)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl Default for SoundLibrary {
    fn default() -> Self {
        Self::new(
            [
                GAME_START_SOUND,
                SCORED_SOUND,
                LIFE_LOST_SOUND,
                GAME_END_SOUND,
                TRANSITION_SOUND,
            ]
            .into_iter()
            .map(AudioClip::new)
            .collect(),
        )
    }
}
