use serde::Deserialize;

const DEFAULT_TRIGGER: &str = "#";
const DEFAULT_SEPARATOR: &str = " ";

/// Hashtag detection settings. Empty strings fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashtagConfig {
    pub trigger: String,
    pub separator: String,
}

impl Default for HashtagConfig {
    fn default() -> Self {
        HashtagConfig {
            trigger: DEFAULT_TRIGGER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl HashtagConfig {
    pub fn trigger(&self) -> &str {
        if self.trigger.is_empty() {
            DEFAULT_TRIGGER
        } else {
            &self.trigger
        }
    }

    pub fn separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }
}

/// Document-wide rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Hashtag detection; `None` disables it.
    pub hashtag: Option<HashtagConfig>,
    /// Add `dir = "auto"` to every block and list item.
    pub directional: bool,
}

impl RenderOptions {
    pub fn with_hashtags(mut self, config: HashtagConfig) -> Self {
        self.hashtag = Some(config);
        self
    }

    pub fn with_directional(mut self, directional: bool) -> Self {
        self.directional = directional;
        self
    }
}
