//! Prompt composition for the generation client.

use serde::{Deserialize, Serialize};

/// Output aspect ratio, as accepted by the generation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    Tall,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Tall => "3:4",
        }
    }
}

/// Style preset appended to every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    #[default]
    Photographic,
    Cinematic,
    DigitalArt,
    FantasyArt,
    Anime,
}

impl StylePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Photographic => "photographic",
            StylePreset::Cinematic => "cinematic",
            StylePreset::DigitalArt => "digital-art",
            StylePreset::FantasyArt => "fantasy-art",
            StylePreset::Anime => "anime",
        }
    }
}

/// One generation request as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptSpec {
    pub prompt: String,
    /// Concepts to steer away from; empty means none.
    pub negative_prompt: String,
    pub aspect_ratio: AspectRatio,
    pub style: StylePreset,
}

impl PromptSpec {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prompt.trim().is_empty()
    }

    /// The full prompt string sent to the client: the user prompt, the
    /// style flag, and the negative-prompt flag when one was given.
    pub fn full_prompt(&self) -> String {
        let mut full = format!("{} --style {}", self.prompt, self.style.as_str());
        if !self.negative_prompt.trim().is_empty() {
            full.push_str(" --no ");
            full.push_str(&self.negative_prompt);
        }
        full
    }
}
