//! Visual value types: style tags, generation results and archived records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual style applied during image generation.
///
/// A closed set; unknown wire values are rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    /// Photographic realism. The default when the caller omits a style.
    #[default]
    Photorealistic,
    /// Japanese animation aesthetics.
    Anime,
    /// Soft watercolor painting.
    Watercolor,
    /// Classical oil painting.
    OilPainting,
    /// Neon-lit futurism.
    Cyberpunk,
    /// Pencil sketch.
    Sketch,
}

impl StyleTag {
    /// Returns the wire representation of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Photorealistic => "photorealistic",
            StyleTag::Anime => "anime",
            StyleTag::Watercolor => "watercolor",
            StyleTag::OilPainting => "oil-painting",
            StyleTag::Cyberpunk => "cyberpunk",
            StyleTag::Sketch => "sketch",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StyleTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photorealistic" => Ok(StyleTag::Photorealistic),
            "anime" => Ok(StyleTag::Anime),
            "watercolor" => Ok(StyleTag::Watercolor),
            "oil-painting" => Ok(StyleTag::OilPainting),
            "cyberpunk" => Ok(StyleTag::Cyberpunk),
            "sketch" => Ok(StyleTag::Sketch),
            other => Err(format!("unknown style tag: {}", other)),
        }
    }
}

/// Result of one enhance-then-generate pipeline run. Transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVisual {
    /// Enhanced prompt actually submitted to the image model.
    pub enhanced_prompt: String,
    /// Generated image as a base64 data URI.
    pub image: String,
}

/// Store-assigned identity of an archived visual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualId(String);

impl VisualId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An archived visual as held by the document store.
///
/// Created on explicit user action, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualRecord {
    /// Store-assigned identity.
    pub id: VisualId,
    /// The original user prompt.
    pub prompt: String,
    /// Generated image as a base64 data URI.
    pub image: String,
    /// Enhanced prompt used for generation.
    pub enhanced_prompt: String,
    /// Mermaid diagram source.
    pub mermaid_code: String,
    /// Style the image was generated with.
    pub style: StyleTag,
    /// Display name of the archivist.
    pub saved_by: String,
    /// Creation timestamp, assigned by the store.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tag_default_is_photorealistic() {
        assert_eq!(StyleTag::default(), StyleTag::Photorealistic);
    }

    #[test]
    fn style_tag_serializes_kebab_case() {
        let json = serde_json::to_string(&StyleTag::OilPainting).unwrap();
        assert_eq!(json, "\"oil-painting\"");

        let json = serde_json::to_string(&StyleTag::Anime).unwrap();
        assert_eq!(json, "\"anime\"");
    }

    #[test]
    fn style_tag_rejects_unknown_values() {
        let result: Result<StyleTag, _> = serde_json::from_str("\"vaporwave\"");
        assert!(result.is_err());
    }

    #[test]
    fn style_tag_round_trips_through_from_str() {
        for tag in [
            StyleTag::Photorealistic,
            StyleTag::Anime,
            StyleTag::Watercolor,
            StyleTag::OilPainting,
            StyleTag::Cyberpunk,
            StyleTag::Sketch,
        ] {
            assert_eq!(tag.as_str().parse::<StyleTag>().unwrap(), tag);
        }
    }

    #[test]
    fn visual_record_serializes_camel_case() {
        let record = VisualRecord {
            id: VisualId::new("abc"),
            prompt: "a fox".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
            enhanced_prompt: "a fox, detailed".to_string(),
            mermaid_code: "graph TD".to_string(),
            style: StyleTag::Anime,
            saved_by: "io".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("enhancedPrompt"));
        assert!(json.contains("mermaidCode"));
        assert!(json.contains("savedBy"));
        assert!(json.contains("createdAt"));
    }
}
