use crate::overlay::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-control watermark declaration.
///
/// Everything defaults to off/empty, so a declaration only needs to spell
/// out what it uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatermarkOptions {
    /// Turns the behavior on for the control these options are attached to.
    #[serde(default)]
    pub enabled: bool,
    /// Text shown by the text-overlay path.
    #[serde(default)]
    pub watermark_text: String,
    /// Caller-supplied visual; takes precedence over `watermark_text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark_element: Option<Element>,
    /// Explicit property tested for emptiness. When absent (or blank) the
    /// generic capability fallback is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emptiness_property: Option<String>,
}

impl WatermarkOptions {
    /// Convenience constructor for the common text-watermark case.
    pub fn text(watermark_text: impl Into<String>) -> Self {
        Self {
            enabled: true,
            watermark_text: watermark_text.into(),
            ..Self::default()
        }
    }

    /// The declared emptiness property, normalized: blank and
    /// whitespace-only names count as undeclared.
    pub fn declared_property(&self) -> Option<&str> {
        self.emptiness_property
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Watermark declarations for a whole view, keyed by the host's name for
/// each control. The host resolves names to live control instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    pub controls: HashMap<String, WatermarkOptions>,
}

impl Declarations {
    /// Load declarations from a JSON file. A missing or empty file yields
    /// the default (no declarations) rather than an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
