//! Builder configuration

use serde::{Deserialize, Serialize};

const DEFAULT_TAG: &str = "div";
const SVG_TAG: &str = "svg";

/// Builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Tag used when a call names none
    pub default_tag: String,

    /// Markup-root tag for namespaced (SVG) construction
    pub svg_tag: String,
}

impl BuilderConfig {
    /// Default tag, never empty
    pub fn default_tag(&self) -> &str {
        non_empty_or(&self.default_tag, DEFAULT_TAG)
    }

    /// SVG root tag, never empty
    pub fn svg_tag(&self) -> &str {
        non_empty_or(&self.svg_tag, SVG_TAG)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() { fallback } else { value }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            svg_tag: SVG_TAG.to_string(),
        }
    }
}
