// Text panel
use serde::{Deserialize, Serialize};

use crate::domain::field::nullable;
use crate::domain::general_options::GeneralOptions;

/// Rendering mode. Values the product adds later are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextMode {
    #[default]
    Markdown,
    Html,
    Text,
    Other(String),
}

impl From<String> for TextMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "markdown" => TextMode::Markdown,
            "html" => TextMode::Html,
            "text" => TextMode::Text,
            _ => TextMode::Other(mode),
        }
    }
}

impl From<TextMode> for String {
    fn from(mode: TextMode) -> Self {
        match mode {
            TextMode::Markdown => "markdown".to_string(),
            TextMode::Html => "html".to_string(),
            TextMode::Text => "text".to_string(),
            TextMode::Other(mode) => mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextPanel {
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub mode: TextMode,

    #[serde(skip)]
    pub general: GeneralOptions,
}

impl TextPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_modes() {
        let panel: TextPanel = serde_json::from_value(json!({"mode": "html"})).unwrap();
        assert_eq!(panel.mode, TextMode::Html);
        assert_eq!(serde_json::to_value(&panel).unwrap()["mode"], "html");
    }

    #[test]
    fn test_unknown_mode_is_kept() {
        let panel: TextPanel =
            serde_json::from_value(json!({"mode": "iframe", "content": null})).unwrap();
        assert_eq!(panel.mode, TextMode::Other("iframe".to_string()));
        assert_eq!(panel.content, "");
        assert_eq!(serde_json::to_value(&panel).unwrap()["mode"], "iframe");
    }

    #[test]
    fn test_null_mode_is_default() {
        let panel: TextPanel = serde_json::from_value(json!({"mode": null})).unwrap();
        assert_eq!(panel.mode, TextMode::Markdown);
    }
}
