use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Language the model is asked to answer in. Allergen matching itself is English-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OutputLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "ru")]
    Russian,
}

impl OutputLanguage {
    pub fn code(&self) -> &str {
        match self {
            OutputLanguage::English => "en",
            OutputLanguage::Spanish => "es",
            OutputLanguage::Hindi => "hi",
            OutputLanguage::Arabic => "ar",
            OutputLanguage::Portuguese => "pt",
            OutputLanguage::Bengali => "bn",
            OutputLanguage::Russian => "ru",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Spanish => "Spanish",
            OutputLanguage::Hindi => "Hindi",
            OutputLanguage::Arabic => "Arabic",
            OutputLanguage::Portuguese => "Portuguese",
            OutputLanguage::Bengali => "Bengali",
            OutputLanguage::Russian => "Russian",
        }
    }
}

impl From<&str> for OutputLanguage {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "es" => OutputLanguage::Spanish,
            "hi" => OutputLanguage::Hindi,
            "ar" => OutputLanguage::Arabic,
            "pt" => OutputLanguage::Portuguese,
            "bn" => OutputLanguage::Bengali,
            "ru" => OutputLanguage::Russian,
            _ => OutputLanguage::English,
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What the user pointed the scanner at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelInput {
    Image { data: Vec<u8>, mime_type: String },
    Text(String),
}

impl LabelInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LabelInput::Text(text) => Some(text),
            LabelInput::Image { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeLabelInput {
    pub label: LabelInput,
    pub allergen_ids: Vec<String>,
    pub language: Option<OutputLanguage>,
    pub product_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(OutputLanguage::from("es"), OutputLanguage::Spanish);
        assert_eq!(OutputLanguage::from(" RU "), OutputLanguage::Russian);
        assert_eq!(OutputLanguage::from("xx"), OutputLanguage::English);
    }

    #[test]
    fn test_language_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&OutputLanguage::Bengali).unwrap(),
            "\"bn\""
        );
        let parsed: OutputLanguage = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(parsed, OutputLanguage::Portuguese);
        assert_eq!(parsed.display_name(), "Portuguese");
    }
}
