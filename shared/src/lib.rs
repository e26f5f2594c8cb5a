use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// OCR language selected for a batch, submitted as the form's `language` field.
/// Codes follow the server's Tesseract language identifiers.
#[derive(
    Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default, Display, EnumString, EnumIter,
)]
pub enum MenuLanguage {
    #[default]
    #[serde(rename = "spa")]
    #[strum(serialize = "spa")]
    Spanish,
    #[serde(rename = "eng")]
    #[strum(serialize = "eng")]
    English,
    #[serde(rename = "fra")]
    #[strum(serialize = "fra")]
    French,
    #[serde(rename = "ita")]
    #[strum(serialize = "ita")]
    Italian,
    #[serde(rename = "por")]
    #[strum(serialize = "por")]
    Portuguese,
    #[serde(rename = "cat")]
    #[strum(serialize = "cat")]
    Catalan,
    #[serde(rename = "deu")]
    #[strum(serialize = "deu")]
    German,
}

impl MenuLanguage {
    /// Human-readable label for the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            MenuLanguage::Spanish => "Spanish",
            MenuLanguage::English => "English",
            MenuLanguage::French => "French",
            MenuLanguage::Italian => "Italian",
            MenuLanguage::Portuguese => "Portuguese",
            MenuLanguage::Catalan => "Catalan",
            MenuLanguage::German => "German",
        }
    }
}

/// Export flavor offered by the server's `/download/<format>` endpoints.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString, EnumIter)]
pub enum ExportFormat {
    #[serde(rename = "csv")]
    #[strum(serialize = "csv")]
    Csv,
    #[serde(rename = "json")]
    #[strum(serialize = "json")]
    Json,
    #[serde(rename = "hierarchical_json")]
    #[strum(serialize = "hierarchical_json")]
    HierarchicalJson,
}

impl ExportFormat {
    /// Link to the server's download endpoint for this format. The export
    /// files themselves are generated server-side.
    pub fn download_href(&self) -> String {
        format!("/download/{self}")
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::HierarchicalJson => "Hierarchical JSON",
        }
    }
}

/// Severity of a one-shot banner message. The slug doubles as the CSS class
/// the page styles banners with.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
pub enum FlashSeverity {
    #[serde(rename = "success")]
    #[strum(serialize = "success")]
    Success,
    #[serde(rename = "info")]
    #[strum(serialize = "info")]
    Info,
    #[serde(rename = "warning")]
    #[strum(serialize = "warning")]
    Warning,
    #[serde(rename = "error")]
    #[strum(serialize = "error")]
    Error,
}

/// A dismissible banner message.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct FlashMessage {
    pub severity: FlashSeverity,
    pub text: String,
}

impl FlashMessage {
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage {
            severity: FlashSeverity::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        FlashMessage {
            severity: FlashSeverity::Info,
            text: text.into(),
        }
    }
}

/// Per-batch statistics the server reports after processing. The client only
/// displays these; it never computes them.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct BatchStats {
    pub image_count: usize,
    pub category_count: usize,
    pub item_count: usize,
    pub min_price: Option<f64>,
    pub avg_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn language_codes_round_trip() {
        for lang in MenuLanguage::iter() {
            let code = lang.to_string();
            assert_eq!(MenuLanguage::from_str(&code).unwrap(), lang);
        }
        assert_eq!(MenuLanguage::Spanish.to_string(), "spa");
        assert_eq!(MenuLanguage::German.to_string(), "deu");
    }

    #[test]
    fn default_language_is_spanish() {
        assert_eq!(MenuLanguage::default(), MenuLanguage::Spanish);
    }

    #[test]
    fn export_format_slugs() {
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert_eq!(ExportFormat::HierarchicalJson.to_string(), "hierarchical_json");
        assert_eq!(
            ExportFormat::from_str("hierarchical_json").unwrap(),
            ExportFormat::HierarchicalJson
        );
    }

    #[test]
    fn download_hrefs_use_the_slug() {
        assert_eq!(ExportFormat::Csv.download_href(), "/download/csv");
        assert_eq!(ExportFormat::Json.download_href(), "/download/json");
        assert_eq!(
            ExportFormat::HierarchicalJson.download_href(),
            "/download/hierarchical_json"
        );
    }

    #[test]
    fn severity_slug_matches_css_class() {
        assert_eq!(FlashSeverity::Error.to_string(), "error");
        assert_eq!(FlashSeverity::Warning.to_string(), "warning");
    }

    #[test]
    fn flash_constructors_tag_severity() {
        assert_eq!(FlashMessage::error("no files").severity, FlashSeverity::Error);
        assert_eq!(
            FlashMessage::info("Selection cleared").severity,
            FlashSeverity::Info
        );
    }

    #[test]
    fn language_serializes_as_code() {
        let json = serde_json::to_string(&MenuLanguage::Catalan).unwrap();
        assert_eq!(json, "\"cat\"");
    }

    #[test]
    fn batch_stats_deserializes_without_prices() {
        let json = r#"{
            "image_count": 2,
            "category_count": 4,
            "item_count": 17,
            "min_price": null,
            "avg_price": null,
            "max_price": null
        }"#;
        let stats: BatchStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.item_count, 17);
        assert!(stats.min_price.is_none());
    }
}
