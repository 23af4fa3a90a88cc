//! Persisted settings document: JSON serialization, import validation and export file names.

use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use crate::scene::model::{
    BackgroundStyle, CornerSettings, FrameLayer, HudSettings, ImageLayer, LogoTextLayer,
    MarkerSettings, TextStyle,
};
use crate::style::defaults;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level keys every imported document must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "title",
    "titleStyle",
    "logoTextLayers",
    "imageLayers",
    "hudSettings",
    "markerSettings",
];

/// Complete editor state as saved to and loaded from a settings file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailSettings {
    pub title: String,
    pub title_style: TextStyle,
    pub logo_text_layers: Vec<LogoTextLayer>,
    pub image_layers: Vec<ImageLayer>,
    pub hud_settings: HudSettings,
    pub marker_settings: MarkerSettings,
    /// Older files predate background presets; absent means an empty list.
    #[serde(default)]
    pub background_styles: Vec<BackgroundStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_layers: Vec<FrameLayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_settings: Option<CornerSettings>,
}

impl ThumbnailSettings {
    /// State of a freshly opened editor.
    pub fn seeded() -> Self {
        Self {
            title: defaults::DEFAULT_TITLE.to_owned(),
            title_style: defaults::title_style(),
            logo_text_layers: vec![defaults::seeded_logo_text_layer()],
            image_layers: vec![defaults::image_layer(1)],
            hud_settings: defaults::hud_settings(),
            marker_settings: defaults::marker_settings(),
            background_styles: defaults::background_styles(),
            frame_layers: Vec::new(),
            corner_settings: Some(defaults::corner_settings()),
        }
    }
}

/// Pretty-printed JSON dump of the document.
#[tracing::instrument(skip(settings))]
pub fn serialize(settings: &ThumbnailSettings) -> ThumbcraftResult<String> {
    serde_json::to_string_pretty(settings)
        .map_err(|e| ThumbcraftError::format(format!("serialize settings: {e}")))
}

/// Parse a settings document.
///
/// Fails with [`ThumbcraftError::Format`] on malformed JSON, a non-object root, a missing
/// required field, or a field of the wrong shape.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn deserialize(text: &str) -> ThumbcraftResult<ThumbnailSettings> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| ThumbcraftError::format(format!("invalid JSON: {e}")))?;

    let obj = value
        .as_object()
        .ok_or_else(|| ThumbcraftError::format("settings root must be a JSON object"))?;
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|k| !obj.contains_key(**k)) {
        return Err(ThumbcraftError::format(format!(
            "missing required field: {missing}"
        )));
    }

    serde_json::from_value(value).map_err(|e| ThumbcraftError::format(e.to_string()))
}

/// `thumbnail-settings-YYYY-MM-DD.json`
pub fn settings_file_name(date: NaiveDate) -> String {
    format!("thumbnail-settings-{}.json", date.format("%Y-%m-%d"))
}

/// `thumbnail-YYYY-MM-DD.png`
pub fn thumbnail_file_name(date: NaiveDate) -> String {
    format!("thumbnail-{}.png", date.format("%Y-%m-%d"))
}

/// UTC calendar date used for export file names.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
#[path = "../tests/unit/settings/settings.rs"]
mod tests;
