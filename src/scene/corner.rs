//! Shared decorative-corner configuration.
//!
//! One [`CornerContext`] owns the settings; the four [`CornerDisplay`] instances only borrow it.
//! All writes go through [`CornerContext::update`], which builds the complete next value before
//! replacing the current one, so a reader sees either the old or the new settings in full.

use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use crate::scene::model::CornerSettings;

/// Partial update of [`CornerSettings`]; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CornerSettingsPatch {
    pub color: Option<String>,
    pub opacity: Option<u32>,
    pub size: Option<f64>,
    pub visible: Option<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CornerContext {
    settings: CornerSettings,
    revision: u64,
}

impl CornerContext {
    pub fn new(settings: CornerSettings) -> Self {
        Self {
            settings,
            revision: 0,
        }
    }

    pub fn settings(&self) -> &CornerSettings {
        &self.settings
    }

    /// Incremented on every successful update.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Single writer entry point. Invalid patches leave the settings untouched.
    pub fn update(&mut self, patch: CornerSettingsPatch) -> ThumbcraftResult<()> {
        let mut next = self.settings.clone();
        if let Some(color) = patch.color {
            crate::style::color::parse_hex(&color)?;
            next.color = color;
        }
        if let Some(opacity) = patch.opacity {
            if opacity > 100 {
                return Err(ThumbcraftError::validation(
                    "corner opacity must be within 0..=100",
                ));
            }
            next.opacity = opacity;
        }
        if let Some(size) = patch.size {
            if !size.is_finite() || size < 0.0 {
                return Err(ThumbcraftError::validation(
                    "corner size must be a finite non-negative number",
                ));
            }
            next.size = size;
        }
        if let Some(visible) = patch.visible {
            next.visible = visible;
        }

        self.settings = next;
        self.revision += 1;
        Ok(())
    }

    /// Replace the settings wholesale (used by import).
    pub fn replace(&mut self, settings: CornerSettings) {
        self.settings = settings;
        self.revision += 1;
    }
}

impl Default for CornerContext {
    fn default() -> Self {
        Self::new(crate::style::defaults::corner_settings())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerPosition {
    pub const ALL: [CornerPosition; 4] = [
        CornerPosition::TopLeft,
        CornerPosition::TopRight,
        CornerPosition::BottomLeft,
        CornerPosition::BottomRight,
    ];

    /// Rotation of the corner glyph so its arms hug the canvas edges.
    pub fn rotation_deg(self) -> f64 {
        match self {
            CornerPosition::TopLeft => 0.0,
            CornerPosition::TopRight => 90.0,
            CornerPosition::BottomLeft => -90.0,
            CornerPosition::BottomRight => 180.0,
        }
    }

    /// `(right, bottom)` flags: which canvas edges the corner is pinned to.
    pub fn pinned_far_edges(self) -> (bool, bool) {
        match self {
            CornerPosition::TopLeft => (false, false),
            CornerPosition::TopRight => (true, false),
            CornerPosition::BottomLeft => (false, true),
            CornerPosition::BottomRight => (true, true),
        }
    }
}

/// What one corner instance shows for the current settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CornerView {
    pub position: CornerPosition,
    pub color: String,
    /// `opacity / 100`.
    pub opacity: f64,
    /// Edge length of the corner box, pixels.
    pub box_px: f64,
    /// Base size the decorative parts scale from.
    pub size: f64,
}

/// One of the four corner display instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerDisplay {
    pub position: CornerPosition,
}

impl CornerDisplay {
    /// The four displays of a canvas, in paint order.
    pub fn all() -> [CornerDisplay; 4] {
        CornerPosition::ALL.map(|position| CornerDisplay { position })
    }

    /// `None` while the shared settings are hidden.
    pub fn view(&self, ctx: &CornerContext) -> Option<CornerView> {
        let s = ctx.settings();
        if !s.visible {
            return None;
        }
        Some(CornerView {
            position: self.position,
            color: s.color.clone(),
            opacity: crate::foundation::math::unit_opacity(f64::from(s.opacity)),
            box_px: s.size * 2.0,
            size: s.size,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/corner.rs"]
mod tests;
