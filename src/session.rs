//! Editor session: owns the document and routes every edit, gesture, import and export.

use crate::compose::{self, Composition};
use crate::export::image_loader::{accepts_pasted_url, normalize_image_url};
use crate::export::io::{ClipboardSource, FileSource, Rasterizer};
use crate::export::raster::RasterOpts;
use crate::foundation::core::{Canvas, Point, Size};
use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use crate::interact::controller::{InteractionController, PointerListeners};
use crate::interact::gesture::{LayerTarget, LayerUpdate, PointerDown};
use crate::scene::corner::{CornerContext, CornerSettingsPatch};
use crate::scene::layers;
use crate::scene::model::{
    BackgroundStyle, FrameLayer, HudSettings, ImageLayer, LogoTextLayer, MarkerSettings,
    TextStyle,
};
use crate::settings::{self, ThumbnailSettings};
use crate::style::defaults;
use std::path::Path;
use std::sync::Arc;

/// One open thumbnail.
///
/// Every failure leaves the session usable and its state unchanged.
#[derive(Debug)]
pub struct EditorSession {
    /// `corner_settings` is always `None` here; `corners` is the live copy.
    doc: ThumbnailSettings,
    corners: CornerContext,
    controller: InteractionController,
    canvas: Canvas,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Session seeded with the built-in defaults.
    pub fn new() -> Self {
        Self::from_settings(ThumbnailSettings::seeded())
    }

    /// Open `doc`; extra active background presets beyond the first are switched off.
    pub fn from_settings(mut doc: ThumbnailSettings) -> Self {
        normalize_backgrounds(&mut doc);
        let corners = doc
            .corner_settings
            .take()
            .map(CornerContext::new)
            .unwrap_or_default();
        Self {
            doc,
            corners,
            controller: InteractionController::headless(),
            canvas: Canvas::THUMBNAIL,
        }
    }

    /// Route gesture listener attach/detach to the host.
    pub fn with_listeners(mut self, listeners: Arc<dyn PointerListeners>) -> Self {
        self.controller = InteractionController::new(listeners);
        self
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn title(&self) -> &str {
        &self.doc.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.doc.title = title.into();
    }

    pub fn title_style(&self) -> &TextStyle {
        &self.doc.title_style
    }

    pub fn update_title_style(&mut self, f: impl FnOnce(&mut TextStyle)) {
        f(&mut self.doc.title_style);
    }

    pub fn logo_text_layers(&self) -> &[LogoTextLayer] {
        &self.doc.logo_text_layers
    }

    /// Append a logo text with the default logo style; returns its id.
    pub fn add_logo_text(&mut self) -> ThumbcraftResult<u32> {
        layers::add_with(&mut self.doc.logo_text_layers, defaults::logo_text_layer)
    }

    pub fn update_logo_text(
        &mut self,
        id: u32,
        f: impl FnOnce(&mut LogoTextLayer),
    ) -> ThumbcraftResult<()> {
        layers::update(&mut self.doc.logo_text_layers, id, |l| {
            f(l);
            l.id = id;
        })
    }

    pub fn set_logo_text_visible(&mut self, id: u32, visible: bool) -> ThumbcraftResult<()> {
        self.update_logo_text(id, |l| l.visible = visible)
    }

    pub fn remove_logo_text(&mut self, id: u32) -> ThumbcraftResult<LogoTextLayer> {
        layers::remove(&mut self.doc.logo_text_layers, id)
    }

    pub fn image_layers(&self) -> &[ImageLayer] {
        &self.doc.image_layers
    }

    /// Append a copy of the default image layer; returns its id.
    pub fn add_image_layer(&mut self) -> ThumbcraftResult<u32> {
        layers::add_with(&mut self.doc.image_layers, defaults::image_layer)
    }

    pub fn update_image_layer(
        &mut self,
        id: u32,
        f: impl FnOnce(&mut ImageLayer),
    ) -> ThumbcraftResult<()> {
        layers::update(&mut self.doc.image_layers, id, |l| {
            f(l);
            l.id = id;
        })
    }

    /// Set an image source, upgrading `5na5.ru` links to https.
    pub fn set_image_url(&mut self, id: u32, url: &str) -> ThumbcraftResult<()> {
        let url = normalize_image_url(url);
        self.update_image_layer(id, |l| l.url = url)
    }

    pub fn set_image_visible(&mut self, id: u32, visible: bool) -> ThumbcraftResult<()> {
        self.update_image_layer(id, |l| l.visible = visible)
    }

    pub fn remove_image_layer(&mut self, id: u32) -> ThumbcraftResult<ImageLayer> {
        layers::remove(&mut self.doc.image_layers, id)
    }

    /// Replace an image URL with clipboard text when it looks like a link.
    ///
    /// Clipboard failures and unsuitable text are ignored. Returns whether the URL changed.
    pub fn paste_image_url(&mut self, id: u32, clipboard: &dyn ClipboardSource) -> bool {
        let text = match clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(error = %err, "clipboard read ignored");
                return false;
            }
        };
        if !accepts_pasted_url(&text) {
            return false;
        }
        self.set_image_url(id, &text).is_ok()
    }

    pub fn frame_layers(&self) -> &[FrameLayer] {
        &self.doc.frame_layers
    }

    pub fn add_frame(&mut self) -> ThumbcraftResult<u32> {
        layers::add_with(&mut self.doc.frame_layers, defaults::frame_layer)
    }

    pub fn update_frame(
        &mut self,
        id: u32,
        f: impl FnOnce(&mut FrameLayer),
    ) -> ThumbcraftResult<()> {
        layers::update(&mut self.doc.frame_layers, id, |fr| {
            f(fr);
            fr.id = id;
        })
    }

    pub fn set_frame_visible(&mut self, id: u32, visible: bool) -> ThumbcraftResult<()> {
        self.update_frame(id, |f| f.visible = visible)
    }

    pub fn remove_frame(&mut self, id: u32) -> ThumbcraftResult<FrameLayer> {
        layers::remove(&mut self.doc.frame_layers, id)
    }

    pub fn hud(&self) -> &HudSettings {
        &self.doc.hud_settings
    }

    pub fn update_hud(&mut self, f: impl FnOnce(&mut HudSettings)) {
        f(&mut self.doc.hud_settings);
    }

    pub fn markers(&self) -> &MarkerSettings {
        &self.doc.marker_settings
    }

    pub fn update_markers(&mut self, f: impl FnOnce(&mut MarkerSettings)) {
        f(&mut self.doc.marker_settings);
    }

    pub fn background_styles(&self) -> &[BackgroundStyle] {
        &self.doc.background_styles
    }

    /// Make `id` the only active background; unknown ids are rejected.
    pub fn select_background(&mut self, id: u32) -> ThumbcraftResult<()> {
        layers::select_background(&mut self.doc.background_styles, id)
    }

    pub fn corners(&self) -> &CornerContext {
        &self.corners
    }

    pub fn update_corners(&mut self, patch: CornerSettingsPatch) -> ThumbcraftResult<()> {
        self.corners.update(patch)
    }

    pub fn compose(&self) -> Composition {
        compose::compose(&self.doc, &self.corners, self.canvas)
    }

    /// Begin a drag or rotate. The baseline is read from current state.
    pub fn pointer_down(&mut self, down: PointerDown) -> ThumbcraftResult<()> {
        let missing =
            || ThumbcraftError::validation(format!("{:?} is not on the canvas", down.target));
        if !down.target.is_live_in(&self.doc) {
            return Err(missing());
        }
        let position = down.target.position_in(&self.doc).ok_or_else(missing)?;
        let rotation = down.target.rotation_in(&self.doc).ok_or_else(missing)?;
        self.controller.pointer_down(down, position, rotation)
    }

    /// Advance the active gesture and apply the resulting update.
    pub fn pointer_move(&mut self, pointer: Point, container: Size) -> Option<LayerUpdate> {
        let live = self
            .controller
            .state()
            .target()
            .is_some_and(|t| t.is_live_in(&self.doc));
        let update = self.controller.pointer_move(pointer, container, live)?;
        update.apply(&mut self.doc).then_some(update)
    }

    pub fn pointer_up(&mut self) -> Option<LayerTarget> {
        self.controller.pointer_up()
    }

    /// The host surface went away mid-gesture.
    pub fn teardown_gesture(&mut self) {
        self.controller.teardown();
    }

    pub fn gesture_active(&self) -> bool {
        self.controller.is_active()
    }

    /// Complete document, including the live corner settings.
    pub fn snapshot(&self) -> ThumbnailSettings {
        let mut doc = self.doc.clone();
        doc.corner_settings = Some(self.corners.settings().clone());
        doc
    }

    #[tracing::instrument(skip(self))]
    pub fn export_settings_json(&self) -> ThumbcraftResult<String> {
        settings::serialize(&self.snapshot())
    }

    /// Replace the document with `text`; on failure nothing changes.
    #[tracing::instrument(skip(self, text))]
    pub fn import_settings(&mut self, text: &str) -> ThumbcraftResult<()> {
        let mut doc = settings::deserialize(text).inspect_err(|err| {
            tracing::warn!(error = %err, "settings import rejected");
        })?;
        normalize_backgrounds(&mut doc);
        if let Some(corners) = doc.corner_settings.take() {
            self.corners.replace(corners);
        }
        self.doc = doc;
        Ok(())
    }

    pub fn import_settings_file(
        &mut self,
        files: &dyn FileSource,
        path: &Path,
    ) -> ThumbcraftResult<()> {
        let text = files.read_text(path)?;
        self.import_settings(&text)
    }

    /// Rasterize the current composition.
    #[tracing::instrument(skip(self, rasterizer))]
    pub fn export_png(
        &self,
        rasterizer: &dyn Rasterizer,
        opts: &RasterOpts,
    ) -> ThumbcraftResult<Vec<u8>> {
        rasterizer.rasterize(&self.compose(), opts)
    }

    /// `(settings file name, image file name)` for today.
    pub fn export_file_names(&self) -> (String, String) {
        let today = settings::today();
        (
            settings::settings_file_name(today),
            settings::thumbnail_file_name(today),
        )
    }
}

fn normalize_backgrounds(doc: &mut ThumbnailSettings) {
    let cleared = layers::keep_first_active(&mut doc.background_styles);
    if cleared > 0 {
        tracing::warn!(cleared, "multiple active background styles, keeping the first");
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
