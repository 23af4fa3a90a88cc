use crate::foundation::core::{Point, Position};
use crate::scene::model::{FrameLayer, LogoTextLayer};
use crate::settings::ThumbnailSettings;

/// A layer that can be grabbed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerTarget {
    Title,
    Logo(u32),
    Frame(u32),
}

impl LayerTarget {
    /// Only frames carry a rotate handle.
    pub fn has_rotate_handle(self) -> bool {
        matches!(self, LayerTarget::Frame(_))
    }

    /// Current position of the target in `doc`; `None` when the layer no longer exists.
    pub fn position_in(self, doc: &ThumbnailSettings) -> Option<Position> {
        match self {
            LayerTarget::Title => Some(doc.title_style.position),
            LayerTarget::Logo(id) => logo(doc, id).map(|l| l.style.position),
            LayerTarget::Frame(id) => frame(doc, id).map(crate::compose::resolve::frame_anchor),
        }
    }

    /// Current rotation of the target in `doc`.
    pub fn rotation_in(self, doc: &ThumbnailSettings) -> Option<f64> {
        match self {
            LayerTarget::Title => Some(doc.title_style.rotation.unwrap_or(0.0)),
            LayerTarget::Logo(id) => logo(doc, id).map(|l| l.style.rotation.unwrap_or(0.0)),
            LayerTarget::Frame(id) => frame(doc, id).map(|f| f.rotation),
        }
    }

    /// Whether the target still exists and is shown.
    pub fn is_live_in(self, doc: &ThumbnailSettings) -> bool {
        match self {
            LayerTarget::Title => true,
            LayerTarget::Logo(id) => logo(doc, id).is_some_and(|l| l.visible),
            LayerTarget::Frame(id) => frame(doc, id).is_some_and(|f| f.visible),
        }
    }
}

fn logo(doc: &ThumbnailSettings, id: u32) -> Option<&LogoTextLayer> {
    crate::scene::layers::find(&doc.logo_text_layers, id)
}

fn frame(doc: &ThumbnailSettings, id: u32) -> Option<&FrameLayer> {
    crate::scene::layers::find(&doc.frame_layers, id)
}

/// Which part of a layer the pointer went down on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitPart {
    #[default]
    Body,
    RotateHandle,
}

/// Pointer-down as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDown {
    pub target: LayerTarget,
    pub part: HitPart,
    /// Pointer location, container pixels.
    pub pointer: Point,
    /// Centre of the target's on-canvas bounding box, container pixels.
    pub box_center: Point,
}

/// The single active gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        target: LayerTarget,
        pointer_start: Point,
        start_position: Position,
        /// Set once the target disappeared; no further updates are emitted.
        orphaned: bool,
    },
    Rotating {
        target: LayerTarget,
        center: Point,
        start_angle: f64,
        start_rotation: f64,
        orphaned: bool,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn target(&self) -> Option<LayerTarget> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { target, .. } | GestureState::Rotating { target, .. } => {
                Some(*target)
            }
        }
    }
}

/// Change requested by a pointer-move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerUpdate {
    Move { target: LayerTarget, position: Position },
    Rotate { target: LayerTarget, rotation: f64 },
}

impl LayerUpdate {
    pub fn target(self) -> LayerTarget {
        match self {
            LayerUpdate::Move { target, .. } | LayerUpdate::Rotate { target, .. } => target,
        }
    }

    /// Write the change into `doc`. Returns `false` when the target is gone.
    pub fn apply(self, doc: &mut ThumbnailSettings) -> bool {
        use crate::scene::layers::update;
        match self {
            LayerUpdate::Move { target, position } => match target {
                LayerTarget::Title => {
                    doc.title_style.position = position;
                    true
                }
                LayerTarget::Logo(id) => {
                    update(&mut doc.logo_text_layers, id, |l| l.style.position = position).is_ok()
                }
                LayerTarget::Frame(id) => {
                    update(&mut doc.frame_layers, id, |f| f.position = position).is_ok()
                }
            },
            LayerUpdate::Rotate { target, rotation } => match target {
                LayerTarget::Title => {
                    doc.title_style.rotation = Some(rotation);
                    true
                }
                LayerTarget::Logo(id) => {
                    update(&mut doc.logo_text_layers, id, |l| l.style.rotation = Some(rotation))
                        .is_ok()
                }
                LayerTarget::Frame(id) => {
                    update(&mut doc.frame_layers, id, |f| f.rotation = rotation).is_ok()
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/gesture.rs"]
mod tests;
