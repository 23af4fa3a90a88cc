use crate::foundation::core::{Point, Position, Size};
use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use crate::foundation::math::{angle_deg, normalize_rotation};
use crate::interact::gesture::{GestureState, HitPart, LayerTarget, LayerUpdate, PointerDown};
use std::sync::Arc;

/// Host hook for the global pointer-move / pointer-up listeners.
///
/// The controller attaches exactly once when a gesture starts and detaches when it returns to
/// idle, including when it is torn down mid-gesture.
pub trait PointerListeners: Send + Sync {
    fn attach(&self);
    fn detach(&self);
}

/// Listener hook for hosts that forward every pointer event anyway.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListeners;

impl PointerListeners for NoopListeners {
    fn attach(&self) {}
    fn detach(&self) {}
}

/// Attached listener set; detaches on drop.
pub struct ListenerGuard {
    listeners: Arc<dyn PointerListeners>,
}

impl ListenerGuard {
    fn acquire(listeners: Arc<dyn PointerListeners>) -> Self {
        listeners.attach();
        Self { listeners }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners.detach();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").finish_non_exhaustive()
    }
}

/// Drag/rotate state machine; at most one gesture at a time.
pub struct InteractionController {
    state: GestureState,
    listeners: Arc<dyn PointerListeners>,
    guard: Option<ListenerGuard>,
}

impl InteractionController {
    pub fn new(listeners: Arc<dyn PointerListeners>) -> Self {
        Self {
            state: GestureState::Idle,
            listeners,
            guard: None,
        }
    }

    /// Controller without a listener hook.
    pub fn headless() -> Self {
        Self::new(Arc::new(NoopListeners))
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Start a gesture.
    ///
    /// `position` and `rotation` are the target's values read from current state at this
    /// instant; nothing from an earlier gesture is reused.
    pub fn pointer_down(
        &mut self,
        down: PointerDown,
        position: Position,
        rotation: f64,
    ) -> ThumbcraftResult<()> {
        if let Some(active) = self.state.target() {
            return Err(ThumbcraftError::validation(format!(
                "a gesture on {active:?} is already active"
            )));
        }

        self.state = if down.part == HitPart::RotateHandle && down.target.has_rotate_handle() {
            let d = down.pointer - down.box_center;
            GestureState::Rotating {
                target: down.target,
                center: down.box_center,
                start_angle: angle_deg(d.x, d.y),
                start_rotation: rotation,
                orphaned: false,
            }
        } else {
            GestureState::Dragging {
                target: down.target,
                pointer_start: down.pointer,
                start_position: position,
                orphaned: false,
            }
        };
        self.guard = Some(ListenerGuard::acquire(Arc::clone(&self.listeners)));
        tracing::debug!(target_layer = ?down.target, state = ?self.state, "gesture started");
        Ok(())
    }

    /// Advance the active gesture.
    ///
    /// `container` is the pixel size of the element positions are relative to. `target_live`
    /// reports whether the grabbed layer still exists and is visible; once it is not, the
    /// gesture emits nothing until pointer-up.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        container: Size,
        target_live: bool,
    ) -> Option<LayerUpdate> {
        match &mut self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                target,
                pointer_start,
                start_position,
                orphaned,
            } => {
                if *orphaned || !target_live {
                    *orphaned = true;
                    return None;
                }
                let position = start_position
                    .offset_by_pixels(pointer - *pointer_start, container)
                    .clamped();
                Some(LayerUpdate::Move {
                    target: *target,
                    position,
                })
            }
            GestureState::Rotating {
                target,
                center,
                start_angle,
                start_rotation,
                orphaned,
            } => {
                if *orphaned || !target_live {
                    *orphaned = true;
                    return None;
                }
                let d = pointer - *center;
                let delta = angle_deg(d.x, d.y) - *start_angle;
                Some(LayerUpdate::Rotate {
                    target: *target,
                    rotation: normalize_rotation(*start_rotation + delta),
                })
            }
        }
    }

    /// End the active gesture (pointer released anywhere). Returns the released target.
    pub fn pointer_up(&mut self) -> Option<LayerTarget> {
        let prev = std::mem::replace(&mut self.state, GestureState::Idle);
        self.guard = None;
        let target = prev.target();
        if let Some(t) = target {
            tracing::debug!(target_layer = ?t, "gesture ended");
        }
        target
    }

    /// The event source went away mid-gesture.
    pub fn teardown(&mut self) {
        if self.pointer_up().is_some() {
            tracing::debug!("gesture torn down");
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::headless()
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("state", &self.state)
            .field("listening", &self.guard.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/controller.rs"]
mod tests;
