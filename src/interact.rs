//! Pointer-driven drag and rotate editing.

pub mod controller;
pub mod gesture;

pub use controller::{InteractionController, ListenerGuard, NoopListeners, PointerListeners};
pub use gesture::{GestureState, HitPart, LayerTarget, LayerUpdate, PointerDown};
