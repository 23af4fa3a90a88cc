//! Id allocation and add/update/remove over the layer lists.

use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use crate::scene::model::{BackgroundStyle, FrameLayer, ImageLayer, LogoTextLayer};

/// A list entry with an id that is unique within its list.
pub trait Identified {
    fn id(&self) -> u32;

    /// Human-readable kind used in error messages.
    fn kind() -> &'static str;
}

impl Identified for LogoTextLayer {
    fn id(&self) -> u32 {
        self.id
    }

    fn kind() -> &'static str {
        "logo text layer"
    }
}

impl Identified for ImageLayer {
    fn id(&self) -> u32 {
        self.id
    }

    fn kind() -> &'static str {
        "image layer"
    }
}

impl Identified for FrameLayer {
    fn id(&self) -> u32 {
        self.id
    }

    fn kind() -> &'static str {
        "frame layer"
    }
}

impl Identified for BackgroundStyle {
    fn id(&self) -> u32 {
        self.id
    }

    fn kind() -> &'static str {
        "background style"
    }
}

/// `max(existing ids) + 1`, or `1` for an empty list.
///
/// Fails once the largest id is `u32::MAX`; handing it out again would duplicate an id.
pub fn next_id<T: Identified>(items: &[T]) -> ThumbcraftResult<u32> {
    let max = items.iter().map(Identified::id).max().unwrap_or(0);
    max.checked_add(1).ok_or_else(|| {
        ThumbcraftError::validation(format!("no {} id left after {max}", T::kind()))
    })
}

pub fn find<T: Identified>(items: &[T], id: u32) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

pub fn contains<T: Identified>(items: &[T], id: u32) -> bool {
    find(items, id).is_some()
}

/// Append a new entry built from the next free id; returns that id.
pub fn add_with<T: Identified>(
    items: &mut Vec<T>,
    make: impl FnOnce(u32) -> T,
) -> ThumbcraftResult<u32> {
    let id = next_id(items)?;
    items.push(make(id));
    tracing::debug!(kind = T::kind(), id, "layer added");
    Ok(id)
}

/// Apply `f` to the entry with `id`.
pub fn update<T: Identified>(
    items: &mut [T],
    id: u32,
    f: impl FnOnce(&mut T),
) -> ThumbcraftResult<()> {
    let item = items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| missing::<T>(id))?;
    f(item);
    Ok(())
}

/// Remove and return the entry with `id`.
pub fn remove<T: Identified>(items: &mut Vec<T>, id: u32) -> ThumbcraftResult<T> {
    let idx = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| missing::<T>(id))?;
    tracing::debug!(kind = T::kind(), id, "layer removed");
    Ok(items.remove(idx))
}

/// Mark `selected` active and every other style inactive.
///
/// An unknown id leaves every style inactive.
pub fn activate_only(styles: &mut [BackgroundStyle], selected: u32) {
    for style in styles.iter_mut() {
        style.active = style.id == selected;
    }
}

/// Checked selection: unknown ids are rejected and leave `styles` untouched.
pub fn select_background(styles: &mut [BackgroundStyle], selected: u32) -> ThumbcraftResult<()> {
    if !contains(styles, selected) {
        return Err(missing::<BackgroundStyle>(selected));
    }
    activate_only(styles, selected);
    Ok(())
}

/// Keep only the first `active` style active; returns how many were switched off.
pub fn keep_first_active(styles: &mut [BackgroundStyle]) -> usize {
    let mut seen = false;
    let mut cleared = 0;
    for style in styles.iter_mut().filter(|s| s.active) {
        if seen {
            style.active = false;
            cleared += 1;
        }
        seen = true;
    }
    cleared
}

/// The active background style, if any.
pub fn active_background(styles: &[BackgroundStyle]) -> Option<&BackgroundStyle> {
    styles.iter().find(|s| s.active)
}

fn missing<T: Identified>(id: u32) -> ThumbcraftError {
    ThumbcraftError::validation(format!("{} {id} does not exist", T::kind()))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layers.rs"]
mod tests;
