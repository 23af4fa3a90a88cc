use super::*;
use crate::style::defaults;

#[test]
fn baselines_are_read_from_the_document() {
    let mut doc = ThumbnailSettings::seeded();
    doc.frame_layers.push(defaults::frame_layer(4));
    doc.frame_layers[0].rotation = 15.0;

    assert_eq!(
        LayerTarget::Title.position_in(&doc),
        Some(doc.title_style.position)
    );
    assert_eq!(LayerTarget::Logo(1).rotation_in(&doc), Some(-33.0));
    assert_eq!(LayerTarget::Frame(4).rotation_in(&doc), Some(15.0));
    assert_eq!(LayerTarget::Frame(9).position_in(&doc), None);
}

#[test]
fn liveness_tracks_visibility_and_removal() {
    let mut doc = ThumbnailSettings::seeded();
    assert!(LayerTarget::Logo(1).is_live_in(&doc));
    doc.logo_text_layers[0].visible = false;
    assert!(!LayerTarget::Logo(1).is_live_in(&doc));
    doc.logo_text_layers.clear();
    assert!(!LayerTarget::Logo(1).is_live_in(&doc));
    assert!(LayerTarget::Title.is_live_in(&doc));
}

#[test]
fn updates_write_into_the_document() {
    let mut doc = ThumbnailSettings::seeded();
    doc.frame_layers.push(defaults::frame_layer(1));

    assert!(
        LayerUpdate::Move {
            target: LayerTarget::Logo(1),
            position: Position::new(1.0, 2.0)
        }
        .apply(&mut doc)
    );
    assert_eq!(doc.logo_text_layers[0].style.position, Position::new(1.0, 2.0));

    assert!(
        LayerUpdate::Rotate {
            target: LayerTarget::Frame(1),
            rotation: 45.0
        }
        .apply(&mut doc)
    );
    assert_eq!(doc.frame_layers[0].rotation, 45.0);

    assert!(
        !LayerUpdate::Move {
            target: LayerTarget::Frame(7),
            position: Position::new(0.0, 0.0)
        }
        .apply(&mut doc)
    );
}

#[test]
fn only_frames_have_rotate_handles() {
    assert!(LayerTarget::Frame(1).has_rotate_handle());
    assert!(!LayerTarget::Title.has_rotate_handle());
    assert!(!LayerTarget::Logo(1).has_rotate_handle());
    assert!(GestureState::default().is_idle());
}
