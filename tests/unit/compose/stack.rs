use super::*;
use crate::compose::resolve::{LayerKind, LayerSource};
use crate::style::defaults;

fn doc() -> ThumbnailSettings {
    ThumbnailSettings::seeded()
}

#[test]
fn seeded_document_stacks_by_z_index() {
    let comp = compose(&doc(), &CornerContext::default(), Canvas::THUMBNAIL);
    let zs: Vec<i32> = comp.layers.iter().map(|l| l.z_index).collect();
    let mut sorted = zs.clone();
    sorted.sort();
    assert_eq!(zs, sorted);

    assert_eq!(comp.layers[0].source.kind(), LayerKind::Background);
    assert_eq!(comp.layers.last().unwrap().source.kind(), LayerKind::Marker);
}

#[test]
fn equal_z_keeps_document_order() {
    let mut d = doc();
    d.title_style.z_index = Some(30);
    d.logo_text_layers[0].style.z_index = Some(30);
    d.hud_settings.z_index = 30;

    let comp = compose(&d, &CornerContext::default(), Canvas::THUMBNAIL);
    let at_30: Vec<LayerSource> = comp
        .layers
        .iter()
        .filter(|l| l.z_index == 30)
        .map(|l| l.source)
        .collect();
    assert_eq!(
        at_30,
        vec![LayerSource::Hud, LayerSource::Logo { id: 1 }, LayerSource::Title]
    );
}

#[test]
fn later_images_paint_over_earlier_ones_at_equal_z() {
    let mut d = doc();
    d.image_layers.push(defaults::image_layer(2));
    let comp = compose(&d, &CornerContext::default(), Canvas::THUMBNAIL);
    let ids: Vec<LayerSource> = comp
        .layers
        .iter()
        .filter(|l| l.source.kind() == LayerKind::Image)
        .map(|l| l.source)
        .collect();
    assert_eq!(
        ids,
        vec![LayerSource::Image { id: 1 }, LayerSource::Image { id: 2 }]
    );
}

#[test]
fn frames_join_the_stack() {
    let mut d = doc();
    d.frame_layers.push(defaults::frame_layer(1));
    let comp = compose(&d, &CornerContext::default(), Canvas::THUMBNAIL);
    assert!(comp.layers.iter().any(|l| l.source == LayerSource::Frame { id: 1 }));
    assert_eq!(comp.canvas, Canvas::THUMBNAIL);
}

#[test]
fn compose_leaves_the_document_untouched() {
    let d = doc();
    let before = d.clone();
    let _ = compose(&d, &CornerContext::default(), Canvas::THUMBNAIL);
    assert_eq!(d, before);
}
