use super::*;
use crate::style::defaults;

fn images_with_ids(ids: &[u32]) -> Vec<ImageLayer> {
    ids.iter().map(|&id| defaults::image_layer(id)).collect()
}

#[test]
fn next_id_is_max_plus_one() {
    assert_eq!(next_id(&images_with_ids(&[3, 5])).unwrap(), 6);
    assert_eq!(next_id(&images_with_ids(&[5, 3])).unwrap(), 6);
    assert_eq!(next_id::<ImageLayer>(&[]).unwrap(), 1);
}

#[test]
fn exhausted_ids_are_rejected() {
    let mut layers = images_with_ids(&[2, u32::MAX]);
    assert!(matches!(
        next_id(&layers),
        Err(ThumbcraftError::Validation(_))
    ));
    assert!(add_with(&mut layers, defaults::image_layer).is_err());
    assert_eq!(layers.len(), 2);
}

#[test]
fn add_with_allocates_from_existing_ids() {
    let mut layers = images_with_ids(&[3, 5]);
    let id = add_with(&mut layers, defaults::image_layer).unwrap();
    assert_eq!(id, 6);
    assert_eq!(layers.last().unwrap().id, 6);

    let mut empty: Vec<ImageLayer> = Vec::new();
    assert_eq!(add_with(&mut empty, defaults::image_layer).unwrap(), 1);
}

#[test]
fn update_and_remove_reject_unknown_ids() {
    let mut layers = images_with_ids(&[1, 2]);
    assert!(update(&mut layers, 9, |l| l.opacity = 0).is_err());
    assert!(remove(&mut layers, 9).is_err());
    assert_eq!(layers.len(), 2);

    update(&mut layers, 2, |l| l.opacity = 40).unwrap();
    assert_eq!(find(&layers, 2).unwrap().opacity, 40);
    assert_eq!(find(&layers, 1).unwrap().opacity, 100);

    let removed = remove(&mut layers, 1).unwrap();
    assert_eq!(removed.id, 1);
    assert!(!contains(&layers, 1));
}

#[test]
fn selecting_any_existing_style_leaves_exactly_one_active() {
    let base = defaults::background_styles();
    for prior in 0..=base.len() {
        for target in base.iter().map(|s| s.id) {
            let mut styles = base.clone();
            for (i, s) in styles.iter_mut().enumerate() {
                s.active = i < prior;
            }
            select_background(&mut styles, target).unwrap();
            assert_eq!(styles.iter().filter(|s| s.active).count(), 1);
            assert_eq!(active_background(&styles).unwrap().id, target);
        }
    }
}

#[test]
fn unknown_background_id_is_rejected_without_changes() {
    let mut styles = defaults::background_styles();
    let before = styles.clone();
    assert!(select_background(&mut styles, 42).is_err());
    assert_eq!(styles, before);

    activate_only(&mut styles, 42);
    assert!(active_background(&styles).is_none());
}

#[test]
fn duplicate_active_styles_collapse_to_the_first() {
    let mut styles = defaults::background_styles();
    for s in &mut styles {
        s.active = s.id >= 2;
    }
    assert_eq!(keep_first_active(&mut styles), styles.len() - 2);
    assert_eq!(active_background(&styles).map(|s| s.id), Some(2));
    assert_eq!(styles.iter().filter(|s| s.active).count(), 1);
    assert_eq!(keep_first_active(&mut styles), 0);
}
