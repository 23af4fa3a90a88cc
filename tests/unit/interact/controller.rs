use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingListeners {
    attached: AtomicUsize,
    detached: AtomicUsize,
}

impl PointerListeners for CountingListeners {
    fn attach(&self) {
        self.attached.fetch_add(1, Ordering::SeqCst);
    }

    fn detach(&self) {
        self.detached.fetch_add(1, Ordering::SeqCst);
    }
}

impl CountingListeners {
    fn live(&self) -> usize {
        self.attached.load(Ordering::SeqCst) - self.detached.load(Ordering::SeqCst)
    }
}

const CONTAINER: Size = Size::new(1000.0, 500.0);

fn grab(target: LayerTarget, part: HitPart, pointer: Point) -> PointerDown {
    PointerDown {
        target,
        part,
        pointer,
        box_center: Point::new(500.0, 250.0),
    }
}

#[test]
fn drag_converts_pixels_to_percent_and_clamps() {
    let mut c = InteractionController::headless();
    c.pointer_down(
        grab(LayerTarget::Title, HitPart::Body, Point::new(100.0, 100.0)),
        Position::new(50.0, 50.0),
        0.0,
    )
    .unwrap();

    let update = c.pointer_move(Point::new(200.0, 150.0), CONTAINER, true);
    assert_eq!(
        update,
        Some(LayerUpdate::Move {
            target: LayerTarget::Title,
            position: Position::new(60.0, 60.0)
        })
    );

    for pointer in [
        Point::new(1.0e6, -1.0e6),
        Point::new(-5000.0, 9000.0),
        Point::new(f64::MAX, f64::MIN),
    ] {
        let Some(LayerUpdate::Move { position, .. }) = c.pointer_move(pointer, CONTAINER, true)
        else {
            panic!("expected move");
        };
        assert!((0.0..=100.0).contains(&position.x));
        assert!((0.0..=100.0).contains(&position.y));
    }
}

#[test]
fn full_turn_returns_to_start_rotation() {
    let mut c = InteractionController::headless();
    let center = Point::new(500.0, 250.0);
    let radius = 100.0;
    let at = |deg: f64| {
        let r = deg.to_radians();
        Point::new(center.x + radius * r.cos(), center.y + radius * r.sin())
    };

    c.pointer_down(
        grab(LayerTarget::Frame(1), HitPart::RotateHandle, at(0.0)),
        Position::new(50.0, 50.0),
        30.0,
    )
    .unwrap();
    assert!(matches!(c.state(), GestureState::Rotating { .. }));

    let mut last = None;
    for step in 1..=36 {
        last = c.pointer_move(at(f64::from(step) * 10.0), CONTAINER, true);
    }
    let Some(LayerUpdate::Rotate { rotation, .. }) = last else {
        panic!("expected rotate");
    };
    assert!((rotation - 30.0).abs() < 1e-9, "rotation = {rotation}");
    assert!(!rotation.is_nan());
}

#[test]
fn rotate_handle_on_text_falls_back_to_drag() {
    let mut c = InteractionController::headless();
    c.pointer_down(
        grab(LayerTarget::Logo(1), HitPart::RotateHandle, Point::ZERO),
        Position::new(10.0, 10.0),
        0.0,
    )
    .unwrap();
    assert!(matches!(c.state(), GestureState::Dragging { .. }));
}

#[test]
fn listeners_attach_once_and_always_detach() {
    let hook = Arc::new(CountingListeners::default());
    let mut c = InteractionController::new(hook.clone());
    assert_eq!(hook.live(), 0);

    c.pointer_down(
        grab(LayerTarget::Title, HitPart::Body, Point::ZERO),
        Position::new(50.0, 50.0),
        0.0,
    )
    .unwrap();
    assert_eq!(hook.live(), 1);

    let second = c.pointer_down(
        grab(LayerTarget::Frame(2), HitPart::Body, Point::ZERO),
        Position::new(50.0, 50.0),
        0.0,
    );
    assert!(second.is_err());
    assert_eq!(hook.attached.load(Ordering::SeqCst), 1);

    assert_eq!(c.pointer_up(), Some(LayerTarget::Title));
    assert_eq!(hook.live(), 0);
    assert_eq!(c.pointer_up(), None);

    c.pointer_down(
        grab(LayerTarget::Title, HitPart::Body, Point::ZERO),
        Position::new(50.0, 50.0),
        0.0,
    )
    .unwrap();
    c.teardown();
    assert_eq!(hook.live(), 0);

    c.pointer_down(
        grab(LayerTarget::Title, HitPart::Body, Point::ZERO),
        Position::new(50.0, 50.0),
        0.0,
    )
    .unwrap();
    drop(c);
    assert_eq!(hook.live(), 0);
    assert_eq!(hook.attached.load(Ordering::SeqCst), 3);
}

#[test]
fn vanished_target_emits_nothing_until_release() {
    let mut c = InteractionController::headless();
    c.pointer_down(
        grab(LayerTarget::Logo(1), HitPart::Body, Point::ZERO),
        Position::new(50.0, 50.0),
        0.0,
    )
    .unwrap();
    assert!(c.pointer_move(Point::new(10.0, 0.0), CONTAINER, true).is_some());
    assert!(c.pointer_move(Point::new(20.0, 0.0), CONTAINER, false).is_none());
    assert!(c.pointer_move(Point::new(30.0, 0.0), CONTAINER, true).is_none());
    assert_eq!(c.pointer_up(), Some(LayerTarget::Logo(1)));
    assert!(c.state().is_idle());
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut c = InteractionController::headless();
    assert!(c.pointer_move(Point::new(5.0, 5.0), CONTAINER, true).is_none());
    assert!(!c.is_active());
}
