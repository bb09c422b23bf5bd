//! Registry + tracker tests against the public API, including the full
//! down/move/up gesture at the dispatch level.

use sketchboard::geometry::Point;
use sketchboard::input::{
    CanonicalInput, InputBindings, InputEvent, InputTracker, KeyEvent, Modifiers, MouseEvent,
};

#[derive(Default)]
struct Recorder {
    points: Vec<Point>,
    moves: usize,
}

fn mouse(x: f64, y: f64, button: u8, buttons: u8) -> MouseEvent {
    MouseEvent {
        x,
        y,
        button,
        buttons,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn test_full_gesture_down_move_up() {
    let bindings = InputBindings::<Recorder>::new()
        .bind_down(CanonicalInput::from_mouse(0), |recorder, event| {
            if let InputEvent::Mouse(e) = event {
                recorder.points.push(Point::new(e.x, e.y));
            }
        })
        .bind_move(CanonicalInput::from_mouse(0), |recorder, _| {
            recorder.moves += 1;
        });

    let mut recorder = Recorder::default();
    let mut tracker = InputTracker::new();

    // Down at (3, 4): callback fires, input enters the held-set.
    let down = InputEvent::Mouse(mouse(3.0, 4.0, 0, 1));
    if let Some(input) = bindings.dispatch_down(&mut recorder, &down) {
        tracker = tracker.with_input(input);
    }
    assert_eq!(recorder.points, vec![Point::new(3.0, 4.0)]);
    assert!(tracker.is_held(&CanonicalInput::from_mouse(0)));

    // Move while held: the Mouse1 move callback fires.
    bindings.dispatch_move(&mut recorder, &mouse(5.0, 5.0, 0, 1), &tracker);
    assert_eq!(recorder.moves, 1);

    // Up: input leaves the held-set.
    let up = InputEvent::Mouse(mouse(5.0, 5.0, 0, 0));
    if let Some(input) = bindings.dispatch_up(&mut recorder, &up) {
        tracker = tracker.without_input(&input);
    }
    assert!(!tracker.is_held(&CanonicalInput::from_mouse(0)));

    // Subsequent moves no longer reach the Mouse1 callback.
    bindings.dispatch_move(&mut recorder, &mouse(9.0, 9.0, 0, 0), &tracker);
    assert_eq!(recorder.moves, 1);
}

#[test]
fn test_registry_reference_is_immutable() {
    let original = InputBindings::<Recorder>::new();
    let input = CanonicalInput::from_key("KeyQ");
    let extended = original.bind_down(input.clone(), |recorder, _| {
        recorder.moves += 1;
    });

    assert!(!original.has_down(&input));
    assert!(extended.has_down(&input));

    let mut recorder = Recorder::default();
    original.dispatch_down(&mut recorder, &InputEvent::Key(KeyEvent::new("KeyQ")));
    assert_eq!(recorder.moves, 0);
}

#[test]
fn test_sentinel_move_binding_fires_without_any_button() {
    let bindings = InputBindings::<Recorder>::new().bind_move(
        CanonicalInput::none(),
        |recorder, event| {
            recorder.points.push(Point::new(event.x, event.y));
        },
    );

    let tracker = InputTracker::new();
    let mut recorder = Recorder::default();
    bindings.dispatch_move(&mut recorder, &mouse(1.0, 2.0, 0, 0), &tracker);
    bindings.dispatch_move(&mut recorder, &mouse(3.0, 4.0, 0, 0), &tracker);
    assert_eq!(
        recorder.points,
        vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
    );
}

#[test]
fn test_distinct_modifier_combinations_are_distinct_bindings() {
    let bindings = InputBindings::<Recorder>::new()
        .bind_down(CanonicalInput::from_mouse(0), |recorder, _| {
            recorder.moves += 10;
        })
        .bind_down(
            CanonicalInput::from_mouse(0).with_ctrl(true),
            |recorder, _| {
                recorder.moves += 1;
            },
        );

    let mut recorder = Recorder::default();
    let ctrl_down = InputEvent::Mouse(MouseEvent {
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
        ..mouse(0.0, 0.0, 0, 1)
    });
    bindings.dispatch_down(&mut recorder, &ctrl_down);
    assert_eq!(recorder.moves, 1);
}

#[test]
fn test_tracker_snapshot_is_stable_during_dispatch() {
    // A move callback that adds to a *new* tracker must not affect the
    // snapshot being iterated.
    let bindings = InputBindings::<(InputTracker, usize)>::new().bind_move(
        CanonicalInput::none(),
        |(tracker, count), _| {
            *tracker = tracker.with_input(CanonicalInput::from_key("Space"));
            *count += 1;
        },
    );

    let snapshot = InputTracker::new();
    let mut state = (snapshot.clone(), 0usize);
    bindings.dispatch_move(&mut state, &mouse(0.0, 0.0, 0, 0), &snapshot);
    assert_eq!(state.1, 1);
    assert!(!snapshot.is_held(&CanonicalInput::from_key("Space")));
    assert!(state.0.is_held(&CanonicalInput::from_key("Space")));
}
