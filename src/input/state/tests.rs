use super::*;
use crate::config::{Action, KeybindingsConfig};
use crate::draw::RenderDescription;
use crate::geometry::{Point, Segment};
use crate::input::{Key, MouseButton};

fn create_test_input_state() -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();

    InputState::with_defaults(
        true,                   // snap_enabled
        DEFAULT_SNAP_THRESHOLD, // snap_threshold
        true,                   // show_status_bar
        action_map,
    )
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Moves the pointer to each point and clicks there.
fn click_at(state: &mut InputState, points: &[Point]) {
    for &point in points {
        state.on_pointer_move(point);
        state.on_click().expect("pointer position is known");
    }
}

#[test]
fn test_new_session_is_empty() {
    let state = create_test_input_state();
    assert_eq!(state.drawing_state(), DrawingState::Idle);
    assert!(state.pending_anchor().is_none());
    assert!(state.open_segments().is_empty());
    assert!(state.polylines().is_empty());
    assert!(state.pointer_position().is_none());
    assert!(state.snap_target().is_none());
}

#[test]
fn test_click_before_pointer_move_fails() {
    let mut state = create_test_input_state();
    assert_eq!(state.on_click(), Err(SessionError::NoPointerPosition));
    assert_eq!(state.drawing_state(), DrawingState::Idle);
    assert!(state.open_segments().is_empty());
}

#[test]
fn test_mouse_press_before_pointer_move_is_ignored() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left);
    assert_eq!(state.drawing_state(), DrawingState::Idle);
}

#[test]
fn test_two_clicks_commit_one_segment() {
    let mut state = create_test_input_state();

    state.on_pointer_move(p(0.0, 0.0));
    assert_eq!(state.on_click(), Ok(ClickOutcome::Anchored(p(0.0, 0.0))));
    assert_eq!(state.pending_anchor(), Some(p(0.0, 0.0)));
    assert!(state.open_segments().is_empty());

    state.on_pointer_move(p(10.0, 0.0));
    let expected = Segment::new(p(0.0, 0.0), p(10.0, 0.0));
    assert_eq!(state.on_click(), Ok(ClickOutcome::Committed(expected)));

    assert_eq!(state.open_segments(), &[expected]);
    assert!(state.pending_anchor().is_none());
    assert!(state.polylines().is_empty());
}

#[test]
fn test_third_click_starts_independent_segment() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0), p(200.0, 200.0)]);

    assert_eq!(state.open_segments().len(), 1);
    assert_eq!(state.pending_anchor(), Some(p(200.0, 200.0)));
}

#[test]
fn test_pointer_snaps_to_nearest_segment_end() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(10.0, 0.0)]);

    state.on_pointer_move(p(29.0, 0.0));

    assert_eq!(state.pointer_position(), Some(p(10.0, 0.0)));
    let hit = state.snap_target().expect("pointer should be snapped");
    assert_eq!(hit.segment, Segment::new(p(0.0, 0.0), p(10.0, 0.0)));
    assert_eq!(hit.projection.distance(), 19.0);
}

#[test]
fn test_pointer_far_from_segments_is_not_snapped() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(10.0, 0.0)]);

    state.on_pointer_move(p(50.0, 50.0));

    assert_eq!(state.pointer_position(), Some(p(50.0, 50.0)));
    assert!(state.snap_target().is_none());
}

#[test]
fn test_threshold_is_exclusive() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0)]);

    state.on_pointer_move(p(50.0, 30.0));
    assert_eq!(state.pointer_position(), Some(p(50.0, 30.0)));

    state.on_pointer_move(p(50.0, 29.5));
    assert_eq!(state.pointer_position(), Some(p(50.0, 0.0)));
}

#[test]
fn test_nearest_qualifying_segment_wins() {
    let mut state = create_test_input_state();
    // Two parallel segments at y=0 and y=20, both within reach of y=12
    click_at(
        &mut state,
        &[p(0.0, 0.0), p(100.0, 0.0), p(0.0, 20.0), p(100.0, 20.0)],
    );

    state.on_pointer_move(p(50.0, 12.0));

    assert_eq!(state.pointer_position(), Some(p(50.0, 20.0)));
}

#[test]
fn test_equal_distance_tie_goes_to_first_candidate() {
    let mut state = create_test_input_state();
    click_at(
        &mut state,
        &[p(0.0, 0.0), p(100.0, 0.0), p(0.0, 20.0), p(100.0, 20.0)],
    );

    state.on_pointer_move(p(50.0, 10.0));

    assert_eq!(state.pointer_position(), Some(p(50.0, 0.0)));
}

#[test]
fn test_committed_polylines_are_snap_targets() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(0.0, 100.0)]);
    assert_eq!(
        state.on_commit_reset(),
        ResetOutcome::Committed { segments: 1 }
    );

    state.on_pointer_move(p(8.0, 40.0));

    assert_eq!(state.pointer_position(), Some(p(0.0, 40.0)));
}

#[test]
fn test_pending_anchor_is_not_a_snap_target() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0)]);

    state.on_pointer_move(p(5.0, 5.0));

    assert_eq!(state.pointer_position(), Some(p(5.0, 5.0)));
    assert!(state.snap_target().is_none());
}

#[test]
fn test_snapped_click_commits_snapped_point() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0)]);

    // Start the next segment on the existing line
    click_at(&mut state, &[p(40.0, 6.0), p(40.0, 80.0)]);

    assert_eq!(
        state.open_segments()[1],
        Segment::new(p(40.0, 0.0), p(40.0, 80.0))
    );
}

#[test]
fn test_snap_disabled_uses_raw_position() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(10.0, 0.0)]);
    state.snap_enabled = false;

    state.on_pointer_move(p(12.0, 3.0));

    assert_eq!(state.pointer_position(), Some(p(12.0, 3.0)));
    assert!(state.snap_target().is_none());
}

#[test]
fn test_toggle_snap_reevaluates_pointer() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(10.0, 0.0)]);
    state.on_pointer_move(p(12.0, 3.0));
    assert_eq!(state.pointer_position(), Some(p(10.0, 0.0)));

    state.on_key_press(Key::Char('s'));
    assert!(!state.snap_enabled);
    assert_eq!(state.pointer_position(), Some(p(12.0, 3.0)));

    state.on_key_press(Key::Char('s'));
    assert!(state.snap_enabled);
    assert_eq!(state.pointer_position(), Some(p(10.0, 0.0)));
}

#[test]
fn test_reset_moves_open_segments_into_polyline() {
    let mut state = create_test_input_state();
    click_at(
        &mut state,
        &[p(0.0, 0.0), p(100.0, 0.0), p(200.0, 0.0), p(200.0, 100.0)],
    );
    click_at(&mut state, &[p(300.0, 300.0)]);
    let open = state.open_segments().to_vec();

    assert_eq!(
        state.on_commit_reset(),
        ResetOutcome::Committed { segments: 2 }
    );

    assert_eq!(state.polylines().len(), 1);
    assert_eq!(state.polylines()[0].segments(), open.as_slice());
    assert!(state.open_segments().is_empty());
    assert!(state.pending_anchor().is_none());
}

#[test]
fn test_repeated_reset_appends_nothing() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0)]);

    state.on_commit_reset();
    assert_eq!(state.on_commit_reset(), ResetOutcome::Empty);
    assert_eq!(state.polylines().len(), 1);
}

#[test]
fn test_reset_with_only_anchor_clears_it() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0)]);

    assert_eq!(state.on_commit_reset(), ResetOutcome::Empty);
    assert!(state.pending_anchor().is_none());
    assert!(state.polylines().is_empty());
}

#[test]
fn test_escape_triggers_reset() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0)]);

    state.on_key_press(Key::Escape);

    assert_eq!(state.polylines().len(), 1);
    assert!(state.open_segments().is_empty());
    assert!(!state.should_exit);
}

#[test]
fn test_ctrl_q_requests_exit() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Char('q'));
    assert!(!state.should_exit);

    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('q'));
    assert!(state.should_exit);

    state.on_key_release(Key::Ctrl);
    assert!(!state.modifiers.ctrl);
}

#[test]
fn test_toggle_ui_actions() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.handle_action(Action::ToggleStatusBar);
    assert!(!state.show_status_bar);
    assert!(state.needs_redraw);

    state.on_key_press(Key::F10);
    assert!(state.show_help);
}

#[test]
fn test_right_click_drops_anchor_only() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0), p(50.0, 50.0)]);

    state.on_mouse_press(MouseButton::Right);

    assert!(state.pending_anchor().is_none());
    assert_eq!(state.open_segments().len(), 1);
}

#[test]
fn test_render_description_orders_polylines_before_open_segments() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0)]);
    state.on_commit_reset();
    click_at(&mut state, &[p(0.0, 200.0), p(100.0, 200.0)]);

    let description = state.render_description();

    assert_eq!(
        description.segments,
        vec![
            Segment::new(p(0.0, 0.0), p(100.0, 0.0)),
            Segment::new(p(0.0, 200.0), p(100.0, 200.0)),
        ]
    );
    assert!(description.preview.is_none());
}

#[test]
fn test_render_description_preview_follows_pointer() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(300.0, 300.0)]);
    state.on_pointer_move(p(350.0, 320.0));

    let description = state.render_description();

    assert_eq!(
        description.preview,
        Some(Segment::new(p(300.0, 300.0), p(350.0, 320.0)))
    );
    assert!(description.snap_marker.is_none());
}

#[test]
fn test_render_description_marks_snapped_pointer() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0)]);
    state.on_pointer_move(p(30.0, 4.0));

    assert_eq!(state.render_description().snap_marker, Some(p(30.0, 0.0)));
}

#[test]
fn test_render_description_is_a_pure_read() {
    let mut state = create_test_input_state();
    click_at(&mut state, &[p(0.0, 0.0), p(100.0, 0.0), p(10.0, 60.0)]);
    state.on_pointer_move(p(90.0, 3.0));

    let first = state.render_description();
    let second = state.render_description();

    assert_eq!(first, second);
    assert_eq!(state.open_segments().len(), 1);
    assert_eq!(state.pending_anchor(), Some(p(10.0, 60.0)));
}

#[test]
fn test_empty_session_renders_nothing() {
    let state = create_test_input_state();
    let description = state.render_description();
    assert!(description.is_empty());
    assert_eq!(description, RenderDescription::default());
}

#[test]
fn test_input_state_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<InputState>();
}
