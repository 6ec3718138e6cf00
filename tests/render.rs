use cairo::{Context, ImageSurface};
use snapline::config::{HelpOverlayStyle, KeybindingsConfig, StatusBarStyle, StatusPosition};
use snapline::draw::{RenderStyle, render_description};
use snapline::geometry::Point;
use snapline::input::{DEFAULT_SNAP_THRESHOLD, InputState};

const BACKGROUND: u8 = 221;

fn make_input_state() -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();
    InputState::with_defaults(true, DEFAULT_SNAP_THRESHOLD, true, action_map)
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Returns the first color channel of a pixel; enough for greys.
fn channel_at(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    data[y * stride + x * 4]
}

fn click(input: &mut InputState, x: f64, y: f64) {
    input.on_pointer_move(Point::new(x, y));
    input.on_click().unwrap();
}

fn paint(input: &InputState, style: &RenderStyle) -> ImageSurface {
    let (surface, ctx) = surface_with_context(100, 100);
    render_description(&ctx, &input.render_description(), style);
    drop(ctx);
    surface
}

#[test]
fn empty_session_paints_background_only() {
    let input = make_input_state();
    let mut surface = paint(&input, &RenderStyle::default());

    assert_eq!(channel_at(&mut surface, 0, 0), BACKGROUND);
    assert_eq!(channel_at(&mut surface, 50, 50), BACKGROUND);
    assert_eq!(channel_at(&mut surface, 99, 99), BACKGROUND);
}

#[test]
fn committed_segment_is_stroked_in_stroke_color() {
    let mut input = make_input_state();
    click(&mut input, 10.0, 50.0);
    click(&mut input, 90.0, 50.0);
    // Park the pointer away from the line so no marker is drawn
    input.on_pointer_move(Point::new(50.0, 95.0));

    let mut surface = paint(&input, &RenderStyle::default());

    assert_eq!(channel_at(&mut surface, 50, 50), 0);
    assert_eq!(channel_at(&mut surface, 50, 20), BACKGROUND);
}

#[test]
fn preview_follows_pointer_in_preview_color() {
    let mut input = make_input_state();
    click(&mut input, 10.0, 20.0);
    input.on_pointer_move(Point::new(90.0, 20.0));

    let mut surface = paint(&input, &RenderStyle::default());

    assert_eq!(channel_at(&mut surface, 50, 20), 90);
    assert_eq!(channel_at(&mut surface, 50, 60), BACKGROUND);
}

#[test]
fn snap_marker_is_drawn_only_when_enabled() {
    let mut input = make_input_state();
    click(&mut input, 10.0, 50.0);
    click(&mut input, 90.0, 50.0);
    input.on_pointer_move(Point::new(50.0, 55.0));

    let mut with_marker = paint(&input, &RenderStyle::default());
    assert_ne!(channel_at(&mut with_marker, 50, 43), BACKGROUND);

    let style = RenderStyle {
        marker: None,
        ..RenderStyle::default()
    };
    let mut without_marker = paint(&input, &style);
    assert_eq!(channel_at(&mut without_marker, 50, 43), BACKGROUND);
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let mut input = make_input_state();
    input.update_screen_dimensions(800, 480);
    let style = StatusBarStyle::default();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        snapline::ui::render_status_bar(&ctx, &input, position, &style, 400, 200);
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
    }
}

#[test]
fn render_help_overlay_draws_content() {
    let style = HelpOverlayStyle::default();
    let (mut surface, ctx) = surface_with_context(800, 600);
    snapline::ui::render_help_overlay(&ctx, &style, 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
