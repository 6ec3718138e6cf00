/// UI rendering: status bar and help overlay
use crate::config::{HelpOverlayStyle, StatusBarStyle, StatusPosition};
use crate::input::{DrawingState, InputState};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

const HELP_TEXT: &[&str] = &[
    "━━━━━━━━━━━━━━━━━━━━━━ SNAPLINE CONTROLS ━━━━━━━━━━━━━━━━━━━━━━",
    "",
    "  DRAWING",
    "    Left click       Place anchor / commit segment",
    "    Right click      Drop pending anchor",
    "    Escape           Finish polyline",
    "",
    "  SNAPPING",
    "    S                Toggle snapping",
    "",
    "  VIEW",
    "    F12              Toggle status bar",
    "    F10              Toggle help",
    "    D                Log session state",
    "",
    "    Ctrl+Q           Exit",
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
    "  Defaults shown; see [keybindings] in config.toml",
];

/// Builds the status line: open segment count, polylines, snap state and
/// whether an anchor is pending.
pub fn status_text(input_state: &InputState) -> String {
    let open = input_state.open_segments().len();
    let polylines = input_state.polylines().len();

    let snap = if input_state.snap_enabled {
        format!("snap {}px", input_state.snap_threshold.round() as i64)
    } else {
        "snap off".to_string()
    };

    let mode = match input_state.drawing_state() {
        DrawingState::Idle => "",
        DrawingState::Anchored { .. } => " [anchored]",
    };

    format!(
        "[{} open] [{} polyline{}] [{}]{}  F10=Help",
        open,
        polylines,
        if polylines == 1 { "" } else { "s" },
        snap,
        mode
    )
}

/// Render status bar showing segment counts and snap state
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let status_text = status_text(input_state);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return;
        }
    };
    let text_width = extents.width();
    let text_height = extents.height();

    let padding = style.padding;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - text_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - text_width - padding,
            screen_height as f64 - padding,
        ),
    };

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        text_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y);
    let _ = ctx.show_text(&status_text);
}

/// Render help overlay showing the default keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    let mut max_width: f64 = 0.0;
    for line in HELP_TEXT {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (HELP_TEXT.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in HELP_TEXT.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}
