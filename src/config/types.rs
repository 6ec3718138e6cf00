//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls how committed segments, the preview line and the canvas look.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Color of committed segments - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Color of the rubber-band preview line that follows the pointer
    #[serde(default = "default_preview_color")]
    pub preview_color: ColorSpec,

    /// Line width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Canvas color [R, G, B, A] (0.0-1.0 range); alpha 0 leaves the desktop visible
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            preview_color: default_preview_color(),
            line_width: default_line_width(),
            background_color: default_background_color(),
        }
    }
}

/// Snapping behavior.
///
/// While the pointer is within `threshold` pixels of a committed segment it is
/// moved onto the closest point of the nearest such segment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapConfig {
    /// Whether snapping starts enabled (can be toggled at runtime)
    #[serde(default = "default_snap_enabled")]
    pub enabled: bool,

    /// Snap distance in pixels (valid range: 1.0 - 200.0)
    #[serde(default = "default_snap_threshold")]
    pub threshold: f64,

    /// Draw a ring around the pointer while it is snapped
    #[serde(default = "default_show_marker")]
    pub show_marker: bool,

    /// Radius of the snap ring in pixels (valid range: 2.0 - 50.0)
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: default_snap_enabled(),
            threshold: default_snap_threshold(),
            show_marker: default_show_marker(),
            marker_radius: default_marker_radius(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the status bar with segment counts and snap state
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_preview_color() -> ColorSpec {
    ColorSpec::Rgb([90, 90, 90])
}

fn default_line_width() -> f64 {
    2.0
}

fn default_background_color() -> [f64; 4] {
    // #dddddd
    [221.0 / 255.0, 221.0 / 255.0, 221.0 / 255.0, 1.0]
}

fn default_snap_enabled() -> bool {
    true
}

fn default_snap_threshold() -> f64 {
    30.0
}

fn default_show_marker() -> bool {
    true
}

fn default_marker_radius() -> f64 {
    6.0
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_status_font_size() -> f64 {
    16.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.75]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_help_font_size() -> f64 {
    16.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
