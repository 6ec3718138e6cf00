//! Cairo-based rendering of the per-frame render description.

use super::color::Color;
use super::frame::RenderDescription;
use crate::config::Config;
use crate::geometry::{Point, Segment};

/// Drawing primitives the renderer needs from a surface.
///
/// Implemented for [`cairo::Context`]; the backend owns the context and
/// lends it to [`render_description`] for the duration of one frame.
pub trait StrokeSurface {
    /// Wipes the whole surface and fills it with `background`.
    fn clear(&self, background: Color);
    fn begin_path(&self);
    fn move_to(&self, point: Point);
    fn line_to(&self, point: Point);
    /// Adds a closed circle to the current path.
    fn circle(&self, center: Point, radius: f64);
    /// Strokes and consumes the current path.
    fn stroke(&self, style: StrokeStyle);
}

/// Color and width applied to a stroked path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

/// Appearance of the snap indicator ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub stroke: StrokeStyle,
    pub radius: f64,
}

/// Resolved appearance for a whole frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub segment: StrokeStyle,
    pub preview: StrokeStyle,
    /// `None` hides the snap indicator
    pub marker: Option<MarkerStyle>,
}

impl RenderStyle {
    pub fn from_config(config: &Config) -> Self {
        let segment = StrokeStyle {
            color: config.drawing.stroke_color.to_color(),
            width: config.drawing.line_width,
        };
        let preview = StrokeStyle {
            color: config.drawing.preview_color.to_color(),
            width: config.drawing.line_width,
        };
        let marker = config.snap.show_marker.then_some(MarkerStyle {
            stroke: StrokeStyle {
                color: preview.color,
                width: (config.drawing.line_width / 2.0).max(1.0),
            },
            radius: config.snap.marker_radius,
        });

        Self {
            background: Color::from_rgba(config.drawing.background_color),
            segment,
            preview,
            marker,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Draws one frame: a cleared surface, every committed segment, then the
/// preview line and the snap indicator on top.
pub fn render_description<S: StrokeSurface + ?Sized>(
    surface: &S,
    description: &RenderDescription,
    style: &RenderStyle,
) {
    surface.clear(style.background);

    for segment in &description.segments {
        render_segment(surface, segment, style.segment);
    }

    if let Some(preview) = &description.preview {
        render_segment(surface, preview, style.preview);
    }

    if let (Some(center), Some(marker)) = (description.snap_marker, style.marker) {
        surface.begin_path();
        surface.circle(center, marker.radius);
        surface.stroke(marker.stroke);
    }
}

/// Strokes a single segment as its own path.
pub fn render_segment<S: StrokeSurface + ?Sized>(surface: &S, segment: &Segment, style: StrokeStyle) {
    surface.begin_path();
    surface.move_to(segment.start);
    surface.line_to(segment.end);
    surface.stroke(style);
}

impl StrokeSurface for cairo::Context {
    fn clear(&self, background: Color) {
        self.set_operator(cairo::Operator::Clear);
        let _ = self.paint();
        self.set_operator(cairo::Operator::Over);

        if background.a > 0.0 {
            self.set_source_rgba(background.r, background.g, background.b, background.a);
            let _ = self.paint(); // A failed paint leaves the surface transparent
        }
    }

    fn begin_path(&self) {
        self.new_path();
    }

    fn move_to(&self, point: Point) {
        cairo::Context::move_to(self, point.x, point.y);
    }

    fn line_to(&self, point: Point) {
        cairo::Context::line_to(self, point.x, point.y);
    }

    fn circle(&self, center: Point, radius: f64) {
        self.new_sub_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
        self.close_path();
    }

    fn stroke(&self, style: StrokeStyle) {
        let color = style.color;
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.set_line_width(style.width);
        self.set_line_cap(cairo::LineCap::Round);
        self.set_line_join(cairo::LineJoin::Round);
        let _ = cairo::Context::stroke(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Begin,
        MoveTo(Point),
        LineTo(Point),
        Circle(Point, f64),
        Stroke(StrokeStyle),
    }

    #[derive(Default)]
    struct Recorder {
        ops: RefCell<Vec<Op>>,
    }

    impl StrokeSurface for Recorder {
        fn clear(&self, _background: Color) {
            self.ops.borrow_mut().push(Op::Clear);
        }
        fn begin_path(&self) {
            self.ops.borrow_mut().push(Op::Begin);
        }
        fn move_to(&self, point: Point) {
            self.ops.borrow_mut().push(Op::MoveTo(point));
        }
        fn line_to(&self, point: Point) {
            self.ops.borrow_mut().push(Op::LineTo(point));
        }
        fn circle(&self, center: Point, radius: f64) {
            self.ops.borrow_mut().push(Op::Circle(center, radius));
        }
        fn stroke(&self, style: StrokeStyle) {
            self.ops.borrow_mut().push(Op::Stroke(style));
        }
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn clear_precedes_every_stroke() {
        let recorder = Recorder::default();
        let style = RenderStyle::default();
        let description = RenderDescription {
            segments: vec![seg(0.0, 0.0, 10.0, 0.0), seg(10.0, 0.0, 10.0, 10.0)],
            preview: None,
            snap_marker: None,
        };

        render_description(&recorder, &description, &style);

        let ops = recorder.ops.into_inner();
        assert_eq!(
            ops,
            vec![
                Op::Clear,
                Op::Begin,
                Op::MoveTo(Point::new(0.0, 0.0)),
                Op::LineTo(Point::new(10.0, 0.0)),
                Op::Stroke(style.segment),
                Op::Begin,
                Op::MoveTo(Point::new(10.0, 0.0)),
                Op::LineTo(Point::new(10.0, 10.0)),
                Op::Stroke(style.segment),
            ]
        );
    }

    #[test]
    fn preview_and_marker_draw_after_segments() {
        let recorder = Recorder::default();
        let style = RenderStyle::default();
        let marker = style.marker.expect("marker enabled by default");
        let description = RenderDescription {
            segments: vec![seg(0.0, 0.0, 10.0, 0.0)],
            preview: Some(seg(10.0, 0.0, 20.0, 5.0)),
            snap_marker: Some(Point::new(10.0, 0.0)),
        };

        render_description(&recorder, &description, &style);

        let ops = recorder.ops.into_inner();
        assert_eq!(ops.len(), 1 + 4 + 4 + 3);
        assert_eq!(ops[8], Op::Stroke(style.preview));
        assert_eq!(ops[10], Op::Circle(Point::new(10.0, 0.0), marker.radius));
        assert_eq!(ops[11], Op::Stroke(marker.stroke));
    }

    #[test]
    fn hidden_marker_skips_indicator() {
        let recorder = Recorder::default();
        let style = RenderStyle {
            marker: None,
            ..RenderStyle::default()
        };
        let description = RenderDescription {
            segments: Vec::new(),
            preview: None,
            snap_marker: Some(Point::new(3.0, 4.0)),
        };

        render_description(&recorder, &description, &style);

        assert_eq!(recorder.ops.into_inner(), vec![Op::Clear]);
    }
}
