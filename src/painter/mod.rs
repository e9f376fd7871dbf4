//! Replaying sampled paths onto a drawing surface
//!
//! [`Painter`] owns the pen state for one conversion run. It resolves each
//! path's class against the style sheet, configures the pen, then walks
//! the polyline with the pen down, raising it between paths so consecutive
//! paths are never connected. Fail-fast: the first error aborts the run
//! and operations already issued stay issued.

pub mod error;
pub mod script;
pub mod surface;

pub use error::PaintError;
pub use script::ScriptSurface;
pub use surface::{RecordingSurface, Surface, SurfaceOp};

use kurbo::Point;

use crate::document::{Canvas, TracedPath};
use crate::style::{StyleAttributes, StyleSheet};

/// Replays `(class, polyline)` pairs onto a [`Surface`]
pub struct Painter<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    canvas: Canvas,
    sheet: &'a StyleSheet,
    pen_down: bool,
}

impl<'a, S: Surface + ?Sized> Painter<'a, S> {
    /// Prepare the surface for the canvas. The pen starts up; nothing is
    /// drawn until [`paint_all`].
    ///
    /// [`paint_all`]: Painter::paint_all
    pub fn new(surface: &'a mut S, canvas: Canvas, sheet: &'a StyleSheet) -> Self {
        surface.prepare(canvas);
        Self {
            surface,
            canvas,
            sheet,
            pen_down: false,
        }
    }

    /// Paint every path in order.
    ///
    /// Per path: the class is resolved first, so an unknown class fails
    /// before any surface operation for that path; then the pen is
    /// configured, lowered on the first point, and raised after the last.
    /// Paths carrying neither `fill` nor `stroke` draw with whatever pen
    /// state the previous path left behind - intentional style
    /// inheritance.
    pub fn paint_all(&mut self, paths: &[TracedPath]) -> Result<(), PaintError> {
        self.surface.pen_up();
        self.pen_down = false;

        for (index, path) in paths.iter().enumerate() {
            let attrs = path
                .class
                .as_deref()
                .and_then(|class| self.sheet.get(class))
                .ok_or_else(|| PaintError::UnknownClass {
                    index,
                    class: path.class.clone(),
                })?;

            let class = path.class.as_deref().unwrap_or_default();
            self.configure_pen(class, attrs)?;

            for point in &path.points {
                self.surface.move_to(self.transform(*point));
                if !self.pen_down {
                    self.surface.pen_down();
                    self.pen_down = true;
                }
            }

            self.surface.pen_up();
            self.pen_down = false;
        }

        Ok(())
    }

    /// Recenter the SVG's top-left-origin, y-down coordinates onto the
    /// surface's center-origin, y-up convention, using the real canvas
    /// dimensions.
    fn transform(&self, point: Point) -> Point {
        Point::new(
            point.x - f64::from(self.canvas.width) / 2.0,
            f64::from(self.canvas.height) / 2.0 - point.y,
        )
    }

    /// Apply a path's resolved style to the pen.
    ///
    /// Any fill region left open by the previous path is closed first.
    /// A `fill` other than the literal `none` sets both stroke and fill
    /// color and opens a fill region; `stroke` overrides the stroke color
    /// afterwards, and `stroke-width` is consulted only alongside
    /// `stroke`.
    fn configure_pen(&mut self, class: &str, attrs: &StyleAttributes) -> Result<(), PaintError> {
        self.surface.end_fill();

        if let Some(fill) = attrs.get("fill") {
            if fill.value != "none" {
                self.surface.set_color(&fill.value);
                self.surface.set_width(1);
                self.surface.set_fill_color(&fill.value);
                self.surface.begin_fill();
            }
        }

        if let Some(stroke) = attrs.get("stroke") {
            self.surface.set_color(&stroke.value);

            if let Some(width) = attrs.get("stroke-width") {
                let parsed = width.value.parse::<u32>().map_err(|_| {
                    PaintError::InvalidStyleValue {
                        class: class.to_owned(),
                        property: "stroke-width".to_owned(),
                        value: width.value.clone(),
                        span: Some(width.span.clone()),
                    }
                })?;
                self.surface.set_width(parsed);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use pretty_assertions::assert_eq;

    fn canvas() -> Canvas {
        Canvas {
            width: 1024,
            height: 1024,
        }
    }

    fn traced(class: Option<&str>, points: &[(f64, f64)]) -> TracedPath {
        TracedPath {
            class: class.map(str::to_owned),
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[test]
    fn test_fill_path_op_sequence() {
        let sheet = style::parse(".a{fill:#fff;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter
            .paint_all(&[traced(
                Some("a"),
                &[(0.0, 0.0), (512.0, 512.0), (1024.0, 1024.0)],
            )])
            .unwrap();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Prepare {
                    width: 1024,
                    height: 1024
                },
                SurfaceOp::PenUp,
                SurfaceOp::EndFill,
                SurfaceOp::Color("#fff".to_string()),
                SurfaceOp::Width(1),
                SurfaceOp::FillColor("#fff".to_string()),
                SurfaceOp::BeginFill,
                SurfaceOp::MoveTo { x: -512.0, y: 512.0 },
                SurfaceOp::PenDown,
                SurfaceOp::MoveTo { x: 0.0, y: 0.0 },
                SurfaceOp::MoveTo { x: 512.0, y: -512.0 },
                SurfaceOp::PenUp,
            ]
        );
    }

    #[test]
    fn test_fill_none_changes_nothing() {
        let sheet = style::parse(".a{fill:none;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter.paint_all(&[traced(Some("a"), &[(0.0, 0.0)])]).unwrap();

        assert!(!surface.ops().contains(&SurfaceOp::BeginFill));
        assert!(!surface
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::Color(_))));
    }

    #[test]
    fn test_stroke_overrides_fill_outline_color() {
        let sheet = style::parse(".a{fill:#ff0000;stroke:#000000;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter.paint_all(&[traced(Some("a"), &[(0.0, 0.0)])]).unwrap();

        let colors: Vec<_> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Color(c) => Some(c.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec!["#ff0000", "#000000"]);
    }

    #[test]
    fn test_stroke_width_applied() {
        let sheet = style::parse(".a{stroke:#000;stroke-width:3;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter.paint_all(&[traced(Some("a"), &[(0.0, 0.0)])]).unwrap();

        assert!(surface.ops().contains(&SurfaceOp::Width(3)));
    }

    #[test]
    fn test_stroke_width_ignored_without_stroke() {
        let sheet = style::parse(".a{stroke-width:3;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter.paint_all(&[traced(Some("a"), &[(0.0, 0.0)])]).unwrap();

        assert!(!surface.ops().contains(&SurfaceOp::Width(3)));
    }

    #[test]
    fn test_non_integer_stroke_width_fails() {
        let sheet = style::parse(".a{stroke:#000;stroke-width:abc;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        let err = painter
            .paint_all(&[traced(Some("a"), &[(0.0, 0.0)])])
            .unwrap_err();

        assert!(matches!(
            err,
            PaintError::InvalidStyleValue { ref value, .. } if value == "abc"
        ));
        assert!(err.span().is_some());
    }

    #[test]
    fn test_unknown_class_fails_before_any_path_op() {
        let sheet = style::parse(".known{fill:red;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        let err = painter
            .paint_all(&[traced(Some("ghost"), &[(0.0, 0.0)])])
            .unwrap_err();

        assert!(matches!(err, PaintError::UnknownClass { index: 0, .. }));
        // Only the initial prepare and pen-up happened.
        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Prepare {
                    width: 1024,
                    height: 1024
                },
                SurfaceOp::PenUp,
            ]
        );
    }

    #[test]
    fn test_classless_path_fails() {
        let sheet = style::parse(".a{fill:red;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        let err = painter
            .paint_all(&[traced(None, &[(0.0, 0.0)])])
            .unwrap_err();
        assert!(matches!(
            err,
            PaintError::UnknownClass { class: None, .. }
        ));
    }

    #[test]
    fn test_prior_paths_survive_failure() {
        let sheet = style::parse(".a{stroke:#000;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        let err = painter.paint_all(&[
            traced(Some("a"), &[(0.0, 0.0), (10.0, 10.0)]),
            traced(Some("ghost"), &[(0.0, 0.0)]),
        ]);

        assert!(err.is_err());
        // The first path's stroke and movement are all on the surface.
        assert!(surface.ops().contains(&SurfaceOp::Color("#000".to_string())));
        assert!(surface.ops().contains(&SurfaceOp::PenDown));
    }

    #[test]
    fn test_pen_raised_between_paths() {
        let sheet = style::parse(".a{stroke:#000;}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter
            .paint_all(&[
                traced(Some("a"), &[(0.0, 0.0), (10.0, 0.0)]),
                traced(Some("a"), &[(20.0, 0.0), (30.0, 0.0)]),
            ])
            .unwrap();

        // Between the last point of path one and the first point of path
        // two there must be a pen-up, and each path lowers the pen anew.
        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Prepare {
                    width: 1024,
                    height: 1024
                },
                SurfaceOp::PenUp,
                SurfaceOp::EndFill,
                SurfaceOp::Color("#000".to_string()),
                SurfaceOp::MoveTo { x: -512.0, y: 512.0 },
                SurfaceOp::PenDown,
                SurfaceOp::MoveTo { x: -502.0, y: 512.0 },
                SurfaceOp::PenUp,
                SurfaceOp::EndFill,
                SurfaceOp::Color("#000".to_string()),
                SurfaceOp::MoveTo { x: -492.0, y: 512.0 },
                SurfaceOp::PenDown,
                SurfaceOp::MoveTo { x: -482.0, y: 512.0 },
                SurfaceOp::PenUp,
            ]
        );
    }

    #[test]
    fn test_empty_attrs_inherit_pen_state() {
        let sheet = style::parse(".bold{stroke:#123456;stroke-width:4;}.plain{}");
        let mut surface = RecordingSurface::new();
        let mut painter = Painter::new(&mut surface, canvas(), &sheet);
        painter
            .paint_all(&[
                traced(Some("bold"), &[(0.0, 0.0), (10.0, 0.0)]),
                traced(Some("plain"), &[(20.0, 0.0), (30.0, 0.0)]),
            ])
            .unwrap();

        // The second path issues no color or width ops; it draws with the
        // first path's pen.
        let color_ops = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Color(_) | SurfaceOp::Width(_)))
            .count();
        assert_eq!(color_ops, 2);
    }
}
