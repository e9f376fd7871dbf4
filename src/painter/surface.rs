//! The drawing-surface seam
//!
//! The painter only ever talks to a [`Surface`]: a pen that can move, go
//! up or down, change color and width, and open or close a fill region.
//! Real backends (a plotter script writer, an interactive canvas) live
//! behind this trait; tests substitute [`RecordingSurface`] and assert on
//! the op log.

use kurbo::Point;

use crate::document::Canvas;

/// Pen operations a drawing surface must support.
///
/// Backends must treat `end_fill` with no open fill region as a no-op;
/// the painter closes fills unconditionally between paths.
pub trait Surface {
    /// Size the surface to the canvas before any drawing
    fn prepare(&mut self, canvas: Canvas);

    /// Move the pen to a point in surface coordinates (center origin,
    /// y-up). Draws a line when the pen is down.
    fn move_to(&mut self, point: Point);

    fn pen_up(&mut self);
    fn pen_down(&mut self);

    /// Set the stroke color
    fn set_color(&mut self, color: &str);

    /// Set the pen width
    fn set_width(&mut self, width: u32);

    /// Set the color used for fill regions
    fn set_fill_color(&mut self, color: &str);

    /// Open a fill region; points drawn until `end_fill` bound it
    fn begin_fill(&mut self);

    /// Close the open fill region, if any
    fn end_fill(&mut self);
}

/// One recorded surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Prepare { width: u32, height: u32 },
    MoveTo { x: f64, y: f64 },
    PenUp,
    PenDown,
    Color(String),
    Width(u32),
    FillColor(String),
    BeginFill,
    EndFill,
}

/// A surface that records every operation instead of drawing.
///
/// Besides driving tests, this is the buffering strategy for callers that
/// need atomicity: paint onto a recording first, then [`replay`] the log
/// onto the real backend only if painting succeeded.
///
/// [`replay`]: RecordingSurface::replay
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded operations, in issue order
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Re-issue every recorded operation onto another surface
    pub fn replay(&self, target: &mut dyn Surface) {
        for op in &self.ops {
            match op {
                SurfaceOp::Prepare { width, height } => target.prepare(Canvas {
                    width: *width,
                    height: *height,
                }),
                SurfaceOp::MoveTo { x, y } => target.move_to(Point::new(*x, *y)),
                SurfaceOp::PenUp => target.pen_up(),
                SurfaceOp::PenDown => target.pen_down(),
                SurfaceOp::Color(color) => target.set_color(color),
                SurfaceOp::Width(width) => target.set_width(*width),
                SurfaceOp::FillColor(color) => target.set_fill_color(color),
                SurfaceOp::BeginFill => target.begin_fill(),
                SurfaceOp::EndFill => target.end_fill(),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn prepare(&mut self, canvas: Canvas) {
        self.ops.push(SurfaceOp::Prepare {
            width: canvas.width,
            height: canvas.height,
        });
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::MoveTo {
            x: point.x,
            y: point.y,
        });
    }

    fn pen_up(&mut self) {
        self.ops.push(SurfaceOp::PenUp);
    }

    fn pen_down(&mut self) {
        self.ops.push(SurfaceOp::PenDown);
    }

    fn set_color(&mut self, color: &str) {
        self.ops.push(SurfaceOp::Color(color.to_owned()));
    }

    fn set_width(&mut self, width: u32) {
        self.ops.push(SurfaceOp::Width(width));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(SurfaceOp::FillColor(color.to_owned()));
    }

    fn begin_fill(&mut self) {
        self.ops.push(SurfaceOp::BeginFill);
    }

    fn end_fill(&mut self) {
        self.ops.push(SurfaceOp::EndFill);
    }
}
