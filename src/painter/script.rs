//! Plain-text plot-script backend
//!
//! Writes one surface operation per line, suitable for piping into a
//! plotter driver or diffing in tests:
//!
//! ```text
//! title Tomortec
//! background #315a78
//! speed fastest
//! canvas 1024 1024
//! penup
//! color #fff
//! width 1
//! moveto -512 512
//! pendown
//! ```
//!
//! Write failures are sticky: the first error is kept and returned by
//! [`ScriptSurface::finish`], later ops become no-ops.

use std::io::{self, Write};

use kurbo::Point;

use crate::document::Canvas;
use crate::profile::Profile;

use super::surface::Surface;

/// A [`Surface`] that serializes pen operations as a text script
#[derive(Debug)]
pub struct ScriptSurface<W: Write> {
    out: W,
    fill_open: bool,
    status: io::Result<()>,
}

impl<W: Write> ScriptSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            fill_open: false,
            status: Ok(()),
        }
    }

    /// Create a script surface that starts with the profile's surface
    /// settings as header lines
    pub fn with_profile(out: W, profile: &Profile) -> Self {
        let mut surface = Self::new(out);
        surface.emit(format_args!("title {}", profile.title));
        surface.emit(format_args!("background {}", profile.background));
        surface.emit(format_args!("speed {}", profile.speed));
        surface
    }

    fn emit(&mut self, line: std::fmt::Arguments) {
        if self.status.is_ok() {
            self.status = writeln!(self.out, "{line}");
        }
    }

    /// Flush and return the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        self.status?;
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Surface for ScriptSurface<W> {
    fn prepare(&mut self, canvas: Canvas) {
        self.emit(format_args!("canvas {} {}", canvas.width, canvas.height));
    }

    fn move_to(&mut self, point: Point) {
        self.emit(format_args!("moveto {} {}", point.x, point.y));
    }

    fn pen_up(&mut self) {
        self.emit(format_args!("penup"));
    }

    fn pen_down(&mut self) {
        self.emit(format_args!("pendown"));
    }

    fn set_color(&mut self, color: &str) {
        self.emit(format_args!("color {color}"));
    }

    fn set_width(&mut self, width: u32) {
        self.emit(format_args!("width {width}"));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.emit(format_args!("fillcolor {color}"));
    }

    fn begin_fill(&mut self) {
        self.fill_open = true;
        self.emit(format_args!("beginfill"));
    }

    fn end_fill(&mut self) {
        // No open fill region: closing is a no-op, not a script line.
        if self.fill_open {
            self.fill_open = false;
            self.emit(format_args!("endfill"));
        }
    }
}
