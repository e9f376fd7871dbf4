//! penplot - replay SVG paths as pen-drawing instructions
//!
//! This library reads path geometry and per-class style rules from an SVG
//! document, samples each path into a polyline at a fixed parameter step,
//! and replays the polylines onto a drawing surface using a pen-up /
//! pen-down model with fill and stroke styling.
//!
//! # Example
//!
//! ```rust
//! use penplot::{plot, RecordingSurface, SurfaceOp};
//!
//! let source = r##"<svg viewBox="0 0 100 100">
//!     <style>.wire{stroke:#000000;}</style>
//!     <path class="wire" d="M 0 0 L 100 100"/>
//! </svg>"##;
//!
//! let mut surface = RecordingSurface::new();
//! plot(source, &mut surface).unwrap();
//! assert!(surface.ops().contains(&SurfaceOp::PenDown));
//! ```

pub mod document;
pub mod geometry;
pub mod painter;
pub mod profile;
pub mod style;

pub use document::{Canvas, DocumentError, SvgDocument, TracedPath, DEFAULT_PRECISION};
pub use geometry::{Curve, CurveError};
pub use painter::{PaintError, Painter, RecordingSurface, ScriptSurface, Surface, SurfaceOp};
pub use profile::{Profile, ProfileError};
pub use style::{StyleAttributes, StyleSheet};

use thiserror::Error;

/// Errors that can occur during the conversion pipeline
#[derive(Debug, Error)]
pub enum PlotError {
    /// Error while extracting the document
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Error while replaying paths onto the surface
    #[error("paint error: {0}")]
    Paint(#[from] PaintError),

    /// Error while writing script output
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Configuration for the complete conversion pipeline
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Sampling precision; the extractor clamps it to its accepted range
    pub precision: f64,
    /// Surface profile for backends that take one
    pub profile: Profile,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            profile: Profile::default(),
        }
    }
}

impl PlotConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling precision
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Set the surface profile, adopting its requested precision
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.precision = profile.precision;
        self.profile = profile;
        self
    }
}

/// Convert an SVG document and replay it onto a surface with default
/// configuration. This is the main entry point for the library.
pub fn plot(source: &str, surface: &mut dyn Surface) -> Result<(), PlotError> {
    plot_with_config(source, &PlotConfig::default(), surface)
}

/// Convert an SVG document and replay it onto a surface.
///
/// The pipeline runs extract, sample, style-resolve, paint, in that
/// order, and is fail-fast: the first error aborts the run and surface
/// operations already issued are not rolled back. Callers needing
/// atomicity should paint onto a [`RecordingSurface`] first and replay
/// its log.
pub fn plot_with_config(
    source: &str,
    config: &PlotConfig,
    surface: &mut dyn Surface,
) -> Result<(), PlotError> {
    let doc = SvgDocument::parse(source)?;
    let traced = doc.sample(config.precision);
    let sheet = style::parse(doc.style_text());

    let mut painter = Painter::new(surface, doc.canvas(), &sheet);
    painter.paint_all(&traced)?;
    Ok(())
}

/// Convert an SVG document into a plot script.
///
/// # Example
///
/// ```rust
/// use penplot::{plot_to_script, PlotConfig};
///
/// let source = r##"<svg viewBox="0 0 4 4">
///     <style>.wire{stroke:#000000;}</style>
///     <path class="wire" d="M 0 0 L 4 4"/>
/// </svg>"##;
///
/// let config = PlotConfig::new().with_precision(0.5);
/// let script = plot_to_script(source, &config).unwrap();
/// assert!(script.contains("canvas 4 4"));
/// assert!(script.contains("pendown"));
/// ```
pub fn plot_to_script(source: &str, config: &PlotConfig) -> Result<String, PlotError> {
    let mut surface = ScriptSurface::with_profile(Vec::new(), &config.profile);
    plot_with_config(source, config, &mut surface)?;
    let bytes = surface.finish()?;
    Ok(String::from_utf8(bytes).expect("script output is UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r##"<svg viewBox="0 0 8 8">
        <style>.a{fill:#fff;}.b{stroke:#000;stroke-width:2;}</style>
        <path class="a" d="M 0 0 L 8 0"/>
        <path class="b" d="M 0 8 L 8 8"/>
    </svg>"##;

    #[test]
    fn test_plot_records_both_paths() {
        let mut surface = RecordingSurface::new();
        plot(SOURCE, &mut surface).unwrap();

        let pen_downs = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::PenDown))
            .count();
        assert_eq!(pen_downs, 2);
        assert!(surface.ops().contains(&SurfaceOp::BeginFill));
        assert!(surface.ops().contains(&SurfaceOp::Width(2)));
    }

    #[test]
    fn test_plot_to_script_has_profile_header() {
        let script = plot_to_script(SOURCE, &PlotConfig::default()).unwrap();
        assert!(script.starts_with("title Tomortec\n"));
        assert!(script.contains("background #315a78"));
        assert!(script.contains("canvas 8 8"));
    }

    #[test]
    fn test_plot_propagates_document_errors() {
        let mut surface = RecordingSurface::new();
        let err = plot("<svg><style></style></svg>", &mut surface).unwrap_err();
        assert!(matches!(
            err,
            PlotError::Document(DocumentError::MissingCanvas)
        ));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_plot_propagates_paint_errors() {
        let source = r##"<svg viewBox="0 0 8 8">
            <style>.other{fill:red;}</style>
            <path class="a" d="M 0 0 L 8 0"/>
        </svg>"##;
        let mut surface = RecordingSurface::new();
        let err = plot(source, &mut surface).unwrap_err();
        assert!(matches!(
            err,
            PlotError::Paint(PaintError::UnknownClass { .. })
        ));
    }

    #[test]
    fn test_config_profile_precision_adopted() {
        let profile = Profile::from_str("[sampling]\nprecision = 0.25\n").unwrap();
        let config = PlotConfig::new().with_profile(profile);
        assert_eq!(config.precision, 0.25);
    }
}
