//! SVG document extraction
//!
//! [`SvgDocument::parse`] pulls everything the pipeline needs out of the
//! markup in one pass: the canvas size from the root `viewBox`, every
//! `<path>` element (with its optional `class`) in document order, and the
//! text of the first `<style>` block. The XML itself is handled by
//! `roxmltree`; nothing here walks the tree after parsing returns.

use kurbo::Point;
use thiserror::Error;

use crate::geometry::{Curve, CurveError};

/// Finest sampling step the extractor will accept. Callers may request
/// coarser sampling but never finer; this caps the point count of a
/// single path at 1001.
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Coarsest accepted step, so every polyline keeps at least two points
const COARSEST_PRECISION: f64 = 0.5;

/// Canvas size taken from the document's viewBox, in document units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// One discovered path: its class attribute (if any) and its curve
#[derive(Debug)]
pub struct RawPath {
    pub class: Option<String>,
    pub curve: Curve,
}

/// A sampled path ready for the painter
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    pub class: Option<String>,
    pub points: Vec<Point>,
}

/// Errors raised while extracting a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input is not well-formed XML
    #[error("document is not well-formed XML: {0}")]
    Format(#[from] roxmltree::Error),

    /// The root element has no viewBox attribute
    #[error("document has no viewBox size declaration")]
    MissingCanvas,

    /// The viewBox exists but its tokens do not describe a canvas
    #[error("malformed viewBox '{view_box}': {reason}")]
    MalformedCanvas { view_box: String, reason: String },

    /// No `<style>` element anywhere in the document
    #[error("document has no style block")]
    MissingStyle,

    /// A `<path>` element without the required `d` attribute
    #[error("path #{index} has no 'd' attribute")]
    MissingPathData { index: usize },

    /// A `d` attribute that does not describe a drawable curve
    #[error("path #{index}: {source}")]
    InvalidPathData {
        index: usize,
        #[source]
        source: CurveError,
    },
}

/// A parsed SVG document, reduced to the parts the pipeline consumes.
///
/// Canvas, path list, and style text are computed once here and never
/// mutated. [`SvgDocument::sample`] recomputes its result from the path
/// list on every call, so repeated calls are deterministic and never
/// accumulate.
#[derive(Debug)]
pub struct SvgDocument {
    canvas: Canvas,
    paths: Vec<RawPath>,
    style_text: String,
}

impl SvgDocument {
    /// Parse an SVG document from its source text
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        let doc = roxmltree::Document::parse(source)?;
        let root = doc.root_element();

        let view_box = root.attribute("viewBox").ok_or(DocumentError::MissingCanvas)?;
        let canvas = parse_view_box(view_box)?;

        // Tag names are compared by local name so namespaced documents
        // (xmlns="http://www.w3.org/2000/svg") resolve the same way.
        let style_text = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "style")
            .map(|n| n.text().unwrap_or("").to_owned())
            .ok_or(DocumentError::MissingStyle)?;

        let mut paths = Vec::new();
        let path_nodes = doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "path");
        for (index, node) in path_nodes.enumerate() {
            let data = node
                .attribute("d")
                .ok_or(DocumentError::MissingPathData { index })?;
            let curve = Curve::parse(data)
                .map_err(|source| DocumentError::InvalidPathData { index, source })?;
            paths.push(RawPath {
                class: node.attribute("class").map(str::to_owned),
                curve,
            });
        }

        Ok(Self {
            canvas,
            paths,
            style_text,
        })
    }

    /// Canvas size from the viewBox
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Raw text of the document's style block
    pub fn style_text(&self) -> &str {
        &self.style_text
    }

    /// The discovered paths, in document order
    pub fn paths(&self) -> &[RawPath] {
        &self.paths
    }

    /// Sample every path into a polyline at the given parameter step.
    ///
    /// The step is clamped to [`DEFAULT_PRECISION`, 0.5]: requests for
    /// finer sampling than the default are a guard against runaway point
    /// counts, requests coarser than 0.5 would drop below two points per
    /// polyline. Results are in discovery order and recomputed on every
    /// call.
    pub fn sample(&self, precision: f64) -> Vec<TracedPath> {
        let precision = if precision.is_finite() {
            precision.clamp(DEFAULT_PRECISION, COARSEST_PRECISION)
        } else {
            DEFAULT_PRECISION
        };
        self.paths
            .iter()
            .map(|path| TracedPath {
                class: path.class.clone(),
                points: path.curve.sample(precision),
            })
            .collect()
    }
}

fn parse_view_box(view_box: &str) -> Result<Canvas, DocumentError> {
    let malformed = |reason: String| DocumentError::MalformedCanvas {
        view_box: view_box.to_owned(),
        reason,
    };

    let tokens: Vec<&str> = view_box.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(malformed(format!(
            "expected 4 numeric tokens, found {}",
            tokens.len()
        )));
    }

    // Tokens 1-2 are the origin offset: validated as numeric, then discarded.
    for token in &tokens[..2] {
        token
            .parse::<f64>()
            .map_err(|_| malformed(format!("origin token '{token}' is not numeric")))?;
    }

    let width = parse_dimension(tokens[2], "width", &malformed)?;
    let height = parse_dimension(tokens[3], "height", &malformed)?;
    Ok(Canvas { width, height })
}

fn parse_dimension(
    token: &str,
    what: &str,
    malformed: &impl Fn(String) -> DocumentError,
) -> Result<u32, DocumentError> {
    let value = token
        .parse::<u32>()
        .map_err(|_| malformed(format!("{what} token '{token}' is not a positive integer")))?;
    if value == 0 {
        return Err(malformed(format!("{what} must be greater than zero")));
    }
    Ok(value)
}
