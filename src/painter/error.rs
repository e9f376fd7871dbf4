//! Paint-time errors, with source-context formatting for the ones that
//! point back into the style text

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::style::Span;

#[derive(Debug, Error)]
pub enum PaintError {
    /// A path's class (or its lack of one) has no rule in the style sheet
    #[error("path #{index}: {}", describe_class(.class))]
    UnknownClass {
        index: usize,
        class: Option<String>,
    },

    /// A style value that must be numeric failed to parse
    #[error("class '{class}': {property} value '{value}' is not an integer")]
    InvalidStyleValue {
        class: String,
        property: String,
        value: String,
        span: Option<Span>,
    },
}

fn describe_class(class: &Option<String>) -> String {
    match class {
        Some(name) => format!("class '{name}' has no style rule"),
        None => "path has no class attribute to resolve a style with".to_string(),
    }
}

impl PaintError {
    /// The offending declaration's span in the style text, if known
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::InvalidStyleValue { span, .. } => span.as_ref(),
            Self::UnknownClass { .. } => None,
        }
    }

    /// Format the error with source context using ariadne. Falls back to
    /// the plain `Display` message when no span is available.
    pub fn format(&self, style_text: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(style_text)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}
