//! Style resolution for the CSS subset carried in SVG style blocks
//!
//! [`parse`] turns style text into a [`StyleSheet`]: a map from class name
//! to the flat attribute map of its declaration block. Only plain class
//! selectors are recognized; id selectors, element selectors, and at-rules
//! are skipped without error. Repeats follow overwrite semantics at both
//! levels — the last declaration of a property wins within a block, the
//! last block wins for a repeated class name.

pub mod lexer;

use std::collections::HashMap;

use lexer::Token;
pub use lexer::Span;

/// One parsed declaration: the value text plus the span of the whole
/// `property: value;` declaration in the style text, kept for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub value: String,
    pub span: Span,
}

/// Attribute map of a single class block
pub type StyleAttributes = HashMap<String, Declaration>;

/// Map from class name to its resolved attributes
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: HashMap<String, StyleAttributes>,
}

impl StyleSheet {
    /// Look up the attributes for a class name
    pub fn get(&self, class: &str) -> Option<&StyleAttributes> {
        self.rules.get(class)
    }

    /// Whether a class has a rule in this sheet
    pub fn contains(&self, class: &str) -> bool {
        self.rules.contains_key(class)
    }

    /// Number of class rules in the sheet
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse style text into a sheet. Infallible: everything outside the
/// recognized subset is silently ignored.
///
/// Whitespace handling is a documented decision: the tokenizer drops it,
/// so property names and values are effectively trimmed and interior runs
/// collapse to a single space (`fill : red` parses like `fill:red`). A
/// declaration not terminated by `;` before its closing brace is dropped.
pub fn parse(style_text: &str) -> StyleSheet {
    let tokens: Vec<(Token, Span)> = lexer::lex(style_text).collect();
    let mut rules = HashMap::new();

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i].0 {
            Token::ClassSelector(name)
                if matches!(tokens.get(i + 1), Some((Token::BraceOpen, _))) =>
            {
                let (attrs, next) = parse_block(&tokens, i + 2);
                rules.insert(name.clone(), attrs);
                i = next;
            }
            // Any other rule (id selector, element selector, at-rule):
            // consume its block and move on.
            Token::BraceOpen => i = skip_block(&tokens, i + 1),
            _ => i += 1,
        }
    }

    StyleSheet { rules }
}

/// Parse declarations from after a block's opening brace until its close.
/// Returns the attributes and the index just past the closing brace.
fn parse_block(tokens: &[(Token, Span)], mut i: usize) -> (StyleAttributes, usize) {
    let mut attrs = StyleAttributes::new();

    while i < tokens.len() {
        match &tokens[i].0 {
            Token::BraceClose => return (attrs, i + 1),
            Token::Word(property)
                if matches!(tokens.get(i + 1), Some((Token::Colon, _))) =>
            {
                let start = tokens[i].1.start;
                let mut value_parts: Vec<&str> = Vec::new();
                let mut j = i + 2;
                loop {
                    match tokens.get(j) {
                        Some((Token::Word(w), _)) => value_parts.push(w),
                        Some((Token::HashName(h), _)) => value_parts.push(h),
                        Some((Token::Semicolon, span)) => {
                            if !value_parts.is_empty() {
                                attrs.insert(
                                    property.clone(),
                                    Declaration {
                                        value: value_parts.join(" "),
                                        span: start..span.end,
                                    },
                                );
                            }
                            j += 1;
                            break;
                        }
                        // Unterminated declaration: dropped, block goes on.
                        Some((Token::BraceClose, _)) | None => break,
                        Some(_) => {}
                    }
                    j += 1;
                }
                i = j;
            }
            // Nested block inside a declaration block is outside the
            // subset; skip it wholesale rather than misreading its
            // contents as declarations.
            Token::BraceOpen => i = skip_block(tokens, i + 1),
            _ => i += 1,
        }
    }

    (attrs, i)
}

/// Skip past a block body, brace-depth aware. `i` points just after the
/// opening brace; the returned index points just past the matching close.
fn skip_block(tokens: &[(Token, Span)], mut i: usize) -> usize {
    let mut depth = 1usize;
    while i < tokens.len() && depth > 0 {
        match tokens[i].0 {
            Token::BraceOpen => depth += 1,
            Token::BraceClose => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    i
}
