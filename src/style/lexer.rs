//! Lexer for the recognized CSS subset using logos
//!
//! The style block grammar is deliberately narrow: class selectors,
//! brace-delimited declaration blocks, `property: value;` pairs. The
//! lexer therefore only distinguishes the punctuation of that grammar,
//! `.class` selectors, `#name` tokens (id selectors and hex color values
//! share this shape), at-keywords, and bare words. Anything else is an
//! error token and gets dropped by [`lex`].

use logos::Logos;

/// Byte range in the style text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    /// `.name` — the only selector shape the sheet recognizes
    #[regex(r"\.[a-zA-Z0-9]+", |lex| lex.slice()[1..].to_string())]
    ClassSelector(String),

    /// `#name` — an id selector in selector position, a hex color in
    /// value position
    #[regex(r"#[a-zA-Z0-9]+", |lex| lex.slice().to_string())]
    HashName(String),

    /// `@media`, `@import`, ... — recognized only so their rules can be
    /// skipped
    #[regex(r"@[a-zA-Z-]+", |lex| lex.slice().to_string())]
    AtKeyword(String),

    /// Property names and keyword/dimension values (`stroke-width`,
    /// `none`, `1.5px`)
    #[regex(r"[a-zA-Z0-9_][a-zA-Z0-9_%.\-]*", |lex| lex.slice().to_string())]
    Word(String),
}

/// Lex style text into tokens with spans, dropping unrecognized bytes
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
