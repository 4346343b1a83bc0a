//! # Tokens
//!
//! Each token is an individual lexeme -- the smallest unit of meaning the
//! combinators look at.
//!
//! Tokens provide both the semantic information in the form of their `Kind`,
//! and the general context they were found in.

use std::fmt;

use diagnostic::Span;

/// An individual lexeme in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The semantic kind thing the token is. See `Kind` for more.
    pub(crate) kind: Kind,

    /// This is the `Span` of this token's body, not including any surrounding
    /// whitespace.
    pub(crate) span: Span,

    /// The body of the token as it was represented in the original input.
    pub(crate) body: &'a str,
}

impl<'a> Token<'a> {
    /// Make a token by hand. Mostly useful for feeding assemblies in tests.
    pub fn new(kind: Kind, span: Span, body: &'a str) -> Self {
        Token { kind, span, body }
    }

    /// The kind of token this is.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The span of the body of this token, not including surrounding
    /// whitespace.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The way the token was represented in the source.
    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, Kind::Comment(_))
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// A [`Token`]'s kind is the semantically-relevant part of the token, removed
/// from the source context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Comments, `// like this` or `/* like this */`.
    Comment(Comment),

    /// Keywords and identifiers alike, like `class` or `foo`. Telling them
    /// apart is up to the grammar.
    Word,

    /// An integer like `5`, `0xCAFE`, `0b0101` or `10_000L`.
    Int,
    /// A floating point number like `12.34e-56`, `.5` or `1f`.
    Float,
    /// A character literal like `'a'` or `'\n'`.
    Char,
    /// A String literal like `"Hello World!\n"`.
    String,

    /// Operators and punctuation, like `+`, `;` or `>>>=`.
    Symbol,
}

/// The different flavours of comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comment {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */`
    Doc,
}

impl Kind {
    /// The user-facing name of this kind of token.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Comment(Comment::Line) => "line comment",
            Kind::Comment(Comment::Block) => "block comment",
            Kind::Comment(Comment::Doc) => "documentation comment",
            Kind::Word => "word",
            Kind::Int => "integer",
            Kind::Float => "floating point number",
            Kind::Char => "character",
            Kind::String => "string",
            Kind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
