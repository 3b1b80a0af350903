use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Range;

use serde::Deserialize;

/// The kinds of token the indentation lexer produces. Only the tokens needed
/// to locate definitions are distinguished; everything else is `Ignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
	/// `class`
	Class,
	/// `def`
	Function,
	/// An identifier, e.g. `print_content`
	Ident,
	/// `:`
	Colon,
	/// `(`
	Lparen,
	/// `)`
	Rparen,
	/// `\n`
	Newline,
	/// `@`
	Decorator,
	/// `import`
	Import,
	/// `from`
	From,
	/// End of input. Always the final token and always at depth 1.
	Eof,
	/// Comments, string literals and any other character.
	Ignore,
}

impl TokenKind {
	/// Definition keywords open a block that can be extracted.
	pub fn is_definition(self) -> bool {
		matches!(self, Self::Class | Self::Function)
	}
}

impl Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Class => "CLASS",
			Self::Function => "FUNCTION",
			Self::Ident => "IDENT",
			Self::Colon => "COLON",
			Self::Lparen => "LPAREN",
			Self::Rparen => "RPAREN",
			Self::Newline => "NEWLINE",
			Self::Decorator => "DECORATOR",
			Self::Import => "IMPORT",
			Self::From => "FROM",
			Self::Eof => "EOF",
			Self::Ignore => "IGNORE",
		};

		write!(f, "{name}")
	}
}

/// A single token borrowed from the source text.
///
/// `line`, `column` and `depth` are 1-indexed. `start` and `end` are byte
/// offsets into the source, so `&source[token.span()] == token.literal` for
/// every token except `Eof`, which is empty and sits at the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	pub kind: TokenKind,
	pub literal: &'a str,
	pub line: usize,
	pub column: usize,
	pub depth: usize,
	pub start: usize,
	pub end: usize,
}

impl Token<'_> {
	pub fn span(&self) -> Range<usize> {
		self.start..self.end
	}

	pub fn is(&self, kind: TokenKind, literal: &str) -> bool {
		self.kind == kind && self.literal == literal
	}
}

impl Display for Token<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} {:?} {}:{} depth={} [{}..{})",
			self.kind, self.literal, self.line, self.column, self.depth, self.start, self.end
		)
	}
}

/// Byte range of one physical line, including its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
	pub start: usize,
	pub end: usize,
}

impl Line {
	pub fn span(&self) -> Range<usize> {
		self.start..self.end
	}
}

/// Block boundaries observed while scanning. Kept for diagnostics only;
/// extraction relies on token depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
	Open { line: usize, depth: usize },
	Close { line: usize, depth: usize },
}

/// Immutable mapping from literal text to token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
	entries: BTreeMap<String, TokenKind>,
}

impl KeywordTable {
	/// The keywords for python sources.
	pub fn python() -> Self {
		Self::from_iter([
			("class", TokenKind::Class),
			("def", TokenKind::Function),
			("@", TokenKind::Decorator),
			("import", TokenKind::Import),
			("from", TokenKind::From),
		])
	}

	/// Classify a word, defaulting to [`TokenKind::Ident`].
	pub fn classify(&self, literal: &str) -> TokenKind {
		self.entries
			.get(literal)
			.copied()
			.unwrap_or(TokenKind::Ident)
	}

	/// The literal that lexes as `kind`. When several literals share a kind
	/// the lexicographically first one is returned.
	pub fn literal_for(&self, kind: TokenKind) -> Option<&str> {
		self.entries
			.iter()
			.find(|(_, entry)| **entry == kind)
			.map(|(literal, _)| literal.as_str())
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for KeywordTable {
	fn default() -> Self {
		Self::python()
	}
}

impl<K: Into<String>> FromIterator<(K, TokenKind)> for KeywordTable {
	fn from_iter<T: IntoIterator<Item = (K, TokenKind)>>(iter: T) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(literal, kind)| (literal.into(), kind))
				.collect(),
		}
	}
}
