use std::ops::Range;

use logos::Logos;

use crate::BlockEvent;
use crate::CinjError;
use crate::CinjResult;
use crate::KeywordTable;
use crate::Line;
use crate::Token;
use crate::TokenKind;
use crate::TokenStore;

/// Default number of spaces that make up one indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Raw tokens produced by logos. The walker turns these into depth-aware
/// [`Token`]s.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
	#[token("\n")]
	Newline,
	#[regex(r" +")]
	Spaces,
	#[regex(r"\t+")]
	Tabs,
	#[regex(r"[\r\x0C]")]
	Whitespace,
	#[token(":")]
	Colon,
	#[token("(")]
	LParen,
	#[token(")")]
	RParen,
	#[token("@")]
	At,
	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
	Word,
	#[regex(r"#[^\n]*", allow_greedy = true)]
	Comment,
	#[regex(r#""([^"\\\n]|\\.)*""#)]
	DoubleQuotedString,
	#[regex(r"'([^'\\\n]|\\.)*'")]
	SingleQuotedString,
}

/// Options for a single lexing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOptions {
	/// Number of spaces in one indentation unit. A tab is always one unit.
	pub indent_width: usize,
	/// Literal to kind lookup applied to words and `@`.
	pub keywords: KeywordTable,
}

impl LexOptions {
	pub fn new(indent_width: usize) -> Self {
		Self {
			indent_width,
			..Self::default()
		}
	}
}

impl Default for LexOptions {
	fn default() -> Self {
		Self {
			indent_width: DEFAULT_INDENT_WIDTH,
			keywords: KeywordTable::python(),
		}
	}
}

/// Walks the logos token stream once, tracking indentation depth at the start
/// of every line and recording tokens, line ranges and block events.
struct TokenWalker<'a, 'o> {
	/// The full source text.
	source: &'a str,
	options: &'o LexOptions,
	/// The collected raw tokens and their byte spans.
	raw_tokens: Vec<(Result<RawToken, ()>, Range<usize>)>,
	/// Current index into `raw_tokens`.
	cursor: usize,
	/// 1-indexed line of the cursor.
	line: usize,
	/// Byte offset where the current line starts.
	line_start: usize,
	/// Set after a newline until the indentation of the next line is measured.
	at_line_start: bool,
	/// Depth of the current line, never below 1.
	depth: usize,
	tokens: Vec<Token<'a>>,
	lines: Vec<Line>,
	/// Whether the last entry in `lines` still needs its end offset.
	line_open: bool,
	events: Vec<BlockEvent>,
}

impl<'a, 'o> TokenWalker<'a, 'o> {
	fn new(source: &'a str, options: &'o LexOptions) -> Self {
		let raw_tokens: Vec<_> = RawToken::lexer(source).spanned().collect();

		Self {
			source,
			options,
			raw_tokens,
			cursor: 0,
			line: 1,
			line_start: 0,
			at_line_start: true,
			depth: 1,
			tokens: vec![],
			lines: vec![],
			line_open: false,
			events: vec![],
		}
	}

	fn peek(&self) -> Option<(Result<RawToken, ()>, Range<usize>)> {
		self.raw_tokens.get(self.cursor).cloned()
	}

	fn push_token(&mut self, kind: TokenKind, span: Range<usize>) {
		let token = Token {
			kind,
			literal: self.source.get(span.clone()).unwrap_or_default(),
			line: self.line,
			column: span.start - self.line_start + 1,
			depth: self.depth,
			start: span.start,
			end: span.end,
		};
		self.tokens.push(token);
	}

	fn record_event(&mut self, event: BlockEvent) {
		tracing::trace!(?event, "block boundary");
		self.events.push(event);
	}

	/// Open a line table entry and measure the indentation at column 1.
	fn start_line(&mut self) {
		self.at_line_start = false;
		self.lines.push(Line {
			start: self.line_start,
			end: self.line_start,
		});
		self.line_open = true;

		let previous = self.depth;
		let mut depth = 1;

		match self.peek() {
			Some((Ok(RawToken::Spaces), span)) => {
				depth += span.len() / self.options.indent_width;
				self.cursor += 1;
			}
			Some((Ok(RawToken::Tabs), span)) => {
				depth += span.len();
				self.cursor += 1;
			}
			_ => {}
		}

		// A `\r` or form feed after the indentation never starts content.
		while matches!(self.peek(), Some((Ok(RawToken::Whitespace), _))) {
			self.cursor += 1;
		}

		// Blank and whitespace-only lines keep the previous depth.
		let blank = matches!(self.peek(), None | Some((Ok(RawToken::Newline), _)));
		if blank {
			return;
		}

		self.depth = depth;

		if depth > previous {
			self.record_event(BlockEvent::Open {
				line: self.line,
				depth,
			});
		} else {
			for unwound in (depth + 1..=previous).rev() {
				self.record_event(BlockEvent::Close {
					line: self.line,
					depth: unwound,
				});
			}
		}
	}

	fn close_line(&mut self, end: usize) {
		if !self.line_open {
			return;
		}

		if let Some(line) = self.lines.last_mut() {
			line.end = end;
		}
		self.line_open = false;
	}

	fn process(&mut self) {
		while self.cursor < self.raw_tokens.len() {
			if self.at_line_start {
				self.start_line();
				continue;
			}

			let (result, span) = self.raw_tokens[self.cursor].clone();
			self.cursor += 1;

			let Ok(raw) = result else {
				self.push_token(TokenKind::Ignore, span);
				continue;
			};

			match raw {
				RawToken::Newline => {
					self.push_token(TokenKind::Newline, span.clone());
					self.close_line(span.end);
					self.line += 1;
					self.line_start = span.end;
					self.at_line_start = true;
				}
				RawToken::Spaces | RawToken::Tabs | RawToken::Whitespace => {}
				RawToken::Colon => self.push_token(TokenKind::Colon, span),
				RawToken::LParen => self.push_token(TokenKind::Lparen, span),
				RawToken::RParen => self.push_token(TokenKind::Rparen, span),
				RawToken::At | RawToken::Word => {
					let kind = self.options.keywords.classify(&self.source[span.clone()]);
					self.push_token(kind, span);
				}
				RawToken::Comment
				| RawToken::DoubleQuotedString
				| RawToken::SingleQuotedString => self.push_token(TokenKind::Ignore, span),
			}
		}
	}

	/// Close the final line, unwind every open level and emit `Eof`.
	fn finish(mut self) -> TokenStore<'a> {
		let len = self.source.len();
		self.close_line(len);

		for unwound in (2..=self.depth).rev() {
			self.record_event(BlockEvent::Close {
				line: self.line,
				depth: unwound,
			});
		}
		self.depth = 1;
		self.push_token(TokenKind::Eof, len..len);

		TokenStore::new(self.source, self.tokens, self.lines, self.events)
	}
}

/// Tokenize `source` in a single forward pass.
pub fn lex<'a>(source: &'a str, options: &LexOptions) -> CinjResult<TokenStore<'a>> {
	if options.indent_width == 0 {
		return Err(CinjError::InvalidIndentWidth(options.indent_width));
	}

	let mut walker = TokenWalker::new(source, options);
	walker.process();
	let store = walker.finish();

	tracing::debug!(
		tokens = store.tokens().len(),
		lines = store.lines().len(),
		"lexed source"
	);

	Ok(store)
}
