use derive_more::Deref;

use crate::BlockEvent;
use crate::CinjError;
use crate::CinjResult;
use crate::Line;
use crate::Token;
use crate::TokenKind;

/// The result of a [`TokenStore::find_shallower_ancestor`] lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ancestor<'s, 'a> {
	/// The token is at the top level.
	Root,
	/// The nearest preceding token one level shallower.
	Token { index: usize, token: &'s Token<'a> },
}

/// The output of a lexing pass: tokens in scan order plus the line table.
///
/// A store is built once from an immutable source and is read-only
/// afterwards. It dereferences to the token vector.
#[derive(Debug, Clone, Deref)]
pub struct TokenStore<'a> {
	source: &'a str,
	#[deref]
	tokens: Vec<Token<'a>>,
	lines: Vec<Line>,
	events: Vec<BlockEvent>,
}

impl<'a> TokenStore<'a> {
	pub(crate) fn new(
		source: &'a str,
		tokens: Vec<Token<'a>>,
		lines: Vec<Line>,
		events: Vec<BlockEvent>,
	) -> Self {
		Self {
			source,
			tokens,
			lines,
			events,
		}
	}

	pub fn source(&self) -> &'a str {
		self.source
	}

	pub fn tokens(&self) -> &[Token<'a>] {
		&self.tokens
	}

	pub fn lines(&self) -> &[Line] {
		&self.lines
	}

	/// Block open and close events recorded while scanning.
	pub fn block_events(&self) -> &[BlockEvent] {
		&self.events
	}

	pub(crate) fn token(&self, index: usize) -> CinjResult<&Token<'a>> {
		self.tokens.get(index).ok_or(CinjError::OutOfRange {
			what: "token",
			index,
			len: self.tokens.len(),
		})
	}

	pub(crate) fn line_span(&self, index: usize) -> CinjResult<Line> {
		self.lines.get(index).copied().ok_or(CinjError::OutOfRange {
			what: "line",
			index,
			len: self.lines.len(),
		})
	}

	/// The text of a 0-indexed line, including its trailing newline.
	pub fn line(&self, index: usize) -> CinjResult<&'a str> {
		let line = self.line_span(index)?;
		Ok(&self.source[line.span()])
	}

	/// The first token of `kind` whose literal is `literal`, with its index.
	pub fn find_first(&self, kind: TokenKind, literal: &str) -> CinjResult<(usize, &Token<'a>)> {
		self.tokens
			.iter()
			.enumerate()
			.find(|(_, token)| token.is(kind, literal))
			.ok_or_else(|| {
				CinjError::NotFound {
					kind,
					name: literal.to_string(),
				}
			})
	}

	/// Every token of `kind` whose literal is `literal`, in scan order.
	pub fn find_all(&self, kind: TokenKind, literal: &str) -> CinjResult<Vec<(usize, &Token<'a>)>> {
		let found: Vec<_> = self
			.tokens
			.iter()
			.enumerate()
			.filter(|(_, token)| token.is(kind, literal))
			.collect();

		if found.is_empty() {
			return Err(CinjError::NotFound {
				kind,
				name: literal.to_string(),
			});
		}

		Ok(found)
	}

	/// Scan backwards from `index` for the nearest non-newline token exactly
	/// one level shallower. Top level tokens resolve to [`Ancestor::Root`].
	pub fn find_shallower_ancestor(&self, index: usize) -> CinjResult<Ancestor<'_, 'a>> {
		let token = self.token(index)?;
		if token.depth <= 1 {
			return Ok(Ancestor::Root);
		}

		let target = token.depth - 1;
		self.tokens[..index]
			.iter()
			.enumerate()
			.rev()
			.find(|(_, candidate)| candidate.kind != TokenKind::Newline && candidate.depth == target)
			.map(|(index, token)| Ancestor::Token { index, token })
			.ok_or_else(|| {
				CinjError::NotFound {
					kind: token.kind,
					name: format!("ancestor of `{}`", token.literal),
				}
			})
	}

	/// Indices of every `kind` keyword immediately followed by an identifier
	/// named `name`. This is what separates a definition from a reference.
	pub fn definitions(&self, kind: TokenKind, name: &str) -> Vec<usize> {
		self.tokens
			.windows(2)
			.enumerate()
			.filter(|(_, pair)| pair[0].kind == kind && pair[1].is(TokenKind::Ident, name))
			.map(|(index, _)| index)
			.collect()
	}

	/// 1-indexed lines of every [`definitions`](Self::definitions) match.
	pub fn definition_lines(&self, kind: TokenKind, name: &str) -> Vec<usize> {
		self.definitions(kind, name)
			.into_iter()
			.map(|index| self.tokens[index].line)
			.collect()
	}
}
