use std::ops::Range;

use crate::CinjError;
use crate::CinjResult;
use crate::Token;
use crate::TokenKind;
use crate::TokenStore;

/// A token ends the block opened by `anchor` when it sits on a later line at
/// the anchor's depth or shallower. Newlines never end a block, which is what
/// lets blank lines live inside a body.
fn terminates(anchor: &Token<'_>, token: &Token<'_>) -> bool {
	token.kind != TokenKind::Newline && token.depth <= anchor.depth && token.line != anchor.line
}

impl<'a> TokenStore<'a> {
	/// Byte range of the block opened by the `class` or `def` keyword at
	/// `keyword_index`.
	///
	/// The range starts at the keyword and stops at the first token that
	/// dedents back to the keyword's depth, or at the end of input when nothing
	/// does. A nested terminator keeps its indentation inside the range.
	pub fn block_range(&self, keyword_index: usize) -> CinjResult<Range<usize>> {
		let keyword = self.token(keyword_index)?;
		let is_pair = keyword.kind.is_definition()
			&& self
				.tokens()
				.get(keyword_index + 1)
				.is_some_and(|token| token.kind == TokenKind::Ident);

		if !is_pair {
			return Err(CinjError::NotFound {
				kind: keyword.kind,
				name: keyword.literal.to_string(),
			});
		}

		let end = self.tokens()[keyword_index + 2..]
			.iter()
			.find(|token| terminates(keyword, token))
			.map_or(self.source().len(), |token| token.start);

		Ok(keyword.start..end)
	}

	/// The 1-indexed line of the first token matching `kind` and `literal`,
	/// and the line of the token that ends its block.
	pub fn block_lines(&self, kind: TokenKind, literal: &str) -> CinjResult<(usize, usize)> {
		let (index, anchor) = self.find_first(kind, literal)?;
		let end = self.tokens()[index + 1..]
			.iter()
			.find(|token| terminates(anchor, token))
			.map_or(anchor.line, |token| token.line);

		Ok((anchor.line, end))
	}
}
