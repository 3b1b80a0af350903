use std::ops::Range;

use crate::CinjResult;
use crate::TokenStore;

/// A decorator line has nothing but indentation before an `@` that sits in
/// the same column as the definition keyword.
fn is_decorator_line(line: &str, column: usize) -> bool {
	let Some((indent, rest)) = line.split_at_checked(column - 1) else {
		return false;
	};

	indent.trim().is_empty() && rest.starts_with('@')
}

impl<'a> TokenStore<'a> {
	/// Byte range of the decorator lines directly above the definition keyword
	/// at `keyword_index`. The range is empty, and starts at the definition's
	/// line, when there are none.
	pub fn decorator_range(&self, keyword_index: usize) -> CinjResult<Range<usize>> {
		let keyword = self.token(keyword_index)?;
		let definition_line = keyword.line - 1;
		let mut first = definition_line;

		// Stop at the first line that is not a decorator so that decorators of
		// an earlier definition never leak into a later one.
		while first > 0 && is_decorator_line(self.line(first - 1)?, keyword.column) {
			first -= 1;
		}

		let start = self.line_span(first)?.start;
		let end = self.line_span(definition_line)?.start;

		Ok(start..end)
	}

	/// The decorator lines above a definition in source order, or `""` when
	/// the definition is undecorated.
	pub fn decorators(&self, keyword_index: usize) -> CinjResult<&'a str> {
		let range = self.decorator_range(keyword_index)?;
		Ok(&self.source()[range])
	}
}
