use std::borrow::Cow;

use crate::CinjError;
use crate::CinjResult;
use crate::LexOptions;
use crate::TokenKind;
use crate::TokenStore;
use crate::lex;

/// Marker placed between the enclosing class line and a class-scoped
/// function snippet.
pub const SCOPE_SEPARATOR: &str = "#----\n";

/// Options that shape an extracted snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
	/// Prepend the decorator lines attached to the definition.
	pub decorators: bool,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self { decorators: true }
	}
}

/// Extracts class and function definitions from one source text.
///
/// The source is lexed once in [`Extractor::new`]; every query afterwards is
/// a read-only search over the resulting [`TokenStore`].
#[derive(Debug, Clone)]
pub struct Extractor<'a> {
	store: TokenStore<'a>,
	options: ExtractOptions,
}

impl<'a> Extractor<'a> {
	pub fn new(source: &'a str, lex_options: &LexOptions) -> CinjResult<Self> {
		Ok(Self {
			store: lex(source, lex_options)?,
			options: ExtractOptions::default(),
		})
	}

	#[must_use]
	pub fn with_options(mut self, options: ExtractOptions) -> Self {
		self.options = options;
		self
	}

	pub fn store(&self) -> &TokenStore<'a> {
		&self.store
	}

	/// The block of the definition at `keyword_index`, extended upwards over
	/// its decorators when those are requested. Always a contiguous slice of
	/// the source.
	fn snippet(&self, keyword_index: usize) -> CinjResult<&'a str> {
		let block = self.store.block_range(keyword_index)?;
		let mut start = block.start;

		if self.options.decorators {
			let decorators = self.store.decorator_range(keyword_index)?;
			if !decorators.is_empty() {
				start = decorators.start;
			}
		}

		Ok(&self.store.source()[start..block.end])
	}

	/// The source of the first class named `name`.
	pub fn get_class(&self, name: &str) -> CinjResult<Cow<'a, str>> {
		let index = self
			.store
			.definitions(TokenKind::Class, name)
			.first()
			.copied()
			.ok_or_else(|| {
				CinjError::NotFound {
					kind: TokenKind::Class,
					name: name.to_string(),
				}
			})?;

		let snippet = self.snippet(index)?;
		tracing::debug!(class = name, bytes = snippet.len(), "extracted class");

		Ok(Cow::Borrowed(snippet))
	}

	/// The source of the function named `name`.
	///
	/// Without `class` (or with an empty one) the first definition wins. With
	/// a class, the first definition preceded by a `class <class>` line is
	/// returned, prefixed by that line and [`SCOPE_SEPARATOR`].
	pub fn get_function(&self, name: &str, class: Option<&str>) -> CinjResult<Cow<'a, str>> {
		let definitions = self.store.definitions(TokenKind::Function, name);
		let Some(&first) = definitions.first() else {
			return Err(CinjError::NotFound {
				kind: TokenKind::Function,
				name: name.to_string(),
			});
		};

		let Some(class) = class.filter(|class| !class.is_empty()) else {
			let snippet = self.snippet(first)?;
			tracing::debug!(function = name, bytes = snippet.len(), "extracted function");
			return Ok(Cow::Borrowed(snippet));
		};

		let class_lines = self.store.definition_lines(TokenKind::Class, class);

		for index in definitions {
			let line = self.store.tokens()[index].line;
			let Some(&class_line) = class_lines.iter().find(|&&class_line| class_line < line) else {
				continue;
			};

			let header = self.store.line(class_line - 1)?;
			let snippet = self.snippet(index)?;
			tracing::debug!(
				function = name,
				class,
				class_line,
				bytes = snippet.len(),
				"extracted class-scoped function"
			);

			return Ok(Cow::Owned(format!("{header}{SCOPE_SEPARATOR}{snippet}")));
		}

		Err(CinjError::ScopeNotFound {
			function: name.to_string(),
			class: class.to_string(),
		})
	}
}

/// Lex `source` and extract the class named `name`.
pub fn get_class(source: &str, name: &str, options: &LexOptions) -> CinjResult<String> {
	Ok(Extractor::new(source, options)?.get_class(name)?.into_owned())
}

/// Lex `source` and extract the function named `name`, optionally scoped to
/// `class`.
pub fn get_function(
	source: &str,
	name: &str,
	class: Option<&str>,
	options: &LexOptions,
) -> CinjResult<String> {
	Ok(Extractor::new(source, options)?
		.get_function(name, class)?
		.into_owned())
}
