use std::collections::BTreeMap;

use serde::Deserialize;

use crate::CinjError;
use crate::CinjResult;
use crate::DEFAULT_INDENT_WIDTH;
use crate::ExtractOptions;
use crate::KeywordTable;
use crate::LexOptions;
use crate::TokenKind;

/// Configuration for lexing and injection.
///
/// ```toml
/// indent_width = 2
/// decorators = false
///
/// [keywords]
/// class = "CLASS"
/// def = "FUNCTION"
/// async = "IGNORE"
/// ```
///
/// When `[keywords]` is present it replaces the python keyword table
/// entirely.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CinjConfig {
	/// Number of spaces in one indentation level. Defaults to 4.
	#[serde(default = "default_indent_width")]
	pub indent_width: usize,
	/// Whether decorator lines are included with extracted definitions.
	/// Defaults to `true`. Individual directives can override it.
	#[serde(default = "default_decorators")]
	pub decorators: bool,
	/// Literal to token kind overrides for the keyword table.
	#[serde(default)]
	pub keywords: Option<BTreeMap<String, TokenKind>>,
}

fn default_indent_width() -> usize {
	DEFAULT_INDENT_WIDTH
}

fn default_decorators() -> bool {
	true
}

/// A configured keyword table must still be able to form definition pairs.
fn validate_keywords(keywords: &KeywordTable) -> CinjResult<()> {
	if keywords.is_empty() {
		return Err(CinjError::ConfigParse("`[keywords]` must not be empty".into()));
	}

	for kind in [TokenKind::Class, TokenKind::Function] {
		if keywords.literal_for(kind).is_none() {
			return Err(CinjError::ConfigParse(format!(
				"`[keywords]` has no literal for {kind}"
			)));
		}
	}

	Ok(())
}

impl Default for CinjConfig {
	fn default() -> Self {
		Self {
			indent_width: default_indent_width(),
			decorators: default_decorators(),
			keywords: None,
		}
	}
}

impl CinjConfig {
	pub fn from_toml_str(content: &str) -> CinjResult<Self> {
		let config: Self =
			toml::from_str(content).map_err(|e| CinjError::ConfigParse(e.to_string()))?;

		if config.indent_width == 0 {
			return Err(CinjError::InvalidIndentWidth(config.indent_width));
		}

		if config.keywords.is_some() {
			validate_keywords(&config.lex_options().keywords)?;
		}

		Ok(config)
	}

	pub fn lex_options(&self) -> LexOptions {
		let keywords = self
			.keywords
			.as_ref()
			.map_or_else(KeywordTable::python, |entries| {
				entries
					.iter()
					.map(|(literal, kind)| (literal.clone(), *kind))
					.collect()
			});

		LexOptions {
			indent_width: self.indent_width,
			keywords,
		}
	}

	pub fn extract_options(&self) -> ExtractOptions {
		ExtractOptions {
			decorators: self.decorators,
		}
	}
}
