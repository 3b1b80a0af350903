use miette::Diagnostic;
use thiserror::Error;

use crate::TokenKind;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CinjError {
	#[error("no {kind} definition named `{name}`")]
	#[diagnostic(
		code(cinj::not_found),
		help("check that `{name}` is defined with `class` or `def`, not only referenced")
	)]
	NotFound { kind: TokenKind, name: String },

	#[error("function `{function}` is not preceded by a declaration of class `{class}`")]
	#[diagnostic(
		code(cinj::scope_not_found),
		help("drop the class argument or check the class name")
	)]
	ScopeNotFound { function: String, class: String },

	#[error("{what} index {index} is out of range (length {len})")]
	#[diagnostic(code(cinj::out_of_range))]
	OutOfRange {
		what: &'static str,
		index: usize,
		len: usize,
	},

	#[error("indent width must be at least 1, got {0}")]
	#[diagnostic(code(cinj::invalid_indent_width))]
	InvalidIndentWidth(usize),

	#[error("failed to parse config: {0}")]
	#[diagnostic(
		code(cinj::config_parse),
		help("check that the config is valid TOML with `indent_width`, `decorators` and `[keywords]`")
	)]
	ConfigParse(String),

	#[error("invalid cinj directive: `{line}`: {reason}")]
	#[diagnostic(
		code(cinj::invalid_directive),
		help("directives look like `cinj{{path/to/file.py -class Name -function name}}`")
	)]
	InvalidDirective { line: String, reason: String },

	#[error("failed to load source `{path}`: {reason}")]
	#[diagnostic(code(cinj::source))]
	Source { path: String, reason: String },
}

pub type CinjResult<T> = Result<T, CinjError>;
