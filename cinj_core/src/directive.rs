use crate::CinjError;
use crate::CinjResult;

/// Every directive line starts with this marker.
pub const DIRECTIVE_PREFIX: &str = "cinj{";

/// What a directive asks to inject from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'d> {
	/// The whole source file.
	WholeFile,
	/// A class block.
	Class(&'d str),
	/// A function block, optionally scoped to a class.
	Function {
		name: &'d str,
		class: Option<&'d str>,
	},
}

/// A parsed `cinj{path -class Name -function name -decorator=false}` line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directive {
	/// The source path exactly as written; resolving it is up to the caller.
	pub path: String,
	pub class: Option<String>,
	pub function: Option<String>,
	/// Overrides the configured decorator setting when present.
	pub decorators: Option<bool>,
}

impl Directive {
	pub fn is_directive(line: &str) -> bool {
		line.starts_with(DIRECTIVE_PREFIX)
	}

	pub fn parse(line: &str) -> CinjResult<Self> {
		let trimmed = line.trim_end();
		let invalid = |reason: &str| {
			CinjError::InvalidDirective {
				line: trimmed.to_string(),
				reason: reason.to_string(),
			}
		};

		let inner = trimmed
			.strip_prefix(DIRECTIVE_PREFIX)
			.ok_or_else(|| invalid("missing `cinj{` prefix"))?
			.strip_suffix('}')
			.ok_or_else(|| invalid("missing closing `}`"))?;

		let mut words = inner.split_whitespace();
		let path = words.next().ok_or_else(|| invalid("missing source path"))?;
		let mut directive = Self {
			path: path.to_string(),
			..Self::default()
		};

		while let Some(word) = words.next() {
			let Some(flag) = word.strip_prefix("--").or_else(|| word.strip_prefix('-')) else {
				return Err(invalid(&format!("unexpected argument `{word}`")));
			};

			let (name, inline_value) = match flag.split_once('=') {
				Some((name, value)) => (name, Some(value)),
				None => (flag, None),
			};

			match name {
				"class" | "function" => {
					let value = inline_value
						.or_else(|| words.next())
						.filter(|value| !value.is_empty())
						.ok_or_else(|| invalid(&format!("flag `-{name}` needs a value")))?;

					if name == "class" {
						directive.class = Some(value.to_string());
					} else {
						directive.function = Some(value.to_string());
					}
				}
				"decorator" | "decorators" => {
					let enabled = match inline_value {
						None | Some("true") => true,
						Some("false") => false,
						Some(other) => {
							return Err(invalid(&format!("`{other}` is not a boolean")));
						}
					};
					directive.decorators = Some(enabled);
				}
				_ => return Err(invalid(&format!("unknown flag `-{name}`"))),
			}
		}

		Ok(directive)
	}

	pub fn selection(&self) -> Selection<'_> {
		match (self.class.as_deref(), self.function.as_deref()) {
			(class, Some(name)) => Selection::Function { name, class },
			(Some(class), None) => Selection::Class(class),
			(None, None) => Selection::WholeFile,
		}
	}
}
