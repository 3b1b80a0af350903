use crate::CinjConfig;
use crate::CinjResult;
use crate::Directive;
use crate::ExtractOptions;
use crate::Extractor;
use crate::Selection;

/// Source text handed over by a [`SourceProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
	pub text: String,
	/// Info string for the fence, e.g. `python`. May be empty.
	pub language: String,
}

impl Source {
	pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			language: language.into(),
		}
	}
}

/// Supplies the source referenced by a directive. Reading files and choosing
/// the fence language are left to the implementor.
pub trait SourceProvider {
	fn load(&self, path: &str) -> CinjResult<Source>;
}

impl<F> SourceProvider for F
where
	F: Fn(&str) -> CinjResult<Source>,
{
	fn load(&self, path: &str) -> CinjResult<Source> {
		self(path)
	}
}

/// Render the snippet a directive selects from `source`.
pub fn render_directive(
	directive: &Directive,
	source: &str,
	config: &CinjConfig,
) -> CinjResult<String> {
	let options = ExtractOptions {
		decorators: directive.decorators.unwrap_or(config.decorators),
	};

	let snippet = match directive.selection() {
		Selection::WholeFile => source.to_string(),
		Selection::Class(name) => {
			Extractor::new(source, &config.lex_options())?
				.with_options(options)
				.get_class(name)?
				.into_owned()
		}
		Selection::Function { name, class } => {
			Extractor::new(source, &config.lex_options())?
				.with_options(options)
				.get_function(name, class)?
				.into_owned()
		}
	};

	Ok(snippet)
}

/// Replace every directive line in `document` with a fenced code block of the
/// snippet it selects. All other lines are copied unchanged. The first failed
/// directive aborts the whole document.
pub fn inject(
	document: &str,
	provider: &impl SourceProvider,
	config: &CinjConfig,
) -> CinjResult<String> {
	let mut output = String::with_capacity(document.len());

	for (index, line) in document.split_inclusive('\n').enumerate() {
		if !Directive::is_directive(line) {
			output.push_str(line);
			continue;
		}

		let directive = Directive::parse(line)?;
		let source = provider.load(&directive.path)?;
		let snippet = render_directive(&directive, &source.text, config)?;
		tracing::debug!(
			line = index + 1,
			path = %directive.path,
			bytes = snippet.len(),
			"injected snippet"
		);

		output.push_str("```");
		output.push_str(&source.language);
		output.push('\n');
		output.push_str(&snippet);
		if !snippet.ends_with('\n') {
			output.push('\n');
		}
		output.push_str("```\n");
	}

	Ok(output)
}
