use crate::LexOptions;
use crate::TokenKind;
use crate::TokenStore;
use crate::lex;

/// Tab-indented class with two methods and a trailing indented empty line.
pub(crate) const TEEHEE_TABS: &str = "class Teehee:\n\tdef __init__():\n\t\tpass\n\n\tdef test1():\n\t\tpass\n\t\t";

pub(crate) const TEEHEE_TABS_ASSIGN: &str = "class Teehee:\n\tdef __init__():\n\t\tvar_value = 5\n\n\tdef test1():\n\t\thello = \"world\"\n\t\tanother_val = 5\n\t\t";

/// A single two-space indented class ending in a blank line.
pub(crate) const TEEHEE: &str = "class Teehee:\n  def __init__():\n    var_value = 5\n\n  def test1():\n    hello = \"world\"\n    another_val = 5\n\n";

/// Two sibling classes, the second ending in a whitespace-only line.
pub(crate) const TEEHEE_AND_TEST2: &str = "class Teehee:\n  def __init__():\n    var_value = 5\n\n  def test1():\n    hello = \"world\"\n    another_val = 5\n\nclass Test2:\n  def __init__():\n    gotta_have_one = True\n    ";

/// Two classes defining a method with the same name.
pub(crate) const SAME_NAMED_METHODS: &str = "class A:\n  def f(self):\n    return \"a\"\n\nclass B:\n  def f(self):\n    return \"b\"\n";

/// Two-space indented module with decorators, nested definitions and a
/// trailing `__main__` guard.
pub(crate) const PY_SAMPLE: &str = include_str!("../fixtures/py_sample.py");

pub(crate) fn lex_with_width(source: &str, indent_width: usize) -> TokenStore<'_> {
	lex(source, &LexOptions::new(indent_width)).unwrap()
}

pub(crate) fn kinds_and_literals<'a>(store: &TokenStore<'a>) -> Vec<(TokenKind, &'a str)> {
	store
		.iter()
		.map(|token| (token.kind, token.literal))
		.collect()
}

/// Lines `first..=last` (1-indexed) of `source`, joined.
pub(crate) fn source_lines(source: &str, first: usize, last: usize) -> String {
	source
		.split_inclusive('\n')
		.skip(first - 1)
		.take(last + 1 - first)
		.collect()
}
