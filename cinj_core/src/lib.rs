//! `cinj_core` is the core library for cinj, which injects exact source code
//! fragments into markdown. It provides an indentation-aware lexer for python
//! sources and an extractor that returns the verbatim text of a named class
//! or function, decorators included, without touching its formatting.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Python source
//!   → Lexer (single pass, tracks indentation depth per line)
//!   → TokenStore (tokens in scan order + line table)
//!   → Block locator / decorator collector (byte ranges from depths)
//!   → Extractor (class or function snippet, sliced from the source)
//!   → Injector (replaces `cinj{...}` lines in a document with fenced blocks)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration parsed from TOML: indent width, decorator
//!   inclusion and keyword table overrides.
//! - [`directive`]: Parsing of `cinj{path -class Name -function name}` lines.
//! - [`inject`]: In-memory document injection driven by a [`SourceProvider`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cinj_core::Extractor;
//! use cinj_core::LexOptions;
//!
//! let source = "class Greeter:\n  def hello(self):\n    return 1\n\nprint(Greeter)\n";
//! let extractor = Extractor::new(source, &LexOptions::new(2)).unwrap();
//!
//! let class = extractor.get_class("Greeter").unwrap();
//! assert_eq!(class, "class Greeter:\n  def hello(self):\n    return 1\n\n");
//!
//! let function = extractor.get_function("hello", None).unwrap();
//! assert_eq!(function, "def hello(self):\n    return 1\n\n");
//! ```

pub use config::*;
pub use directive::*;
pub use error::*;
pub use extract::*;
pub use inject::*;
pub use lexer::*;
pub use store::*;
pub use tokens::*;

mod block;
pub mod config;
mod decorators;
pub mod directive;
#[allow(unused_assignments)]
mod error;
mod extract;
pub mod inject;
mod lexer;
mod store;
mod tokens;

#[cfg(test)]
mod __fixtures;
