//! # Simpex
//!
//! Simple expressions: a small, fast alternative to regular expressions for
//! the common case of matching a whole text against a template.
//!
//! A pattern is literal text with five meta-symbols:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `{` `}` | capture the enclosed part of the match |
//! | `_` | exactly one byte |
//! | `^` | a word: a run of ASCII letters and digits |
//! | `*` | a phrase: any bytes up to the next literal text, or to the end |
//!
//! Doubling a symbol escapes it: `**` matches a literal `*`, `***` a literal
//! `*` followed by a phrase. Matching is anchored at both ends and makes a
//! single forward pass over the text without backtracking.
//!
//! ## Quick Start
//!
//! ```rust
//! use simpex::prelude::*;
//!
//! let pat = Pattern::new("Hello {^}, {*}{_}").unwrap();
//! let caps = pat.captures("Hello world, how are you?").unwrap();
//! assert_eq!(caps.get(0).unwrap().as_str(), "world");
//! assert_eq!(caps.get(1).unwrap().as_str(), "how are you");
//! assert_eq!(caps.get(2).unwrap().as_str(), "?");
//! ```
//!
//! For one-off matches, [`compile_and_match`] compiles and matches in one
//! call:
//!
//! ```rust
//! let caps = simpex::compile_and_match(b"Lorem {^sum} dolor", b"Lorem ipsum dolor")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(caps.to_vec(), vec![b"ipsum".to_vec()]);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`compile`] | Pattern source to instruction stream |
//! | [`exec`] | Instruction stream against a text |
//! | [`inst`] | Instructions, programs and the flat opcode encoding |
//! | [`options`] | Compile options |
//! | [`error`] | Compile errors |
//! | [`api`] | `Pattern`, `Captures` and friends |

pub mod api;
pub mod compile;
pub mod error;
pub mod exec;
pub mod inst;
pub mod options;
pub mod prelude;

pub use crate::api::{Captures, Match, Pattern, PatternBuilder};
pub use crate::error::CompileError;
pub use crate::options::Options;

/// Compile a pattern using default options.
pub fn compile(pattern: &[u8]) -> Result<Pattern, CompileError> {
    Pattern::new_bytes(pattern)
}

/// Compile a pattern with the given options.
pub fn compile_with_options(pattern: &[u8], options: Options) -> Result<Pattern, CompileError> {
    Pattern::with_options(pattern, options)
}

/// Compile `pattern` and match it against `text`.
///
/// Returns `Err` for a malformed pattern, `Ok(None)` if the text does not
/// match and `Ok(Some(captures))` if it does.
pub fn compile_and_match<'t>(
    pattern: &[u8],
    text: &'t [u8],
) -> Result<Option<Captures<'t>>, CompileError> {
    Ok(compile(pattern)?.captures_bytes(text))
}
