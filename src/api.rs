// api.rs - Public API for simpex.
//
// Wraps the compiler and matcher with Rust-native types: Pattern,
// PatternBuilder, Match, Captures.

use std::ops::Range;
use std::str::FromStr;

use crate::compile::compile_program;
use crate::error::CompileError;
use crate::exec::{match_program, CaptureRanges};
use crate::inst::{Inst, Program};
use crate::options::Options;

/// A compiled simple expression.
///
/// A pattern always matches the whole text. Compile once, then match as
/// often as needed; matching only reads the pattern, so a `Pattern` can be
/// shared between threads.
///
/// # Examples
///
/// ```
/// use simpex::api::Pattern;
///
/// let pat = Pattern::new("Hello {^}!").unwrap();
/// assert!(pat.is_match("Hello world!"));
///
/// let caps = pat.captures("Hello world!").unwrap();
/// assert_eq!(caps.get(0).unwrap().as_str(), "world");
/// assert!(pat.captures("Hello world!!").is_none());
/// ```
#[derive(Clone)]
pub struct Pattern {
    source: Vec<u8>,
    prog: Program,
}

impl Pattern {
    /// Compile a pattern using default options.
    pub fn new(pattern: &str) -> Result<Pattern, CompileError> {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Compile a pattern from raw bytes using default options.
    pub fn new_bytes(pattern: &[u8]) -> Result<Pattern, CompileError> {
        Self::with_options(pattern, Options::NONE)
    }

    /// Compile a pattern from raw bytes with the given options.
    pub fn with_options(pattern: &[u8], options: Options) -> Result<Pattern, CompileError> {
        let prog = compile_program(pattern, options)?;
        Ok(Pattern {
            source: pattern.to_vec(),
            prog,
        })
    }

    /// Create a [`PatternBuilder`] for fine-grained control over compilation.
    pub fn builder(pattern: &str) -> PatternBuilder {
        PatternBuilder::new(pattern)
    }

    /// Match `text` and return its captures, or `None` if it does not match.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.captures_bytes(text.as_bytes())
    }

    /// Match `text` (as bytes) and return its captures, or `None`.
    pub fn captures_bytes<'t>(&self, text: &'t [u8]) -> Option<Captures<'t>> {
        let ranges = match_program(&self.prog, text)?;
        Some(Captures { text, ranges })
    }

    /// Check whether the whole of `text` matches.
    pub fn is_match(&self, text: &str) -> bool {
        self.is_match_bytes(text.as_bytes())
    }

    /// Check whether the whole of `text` (as bytes) matches.
    pub fn is_match_bytes(&self, text: &[u8]) -> bool {
        match_program(&self.prog, text).is_some()
    }

    /// Number of capture groups in the pattern.
    pub fn captures_len(&self) -> usize {
        self.prog.num_captures
    }

    /// The pattern source this was compiled from.
    pub fn as_bytes(&self) -> &[u8] {
        &self.source
    }

    /// The options this pattern was compiled with.
    pub fn options(&self) -> Options {
        self.prog.options
    }

    /// The compiled instruction stream.
    pub fn insts(&self) -> &[Inst] {
        &self.prog.insts
    }

    /// The compiled pattern in the flat byte encoding, where each opcode is
    /// one of [`crate::inst::RESERVED_BYTES`].
    ///
    /// Only unambiguous when compiled without
    /// [`Options::ALLOW_RESERVED_BYTES`].
    pub fn to_opcode_bytes(&self) -> Vec<u8> {
        self.prog.to_opcode_bytes()
    }

    /// Access the underlying [`Program`].
    pub fn as_program(&self) -> &Program {
        &self.prog
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Pattern, CompileError> {
        Pattern::new(s)
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &String::from_utf8_lossy(&self.source))
            .field("options", &self.prog.options)
            .finish_non_exhaustive()
    }
}

// === PatternBuilder ===

/// Builder for compiling a [`Pattern`] with custom options.
///
/// # Examples
///
/// ```
/// use simpex::api::Pattern;
///
/// let pat = Pattern::builder("hello ^")
///     .ignore_case(true)
///     .build()
///     .unwrap();
/// assert!(pat.is_match("Hello World"));
/// ```
pub struct PatternBuilder {
    pattern: Vec<u8>,
    options: Options,
}

impl PatternBuilder {
    /// Create a new builder for the given pattern.
    pub fn new(pattern: &str) -> Self {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Create a new builder for a pattern given as raw bytes.
    pub fn new_bytes(pattern: &[u8]) -> Self {
        PatternBuilder {
            pattern: pattern.to_vec(),
            options: Options::NONE,
        }
    }

    /// Enable or disable ASCII case-insensitive literals and anchors.
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.options.set(Options::IGNORE_CASE, yes);
        self
    }

    /// Accept the reserved opcode bytes as ordinary literals.
    pub fn allow_reserved_bytes(mut self, yes: bool) -> Self {
        self.options.set(Options::ALLOW_RESERVED_BYTES, yes);
        self
    }

    /// Add raw option flags.
    pub fn options(mut self, flags: Options) -> Self {
        self.options |= flags;
        self
    }

    /// Compile the pattern into a [`Pattern`].
    pub fn build(self) -> Result<Pattern, CompileError> {
        Pattern::with_options(&self.pattern, self.options)
    }
}

// === Match ===

/// A single captured group referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t [u8],
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the group.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the group (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the group.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The captured text as a byte slice.
    pub fn as_bytes(&self) -> &'t [u8] {
        &self.text[self.start..self.end]
    }

    /// The captured text as a `&str`.
    ///
    /// # Panics
    ///
    /// Panics if the captured bytes are not valid UTF-8. A `_` wildcard can
    /// split a multi-byte character.
    pub fn as_str(&self) -> &'t str {
        std::str::from_utf8(self.as_bytes()).expect("capture is not valid UTF-8")
    }

    /// Length of the group in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the group captured nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// The capture groups of a successful match, in the order their opening
/// `{` appears in the pattern.
///
/// Unlike regex captures there is no implicit group for the whole match:
/// the whole text always matched, and a pattern without groups yields an
/// empty `Captures`.
pub struct Captures<'t> {
    text: &'t [u8],
    ranges: CaptureRanges,
}

impl<'t> Captures<'t> {
    /// Get capture group `i` (0-based), or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        let range = self.ranges.get(i)?;
        Some(Match {
            text: self.text,
            start: range.start,
            end: range.end,
        })
    }

    /// Number of capture groups.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the pattern has no capture groups.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over all capture groups.
    pub fn iter(&self) -> CapturesIter<'_, 't> {
        CapturesIter {
            captures: self,
            index: 0,
        }
    }

    /// Copy every group into an owned buffer.
    pub fn to_vec(&self) -> Vec<Vec<u8>> {
        self.iter().map(|m| m.as_bytes().to_vec()).collect()
    }
}

impl std::fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for m in self.iter() {
            list.entry(&String::from_utf8_lossy(m.as_bytes()));
        }
        list.finish()
    }
}

impl<'c, 't> IntoIterator for &'c Captures<'t> {
    type Item = Match<'t>;
    type IntoIter = CapturesIter<'c, 't>;

    fn into_iter(self) -> CapturesIter<'c, 't> {
        self.iter()
    }
}

// === CapturesIter ===

/// Iterator over capture groups in a [`Captures`].
pub struct CapturesIter<'c, 't> {
    captures: &'c Captures<'t>,
    index: usize,
}

impl<'c, 't> Iterator for CapturesIter<'c, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.captures.get(self.index)?;
        self.index += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_> {}
