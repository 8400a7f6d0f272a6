// inst.rs - Compiled instruction set.
// Inst, Program, the meta-symbol table and the flat opcode byte encoding.

use crate::options::Options;

// === Meta-symbols (pattern source) ===
pub const SYM_CAPTURE_START: u8 = b'{';
pub const SYM_CAPTURE_END: u8 = b'}';
pub const SYM_CHAR: u8 = b'_';
pub const SYM_WORD: u8 = b'^';
pub const SYM_PHRASE: u8 = b'*';

// === Opcode bytes (flat encoding) ===
pub const CAPTURE_START: u8 = 0x02;
pub const CAPTURE_END: u8 = 0x03;
pub const PHRASE: u8 = 0x1d;
pub const WORD: u8 = 0x1e;
pub const CHAR: u8 = 0x1f;

/// The five byte values that stand for opcodes in the flat encoding.
pub const RESERVED_BYTES: [u8; 5] = [CAPTURE_START, CAPTURE_END, PHRASE, WORD, CHAR];

/// Kind of a meta-symbol in the pattern source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    CaptureStart,
    CaptureEnd,
    Char,
    Word,
    Phrase,
}

impl Symbol {
    /// Classify a source byte. Returns `None` for ordinary literal bytes.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Symbol> {
        match b {
            SYM_CAPTURE_START => Some(Symbol::CaptureStart),
            SYM_CAPTURE_END => Some(Symbol::CaptureEnd),
            SYM_CHAR => Some(Symbol::Char),
            SYM_WORD => Some(Symbol::Word),
            SYM_PHRASE => Some(Symbol::Phrase),
            _ => None,
        }
    }

    /// The source byte for this symbol.
    pub fn byte(self) -> u8 {
        match self {
            Symbol::CaptureStart => SYM_CAPTURE_START,
            Symbol::CaptureEnd => SYM_CAPTURE_END,
            Symbol::Char => SYM_CHAR,
            Symbol::Word => SYM_WORD,
            Symbol::Phrase => SYM_PHRASE,
        }
    }

    /// True for `_`, `^` and `*`.
    pub fn is_wildcard(self) -> bool {
        matches!(self, Symbol::Char | Symbol::Word | Symbol::Phrase)
    }

    /// The instruction an active (unescaped) occurrence compiles to.
    pub fn inst(self) -> Inst {
        match self {
            Symbol::CaptureStart => Inst::CaptureStart,
            Symbol::CaptureEnd => Inst::CaptureEnd,
            Symbol::Char => Inst::Char,
            Symbol::Word => Inst::Word,
            Symbol::Phrase => Inst::Phrase,
        }
    }
}

/// A single compiled instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inst {
    /// A run of bytes matched verbatim. Never empty.
    Literal(Vec<u8>),
    CaptureStart,
    CaptureEnd,
    /// Exactly one byte of any value.
    Char,
    /// A run of ASCII alphanumerics, bounded by a following alphanumeric literal.
    Word,
    /// Any bytes up to the next literal anchor, or greedy to the end.
    Phrase,
}

impl Inst {
    /// Opcode byte in the flat encoding, `None` for literals.
    pub fn opcode(&self) -> Option<u8> {
        match self {
            Inst::Literal(_) => None,
            Inst::CaptureStart => Some(CAPTURE_START),
            Inst::CaptureEnd => Some(CAPTURE_END),
            Inst::Char => Some(CHAR),
            Inst::Word => Some(WORD),
            Inst::Phrase => Some(PHRASE),
        }
    }
}

/// A validated, immutable instruction stream.
///
/// Capture markers are balanced and never nested; literal runs are maximal
/// (two `Literal`s are never adjacent).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub insts: Vec<Inst>,
    pub num_captures: usize,
    pub options: Options,
}

impl Program {
    /// Render the program in the flat byte encoding: literal bytes verbatim,
    /// each opcode as its reserved byte.
    pub fn to_opcode_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.insts.len());
        for inst in &self.insts {
            match inst {
                Inst::Literal(bytes) => out.extend_from_slice(bytes),
                op => out.extend(op.opcode()),
            }
        }
        out
    }
}

// === Byte classes ===

/// ASCII `[0-9A-Za-z]`.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

#[inline]
pub fn is_reserved_byte(b: u8) -> bool {
    RESERVED_BYTES.contains(&b)
}

/// Length of the leading run of word bytes in `s`.
#[inline]
pub fn word_run_len(s: &[u8]) -> usize {
    s.iter().position(|&b| !is_word_byte(b)).unwrap_or(s.len())
}
