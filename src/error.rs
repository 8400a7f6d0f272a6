// error.rs - Compile error taxonomy.
//
// Matching has no error type: a mismatch is `None`. Everything that can go
// wrong is a malformed pattern, reported with the source byte position.

use thiserror::Error;

/// Error returned when a pattern fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CompileError {
    /// One of the reserved opcode bytes appears in the source.
    #[error("reserved byte at position {0}")]
    ReservedByte(usize),
    /// A capture is opened while another one is still open.
    #[error("nested capture at position {0}")]
    NestedCapture(usize),
    /// A capture is closed without having been opened.
    #[error("unopened capture at position {0}")]
    UnopenedCapture(usize),
    /// A capture is still open at the end of the pattern.
    #[error("unclosed capture at position {0}")]
    UnclosedCapture(usize),
    /// Two different wildcards are directly adjacent.
    #[error("invalid combination at position {0}")]
    InvalidCombination(usize),
}

impl CompileError {
    /// Byte offset into the pattern source where the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            CompileError::ReservedByte(pos)
            | CompileError::NestedCapture(pos)
            | CompileError::UnopenedCapture(pos)
            | CompileError::UnclosedCapture(pos)
            | CompileError::InvalidCombination(pos) => pos,
        }
    }
}
