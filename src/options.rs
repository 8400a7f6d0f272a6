// options.rs - Compile options.

use bitflags::bitflags;

bitflags! {
    /// Flags controlling how a pattern is compiled and matched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Options: u32 {
        /// Accept the reserved opcode bytes as ordinary literals.
        ///
        /// The compiled program no longer round-trips through the flat
        /// opcode encoding once such a byte is present.
        const ALLOW_RESERVED_BYTES = 1 << 0;
        /// Compare literals and anchors ASCII case-insensitively.
        const IGNORE_CASE = 1 << 1;
    }
}

impl Options {
    pub const NONE: Options = Options::empty();

    #[inline]
    pub fn ignore_case(self) -> bool {
        self.contains(Options::IGNORE_CASE)
    }

    #[inline]
    pub fn allow_reserved_bytes(self) -> bool {
        self.contains(Options::ALLOW_RESERVED_BYTES)
    }
}
