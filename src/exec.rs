// exec.rs - Matcher.
// Walks a Program and a text in lockstep: one forward pass, no backtracking.
//
// Every wildcard decides its length once, from the text ahead and the
// literal anchor that follows it in the program. The whole text must be
// consumed by the end of the program.

use std::ops::Range;

use memchr::memmem;
use smallvec::SmallVec;
use tracing::trace;

use crate::inst::*;

/// Byte ranges of the captured groups, in order of their opening `{`.
pub type CaptureRanges = SmallVec<[Range<usize>; 4]>;

// ============================================================================
// Anchors
// ============================================================================

/// How far a phrase may reach, derived from the instructions after it.
#[derive(Debug, PartialEq, Eq)]
enum PhraseBound<'p> {
    /// Stop before the first occurrence of `anchor`, found at least
    /// `reserve` bytes ahead (bytes owed to `_` wildcards in between).
    Anchor { reserve: usize, anchor: &'p [u8] },
    /// Nothing literal follows: take everything but `reserve` bytes.
    Greedy { reserve: usize },
}

fn phrase_bound(rest: &[Inst]) -> PhraseBound<'_> {
    let mut reserve = 0;
    for inst in rest {
        match inst {
            Inst::CaptureStart | Inst::CaptureEnd => {}
            Inst::Char => reserve += 1,
            Inst::Literal(lit) => return PhraseBound::Anchor { reserve, anchor: lit },
            Inst::Word | Inst::Phrase => break,
        }
    }
    PhraseBound::Greedy { reserve }
}

/// The alphanumeric prefix of the literal directly after a word wildcard.
fn word_anchor(next: Option<&Inst>) -> Option<&[u8]> {
    match next {
        Some(Inst::Literal(lit)) => {
            let n = word_run_len(lit);
            (n > 0).then(|| &lit[..n])
        }
        _ => None,
    }
}

/// First occurrence of `needle` in `haystack`.
fn find_anchor(haystack: &[u8], needle: &[u8], ignore_case: bool) -> Option<usize> {
    if !ignore_case {
        return memmem::find(haystack, needle);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

#[inline]
fn starts_with(text: &[u8], lit: &[u8], ignore_case: bool) -> bool {
    match text.get(..lit.len()) {
        Some(head) if ignore_case => head.eq_ignore_ascii_case(lit),
        Some(head) => head == lit,
        None => false,
    }
}

#[cold]
fn mismatch(pc: usize, pos: usize, reason: &'static str) -> Option<CaptureRanges> {
    trace!(pc, pos, reason, "no match");
    None
}

// ============================================================================
// Entry point
// ============================================================================

/// Match `text` against `prog` from start to end.
///
/// Returns the capture ranges on success (empty when the program has no
/// groups), `None` when the text does not match.
pub fn match_program(prog: &Program, text: &[u8]) -> Option<CaptureRanges> {
    let ignore_case = prog.options.ignore_case();
    let mut captures = CaptureRanges::with_capacity(prog.num_captures);
    let mut open: Option<usize> = None;
    let mut pos = 0;

    for (pc, inst) in prog.insts.iter().enumerate() {
        let rest = &text[pos..];

        match inst {
            Inst::Literal(lit) => {
                if !starts_with(rest, lit, ignore_case) {
                    return mismatch(pc, pos, "literal mismatch");
                }
                pos += lit.len();
            }

            Inst::CaptureStart => open = Some(pos),

            Inst::CaptureEnd => {
                if let Some(start) = open.take() {
                    captures.push(start..pos);
                }
            }

            Inst::Char => {
                if rest.is_empty() {
                    return mismatch(pc, pos, "text exhausted");
                }
                pos += 1;
            }

            Inst::Word => {
                if !rest.first().is_some_and(|&b| is_word_byte(b)) {
                    return mismatch(pc, pos, "word expected");
                }
                let edge = word_run_len(rest);
                let len = match word_anchor(prog.insts.get(pc + 1)) {
                    Some(anchor) => match find_anchor(&rest[..edge], anchor, ignore_case) {
                        Some(at) => at,
                        None => return mismatch(pc, pos, "word suffix not found"),
                    },
                    None => edge,
                };
                pos += len;
            }

            Inst::Phrase => {
                if rest.is_empty() {
                    return mismatch(pc, pos, "text exhausted");
                }
                let len = match phrase_bound(&prog.insts[pc + 1..]) {
                    PhraseBound::Greedy { reserve } => match rest.len().checked_sub(reserve) {
                        Some(len) => len,
                        None => return mismatch(pc, pos, "text exhausted"),
                    },
                    PhraseBound::Anchor { reserve, anchor } => {
                        let found = rest
                            .get(reserve..)
                            .and_then(|window| find_anchor(window, anchor, ignore_case));
                        match found {
                            Some(at) => at,
                            None => return mismatch(pc, pos, "phrase anchor not found"),
                        }
                    }
                };
                pos += len;
            }
        }
    }

    if pos != text.len() {
        return mismatch(prog.insts.len(), pos, "trailing text");
    }

    Some(captures)
}
