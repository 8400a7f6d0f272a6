// compile.rs - Pattern compiler.
// Source bytes -> Program, in a single left-to-right pass.
//
// Each run of identical meta-symbols is resolved in one step: a run of R
// copies yields R/2 literal copies, plus one active op when R is odd. The
// active `{` is placed before its literal copies, every other active op
// after them, so `{{{X}}}` captures `{X}`.

use tracing::{debug, trace};

use crate::error::CompileError;
use crate::inst::*;
use crate::options::Options;

/// Accumulates instructions, merging adjacent literal bytes into one run.
#[derive(Default)]
struct Emitter {
    insts: Vec<Inst>,
    literal: Vec<u8>,
}

impl Emitter {
    fn push_literal(&mut self, b: u8, count: usize) {
        self.literal.extend(std::iter::repeat(b).take(count));
    }

    fn push_op(&mut self, inst: Inst) {
        self.flush();
        self.insts.push(inst);
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.insts.push(Inst::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn finish(mut self) -> Vec<Inst> {
        self.flush();
        self.insts
    }
}

/// Number of consecutive copies of `b` at the start of `s`.
#[inline]
fn run_length(s: &[u8], b: u8) -> usize {
    s.iter().take_while(|&&c| c == b).count()
}

/// Compile `pattern` into a [`Program`].
pub fn compile_program(pattern: &[u8], options: Options) -> Result<Program, CompileError> {
    match compile_insts(pattern, options) {
        Ok(prog) => {
            trace!(
                source_len = pattern.len(),
                insts = prog.insts.len(),
                captures = prog.num_captures,
                "compiled pattern"
            );
            Ok(prog)
        }
        Err(err) => {
            debug!(position = err.position(), error = %err, "pattern rejected");
            Err(err)
        }
    }
}

fn compile_insts(pattern: &[u8], options: Options) -> Result<Program, CompileError> {
    let mut emit = Emitter::default();
    let mut capturing = false;
    let mut num_captures = 0;
    // Set while the last emitted item is an active wildcard.
    let mut after_wildcard = false;

    let mut i = 0;
    while i < pattern.len() {
        let b = pattern[i];

        let Some(sym) = Symbol::from_byte(b) else {
            if is_reserved_byte(b) && !options.allow_reserved_bytes() {
                return Err(CompileError::ReservedByte(i));
            }
            emit.push_literal(b, 1);
            after_wildcard = false;
            i += 1;
            continue;
        };

        let run = run_length(&pattern[i..], b);
        let escaped = run / 2;
        let active = run % 2 == 1;

        match sym {
            Symbol::CaptureStart => {
                if active {
                    if capturing {
                        return Err(CompileError::NestedCapture(i));
                    }
                    capturing = true;
                    num_captures += 1;
                    emit.push_op(Inst::CaptureStart);
                }
                emit.push_literal(b, escaped);
            }
            Symbol::CaptureEnd => {
                if active {
                    if !capturing {
                        return Err(CompileError::UnopenedCapture(i));
                    }
                    capturing = false;
                }
                emit.push_literal(b, escaped);
                if active {
                    emit.push_op(Inst::CaptureEnd);
                }
            }
            Symbol::Char | Symbol::Word | Symbol::Phrase => {
                if active && escaped == 0 && after_wildcard {
                    return Err(CompileError::InvalidCombination(i));
                }
                emit.push_literal(b, escaped);
                if active {
                    emit.push_op(sym.inst());
                }
            }
        }

        after_wildcard = active && sym.is_wildcard();
        i += run;
    }

    if capturing {
        return Err(CompileError::UnclosedCapture(pattern.len() - 1));
    }

    Ok(Program {
        insts: emit.finish(),
        num_captures,
        options,
    })
}
