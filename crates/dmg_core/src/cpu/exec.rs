//! Per-instruction behaviours for the unprefixed opcode table.
//!
//! Every handler has the same shape, `fn(&mut Cpu, opcode) -> u32`, so the
//! table in `table.rs` can hold them as plain function pointers. The opcode
//! byte is passed in so one handler can serve a whole column of the opcode
//! map; the return value is the total M-cycle cost including the opcode
//! fetch that already happened.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
