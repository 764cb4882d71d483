//! Atomic extension execution (LR/SC and AMO).
//!
//! The address of every atomic operation is `rs1` verbatim (no immediate
//! offset) and must be a word-aligned, in-bounds word. The reservation
//! cell is a single global slot: LR.W records the address, SC.W succeeds
//! only when the reservation matches its address, and the reservation is
//! cleared after every SC attempt regardless of outcome.
//!
//! With a single hart there is no interleaving to guard against; each
//! AMO's read-modify-write simply completes within the step.

use super::{Cpu, Flow};
use crate::common::error::Fault;
use crate::isa::instruction::Decoded;
use crate::isa::rv32a::{funct3 as a_funct3, funct5};

impl Cpu {
    pub(super) fn exec_amo(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        if d.funct3 != a_funct3::WIDTH_32 {
            return Err(Fault::IllegalInstruction(d.raw));
        }

        let addr = self.regs.read(d.rs1);
        self.mem.check(addr, 4)?;

        // funct5 is the upper five bits of funct7; the low two encode
        // acquire/release ordering, meaningless on a single hart.
        match d.funct7 >> 2 {
            funct5::LR => {
                let value = self.mem.read_u32(addr)?;
                self.reservation = Some(addr);
                self.regs.write(d.rd, value);
            }
            funct5::SC => {
                let value = self.regs.read(d.rs2);
                let success = self.reservation == Some(addr);
                if success {
                    self.mem.write_u32(addr, value)?;
                }
                self.reservation = None;
                self.regs.write(d.rd, u32::from(!success));
            }
            op => {
                let old = self.mem.read_u32(addr)? as i32;
                let src = self.regs.read_signed(d.rs2);
                let new = amo_compute(op, old, src).ok_or(Fault::IllegalInstruction(d.raw))?;
                self.regs.write_signed(d.rd, old);
                self.mem.write_u32(addr, new as u32)?;
            }
        }

        Ok(Flow::Advance)
    }
}

/// Computes the value an AMO writes back, from the old memory word and
/// the rs2 operand. Returns `None` for undefined funct5 encodings.
fn amo_compute(op: u32, old: i32, src: i32) -> Option<i32> {
    let new = match op {
        funct5::AMOSWAP => src,
        funct5::AMOADD => old.wrapping_add(src),
        funct5::AMOXOR => old ^ src,
        funct5::AMOAND => old & src,
        funct5::AMOOR => old | src,
        funct5::AMOMIN => old.min(src),
        funct5::AMOMAX => old.max(src),
        funct5::AMOMINU => (old as u32).min(src as u32) as i32,
        funct5::AMOMAXU => (old as u32).max(src as u32) as i32,
        _ => return None,
    };
    Some(new)
}
