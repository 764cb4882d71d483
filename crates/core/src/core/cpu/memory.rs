//! Load and store execution.
//!
//! The effective address of every load and store is `rs1 + sext(imm)` as
//! wrapping 32-bit arithmetic; the memory accessors enforce bounds and
//! natural alignment. Byte and halfword loads sign- or zero-extend per
//! mnemonic. Single-precision floating loads are NaN-boxed on the way
//! into the register file; floating stores write raw bits.
//!
//! The LD/SD and LWU funct3 patterns would need 64-bit integer registers
//! and fault as illegal instructions.

use super::{Cpu, Flow};
use crate::common::error::Fault;
use crate::isa::instruction::Decoded;
use crate::isa::rv32f::funct3 as f_funct3;
use crate::isa::rv32i::funct3;

impl Cpu {
    fn effective_address(&self, d: &Decoded) -> u32 {
        self.regs.read(d.rs1).wrapping_add(d.imm as u32)
    }

    pub(super) fn exec_load(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let addr = self.effective_address(d);

        let value = match d.funct3 {
            funct3::LB => i32::from(self.mem.read_u8(addr)? as i8),
            funct3::LH => i32::from(self.mem.read_u16(addr)? as i16),
            funct3::LW => self.mem.read_u32(addr)? as i32,
            funct3::LBU => i32::from(self.mem.read_u8(addr)?),
            funct3::LHU => i32::from(self.mem.read_u16(addr)?),
            _ => return Err(Fault::IllegalInstruction(d.raw)),
        };

        self.regs.write_signed(d.rd, value);
        Ok(Flow::Advance)
    }

    pub(super) fn exec_store(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let addr = self.effective_address(d);
        let value = self.regs.read(d.rs2);

        match d.funct3 {
            funct3::SB => self.mem.write_u8(addr, value as u8)?,
            funct3::SH => self.mem.write_u16(addr, value as u16)?,
            funct3::SW => self.mem.write_u32(addr, value)?,
            _ => return Err(Fault::IllegalInstruction(d.raw)),
        }

        Ok(Flow::Advance)
    }

    pub(super) fn exec_load_fp(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let addr = self.effective_address(d);

        match d.funct3 {
            f_funct3::WIDTH_32 => {
                let bits = self.mem.read_u32(addr)?;
                self.fregs.write_f32(d.rd, f32::from_bits(bits));
            }
            f_funct3::WIDTH_64 => {
                let bits = self.mem.read_u64(addr)?;
                self.fregs.write_raw(d.rd, bits);
            }
            _ => return Err(Fault::IllegalInstruction(d.raw)),
        }

        Ok(Flow::Advance)
    }

    pub(super) fn exec_store_fp(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let addr = self.effective_address(d);
        let bits = self.fregs.read_raw(d.rs2);

        match d.funct3 {
            f_funct3::WIDTH_32 => self.mem.write_u32(addr, bits as u32)?,
            f_funct3::WIDTH_64 => self.mem.write_u64(addr, bits)?,
            _ => return Err(Fault::IllegalInstruction(d.raw)),
        }

        Ok(Flow::Advance)
    }
}
