//! Dispatch and integer execution.
//!
//! The dispatch key is the `(opcode >> 2, funct3)` pair, refined by
//! funct7/funct5/rs2 where a base key is shared by several instructions
//! (ADD/SUB/MUL all live under one key and differ only in two funct7
//! bits). The top level matches the major opcode; each arm matches the
//! refining fields.

use super::{Cpu, Flow};
use crate::common::constants::SHAMT_MASK;
use crate::common::error::Fault;
use crate::core::units::alu;
use crate::isa::instruction::Decoded;
use crate::isa::rv32a::opcodes as a_opcodes;
use crate::isa::rv32f::opcodes as fp_opcodes;
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::isa::rv32m::{funct3 as m_funct3, funct7 as m_funct7};

impl Cpu {
    /// Executes one decoded instruction against the machine state.
    pub(crate) fn execute(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        match d.opcode {
            opcodes::OP_LOAD => self.exec_load(d),
            opcodes::OP_STORE => self.exec_store(d),
            opcodes::OP_IMM => self.exec_op_imm(d),
            opcodes::OP_REG => self.exec_op_reg(d),
            opcodes::OP_LUI => {
                self.regs.write_signed(d.rd, d.imm);
                Ok(Flow::Advance)
            }
            opcodes::OP_AUIPC => {
                // The U immediate is added to the *byte* address of this
                // instruction, pc * 4.
                let base = (self.pc << 2) as i32;
                self.regs.write_signed(d.rd, base.wrapping_add(d.imm));
                Ok(Flow::Advance)
            }
            opcodes::OP_BRANCH => self.exec_branch(d),
            opcodes::OP_JAL => self.exec_jal(d),
            opcodes::OP_JALR => self.exec_jalr(d),
            a_opcodes::OP_AMO => self.exec_amo(d),
            fp_opcodes::OP_LOAD_FP => self.exec_load_fp(d),
            fp_opcodes::OP_STORE_FP => self.exec_store_fp(d),
            fp_opcodes::OP_FP => self.exec_op_fp(d),
            fp_opcodes::OP_FMADD
            | fp_opcodes::OP_FMSUB
            | fp_opcodes::OP_FNMSUB
            | fp_opcodes::OP_FNMADD => self.exec_fused(d),
            _ => Err(Fault::IllegalInstruction(d.raw)),
        }
    }

    fn exec_op_imm(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let src = self.regs.read_signed(d.rs1);
        let imm = d.imm;

        let value = match d.funct3 {
            funct3::ADD_SUB => src.wrapping_add(imm),
            funct3::SLL => src << (imm as u32 & SHAMT_MASK),
            funct3::SLT => i32::from(src < imm),
            funct3::SLTU => i32::from((src as u32) < imm as u32),
            funct3::XOR => src ^ imm,
            funct3::SRL_SRA => {
                let shamt = imm as u32 & SHAMT_MASK;
                if d.funct7 & funct7::SRA != 0 {
                    src >> shamt
                } else {
                    ((src as u32) >> shamt) as i32
                }
            }
            funct3::OR => src | imm,
            funct3::AND => src & imm,
            _ => return Err(Fault::IllegalInstruction(d.raw)),
        };

        self.regs.write_signed(d.rd, value);
        Ok(Flow::Advance)
    }

    fn exec_op_reg(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let a = self.regs.read_signed(d.rs1);
        let b = self.regs.read_signed(d.rs2);
        let au = self.regs.read(d.rs1);
        let bu = self.regs.read(d.rs2);

        let value = if d.funct7 & m_funct7::MULDIV != 0 {
            match d.funct3 {
                m_funct3::MUL => a.wrapping_mul(b),
                m_funct3::MULH => alu::mulh(a, b),
                m_funct3::MULHSU => alu::mulhsu(a, bu),
                m_funct3::MULHU => alu::mulhu(au, bu) as i32,
                m_funct3::DIV => alu::div(a, b),
                m_funct3::DIVU => alu::divu(au, bu) as i32,
                m_funct3::REM => alu::rem(a, b),
                m_funct3::REMU => alu::remu(au, bu) as i32,
                _ => return Err(Fault::IllegalInstruction(d.raw)),
            }
        } else {
            match d.funct3 {
                funct3::ADD_SUB => {
                    if d.funct7 & funct7::SUB != 0 {
                        a.wrapping_sub(b)
                    } else {
                        a.wrapping_add(b)
                    }
                }
                funct3::SLL => a << (bu & SHAMT_MASK),
                funct3::SLT => i32::from(a < b),
                funct3::SLTU => i32::from(au < bu),
                funct3::XOR => a ^ b,
                funct3::SRL_SRA => {
                    let shamt = bu & SHAMT_MASK;
                    if d.funct7 & funct7::SRA != 0 {
                        a >> shamt
                    } else {
                        (au >> shamt) as i32
                    }
                }
                funct3::OR => a | b,
                funct3::AND => a & b,
                _ => return Err(Fault::IllegalInstruction(d.raw)),
            }
        };

        self.regs.write_signed(d.rd, value);
        Ok(Flow::Advance)
    }

    fn exec_branch(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        let a = self.regs.read_signed(d.rs1);
        let b = self.regs.read_signed(d.rs2);
        let au = self.regs.read(d.rs1);
        let bu = self.regs.read(d.rs2);

        let taken = match d.funct3 {
            funct3::BEQ => a == b,
            funct3::BNE => a != b,
            funct3::BLT => a < b,
            funct3::BGE => a >= b,
            funct3::BLTU => au < bu,
            funct3::BGEU => au >= bu,
            _ => return Err(Fault::IllegalInstruction(d.raw)),
        };

        if taken {
            // The B immediate is a byte offset; the program counter is a
            // word index, so the redirect scales it down by 4.
            Ok(Flow::Redirect(self.pc.wrapping_add((d.imm >> 2) as u32)))
        } else {
            Ok(Flow::Advance)
        }
    }

    fn exec_jal(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        // A JAL whose entire offset field is zero jumps to itself
        // forever: it is the program's normal-termination sentinel and
        // is recognized before the link register is written.
        if d.raw >> 12 == 0 {
            return Ok(Flow::Halt);
        }

        self.regs.write(d.rd, self.pc.wrapping_add(1) << 2);
        Ok(Flow::Redirect(self.pc.wrapping_add((d.imm >> 2) as u32)))
    }

    fn exec_jalr(&mut self, d: &Decoded) -> Result<Flow, Fault> {
        // The link is written before the base register is read; a JALR
        // with rd == rs1 therefore jumps through the link value.
        self.regs.write(d.rd, self.pc.wrapping_add(1) << 2);
        let target = self.regs.read(d.rs1).wrapping_add(d.imm as u32) >> 2;
        Ok(Flow::Redirect(target))
    }
}
