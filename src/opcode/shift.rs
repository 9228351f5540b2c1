//! Shifts and rotates. All four read the operand, transform it, and write
//! the result back to the same effective address; in accumulator mode that
//! address is the A register itself.

use crate::cpu::{AddressingMode, Cpu, Status};

fn read_write_operand(
    cpu: &mut Cpu,
    mode: AddressingMode,
    f: impl FnOnce(&mut Cpu, u8) -> u8,
) {
    if mode == AddressingMode::Accumulator {
        let val = cpu.reg_a;
        let result = f(cpu, val);
        cpu.reg_a = result;
    } else {
        let addr = cpu.operand_addr(mode);
        let val = cpu.bus.read_tracked(addr);
        let result = f(cpu, val);
        cpu.bus.write_tracked(addr, result);
    }
}

/// Shifts left by one; bit 7 lands in the carry, bit 0 is filled with zero.
pub fn asl(cpu: &mut Cpu, mode: AddressingMode) {
    read_write_operand(cpu, mode, |cpu, val| {
        cpu.status.set(Status::CARRY, val & 0x80 != 0);
        let result = val << 1;
        cpu.zero_and_neg_flags(result);
        result
    });
}

/// Shifts right by one; bit 0 lands in the carry, bit 7 is filled with zero.
pub fn lsr(cpu: &mut Cpu, mode: AddressingMode) {
    read_write_operand(cpu, mode, |cpu, val| {
        cpu.status.set(Status::CARRY, val & 0x01 != 0);
        let result = val >> 1;
        cpu.zero_and_neg_flags(result);
        result
    });
}

/// Rotates left through the carry.
pub fn rol(cpu: &mut Cpu, mode: AddressingMode) {
    read_write_operand(cpu, mode, |cpu, val| {
        let carry_in = u8::from(cpu.status.contains(Status::CARRY));
        cpu.status.set(Status::CARRY, val & 0x80 != 0);
        let result = (val << 1) | carry_in;
        cpu.zero_and_neg_flags(result);
        result
    });
}

/// Rotates right through the carry.
pub fn ror(cpu: &mut Cpu, mode: AddressingMode) {
    read_write_operand(cpu, mode, |cpu, val| {
        let carry_in = u8::from(cpu.status.contains(Status::CARRY));
        cpu.status.set(Status::CARRY, val & 0x01 != 0);
        let result = (val >> 1) | (carry_in << 7);
        cpu.zero_and_neg_flags(result);
        result
    });
}
