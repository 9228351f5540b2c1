use crate::cpu::{AddressingMode, Cpu, Status};

fn compare(cpu: &mut Cpu, mode: AddressingMode, reg: u8) {
    let val = cpu.read_operand(mode);
    cpu.zero_and_neg_flags(reg.wrapping_sub(val));
    cpu.status.set(Status::CARRY, reg >= val);
}

/// Compares the accumulator with a value in memory, and sets the zero,
/// negative, and carry flags. The accumulator is untouched.
pub fn cmp(cpu: &mut Cpu, mode: AddressingMode) {
    compare(cpu, mode, cpu.reg_a);
}

/// Compares the X register with a value in memory.
pub fn cpx(cpu: &mut Cpu, mode: AddressingMode) {
    compare(cpu, mode, cpu.reg_x);
}

/// Compares the Y register with a value in memory.
pub fn cpy(cpu: &mut Cpu, mode: AddressingMode) {
    compare(cpu, mode, cpu.reg_y);
}

/// Tests bits in memory against the accumulator: N and V come straight from
/// bits 7 and 6 of the operand, Z from the AND with the accumulator.
pub fn bit(cpu: &mut Cpu, mode: AddressingMode) {
    let val = cpu.read_operand(mode);
    cpu.status.set(Status::NEGATIVE, val & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, val & 0x40 != 0);
    cpu.status.set(Status::ZERO, val & cpu.reg_a == 0);
}
