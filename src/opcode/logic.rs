use crate::cpu::{AddressingMode, Cpu};

/// Bitwise AND between the accumulator and a value in memory.
pub fn and(cpu: &mut Cpu, mode: AddressingMode) {
    let val = cpu.reg_a & cpu.read_operand(mode);
    cpu.set_reg_a(val);
}

/// Bitwise OR between the accumulator and a value in memory.
pub fn ora(cpu: &mut Cpu, mode: AddressingMode) {
    let val = cpu.reg_a | cpu.read_operand(mode);
    cpu.set_reg_a(val);
}

/// Bitwise exclusive OR between the accumulator and a value in memory.
pub fn eor(cpu: &mut Cpu, mode: AddressingMode) {
    let val = cpu.reg_a ^ cpu.read_operand(mode);
    cpu.set_reg_a(val);
}
