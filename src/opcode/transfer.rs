use crate::cpu::{AddressingMode, Cpu};

/// Transfers the accumulator to the X register, and sets the zero and
/// negative flags.
pub fn tax(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_x = cpu.reg_a;
    let val = cpu.reg_x;
    cpu.zero_and_neg_flags(val);
}

/// Transfers the accumulator to the Y register, and sets the zero and
/// negative flags.
pub fn tay(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_y = cpu.reg_a;
    let val = cpu.reg_y;
    cpu.zero_and_neg_flags(val);
}

/// Transfers the X register to the accumulator, and sets the zero and
/// negative flags.
pub fn txa(cpu: &mut Cpu, _mode: AddressingMode) {
    let val = cpu.reg_x;
    cpu.set_reg_a(val);
}

/// Transfers the Y register to the accumulator, and sets the zero and
/// negative flags.
pub fn tya(cpu: &mut Cpu, _mode: AddressingMode) {
    let val = cpu.reg_y;
    cpu.set_reg_a(val);
}
