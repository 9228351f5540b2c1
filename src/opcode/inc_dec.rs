use crate::cpu::{AddressingMode, Cpu};

/// Increments a value in memory, and sets the zero and negative flags.
pub fn inc(cpu: &mut Cpu, mode: AddressingMode) {
    let addr = cpu.operand_addr(mode);
    let val = cpu.bus.read_tracked(addr).wrapping_add(1);
    cpu.zero_and_neg_flags(val);
    cpu.bus.write_tracked(addr, val);
}

/// Decrements a value in memory, and sets the zero and negative flags.
pub fn dec(cpu: &mut Cpu, mode: AddressingMode) {
    let addr = cpu.operand_addr(mode);
    let val = cpu.bus.read_tracked(addr).wrapping_sub(1);
    cpu.zero_and_neg_flags(val);
    cpu.bus.write_tracked(addr, val);
}

/// Increments the X register.
pub fn inx(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_x = cpu.reg_x.wrapping_add(1);
    let val = cpu.reg_x;
    cpu.zero_and_neg_flags(val);
}

/// Increments the Y register.
pub fn iny(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_y = cpu.reg_y.wrapping_add(1);
    let val = cpu.reg_y;
    cpu.zero_and_neg_flags(val);
}

/// Decrements the X register.
pub fn dex(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_x = cpu.reg_x.wrapping_sub(1);
    let val = cpu.reg_x;
    cpu.zero_and_neg_flags(val);
}

/// Decrements the Y register.
pub fn dey(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_y = cpu.reg_y.wrapping_sub(1);
    let val = cpu.reg_y;
    cpu.zero_and_neg_flags(val);
}
