use crate::cpu::{AddressingMode, Cpu, Status};

/// Transfers the stack pointer to the X register, and sets the zero and
/// negative flags.
pub fn tsx(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.reg_x = cpu.sp;
    let val = cpu.reg_x;
    cpu.zero_and_neg_flags(val);
}

/// Transfers the X register to the stack pointer. No flags are affected.
pub fn txs(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.sp = cpu.reg_x;
}

/// Pushes the accumulator onto the stack.
pub fn pha(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.push(cpu.reg_a);
}

/// Pulls the accumulator from the stack, and sets the zero and negative
/// flags.
pub fn pla(cpu: &mut Cpu, _mode: AddressingMode) {
    let val = cpu.pop();
    cpu.set_reg_a(val);
}

/// Pushes the status register with the break bit forced on. The live
/// register never carries B; it exists only in the pushed copy.
pub fn php(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.push((cpu.status | Status::BREAK).bits());
}

/// Pulls the status register from the stack. The unused bit is forced on
/// and the break bit forced off on the way in.
pub fn plp(cpu: &mut Cpu, _mode: AddressingMode) {
    let val = cpu.pop();
    cpu.status = (Status::from_bits_retain(val) | Status::UNUSED) & !Status::BREAK;
}
