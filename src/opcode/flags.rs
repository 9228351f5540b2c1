use crate::cpu::{AddressingMode, Cpu, Status};

/// Sets the carry flag.
pub fn sec(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.insert(Status::CARRY);
}

/// Clears the carry flag.
pub fn clc(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.remove(Status::CARRY);
}

/// Sets the decimal mode flag.
pub fn sed(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.insert(Status::DECIMAL);
}

/// Clears the decimal mode flag.
pub fn cld(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.remove(Status::DECIMAL);
}

/// Sets the interrupt disable flag.
pub fn sei(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

/// Clears the interrupt disable flag.
pub fn cli(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

/// Clears the overflow flag.
pub fn clv(cpu: &mut Cpu, _mode: AddressingMode) {
    cpu.status.remove(Status::OVERFLOW);
}
