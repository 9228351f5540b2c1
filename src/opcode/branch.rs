//! The eight conditional branches. A taken branch costs one extra cycle,
//! plus another when the destination lands on a different page; an untaken
//! branch just falls through at the base cost.

use crate::cpu::{AddressingMode, Cpu, Status};

fn branch_if(cpu: &mut Cpu, cond: bool) {
    if cond {
        cpu.take_branch();
    }
}

/// Branches if the carry flag is clear.
pub fn bcc(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, !cpu.status.contains(Status::CARRY));
}

/// Branches if the carry flag is set.
pub fn bcs(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, cpu.status.contains(Status::CARRY));
}

/// Branches if the zero flag is set.
pub fn beq(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, cpu.status.contains(Status::ZERO));
}

/// Branches if the zero flag is clear.
pub fn bne(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, !cpu.status.contains(Status::ZERO));
}

/// Branches if the negative flag is set.
pub fn bmi(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, cpu.status.contains(Status::NEGATIVE));
}

/// Branches if the negative flag is clear.
pub fn bpl(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, !cpu.status.contains(Status::NEGATIVE));
}

/// Branches if the overflow flag is clear.
pub fn bvc(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, !cpu.status.contains(Status::OVERFLOW));
}

/// Branches if the overflow flag is set.
pub fn bvs(cpu: &mut Cpu, _mode: AddressingMode) {
    branch_if(cpu, cpu.status.contains(Status::OVERFLOW));
}
