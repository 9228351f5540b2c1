use super::Cpu;
use crate::opcode::OPCODES;
use core::fmt::{self, Display};

/// One trace line for the instruction the CPU is about to execute.
///
/// The register columns show the state *before* the instruction runs, and
/// the cycle column counts in PPU dots (three per CPU cycle, modulo one
/// scanline's 341), which keeps the output diffable against the usual
/// emulator golden logs.
pub struct Trace<'a>(pub &'a Cpu);

impl Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self.0;
        let op = &OPCODES[usize::from(cpu.bus.mem_read(cpu.pc))];

        write!(f, "{:04X}  ", cpu.pc)?;
        let b = |i: u16| cpu.bus.mem_read(cpu.pc.wrapping_add(i));
        match op.mode.len() {
            3 => write!(f, "{:02X} {:02X} {:02X}", b(0), b(1), b(2))?,
            2 => write!(f, "{:02X} {:02X}   ", b(0), b(1))?,
            _ => write!(f, "{:02X}      ", b(0))?,
        }
        write!(
            f,
            "  {:<10}               A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{:3}",
            op.mnemonic,
            cpu.reg_a,
            cpu.reg_x,
            cpu.reg_y,
            cpu.status.bits(),
            cpu.sp,
            (cpu.total_cycles * 3) % 341,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::Init;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_a_three_byte_instruction() {
        let mut bus = Bus::new();
        bus.load(0xC000, &[0xAD, 0x01, 0x02]); // LDA $0201
        let cpu = Cpu::new(
            bus,
            Init {
                a: 0x42,
                pc: Some(0xC000),
                ..Init::default()
            },
        );

        assert_eq!(
            Trace(&cpu).to_string(),
            "C000  AD 01 02  LDA abs                  A:42 X:00 Y:00 P:24 SP:FF CYC:  0",
        );
    }

    #[test]
    fn pads_short_instructions_to_the_same_columns() {
        let mut bus = Bus::new();
        bus.load(0xC000, &[0xEA]); // NOP
        let cpu = Cpu::new(
            bus,
            Init {
                pc: Some(0xC000),
                ..Init::default()
            },
        );

        assert_eq!(
            Trace(&cpu).to_string(),
            "C000  EA        NOP impl                 A:00 X:00 Y:00 P:24 SP:FF CYC:  0",
        );
    }
}
