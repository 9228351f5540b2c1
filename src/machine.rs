//! The run loop: executes CPU steps in real-time slices, services the UART
//! after every instruction, and watches for the stop conditions.

use crate::cpu::{Cpu, Trace};
use crate::rom;
use crate::uart::{Flow, Uart};
use snafu::{ResultExt, Snafu};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Simulated processor frequency, in Hz.
pub const CPU_FREQ: u64 = 4_000_000;
/// Wall-clock length of one run-loop slice, in nanoseconds.
pub const STEP_DURATION_NS: u64 = 10_000_000;

const NANOS_PER_SEC: u64 = 1_000_000_000;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("memory dump failed: {source}"))]
    Dump { source: rom::Error },
    #[snafu(display("uart i/o failed: {source}"))]
    UartIo { source: std::io::Error },
}

/// Why the run loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// `total_cycles` reached the configured limit.
    CycleLimit,
    /// The program counter hit the breakpoint; memory has been dumped.
    Breakpoint(u16),
    /// The UART's interactive exit byte arrived.
    Halted,
}

pub struct Config {
    /// Stop once this many cycles have run; 0 means never.
    pub cycle_stop: u64,
    /// Stop (and dump memory) when the PC reaches this address.
    pub break_pc: Option<u16>,
    /// Print a trace line before every instruction.
    pub verbose: bool,
    /// Dump memory before every instruction.
    pub mem_dump: bool,
    /// Skip the inter-slice delay and run flat out.
    pub fast: bool,
    /// Where memory dumps go; `None` is the conventional `memdump` file.
    pub dump_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycle_stop: 0,
            break_pc: None,
            verbose: false,
            mem_dump: false,
            fast: false,
            dump_file: None,
        }
    }
}

pub struct Machine<R, W> {
    pub cpu: Cpu,
    pub uart: Uart<R, W>,
    config: Config,
}

impl<R: Read, W: Write> Machine<R, W> {
    pub fn new(cpu: Cpu, uart: Uart<R, W>, config: Config) -> Self {
        Self { cpu, uart, config }
    }

    /// Drives the CPU and UART until a stop condition fires.
    ///
    /// Cycles are accumulated into slices of `CPU_FREQ / (1s /
    /// STEP_DURATION)` cycles (40,000 by default); after each full slice the
    /// thread sleeps for the slice duration, unless `fast` is set. The UART
    /// runs after every instruction, before the breakpoint check, so that
    /// memory-mapped traffic is never a step behind.
    ///
    /// # Errors
    /// Fails if a memory dump cannot be written or UART output breaks.
    pub fn run(&mut self) -> Result<Stop, Error> {
        let cycles_per_step = CPU_FREQ / (NANOS_PER_SEC / STEP_DURATION_NS);
        let mut cycles: u64 = 0;
        loop {
            cycles %= cycles_per_step;
            while cycles < cycles_per_step {
                if self.config.mem_dump {
                    self.save_memory()?;
                }
                if self.config.verbose {
                    println!("{}", Trace(&self.cpu));
                }
                cycles += u64::from(self.cpu.step());
                if self.config.cycle_stop > 0 && self.cpu.total_cycles >= self.config.cycle_stop {
                    return Ok(Stop::CycleLimit);
                }
                if self.uart.step(&mut self.cpu.bus).context(UartIoSnafu)? == Flow::Halt {
                    return Ok(Stop::Halted);
                }
                if let Some(bp) = self.config.break_pc {
                    if self.cpu.pc == bp {
                        eprintln!("break at {bp:04x}");
                        self.save_memory()?;
                        return Ok(Stop::Breakpoint(bp));
                    }
                }
            }
            if !self.config.fast {
                thread::sleep(Duration::from_nanos(STEP_DURATION_NS));
            }
        }
    }

    fn save_memory(&self) -> Result<(), Error> {
        rom::save_memory(&self.cpu.bus, self.config.dump_file.as_deref()).context(DumpSnafu)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::Init;
    use pretty_assertions::assert_eq;
    use std::env;
    use std::fs;
    use std::io::Cursor;

    fn machine(prog: &[u8], config: Config) -> Machine<Cursor<Vec<u8>>, Vec<u8>> {
        let mut bus = Bus::new();
        bus.load(0xC000, prog);
        let cpu = Cpu::new(
            bus,
            Init {
                pc: Some(0xC000),
                ..Init::default()
            },
        );
        let uart = Uart::new(Cursor::new(Vec::new()), Vec::new(), false);
        Machine::new(cpu, uart, config)
    }

    #[test]
    fn stops_at_the_cycle_limit() {
        // An endless JMP-to-self, reined in by the cycle budget.
        let mut m = machine(
            &[0x4C, 0x00, 0xC0],
            Config {
                cycle_stop: 30,
                fast: true,
                ..Config::default()
            },
        );

        assert_eq!(m.run().unwrap(), Stop::CycleLimit);
        assert!(m.cpu.total_cycles >= 30);
    }

    #[test]
    fn stops_and_dumps_at_the_breakpoint() {
        let dump = env::temp_dir().join(format!("sim6502-bp-{}", std::process::id()));
        // LDA #$7E ; STA $0200 ; NOP
        let mut m = machine(
            &[0xA9, 0x7E, 0x8D, 0x00, 0x02, 0xEA],
            Config {
                break_pc: Some(0xC005),
                dump_file: Some(dump.clone()),
                fast: true,
                ..Config::default()
            },
        );

        assert_eq!(m.run().unwrap(), Stop::Breakpoint(0xC005));
        assert_eq!(m.cpu.reg_a, 0x7E);

        let dumped = fs::read(&dump).unwrap();
        assert_eq!(dumped.len(), 0x1_0000);
        assert_eq!(dumped[0x0200], 0x7E);
        fs::remove_file(dump).unwrap();
    }
}
