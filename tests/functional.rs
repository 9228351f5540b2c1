//! End-to-end runs through the machine: real programs, UART traffic, stop
//! conditions.

use pretty_assertions::assert_eq;
use sim6502::bus::Bus;
use sim6502::cpu::{Cpu, Init};
use sim6502::machine::{Config, Machine, Stop};
use sim6502::uart::Uart;
use std::io::Cursor;

fn cpu_at(org: u16, prog: &[u8]) -> Cpu {
    let mut bus = Bus::new();
    bus.load(org, prog);
    Cpu::new(
        bus,
        Init {
            pc: Some(org),
            ..Init::default()
        },
    )
}

#[test_log::test]
fn uart_echo_loop_round_trips_bytes() {
    // Busy-wait on RDRF, read the data register, transmit it back.
    //
    //   loop:  LDA $A000
    //          AND #$01
    //          BEQ loop
    //          LDA $A001
    //          STA $A001
    //          JMP loop
    let prog = [
        0xAD, 0x00, 0xA0, // LDA $A000
        0x29, 0x01, // AND #$01
        0xF0, 0xF9, // BEQ -7
        0xAD, 0x01, 0xA0, // LDA $A001
        0x8D, 0x01, 0xA0, // STA $A001
        0x4C, 0x00, 0xC0, // JMP $C000
    ];

    let mut out = Vec::new();
    let uart = Uart::new(Cursor::new(b"Hi!".to_vec()), &mut out, false);
    let mut machine = Machine::new(
        cpu_at(0xC000, &prog),
        uart,
        Config {
            cycle_stop: 50_000,
            fast: true,
            ..Config::default()
        },
    );

    assert_eq!(machine.run().unwrap(), Stop::CycleLimit);
    drop(machine);
    assert_eq!(out, b"Hi!");
}

#[test]
fn bcd_addition_program_runs_to_the_breakpoint() {
    //   SED ; CLC ; LDA #$15 ; ADC #$27 ; STA $0200
    let prog = [
        0xF8, 0x18, 0xA9, 0x15, 0x69, 0x27, 0x8D, 0x00, 0x02,
    ];

    let uart = Uart::new(Cursor::new(Vec::new()), Vec::new(), false);
    let mut machine = Machine::new(
        cpu_at(0xC000, &prog),
        uart,
        Config {
            break_pc: Some(0xC009),
            dump_file: Some(std::env::temp_dir().join(format!(
                "sim6502-bcd-{}",
                std::process::id()
            ))),
            fast: true,
            ..Config::default()
        },
    );

    assert_eq!(machine.run().unwrap(), Stop::Breakpoint(0xC009));
    assert_eq!(machine.cpu.bus.mem_read(0x0200), 0x42);
    // SED + CLC + LDA# + ADC# + STA abs.
    assert_eq!(machine.cpu.total_cycles, 2 + 2 + 2 + 2 + 4);
}

#[test]
fn subroutine_program_counts_its_cycles() {
    // JSR into a doubling routine, store the result, stop on the NOP.
    //
    //   C000: JSR $C006
    //   C003: STA $10
    //   C005: NOP        <- breakpoint
    //   C006: LDA #$21
    //   C008: ASL A
    //   C009: RTS
    let prog = [
        0x20, 0x06, 0xC0, // JSR $C006
        0x85, 0x10, // STA $10
        0xEA, // NOP
        0xA9, 0x21, // LDA #$21
        0x0A, // ASL A
        0x60, // RTS
    ];

    let uart = Uart::new(Cursor::new(Vec::new()), Vec::new(), false);
    let mut machine = Machine::new(
        cpu_at(0xC000, &prog),
        uart,
        Config {
            break_pc: Some(0xC005),
            dump_file: Some(std::env::temp_dir().join(format!(
                "sim6502-jsr-{}",
                std::process::id()
            ))),
            fast: true,
            ..Config::default()
        },
    );

    assert_eq!(machine.run().unwrap(), Stop::Breakpoint(0xC005));
    assert_eq!(machine.cpu.reg_a, 0x42);
    assert_eq!(machine.cpu.bus.mem_read(0x0010), 0x42);
    assert_eq!(machine.cpu.sp, 0xFF);
    // JSR + LDA# + ASL A + RTS + STA zp.
    assert_eq!(machine.cpu.total_cycles, 6 + 2 + 2 + 6 + 3);
}

#[test]
fn interactive_exit_byte_halts_the_machine() {
    // The guest ignores the UART entirely; CTRL-X still gets through.
    let prog = [0x4C, 0x00, 0xC0]; // JMP $C000
    let uart = Uart::new(Cursor::new(vec![0x18]), Vec::new(), true);
    let mut machine = Machine::new(
        cpu_at(0xC000, &prog),
        uart,
        Config {
            fast: true,
            ..Config::default()
        },
    );

    assert_eq!(machine.run().unwrap(), Stop::Halted);
}
