use clap::Parser;
use sim6502::bus::Bus;
use sim6502::cpu::{Cpu, Init};
use sim6502::machine::{Config, Machine};
use sim6502::rom;
use sim6502::uart::Uart;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use termion::raw::IntoRawMode;

/// Simulate a MOS 6502 processor against a flat binary image.
///
/// Hex arguments accept `$nn`, `0xnn`, or bare hex digits.
#[derive(Parser, Debug)]
#[command(name = "sim6502", version)]
struct Args {
    /// Initial A register
    #[arg(short = 'a', value_parser = parse_hex8, default_value = "0")]
    reg_a: u8,

    /// Initial X register
    #[arg(short = 'x', value_parser = parse_hex8, default_value = "0")]
    reg_x: u8,

    /// Initial Y register
    #[arg(short = 'y', value_parser = parse_hex8, default_value = "0")]
    reg_y: u8,

    /// Initial stack pointer
    #[arg(short = 's', value_parser = parse_hex8, default_value = "ff")]
    sp: u8,

    /// Initial status register (the I and U bits are always set)
    #[arg(short = 'p', value_parser = parse_hex8, default_value = "0")]
    status: u8,

    /// Start at this address instead of the reset vector
    #[arg(short = 'r', short_alias = 'g', value_name = "ADDR", value_parser = parse_hex16)]
    start: Option<u16>,

    /// Load address for the image
    #[arg(short = 'l', value_name = "ADDR", value_parser = parse_hex16, default_value = "c000")]
    load_addr: u16,

    /// Stop after this many cycles (decimal; 0 means never)
    #[arg(short = 'c', value_name = "NUM", default_value_t = 0)]
    cycle_stop: u64,

    /// Stop when the PC reaches this address, dump memory, and exit
    #[arg(short = 'b', value_name = "ADDR", value_parser = parse_hex16)]
    break_pc: Option<u16>,

    /// Print a trace line for every instruction
    #[arg(short = 'v')]
    verbose: bool,

    /// Connect stdin/stdout to the UART; raw terminal, CTRL-X exits
    #[arg(short = 'i')]
    interactive: bool,

    /// Dump memory before every instruction
    #[arg(short = 'm')]
    mem_dump: bool,

    /// Run at full speed, without the real-time delay
    #[arg(short = 'f')]
    fast: bool,

    /// Binary image to load
    file: PathBuf,
}

fn parse_hex16(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix('$')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {s:?}: {e}"))
}

fn parse_hex8(s: &str) -> Result<u8, String> {
    let val = parse_hex16(s)?;
    u8::try_from(val).map_err(|_| format!("{s:?} does not fit in one byte"))
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    let mut bus = Bus::new();
    if let Err(e) = rom::load_into(&mut bus, &args.file, args.load_addr) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // The guard flips the terminal back to cooked mode when dropped, on
    // every exit path out of this function.
    let _raw_guard = if args.interactive {
        println!("*** Entering interactive mode, CTRL-X to exit ***\n");
        match io::stdout().into_raw_mode() {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("could not enter raw mode: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    let cpu = Cpu::new(
        bus,
        Init {
            a: args.reg_a,
            x: args.reg_x,
            y: args.reg_y,
            sp: args.sp,
            status: args.status,
            pc: args.start,
        },
    );
    let uart = Uart::new(termion::async_stdin(), io::stdout(), args.interactive);
    let mut machine = Machine::new(
        cpu,
        uart,
        Config {
            cycle_stop: args.cycle_stop,
            break_pc: args.break_pc,
            verbose: args.verbose,
            mem_dump: args.mem_dump,
            fast: args.fast,
            dump_file: None,
        },
    );

    match machine.run() {
        Ok(stop) => {
            log::debug!("stopped: {stop:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_arguments_accept_all_three_spellings() {
        assert_eq!(parse_hex16("$c000"), Ok(0xC000));
        assert_eq!(parse_hex16("0xC000"), Ok(0xC000));
        assert_eq!(parse_hex16("c000"), Ok(0xC000));
        assert_eq!(parse_hex8("$ff"), Ok(0xFF));
    }

    #[test]
    fn hex_arguments_reject_garbage_and_overflow() {
        assert!(parse_hex16("not-hex").is_err());
        assert!(parse_hex16("$10000").is_err());
        assert!(parse_hex8("$100").is_err());
    }

    #[test]
    fn cli_parses_the_original_flag_set() {
        use clap::error::ErrorKind;

        let args = Args::try_parse_from([
            "sim6502", "-a", "$12", "-x", "34", "-s", "0xfe", "-r", "$c000", "-c", "1000", "-v",
            "-f", "rom.bin",
        ])
        .unwrap();
        assert_eq!(args.reg_a, 0x12);
        assert_eq!(args.reg_x, 0x34);
        assert_eq!(args.sp, 0xFE);
        assert_eq!(args.start, Some(0xC000));
        assert_eq!(args.cycle_stop, 1000);
        assert!(args.verbose);
        assert!(args.fast);
        assert_eq!(args.load_addr, 0xC000);

        // -g is an alias for -r.
        let args = Args::try_parse_from(["sim6502", "-g", "$0200", "rom.bin"]).unwrap();
        assert_eq!(args.start, Some(0x0200));

        // The image file is mandatory.
        let err = Args::try_parse_from(["sim6502", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
