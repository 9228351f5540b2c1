//! A minimal 6850-style UART. The control byte lives at `$A000` and the
//! data byte at `$A001`. Instead of intercepting bus traffic, the UART runs
//! once after every CPU step and reacts to the effective address the
//! instruction just read or wrote.

use crate::bus::Bus;
use bitflags::bitflags;
use std::io::{self, Read, Write};

/// Address of the control/status byte.
pub const CTRL_ADDR: u16 = 0xA000;
/// Address of the data byte.
pub const DATA_ADDR: u16 = 0xA001;

/// How many CPU steps pass between polls of the input side. The guest only
/// ever observes the status byte, so the exact cadence is invisible to it.
const POLL_INTERVAL: u32 = 100;

bitflags! {
    /// UART status register bits, mirrored into `$A000` every step.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct UartStatus: u8 {
        /// Receive data register full: a byte is waiting in `$A001`.
        const RDRF = 0b0000_0001;
        /// Transmit data register empty. Transmission is instantaneous
        /// here, so this stays set from init onwards.
        const TDRE = 0b0000_0010;
        /// Data carrier detect.
        const DCD  = 0b0000_0100;
        /// Clear to send.
        const CTS  = 0b0000_1000;
        /// Framing error.
        const FE   = 0b0001_0000;
        /// Receiver overrun.
        const OVRN = 0b0010_0000;
        /// Parity error.
        const PE   = 0b0100_0000;
        /// Interrupt request.
        const IRQ  = 0b1000_0000;
    }
}

/// What the run loop should do after a UART step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The interactive exit byte (CTRL-X) arrived.
    Halt,
}

/// The peripheral itself, generic over its byte source and sink so the
/// binary can hand it a non-blocking stdin reader and tests can hand it
/// buffers. Reads must be non-blocking: a zero-length read means "nothing
/// pending", not end of input.
pub struct Uart<R, W> {
    input: R,
    output: W,
    status: UartStatus,
    /// Last byte received, held until the guest consumes it and mirrored
    /// into the data register every step.
    latch: u8,
    ticks: u32,
    interactive: bool,
}

impl<R: Read, W: Write> Uart<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            status: UartStatus::TDRE,
            latch: 0,
            ticks: 0,
            interactive,
        }
    }

    /// Runs the UART for one CPU step. Must be called after each
    /// instruction, before the next one executes.
    ///
    /// A write to the data register transmits it to the output (a backspace
    /// is followed by `" \b"` to rub the character out). A read from the
    /// data register clears RDRF. Every [`POLL_INTERVAL`] steps, if the
    /// receive register is free and the input has a byte, it is latched and
    /// RDRF raised. Finally the latch and status are mirrored into memory.
    ///
    /// # Errors
    /// Propagates output failures; input failures only log a warning.
    pub fn step(&mut self, bus: &mut Bus) -> io::Result<Flow> {
        if bus.last_write == Some(DATA_ADDR) {
            let byte = bus.mem_read(DATA_ADDR);
            self.output.write_all(&[byte])?;
            if byte == 0x08 {
                self.output.write_all(b" \x08")?;
            }
            self.output.flush()?;
            bus.last_write = None;
        } else if bus.last_read == Some(DATA_ADDR) {
            self.status.remove(UartStatus::RDRF);
            bus.last_read = None;
        }

        let mut flow = Flow::Continue;
        if self.ticks % POLL_INTERVAL == 0 {
            flow = self.poll_input()?;
        }
        self.ticks = self.ticks.wrapping_add(1);

        bus.mem_write(DATA_ADDR, self.latch);
        bus.mem_write(CTRL_ADDR, self.status.bits());
        Ok(flow)
    }

    fn poll_input(&mut self) -> io::Result<Flow> {
        if self.status.contains(UartStatus::RDRF) {
            return Ok(Flow::Continue);
        }
        let mut byte = [0u8; 1];
        match self.input.read(&mut byte) {
            Ok(0) => return Ok(Flow::Continue),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(Flow::Continue),
            Err(e) => {
                log::warn!("uart input read failed: {e}");
                return Ok(Flow::Continue);
            }
        }
        let mut byte = byte[0];
        if self.interactive {
            if byte == 0x18 {
                // CTRL-X leaves the simulator cleanly.
                self.output.write_all(b"\r\n")?;
                self.output.flush()?;
                return Ok(Flow::Halt);
            }
            if byte == 0x7F {
                byte = 0x08; // DEL types as backspace
            }
        }
        self.latch = byte;
        self.status.insert(UartStatus::RDRF);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn uart(input: &[u8], interactive: bool) -> Uart<Cursor<Vec<u8>>, Vec<u8>> {
        Uart::new(Cursor::new(input.to_vec()), Vec::new(), interactive)
    }

    #[test]
    fn transmits_on_a_data_register_write() {
        let mut bus = Bus::new();
        let mut uart = uart(b"", false);

        bus.write_tracked(DATA_ADDR, b'H');
        uart.step(&mut bus).unwrap();

        assert_eq!(uart.output, b"H");
        assert_eq!(bus.last_write, None);
    }

    #[test]
    fn backspace_is_rubbed_out() {
        let mut bus = Bus::new();
        let mut uart = uart(b"", false);

        bus.write_tracked(DATA_ADDR, 0x08);
        uart.step(&mut bus).unwrap();

        assert_eq!(uart.output, b"\x08 \x08");
    }

    #[test]
    fn receives_a_byte_and_raises_rdrf() {
        let mut bus = Bus::new();
        let mut uart = uart(b"A", false);

        uart.step(&mut bus).unwrap();

        assert_eq!(bus.mem_read(DATA_ADDR), b'A');
        let status = UartStatus::from_bits_retain(bus.mem_read(CTRL_ADDR));
        assert!(status.contains(UartStatus::RDRF));
        assert!(status.contains(UartStatus::TDRE));
    }

    #[test]
    fn data_register_read_clears_rdrf() {
        let mut bus = Bus::new();
        let mut uart = uart(b"A", false);
        uart.step(&mut bus).unwrap();

        // The guest reads the data register...
        bus.read_tracked(DATA_ADDR);
        uart.step(&mut bus).unwrap();

        let status = UartStatus::from_bits_retain(bus.mem_read(CTRL_ADDR));
        assert!(!status.contains(UartStatus::RDRF));
        assert_eq!(bus.last_read, None);
    }

    #[test]
    fn second_byte_waits_until_the_first_is_consumed() {
        let mut bus = Bus::new();
        let mut uart = uart(b"AB", false);

        uart.step(&mut bus).unwrap();
        assert_eq!(bus.mem_read(DATA_ADDR), b'A');

        // Still 'A' until the guest reads it: RDRF gates the poll.
        for _ in 0..POLL_INTERVAL {
            uart.step(&mut bus).unwrap();
        }
        assert_eq!(bus.mem_read(DATA_ADDR), b'A');

        bus.read_tracked(DATA_ADDR);
        for _ in 0..=POLL_INTERVAL {
            uart.step(&mut bus).unwrap();
        }
        assert_eq!(bus.mem_read(DATA_ADDR), b'B');
    }

    #[test]
    fn ctrl_x_halts_in_interactive_mode() {
        let mut bus = Bus::new();
        let mut uart = uart(&[0x18], true);

        assert_eq!(uart.step(&mut bus).unwrap(), Flow::Halt);
        assert_eq!(uart.output, b"\r\n");
    }

    #[test]
    fn ctrl_x_is_data_when_not_interactive() {
        let mut bus = Bus::new();
        let mut uart = uart(&[0x18], false);

        assert_eq!(uart.step(&mut bus).unwrap(), Flow::Continue);
        assert_eq!(bus.mem_read(DATA_ADDR), 0x18);
    }

    #[test]
    fn del_becomes_backspace_in_interactive_mode() {
        let mut bus = Bus::new();
        let mut uart = uart(&[0x7F], true);

        uart.step(&mut bus).unwrap();
        assert_eq!(bus.mem_read(DATA_ADDR), 0x08);
    }
}
