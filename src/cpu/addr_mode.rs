#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// The operand is the accumulator itself (`ASL A`, `ROR A`, ...).
    Accumulator,
    /// A full 16-bit address follows the opcode.
    Absolute,
    /// Absolute address plus the X register. Crossing a page boundary costs
    /// one extra cycle on reads.
    AbsoluteX,
    /// Absolute address plus the Y register, with the same page-cross cost.
    AbsoluteY,
    /// The byte after the opcode is the operand itself.
    Immediate,
    /// No operand at all; the instruction acts on registers or the stack.
    Implied,
    /// The word after the opcode points at the real target address. Only the
    /// bug-free indirect-JMP path uses this.
    Indirect,
    /// `(zp,X)`: the zero-page operand plus X (wrapping within the page)
    /// locates a little-endian pointer to the target.
    IndirectX,
    /// `(zp),Y`: the zero-page operand locates a pointer, to which Y is
    /// added. Crossing a page boundary costs one extra cycle.
    IndirectY,
    /// A signed 8-bit offset from the branch instruction's own address.
    Relative,
    /// A single-byte address into the zero page.
    ZeroPage,
    /// Zero-page address plus X, wrapping within the page.
    ZeroPageX,
    /// Zero-page address plus Y, wrapping within the page.
    ZeroPageY,
    /// `JMP (ind)` as the NMOS 6502 actually behaves: when the pointer sits
    /// at the end of a page (`$xxFF`), the high byte is fetched from the
    /// start of that same page instead of the next one.
    IndirectBug,
}

impl AddressingMode {
    /// Total instruction length in bytes, opcode included.
    #[must_use]
    pub const fn len(self) -> u8 {
        match self {
            Self::Accumulator | Self::Implied => 1,
            Self::Immediate
            | Self::Relative
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::IndirectX
            | Self::IndirectY => 2,
            Self::Absolute
            | Self::AbsoluteX
            | Self::AbsoluteY
            | Self::Indirect
            | Self::IndirectBug => 3,
        }
    }
}
