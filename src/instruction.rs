use std::fmt;

/// A raw 16-bit instruction word, split into four nibbles numbered 1 (bits
/// 15-12) to 4 (bits 3-0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        let w = self.0;
        (
            ((w & 0xF000) >> 12) as u8,
            ((w & 0x0F00) >> 8) as u8,
            ((w & 0x00F0) >> 4) as u8,
            (w & 0x000F) as u8,
        )
    }

    /// 3rd and 4th nibbles: an 8-bit immediate
    pub fn byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// 2nd, 3rd and 4th nibbles: a 12-bit address
    pub fn address(self) -> u16 {
        self.0 & 0xFFF
    }
}

impl fmt::LowerHex for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// A decoded instruction. Registers are the 0-15 index into V0..VF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 0x_E_: CLS
    ClearDisplay,
    /// 1NNN: JP addr
    Jump(u16),
    /// 6XNN: LD Vx, byte
    SetConst(u8, u8),
    /// 7XNN: ADD Vx, byte (VF untouched)
    AddConst(u8, u8),
    /// ANNN: LD I, addr
    SetIndex(u16),
    /// DXYN: DRW Vx, Vy, n
    Draw(u8, u8, u8),
    /// anything else; executed as a no-op
    Unknown(Opcode),
}

impl Instruction {
    pub fn decode(opcode: Opcode) -> Instruction {
        match opcode.nibbles() {
            // only the 3rd nibble discriminates within 0x0___
            (0x0, _, 0xE, _) => Instruction::ClearDisplay,
            (0x1, _, _, _) => Instruction::Jump(opcode.address()),
            (0x6, x, _, _) => Instruction::SetConst(x, opcode.byte()),
            (0x7, x, _, _) => Instruction::AddConst(x, opcode.byte()),
            (0xA, _, _, _) => Instruction::SetIndex(opcode.address()),
            (0xD, x, y, n) => Instruction::Draw(x, y, n),
            _ => Instruction::Unknown(opcode),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::ClearDisplay => write!(f, "Clear the display"),
            Instruction::Jump(addr) => write!(f, "Jump to address {:x}", addr),
            Instruction::SetConst(x, value) => {
                write!(f, "Set value {:x} to register V{:X}", value, x)
            }
            Instruction::AddConst(x, value) => {
                write!(f, "Add value {:x} to register V{:X}", value, x)
            }
            Instruction::SetIndex(addr) => write!(f, "Set address {:x} to register I", addr),
            Instruction::Draw(x, y, n) => write!(
                f,
                "Display {:x}-byte sprite starting at memory location I at (V{:X}, V{:X})",
                n, x, y
            ),
            Instruction::Unknown(_) => write!(f, "Not an instruction"),
        }
    }
}
