use crate::error::Chip8Error;
use std::io::{self, Read};
use std::ops::Range;

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless casting

/// Represents the memory map. Every access is bounds-checked; running off the
/// end of memory is reported, never wrapped.
pub trait MemoryMap {
    /// write a chunk of bytes into "RAM"
    fn write(&mut self, data: &[u8], addr: u16) -> Result<(), Chip8Error> {
        self.get_rw_slice(addr, data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// get a big-endian two-byte word (instruction fetch)
    fn get_word(&self, addr: u16) -> Result<u16, Chip8Error> {
        let word = self.get_ro_slice(addr, 2)?;
        Ok(u16::from_be_bytes([word[0], word[1]]))
    }

    /// get a r/w slice of the underlying memory
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Result<&mut [u8], Chip8Error>;

    /// get a r/o slice of the underlying memory
    fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8], Chip8Error>;
}

/// how much RAM we have
pub const CHIP8_RAM_SIZE_BYTES: usize = 4096;

/// where the program is loaded
pub const CHIP8_PROGRAM_ADDR: u16 = 0x0200;

/// everything from the program address to the top of RAM
pub const CHIP8_ROM_MAX_SIZE: usize = CHIP8_RAM_SIZE_BYTES - CHIP8_PROGRAM_ADDR as usize;

/// Defines the CHIP-8 4K memory map
///   0x0000-0x01ff  interpreter (font at 0x050)
///   0x0200-0x0fff  program
pub struct Chip8MemoryMap {
    bytes: Box<[u8]>,
    pub program_addr: u16,
}

impl MemoryMap for Chip8MemoryMap {
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Result<&mut [u8], Chip8Error> {
        let range = self.range(addr, len)?;
        Ok(&mut self.bytes[range])
    }

    fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8], Chip8Error> {
        let range = self.range(addr, len)?;
        Ok(&self.bytes[range])
    }
}

impl Chip8MemoryMap {
    /// initialises CHIP-8 with contemporary memory contents
    pub fn new() -> Self {
        let mut bytes = Box::new([0u8; CHIP8_RAM_SIZE_BYTES]);
        let font = CHIP8_CONTEMPORARY_FONT_ADDR as usize;
        bytes[font..font + CHIP8_CONTEMPORARY_FONT.len()].copy_from_slice(&CHIP8_CONTEMPORARY_FONT);
        Chip8MemoryMap {
            bytes,
            program_addr: CHIP8_PROGRAM_ADDR,
        }
    }

    /// load a CHIP-8 program at 0x200, refusing anything that won't fit.
    /// Reads at most one byte past the limit, so an endless reader still fails.
    pub fn load_program(&mut self, reader: &mut impl io::Read) -> Result<usize, Chip8Error> {
        let mut buf = Vec::with_capacity(CHIP8_ROM_MAX_SIZE + 1);
        let len = reader
            .take(CHIP8_ROM_MAX_SIZE as u64 + 1)
            .read_to_end(&mut buf)?;
        if len > CHIP8_ROM_MAX_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: len,
                max_size: CHIP8_ROM_MAX_SIZE,
            });
        }
        self.write(&buf, self.program_addr)?;
        Ok(len)
    }

    fn range(&self, addr: u16, len: usize) -> Result<Range<usize>, Chip8Error> {
        let start = addr as usize;
        let end = start + len;
        if end > self.bytes.len() {
            return Err(Chip8Error::MemoryOutOfBounds {
                address: start.max(self.bytes.len()),
            });
        }
        Ok(start..end)
    }
}

impl Default for Chip8MemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

const CHIP8_CONTEMPORARY_FONT_ADDR: u16 = 0x050;
const CHIP8_CONTEMPORARY_FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
