use crate::error::Chip8Error;
use crate::framebuffer::Framebuffer;
use crate::memory::Chip8MemoryMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// index of VF, the register that doubles as the flags register
pub const FLAG_REGISTER: u8 = 0xF;

/// The complete state of one CHIP-8 machine. It holds no behaviour of its own
/// beyond small accessors; the interpreter mutates it one instruction at a time.
pub struct Machine {
    pub memory: Chip8MemoryMap,
    pub program_counter: u16,
    pub index_register: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub display: Framebuffer,
    pub registers: [u8; 16],
    /// set when the last instruction changed `display`; cleared by whoever
    /// presents the frame
    pub needs_redraw: bool,
}

impl Machine {
    pub fn new() -> Self {
        let memory = Chip8MemoryMap::new();
        Machine {
            program_counter: memory.program_addr,
            memory,
            index_register: 0,
            delay_timer: 0,
            sound_timer: 0,
            display: Framebuffer::new(),
            registers: [0; 16],
            needs_redraw: false,
        }
    }

    /// build a machine with a ROM image loaded at the program address
    pub fn with_program(reader: &mut impl io::Read) -> Result<Self, Chip8Error> {
        let mut machine = Machine::new();
        let len = machine.memory.load_program(reader)?;
        log::info!("loaded {} byte program at {:#05x}", len, machine.program_counter);
        Ok(machine)
    }

    /// open a ROM file and load it; any failure here is fatal to the caller
    pub fn from_path(path: &Path) -> Result<Self, Chip8Error> {
        let mut f = File::open(path).map_err(|source| Chip8Error::RomRead {
            path: path.to_path_buf(),
            source,
        })?;
        Machine::with_program(&mut f)
    }

    pub fn register(&self, register_index: u8) -> u8 {
        self.registers[register_index as usize & 0xF]
    }

    pub fn register_mut(&mut self, register_index: u8) -> &mut u8 {
        &mut self.registers[register_index as usize & 0xF]
    }

    pub fn set_flag(&mut self, flag: bool) {
        *self.register_mut(FLAG_REGISTER) = flag as u8;
    }

    /// one 60 Hz tick of the delay and sound timers
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
