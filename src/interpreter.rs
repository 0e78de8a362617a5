//! # interpreter
//!
//! Fetch, decode and execute over a `Machine`, plus the pacing that turns
//! host time into interpreter steps.
//!
//! The host calls `tick` with the current time as often as it likes (once per
//! frame, say). Each tick runs however many whole step intervals have elapsed
//! since the last step, so a stall is followed by a burst of catch-up steps
//! rather than lost time. After any step that changed the framebuffer the
//! display is redrawn before the next instruction is fetched.
//!
//! Timers run off their own 60 Hz cadence inside the same tick.

use crate::clock::Clock;
use crate::display::Display;
use crate::error::Chip8Error;
use crate::input::Input;
use crate::instruction::{Instruction, Opcode};
use crate::machine::Machine;
use crate::memory::MemoryMap;
use std::time::Duration;

/// time represented by one instruction
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);
/// delay and sound timers count down at 60 Hz
pub const TIMER_INTERVAL: Duration = Duration::from_micros(16667);
/// how long the host loop sleeps between ticks
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Fires once for every whole `interval` elapsed, carrying the remainder over.
pub struct Cadence {
    interval: Duration,
    last_tick: Duration,
}

impl Cadence {
    pub fn new(interval: Duration, start: Duration) -> Self {
        assert!(!interval.is_zero(), "Cadence interval must be non-zero");
        Cadence {
            interval,
            last_tick: start,
        }
    }

    /// true if an interval is due at `now`; advances by exactly one interval
    pub fn tick(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_tick) >= self.interval {
            self.last_tick += self.interval;
            true
        } else {
            false
        }
    }

    pub fn last_tick(&self) -> Duration {
        self.last_tick
    }
}

/// read the instruction word at the program counter and move past it
pub fn fetch(machine: &mut Machine) -> Result<Opcode, Chip8Error> {
    let word = machine.memory.get_word(machine.program_counter)?;
    machine.program_counter = machine.program_counter.wrapping_add(2);
    Ok(Opcode(word))
}

/// apply one decoded instruction. The program counter has already been
/// advanced past it.
pub fn execute(machine: &mut Machine, instruction: Instruction) -> Result<(), Chip8Error> {
    match instruction {
        Instruction::ClearDisplay => {
            machine.display.clear();
            machine.needs_redraw = true;
        }
        Instruction::Jump(addr) => machine.program_counter = addr,
        Instruction::SetConst(x, value) => *machine.register_mut(x) = value,
        // NB. unlike 8XY4, 7XNN never reports a carry
        Instruction::AddConst(x, value) => {
            *machine.register_mut(x) = machine.register(x).wrapping_add(value)
        }
        Instruction::SetIndex(addr) => machine.index_register = addr,
        Instruction::Draw(x, y, n) => {
            let x0 = machine.register(x) as usize;
            let y0 = machine.register(y) as usize;
            let sprite = machine
                .memory
                .get_ro_slice(machine.index_register, n as usize)?;
            let collision = machine.display.draw_sprite(x0, y0, sprite);
            machine.set_flag(collision);
            machine.needs_redraw = true;
        }
        Instruction::Unknown(_) => (),
    }
    Ok(())
}

/// one full fetch/decode/execute cycle
pub fn step(machine: &mut Machine) -> Result<Instruction, Chip8Error> {
    let opcode = fetch(machine)?;
    let instruction = Instruction::decode(opcode);
    match instruction {
        Instruction::Unknown(_) => log::warn!("{:04x}: {}", opcode, instruction),
        _ => log::debug!("{:04x}: {}", opcode, instruction),
    }
    execute(machine, instruction)?;
    Ok(instruction)
}

pub struct Chip8Interpreter<'a> {
    pub machine: Machine,
    display: &'a mut dyn Display,
    step: Cadence,
    timers: Cadence,
}

impl<'a> Chip8Interpreter<'a> {
    /// `start` is the host time the first step interval is measured from
    pub fn new(
        machine: Machine,
        display: &'a mut dyn Display,
        step_interval: Duration,
        start: Duration,
    ) -> Chip8Interpreter<'a> {
        Chip8Interpreter {
            machine,
            display,
            step: Cadence::new(step_interval, start),
            timers: Cadence::new(TIMER_INTERVAL, start),
        }
    }

    /// when the most recent step was due
    pub fn last_step(&self) -> Duration {
        self.step.last_tick()
    }

    /// catch up with the host clock, returning how many instructions ran
    pub fn tick(&mut self, now: Duration) -> Result<usize, Chip8Error> {
        let mut steps = 0;
        while self.step.tick(now) {
            // timers are brought up to the moment this step was due first
            while self.timers.tick(self.step.last_tick()) {
                self.machine.tick_timers();
            }
            step(&mut self.machine)?;
            steps += 1;
            if self.machine.needs_redraw {
                self.display.draw(&self.machine.display)?;
                self.machine.needs_redraw = false;
            }
        }
        while self.timers.tick(now) {
            self.machine.tick_timers();
        }
        Ok(steps)
    }

    /// run until the input asks to stop or the program faults
    pub fn main_loop(
        &mut self,
        input: &mut impl Input,
        clock: &impl Clock,
    ) -> Result<(), Chip8Error> {
        loop {
            if input.quit_requested()? {
                log::info!("stop requested at pc {:#05x}", self.machine.program_counter);
                return Ok(());
            }
            self.tick(clock.now())?;
            spin_sleep::sleep(FRAME_INTERVAL);
        }
    }
}
