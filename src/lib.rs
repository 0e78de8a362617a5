//!
//! ## Design
//!
//! * one `Machine` value holds all CHIP-8 state; nothing is global, so tests
//!   can build as many as they like
//! * the interpreter is driven by the host: it never blocks or spawns, it just
//!   runs as many instructions as the elapsed time pays for
//! * abstract display, input and clock so can plug alternatives; the binary
//!   uses a TUI canvas in-console
//! * only a subset of the instruction set: CLS, JP, LD Vx, ADD Vx, LD I, DRW.
//!   Everything else is logged and skipped
//!
//! Model
//!
//! ```text
//! main
//!  |-- config (rom path, step interval)
//!  |-- machine(memory <- rom)
//!  |-- display, input, clock
//!  `-- interpreter(machine, display).main_loop(input, clock)
//!       |-- input.quit_requested()?  -> stop
//!       |-- tick(clock.now())
//!       |    |-- while a step is due: fetch, decode, execute, redraw if needed
//!       |    `-- while a 60 Hz period is due: count the timers down
//!       `-- sleep(FRAME_INTERVAL)
//! ```
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod machine;
pub mod memory;

pub use error::Chip8Error;
