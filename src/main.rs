use anyhow::Context;
use clap::Parser;

use chips::clock::{Clock, MonotonicClock};
use chips::config::Args;
use chips::display::MonoTermDisplay;
use chips::input::TermInput;
use chips::interpreter::Chip8Interpreter;
use chips::machine::Machine;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // everything that can fail on setup happens before the terminal is touched
    let path = args.rom_path()?;
    let machine =
        Machine::from_path(path).with_context(|| format!("loading {}", path.display()))?;

    let mut display = MonoTermDisplay::new().context("setting up the terminal display")?;
    let mut input = TermInput::new().context("putting the terminal in raw mode")?;
    let clock = MonotonicClock::new();

    let mut interpreter =
        Chip8Interpreter::new(machine, &mut display, args.step_interval(), clock.now());
    interpreter.main_loop(&mut input, &clock)?;

    // shove a line on stdout to stop the cli messing up the last frame
    println!();
    Ok(())
}
