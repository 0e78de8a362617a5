use crate::error::Chip8Error;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line options for the terminal CHIP-8 interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, value_name = "PATH", help = "Path to the ROM file to run")]
    rom: Option<PathBuf>,

    #[arg(value_name = "ROM", help = "ROM file, used when --rom is not given")]
    rom_positional: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Milliseconds of host time per instruction"
    )]
    step_ms: u64,
}

impl Args {
    /// `--rom` wins over the positional argument; having neither is an error
    pub fn rom_path(&self) -> Result<&PathBuf, Chip8Error> {
        self.rom
            .as_ref()
            .or(self.rom_positional.as_ref())
            .ok_or(Chip8Error::MissingRom)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }
}
