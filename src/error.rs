use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong loading or running a CHIP-8 program.
///
/// Unrecognised opcodes are deliberately absent: they are logged and skipped.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("could not read ROM {path:?}: {source}")]
    RomRead { path: PathBuf, source: io::Error },

    #[error("ROM is too large (at least {size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("memory access out of bounds at address {address:#06x}")]
    MemoryOutOfBounds { address: usize },

    #[error("no ROM given; pass one with -r/--rom <PATH> or as the last argument")]
    MissingRom,

    #[error(transparent)]
    Io(#[from] io::Error),
}
