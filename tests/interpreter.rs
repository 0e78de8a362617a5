use std::time::Duration;

use chips::display::DummyDisplay;
use chips::framebuffer::{Framebuffer, DISPLAY_WIDTH};
use chips::interpreter::{Chip8Interpreter, STEP_INTERVAL};
use chips::machine::Machine;
use chips::memory::CHIP8_ROM_MAX_SIZE;
use chips::Chip8Error;

/// CLS; I = font "0"; V0 = 62; V1 = 30; DRW V0, V1, 5; JP 0x20a
const GLYPH_ROM: [u8; 12] = [
    0x00, 0xe0, 0xa0, 0x50, 0x60, 0x3e, 0x61, 0x1e, 0xd0, 0x15, 0x12, 0x0a,
];

fn run(rom: &[u8], steps: u32, display: &mut DummyDisplay) -> Result<Machine, Chip8Error> {
    let mut rom = rom;
    let machine = Machine::with_program(&mut rom)?;
    let mut interp = Chip8Interpreter::new(machine, display, STEP_INTERVAL, Duration::ZERO);
    interp.tick(STEP_INTERVAL * steps)?;
    Ok(interp.machine)
}

#[test]
fn test_glyph_drawn_across_both_edges() -> Result<(), Chip8Error> {
    let mut display = DummyDisplay::new();
    let machine = run(&GLYPH_ROM, 5, &mut display)?;

    // F0 90 90 90 F0 at (62, 30) wraps into all four corners
    let mut expected = Framebuffer::new();
    expected.draw_sprite(62, 30, &[0xf0, 0x90, 0x90, 0x90, 0xf0]);
    assert_eq!(machine.display, expected);
    assert!(machine.display.get(DISPLAY_WIDTH - 2, 30));
    assert!(machine.display.get(1, 0));
    assert!(machine.display.get(1, 2));
    assert!(!machine.display.get(0, 1));

    assert_eq!(machine.registers[0xf], 0);
    assert_eq!(machine.index_register, 0x50);
    assert_eq!(display.frames_drawn, 2);
    assert_eq!(display.last_frame, Some(expected));
    Ok(())
}

#[test]
fn test_spinning_on_jump_keeps_frame() -> Result<(), Chip8Error> {
    let mut display = DummyDisplay::new();
    let machine = run(&GLYPH_ROM, 50, &mut display)?;
    assert_eq!(machine.program_counter, 0x20a);
    // only CLS and DRW ever change the frame
    assert_eq!(display.frames_drawn, 2);
    Ok(())
}

#[test]
fn test_unknown_words_are_skipped() -> Result<(), Chip8Error> {
    let mut display = DummyDisplay::new();
    // two words from outside the supported set, then LD V2, 0x99
    let machine = run(&[0x22, 0x00, 0xf1, 0x65, 0x62, 0x99], 3, &mut display)?;
    assert_eq!(machine.registers[2], 0x99);
    assert_eq!(machine.program_counter, 0x206);
    assert_eq!(display.frames_drawn, 0);
    Ok(())
}

#[test]
fn test_oversized_rom_rejected_before_running() {
    let rom = vec![0u8; CHIP8_ROM_MAX_SIZE + 2];
    let res = Machine::with_program(&mut rom.as_slice());
    assert!(matches!(res, Err(Chip8Error::RomTooLarge { .. })));
}

#[test]
fn test_running_off_the_end_of_memory() {
    let mut display = DummyDisplay::new();
    // JP 0xffe lands on two zero bytes (skipped); the next fetch is out of range
    let res = run(&[0x1f, 0xfe], 3, &mut display);
    assert!(matches!(
        res,
        Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
    ));
}
