use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use std::io;
use std::time::Duration;

/// reads host events between interpreter ticks
pub trait Input {
    /// drain pending events, returning true if the user asked to stop
    fn quit_requested(&mut self) -> Result<bool, io::Error>;
}

/// terminal implementation of Input, using crossterm in raw mode.
/// Esc, q and Ctrl-C all stop the program.
pub struct TermInput;

impl TermInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(TermInput)
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Input for TermInput {
    fn quit_requested(&mut self) -> Result<bool, io::Error> {
        let mut quit = false;
        while poll(Duration::from_millis(0))? {
            if let Event::Key(key) = read()? {
                quit |= is_quit_key(key);
            }
        }
        Ok(quit)
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// dummy Input implementation for testing; asks to stop after a fixed number
/// of polls
pub struct DummyInput {
    polls_left: usize,
}

impl DummyInput {
    pub fn new(polls: usize) -> Self {
        DummyInput { polls_left: polls }
    }
}

impl Input for DummyInput {
    fn quit_requested(&mut self) -> Result<bool, io::Error> {
        if self.polls_left == 0 {
            return Ok(true);
        }
        self.polls_left -= 1;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_dummy_input_counts_down() -> Result<(), io::Error> {
        let mut input = DummyInput::new(2);
        assert!(!input.quit_requested()?);
        assert!(!input.quit_requested()?);
        assert!(input.quit_requested()?);
        assert!(input.quit_requested()?);
        Ok(())
    }
}
