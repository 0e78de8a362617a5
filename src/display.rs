use crate::framebuffer::{Framebuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// Display is used by the interpreter to present the framebuffer. It should
/// abstract the implementation details, so a variety of kinds of screen would
/// work. Every call replaces the whole of the previous frame.
pub trait Display {
    fn draw(&mut self, frame: &Framebuffer) -> Result<(), io::Error>;
}

// store useful metadata about the terminal
struct Resolution(usize, usize);

impl Resolution {
    fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.0 - 1) as f64]
    }

    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * (self.1 - 1) as f64, 0.0]
    }

    /// one terminal cell per CHIP-8 pixel plus the border, clipped to what
    /// the terminal actually has room for
    fn area_within(&self, available: Rect) -> Rect {
        Rect::new(0, 0, 2 + self.0 as u16, 2 + self.1 as u16).intersection(available)
    }

    /// canvas coordinates of every pixel in one bitplane; y grows downwards
    /// on the CHIP-8 but upwards on the canvas
    fn bitplane_from_frame(&self, frame: &Framebuffer, lit: bool) -> Vec<(f64, f64)> {
        frame
            .pixels(lit)
            .map(|(x, y)| (x as f64, -1.0 * y as f64))
            .collect()
    }
}

/// colour of a lit pixel
const FOREGROUND: Color = Color::White;
/// colour of an unlit pixel
const BACKGROUND: Color = Color::Black;

/// monochrome display in a terminal, rendered using TUI and Crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    resolution: Resolution,
}

impl MonoTermDisplay {
    pub fn new() -> Result<MonoTermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        Ok(MonoTermDisplay {
            terminal,
            resolution: Resolution(DISPLAY_WIDTH, DISPLAY_HEIGHT),
        })
    }
}

impl Drop for MonoTermDisplay {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, frame: &Framebuffer) -> Result<(), io::Error> {
        let resolution = &self.resolution;
        let lit = resolution.bitplane_from_frame(frame, true);
        let unlit = resolution.bitplane_from_frame(frame, false);

        self.terminal.draw(|f| {
            let size = resolution.area_within(f.size());

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(BACKGROUND)),
                )
                .x_bounds(resolution.x_bounds())
                .y_bounds(resolution.y_bounds())
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &unlit,
                        color: BACKGROUND,
                    });
                    ctx.draw(&Points {
                        coords: &lit,
                        color: FOREGROUND,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

/// useful for testing non-display routines; remembers what it was asked to show
#[derive(Default)]
pub struct DummyDisplay {
    pub frames_drawn: usize,
    pub last_frame: Option<Framebuffer>,
}

impl DummyDisplay {
    pub fn new() -> DummyDisplay {
        DummyDisplay::default()
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, frame: &Framebuffer) -> Result<(), io::Error> {
        self.frames_drawn += 1;
        self.last_frame = Some(*frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Resolution tests
    #[test]
    fn test_x_bounds() {
        let r = Resolution(64, 32);
        assert_eq!(r.x_bounds(), [0.0, 63.0]);
    }

    #[test]
    fn test_y_bounds() {
        let r = Resolution(64, 32);
        assert_eq!(r.y_bounds(), [-31.0, 0.0]);
    }

    #[test]
    fn test_area_fits_large_terminal() {
        let r = Resolution(64, 32);
        assert_eq!(r.area_within(Rect::new(0, 0, 200, 60)), Rect::new(0, 0, 66, 34));
    }

    #[test]
    fn test_area_clipped_to_small_terminal() {
        let r = Resolution(64, 32);
        assert_eq!(r.area_within(Rect::new(0, 0, 40, 20)), Rect::new(0, 0, 40, 20));
        assert_eq!(r.area_within(Rect::new(0, 0, 80, 24)), Rect::new(0, 0, 66, 24));
    }

    #[test]
    fn test_bitplanes_partition_the_frame() {
        let r = Resolution(64, 32);
        let mut fb = Framebuffer::new();
        fb.toggle(3, 2);
        fb.toggle(63, 31);
        assert_eq!(
            r.bitplane_from_frame(&fb, true),
            vec![(3.0, -2.0), (63.0, -31.0)]
        );
        assert_eq!(r.bitplane_from_frame(&fb, false).len(), 64 * 32 - 2);
    }

    // DummyDisplay tests
    #[test]
    fn test_dummy_records_frames() -> Result<(), io::Error> {
        let mut d = DummyDisplay::new();
        let mut fb = Framebuffer::new();
        d.draw(&fb)?;
        fb.toggle(1, 1);
        d.draw(&fb)?;
        assert_eq!(d.frames_drawn, 2);
        assert_eq!(d.last_frame, Some(fb));
        Ok(())
    }

    // MonoTermDisplay tests
    #[test]
    #[ignore]
    // NB. needs a real terminal to render into
    fn test_draw_blank_frame() -> Result<(), io::Error> {
        let mut d = MonoTermDisplay::new()?;
        d.draw(&Framebuffer::new())
    }
}
