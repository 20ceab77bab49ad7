//! Terminal display adapter
//!
//! Implements `DrawSurface` on a raw-mode alternate screen. Each grid cell
//! is two character columns wide so cells come out roughly square. The
//! painter keeps the previously shown frame and repaints only cells that
//! changed, plus a status line and the terminal title.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    QueueableCommand, cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal,
};

use crate::render::{DrawSurface, Rgb};

/// Character columns per grid cell.
const CELL_WIDTH: u16 = 2;

pub struct TermSurface {
    grid_size: i32,
    stdout: io::Stdout,
    buf: Vec<u8>,
    /// Cell colors drawn for the frame being built, row-major
    frame: Vec<Rgb>,
    /// Cell colors currently on screen; `None` forces a full repaint
    shown: Option<Vec<Rgb>>,
    status: String,
}

impl TermSurface {
    pub fn new(grid_size: i32) -> Self {
        let cells = (grid_size * grid_size) as usize;
        Self {
            grid_size,
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            frame: vec![Rgb::default(); cells],
            shown: None,
            status: String::new(),
        }
    }

    /// Switch the terminal into raw-mode alternate screen with the cursor
    /// hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed partway.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to repaint every cell (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Flush the frame built by `draw_cell` calls: repaint changed cells,
    /// refresh the status line, and mirror it into the terminal title.
    pub fn present(&mut self, status: &str) -> Result<()> {
        let full = self.shown.is_none();

        self.buf.clear();
        if full {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let n = self.grid_size as usize;
        for y in 0..n {
            for x in 0..n {
                let idx = y * n + x;
                let color = self.frame[idx];
                if let Some(prev) = &self.shown {
                    if prev[idx] == color {
                        continue;
                    }
                }
                self.buf
                    .queue(cursor::MoveTo(x as u16 * CELL_WIDTH, y as u16))?;
                self.buf.queue(SetBackgroundColor(to_color(color)))?;
                self.buf.queue(Print("  "))?;
            }
        }

        if full || status != self.status {
            self.buf.queue(ResetColor)?;
            self.buf.queue(cursor::MoveTo(0, self.grid_size as u16))?;
            self.buf
                .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
            self.buf.queue(Print(status))?;
            self.buf.queue(terminal::SetTitle(status))?;
            self.status.clear();
            self.status.push_str(status);
        }

        self.buf.queue(ResetColor)?;
        self.flush_buf()?;

        match &mut self.shown {
            Some(prev) => prev.copy_from_slice(&self.frame),
            None => self.shown = Some(self.frame.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl DrawSurface for TermSurface {
    fn draw_cell(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.grid_size || y >= self.grid_size {
            return;
        }
        let idx = (y * self.grid_size + x) as usize;
        self.frame[idx] = color;
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Terminal I/O itself is not exercised here; these cover the buffering
    // and bounds behavior the painter relies on.

    #[test]
    fn draw_cell_writes_row_major() {
        let mut surface = TermSurface::new(4);
        let red = Rgb::new(255, 0, 0);
        surface.draw_cell(2, 1, red);
        assert_eq!(surface.frame[1 * 4 + 2], red);
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut surface = TermSurface::new(4);
        let before = surface.frame.clone();
        surface.draw_cell(-1, 0, Rgb::new(1, 2, 3));
        surface.draw_cell(0, 4, Rgb::new(1, 2, 3));
        surface.draw_cell(4, 0, Rgb::new(1, 2, 3));
        assert_eq!(surface.frame, before);
    }

    #[test]
    fn invalidate_forces_a_full_repaint() {
        let mut surface = TermSurface::new(4);
        surface.shown = Some(surface.frame.clone());
        surface.invalidate();
        assert!(surface.shown.is_none());
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            to_color(Rgb::new(10, 20, 30)),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
