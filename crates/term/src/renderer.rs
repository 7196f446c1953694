//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw from the home position. The map is small and
//! fixed-size, so there is nothing to gain from diffing, and the blocking
//! input read means frames only happen on keystrokes anyway.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Tint};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch the terminal into game mode: raw input, cleared screen,
    /// hidden cursor.
    ///
    /// The screen is cleared once here; per-frame draws only re-home the
    /// cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal for the shell: default colors, visible cursor,
    /// cooked input mode.
    ///
    /// Called unconditionally on the way out of the game loop.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame and flush it before returning.
    ///
    /// The synchronous flush matters: the main loop blocks on input right
    /// after this call, so anything still buffered would never appear.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout,
/// so it can be exercised in tests without a terminal.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_tint = Tint::Default;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if cell.tint != current_tint {
                apply_tint_into(out, cell.tint)?;
                current_tint = cell.tint;
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

fn apply_tint_into(out: &mut Vec<u8>, tint: Tint) -> Result<()> {
    match tint {
        Tint::Default => out.queue(ResetColor)?,
        Tint::Player => out.queue(SetForegroundColor(Color::Cyan))?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn encodes_cells_in_row_order() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, Cell { ch: 'A', tint: Tint::Default });
        fb.set(1, 0, Cell { ch: 'B', tint: Tint::Default });
        fb.set(0, 1, Cell { ch: 'C', tint: Tint::Default });
        fb.set(1, 1, Cell { ch: 'D', tint: Tint::Default });

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("AB\r\nCD"));
    }

    #[test]
    fn player_tint_switches_to_cyan_and_back() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_char(0, 0, '#', Tint::Default);
        fb.put_char(1, 0, '@', Tint::Player);
        fb.put_char(2, 0, '#', Tint::Default);

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Cyan SGR before the marker, reset before the glyph after it.
        let cyan = "\u{1b}[38;5;14m";
        assert!(text.contains(&format!("{cyan}@")), "encoded: {:?}", text);
        let after = text.split('@').nth(1).unwrap();
        assert!(after.contains("\u{1b}[0m"), "encoded: {:?}", text);
    }

    #[test]
    fn frame_starts_from_home_position() {
        let fb = FrameBuffer::new(1, 1);
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\u{1b}[1;1H"), "encoded: {:?}", text);
    }
}
