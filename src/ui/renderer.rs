use crate::frame::{Frame, Line};
use crate::terminal::Terminal;
use std::io;

struct RenderRegion {
    start_row: u16,
    line_count: usize,
}

/// Draws frames inline below the shell prompt, reusing the rows of the
/// previous frame.
pub struct Renderer {
    region: Option<RenderRegion>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { region: None }
    }

    pub fn render(&mut self, frame: &Frame, terminal: &mut Terminal) -> io::Result<()> {
        let lines = frame.lines();

        let previous_len = self.region.as_ref().map(|r| r.line_count).unwrap_or(0);
        let start = self.ensure_region(terminal, lines.len())?;

        terminal.queue_hide_cursor()?;
        for (idx, line) in lines.iter().enumerate() {
            Self::draw_line_at(terminal, start + idx as u16, line)?;
        }
        for idx in lines.len()..previous_len {
            terminal.queue_move_cursor(0, start + idx as u16)?;
            terminal.queue_clear_line()?;
        }

        if let Some((col, row)) = frame.cursor() {
            terminal.queue_move_cursor(col as u16, start + row as u16)?;
            terminal.queue_show_cursor()?;
        }

        terminal.flush()
    }

    /// Leaves the cursor on a fresh row below the last frame and clears
    /// anything under it.
    pub fn move_to_end(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        if let Some(region) = self.region.take() {
            let row = last_row(region.start_row, region.line_count, terminal.height()?);
            terminal.queue_move_cursor(0, row)?;
            terminal.queue_newlines(1)?;
            terminal.queue_clear_down()?;
            terminal.flush()?;
        }
        Ok(())
    }

    fn ensure_region(&mut self, terminal: &mut Terminal, line_count: usize) -> io::Result<u16> {
        if let Some(region) = &mut self.region {
            if line_count > region.line_count {
                let extra = line_count - region.line_count;
                let end_row = region.start_row + region.line_count as u16;
                terminal.queue_move_cursor(0, end_row.saturating_sub(1))?;
                terminal.queue_newlines(extra)?;
                terminal.flush()?;

                // Scrolling at the bottom edge pushes the block up.
                let bottom = terminal.cursor_row()?;
                region.start_row = bottom.saturating_sub(line_count.saturating_sub(1) as u16);
            }
            region.line_count = line_count;
            return Ok(region.start_row);
        }

        let row = terminal.cursor_row()?;
        terminal.queue_move_cursor(0, row)?;
        terminal.queue_newlines(line_count)?;
        terminal.flush()?;

        let start = terminal.cursor_row()?.saturating_sub(line_count as u16);
        self.region = Some(RenderRegion {
            start_row: start,
            line_count,
        });

        Ok(start)
    }

    fn draw_line_at(terminal: &mut Terminal, row: u16, line: &Line) -> io::Result<()> {
        terminal.queue_move_cursor(0, row)?;
        terminal.queue_clear_line()?;
        terminal.queue_line(line)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Row of the last drawn line, kept on screen when the block was pushed
/// against the bottom edge.
fn last_row(start_row: u16, line_count: usize, height: u16) -> u16 {
    let span = (line_count as u16).saturating_sub(1);
    start_row.saturating_add(span).min(height.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::last_row;

    #[test]
    fn last_row_is_inside_the_drawn_block() {
        assert_eq!(last_row(3, 4, 40), 6);
        assert_eq!(last_row(3, 1, 40), 3);
        assert_eq!(last_row(0, 0, 40), 0);
    }

    #[test]
    fn last_row_is_clamped_to_the_screen() {
        assert_eq!(last_row(20, 6, 24), 23);
        assert_eq!(last_row(u16::MAX - 1, 5, 24), 23);
        assert_eq!(last_row(0, 3, 0), 0);
    }
}
