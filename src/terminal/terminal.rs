use crate::frame::Line;
use crate::style::Color;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::terminal_event::TerminalEvent;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Raw-mode session on stdout. Dropping it restores the terminal, so an
/// error anywhere in the event loop still leaves the shell usable.
pub struct Terminal {
    stdout: Stdout,
    raw: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw: false,
        }
    }

    /// Raw mode with line wrap off and the cursor hidden.
    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.stdout, terminal::DisableLineWrap, cursor::Hide)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        execute!(self.stdout, cursor::Show, terminal::EnableLineWrap)?;
        terminal::disable_raw_mode()
    }

    pub fn height(&self) -> io::Result<u16> {
        terminal::size().map(|(_, height)| height)
    }

    /// Queries the terminal, so pending output must be flushed first.
    pub fn cursor_row(&self) -> io::Result<u16> {
        cursor::position().map(|(_, row)| row)
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TerminalEvent::Key(key.into()));
                }
                Event::Resize(..) => return Ok(TerminalEvent::Resize),
                _ => {}
            }
        }
    }

    pub fn queue_move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y))
    }

    pub fn queue_show_cursor(&mut self) -> io::Result<()> {
        queue!(self.stdout, cursor::Show)
    }

    pub fn queue_hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.stdout, cursor::Hide)
    }

    pub fn queue_clear_line(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::CurrentLine))
    }

    pub fn queue_clear_down(&mut self) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )
    }

    /// Raw mode does not translate `\n`, so each break returns the carriage too.
    pub fn queue_newlines(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            queue!(self.stdout, Print("\r\n"))?;
        }
        Ok(())
    }

    pub fn queue_line(&mut self, line: &Line) -> io::Result<()> {
        for span in line.spans() {
            let style = span.style();
            if let Some(color) = style.color() {
                queue!(self.stdout, SetForegroundColor(color.into()))?;
            }
            if style.bold() {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if style.reverse() {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(self.stdout, Print(span.text()))?;
            if !style.is_plain() {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Term;
        match color {
            Color::Black => Term::Black,
            Color::DarkGrey => Term::DarkGrey,
            Color::Red => Term::Red,
            Color::Green => Term::Green,
            Color::Yellow => Term::Yellow,
            Color::Blue => Term::Blue,
            Color::Magenta => Term::Magenta,
            Color::Cyan => Term::Cyan,
            Color::White => Term::White,
        }
    }
}

impl From<event::KeyEvent> for KeyEvent {
    fn from(key: event::KeyEvent) -> Self {
        use event::KeyCode as Term;
        let code = match key.code {
            Term::Char(ch) => KeyCode::Char(ch),
            Term::Enter => KeyCode::Enter,
            Term::Tab => KeyCode::Tab,
            Term::BackTab => KeyCode::BackTab,
            Term::Esc => KeyCode::Esc,
            Term::Backspace => KeyCode::Backspace,
            Term::Delete => KeyCode::Delete,
            Term::Home => KeyCode::Home,
            Term::End => KeyCode::End,
            Term::Left => KeyCode::Left,
            Term::Right => KeyCode::Right,
            Term::Up => KeyCode::Up,
            Term::Down => KeyCode::Down,
            _ => KeyCode::Other,
        };

        let mut modifiers = KeyModifiers::NONE;
        for (theirs, ours) in [
            (event::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
            (event::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
            (event::KeyModifiers::ALT, KeyModifiers::ALT),
        ] {
            if key.modifiers.contains(theirs) {
                modifiers |= ours;
            }
        }

        KeyEvent::new(code, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crossterm::event;

    #[test]
    fn crossterm_keys_map_to_local_events() {
        let key = event::KeyEvent::new(
            event::KeyCode::Char('w'),
            event::KeyModifiers::CONTROL | event::KeyModifiers::SHIFT,
        );
        let mapped: KeyEvent = key.into();
        assert_eq!(mapped.code, KeyCode::Char('w'));
        assert!(mapped.modifiers.contains(KeyModifiers::CONTROL));
        assert!(mapped.modifiers.contains(KeyModifiers::SHIFT));
        assert!(!mapped.modifiers.contains(KeyModifiers::ALT));

        let f1 = event::KeyEvent::new(event::KeyCode::F(1), event::KeyModifiers::NONE);
        assert_eq!(KeyEvent::from(f1), KeyEvent::plain(KeyCode::Other));
    }
}
