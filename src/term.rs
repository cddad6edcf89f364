use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, poll, read};

use crate::render::{Align, Surface};

const BLANK: (char, Color) = (' ', Color::Reset);

/// Terminal-backed drawing surface. Drawing goes to an in-memory frame which
/// `present` writes out in one go.
pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    screen: Vec<(char, Color)>,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(width, height))
    }

    fn with_size(width: u16, height: u16) -> Self {
        let screen = vec![BLANK; width as usize * height as usize];
        TermManager { width, height, stdout: stdout(), screen }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
    }

    /// Undoes `setup`. Every step is attempted even if an earlier one fails.
    pub fn restore(&mut self) -> io::Result<()> {
        let raw = terminal::disable_raw_mode();
        let screen = execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen);
        raw.and(screen)
    }

    /// Waits up to `timeout` for the next terminal event.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if poll(timeout)? {
            read().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.screen = vec![BLANK; width as usize * height as usize];
    }

    /// The eat sound. Fire and forget.
    pub fn ring_bell(&mut self) -> io::Result<()> {
        queue!(self.stdout, style::Print('\u{7}'))
    }

    pub fn present(&mut self) -> io::Result<()> {
        let mut current = Color::Reset;
        queue!(self.stdout, style::SetForegroundColor(current))?;

        for y in 0..self.height {
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for x in 0..self.width {
                let (ch, color) = self.screen[self.index(x, y)];
                if color != current {
                    queue!(self.stdout, style::SetForegroundColor(color))?;
                    current = color;
                }
                queue!(self.stdout, style::Print(ch))?;
            }
        }

        self.stdout.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, x: u16, y: u16) -> usize {
        self.width as usize * y as usize + x as usize
    }

    fn put(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = self.index(x as u16, y as u16);
        self.screen[i] = (ch, color);
    }
}

impl Surface for TermManager {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.screen.iter_mut().for_each(|cell| *cell = BLANK);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, glyph: char, color: Color) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.put(x + dx, y + dy, glyph, color);
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, align: Align, color: Color) {
        let start = match align {
            Align::Left => x,
            Align::Center => x - text.chars().count() as i32 / 2,
        };

        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i32, y, ch, color);
        }
    }
}
