use crate::render::{Rgb, Surface, EMPTY_COLOR, TEXT_COLOR};
use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

const BLANK: Cell = Cell { ch: ' ', fg: TEXT_COLOR, bg: EMPTY_COLOR };

/// Owns the terminal while the game runs. Drawing goes to a back buffer
/// and `present` only sends the cells that differ from what is on screen.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    surface: Coords,
    stdout: Stdout,
    back: Vec<Cell>,
    front: Vec<Option<Cell>>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new(surface: Coords) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let cells = surface.0 as usize * surface.1 as usize;
        Ok(TermManager {
            width,
            height,
            surface,
            stdout: stdout(),
            back: vec![BLANK; cells],
            front: vec![None; cells],
            current_msg: None,
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Everything the terminal reported since the last call.
    pub fn read_events_queue(&self) -> Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            events.push(read()?);
        }

        Ok(events)
    }

    pub fn resize(&mut self, width: TermInt, height: TermInt) {
        self.width = width;
        self.height = height;
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Whether the whole game surface is visible.
    pub fn fits(&self) -> bool {
        self.width >= self.surface.0 && self.height >= self.surface.1
    }

    pub fn show_message(&mut self, text: &str) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let lines = wrap(text, self.width.saturating_sub(2).max(1) as usize);
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        queue!(self.stdout, style::SetForegroundColor(color(TEXT_COLOR)), style::SetBackgroundColor(color(EMPTY_COLOR)))?;

        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            let blank = " ".repeat(msg_width as usize);
            queue!(self.stdout, cursor::MoveTo(top_left.0, *y), style::Print(blank))?;
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(padded_line))?;
        }

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.flush()
    }

    /// Blanks the message box and marks the surface cells it covered as
    /// stale, so the next `present` repaints them.
    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left;

        queue!(self.stdout, style::ResetColor)?;
        for y_diff in 0..msg.height {
            let y = top_left.1 + y_diff;
            let blank = " ".repeat(msg.width as usize);
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(blank))?;

            for x_diff in 0..msg.width {
                if let Some(idx) = self.index(top_left.0 + x_diff, y) {
                    self.front[idx] = None;
                }
            }
        }

        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
        self.front.iter_mut().for_each(|cell| *cell = None);
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    fn index(&self, x: TermInt, y: TermInt) -> Option<usize> {
        if x < self.surface.0 && y < self.surface.1 {
            Some(y as usize * self.surface.0 as usize + x as usize)
        } else {
            None
        }
    }
}

impl Surface for TermManager {
    type Error = crossterm::ErrorKind;

    fn size(&self) -> (u16, u16) {
        self.surface
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb) {
        for py in y..y.saturating_add(height) {
            for px in x..x.saturating_add(width) {
                if let Some(idx) = self.index(px, py) {
                    self.back[idx] = Cell { ch: ' ', fg: TEXT_COLOR, bg: color };
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: u16, y: u16, color: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(idx) = self.index(x.saturating_add(i as u16), y) {
                let bg = self.back[idx].bg;
                self.back[idx] = Cell { ch, fg: color, bg };
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        let width = self.surface.0 as usize;

        for (idx, cell) in self.back.iter().enumerate() {
            if self.front[idx] == Some(*cell) {
                continue;
            }
            let (x, y) = ((idx % width) as TermInt, (idx / width) as TermInt);
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                style::SetForegroundColor(color(cell.fg)),
                style::SetBackgroundColor(color(cell.bg)),
                style::Print(cell.ch)
            )?;
            self.front[idx] = Some(*cell);
        }

        self.flush()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}

/// Greedy word wrap. Words longer than `max` are split.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..max).collect());
        }
        if word.is_empty() {
            continue;
        }

        let len = line.chars().count();
        if len > 0 && len + 1 + word.len() > max {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
