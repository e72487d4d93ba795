use std::io::{self, Write};
use std::path::Path;

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use log::info;

use crate::constants::{BLACK, RED, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE};
use crate::host::{Anchor, Font, RectStyle, Rgb};
use crate::types::Rect;

// One terminal cell covers this many playfield pixels.
pub const CELL_WIDTH: i32 = 10;
pub const CELL_HEIGHT: i32 = 20;
pub const GRID_WIDTH: u16 = (SCREEN_WIDTH / CELL_WIDTH) as u16;
pub const GRID_HEIGHT: u16 = (SCREEN_HEIGHT / CELL_HEIGHT) as u16;

const ASTEROID_GLYPHS: [char; 4] = ['@', 'O', '0', 'o'];

// --- Sprites: how a loaded image is drawn on the character grid ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Solid,
    Stars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: char,
    pub fg: Rgb,
    pub pattern: Pattern,
    pub placeholder: bool,
}

impl Sprite {
    /// Picks a glyph from the asset's directory. Missing assets keep their glyph but turn red.
    pub fn for_path(path: &Path, found: bool) -> Self {
        let dir = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|d| d.to_str())
            .unwrap_or_default();
        let (glyph, fg, pattern) = match dir {
            "bg" => ('.', Rgb(90, 90, 140), Pattern::Stars),
            "ships" => ('A', WHITE, Pattern::Solid),
            "projectiles" => ('|', Rgb(120, 220, 255), Pattern::Solid),
            "Asteroids" => (asteroid_glyph(path), Rgb(170, 140, 110), Pattern::Solid),
            _ => ('#', WHITE, Pattern::Solid),
        };
        Sprite { glyph, fg: if found { fg } else { RED }, pattern, placeholder: !found }
    }
}

fn asteroid_glyph(path: &Path) -> char {
    let frame: usize = path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.rsplit('-').next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);
    ASTEROID_GLYPHS[(frame / 30) % ASTEROID_GLYPHS.len()]
}

// --- Canvas: the character grid a frame is composed on ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Cell { ch: ' ', fg: WHITE, bg }
    }
}

/// Cell span `[col0, col1) x [row0, row1)` covered by a pixel rectangle, clipped to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub col0: u16,
    pub col1: u16,
    pub row0: u16,
    pub row1: u16,
}

pub struct Canvas {
    pub grid: Vec<Vec<Cell>>,
    pub width: u16,
    pub height: u16,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas {
            grid: vec![vec![Cell::blank(BLACK); width as usize]; height as usize],
            width,
            height,
        }
    }

    pub fn clear(&mut self, bg: Rgb) {
        self.grid = vec![vec![Cell::blank(bg); self.width as usize]; self.height as usize];
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        self.grid.get(row as usize).and_then(|r| r.get(col as usize))
    }

    pub fn set_char(&mut self, col: i32, row: i32, ch: char, fg: Rgb) {
        if col >= 0 && row >= 0 && col < self.width as i32 && row < self.height as i32 {
            let cell = &mut self.grid[row as usize][col as usize];
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    pub fn span(&self, rect: Rect) -> Option<CellSpan> {
        let col0 = rect.left().div_euclid(CELL_WIDTH).max(0);
        let row0 = rect.top().div_euclid(CELL_HEIGHT).max(0);
        let col1 = (rect.right() + CELL_WIDTH - 1).div_euclid(CELL_WIDTH).min(self.width as i32);
        let row1 = (rect.bottom() + CELL_HEIGHT - 1).div_euclid(CELL_HEIGHT).min(self.height as i32);
        if col0 >= col1 || row0 >= row1 {
            return None;
        }
        Some(CellSpan { col0: col0 as u16, col1: col1 as u16, row0: row0 as u16, row1: row1 as u16 })
    }

    pub fn blit(&mut self, sprite: &Sprite, rect: Rect) {
        let Some(span) = self.span(rect) else { return };
        for row in span.row0..span.row1 {
            for col in span.col0..span.col1 {
                let draw = match sprite.pattern {
                    Pattern::Solid => true,
                    Pattern::Stars => {
                        // Stars are fixed in image space so the tile scrolls with its rect.
                        let image_row = (row as i32 * CELL_HEIGHT - rect.top()).div_euclid(CELL_HEIGHT);
                        (col as i32 * 7 + image_row * 13).rem_euclid(17) == 0
                    }
                };
                if draw {
                    self.set_char(col as i32, row as i32, sprite.glyph, sprite.fg);
                }
            }
        }
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Rgb, style: RectStyle) {
        let Some(span) = self.span(rect) else { return };
        if style.width == 0 {
            for row in span.row0..span.row1 {
                for col in span.col0..span.col1 {
                    self.grid[row as usize][col as usize] = Cell::blank(color);
                }
            }
            return;
        }

        let (h, v, corners) = match (style.width >= 3, style.radius > 0) {
            (true, _) => ('═', '║', ['╔', '╗', '╚', '╝']),
            (false, true) => ('─', '│', ['╭', '╮', '╰', '╯']),
            (false, false) => ('─', '│', ['┌', '┐', '└', '┘']),
        };
        let (left, right) = (span.col0 as i32, span.col1 as i32 - 1);
        let (top, bottom) = (span.row0 as i32, span.row1 as i32 - 1);
        for col in left..=right {
            self.set_char(col, top, h, color);
            self.set_char(col, bottom, h, color);
        }
        for row in top..=bottom {
            self.set_char(left, row, v, color);
            self.set_char(right, row, v, color);
        }
        self.set_char(left, top, corners[0], color);
        self.set_char(right, top, corners[1], color);
        self.set_char(left, bottom, corners[2], color);
        self.set_char(right, bottom, corners[3], color);
    }

    pub fn text(&mut self, text: &str, font: Font, color: Rgb, anchor: Anchor) {
        // Large fonts are letter-spaced so titles stand out on the grid.
        let rendered: String = if font.point_size() >= 60 {
            text.chars().flat_map(|c| [c, ' ']).collect::<String>().trim_end().to_string()
        } else {
            text.to_string()
        };
        let len = rendered.chars().count() as i32;
        let (col, row) = match anchor {
            Anchor::Center(p) => (p.x.div_euclid(CELL_WIDTH) - len / 2, p.y.div_euclid(CELL_HEIGHT)),
            Anchor::TopLeft(p) => (p.x.div_euclid(CELL_WIDTH), p.y.div_euclid(CELL_HEIGHT)),
        };
        for (i, ch) in rendered.chars().enumerate() {
            self.set_char(col + i as i32, row, ch, color);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.iter().map(|cell| cell.ch).collect()).collect()
    }

    pub fn render(&self, stdout: &mut impl Write) -> io::Result<()> {
        for (y, row) in self.grid.iter().enumerate() {
            queue!(stdout, MoveTo(0, y as u16))?;
            let mut current: Option<(Rgb, Rgb)> = None;
            let mut run = String::new();
            for cell in row {
                if current != Some((cell.fg, cell.bg)) {
                    if let Some((fg, bg)) = current {
                        queue!(stdout, SetForegroundColor(color(fg)), SetBackgroundColor(color(bg)), Print(&run))?;
                        run.clear();
                    }
                    current = Some((cell.fg, cell.bg));
                }
                run.push(cell.ch);
            }
            if let Some((fg, bg)) = current {
                queue!(stdout, SetForegroundColor(color(fg)), SetBackgroundColor(color(bg)), Print(&run))?;
            }
        }
        queue!(stdout, ResetColor)?;
        Ok(())
    }
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// --- ScreenBuffer for headless rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<String>,
    pub frames_captured: u64,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        ScreenBuffer { buffer: Vec::new(), frames_captured: 0 }
    }

    pub fn capture(&mut self, canvas: &Canvas) {
        self.buffer = canvas.lines();
        self.frames_captured += 1;
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer (frame {}) ---", self.frames_captured);
        for row in &self.buffer {
            info!("{}", row);
        }
        info!("---------------------");
    }
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        ScreenBuffer::new()
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()), // Ignore in debug mode
        }
    }

    pub fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => {
                canvas.render(s)?;
                s.flush()
            }
            OutputTarget::ScreenBuffer(sb) => {
                sb.capture(canvas);
                Ok(())
            }
        }
    }
}
