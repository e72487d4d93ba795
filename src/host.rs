//! The services the game core consumes but does not own: asset decoding, audio
//! playback, input polling, drawing and frame pacing.
//!
//! The game talks to the outside world only through [`Host`]. The binary supplies a
//! terminal implementation (`terminal_io::TerminalHost`); tests supply a recording one.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use crate::constants::{FONT_SIZE_REGULAR, FONT_SIZE_TITLE};
use crate::types::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    MouseDown(Point),
    KeyDown(Key),
}

/// Keys currently held down, sampled once per frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys(HashSet<Key>);

impl HeldKeys {
    pub fn new() -> Self {
        HeldKeys(HashSet::new())
    }

    pub fn press(&mut self, key: Key) {
        self.0.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.0.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0.contains(&key)
    }

    pub fn left(&self) -> bool {
        self.is_held(Key::Left) || self.is_held(Key::A)
    }

    pub fn right(&self) -> bool {
        self.is_held(Key::Right) || self.is_held(Key::D)
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        HeldKeys(iter.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    Regular,
    Title,
}

impl Font {
    pub fn point_size(self) -> u16 {
        match self {
            Font::Regular => FONT_SIZE_REGULAR,
            Font::Title => FONT_SIZE_TITLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Center(Point),
    TopLeft(Point),
}

/// Outline width of zero means a filled rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RectStyle {
    pub width: u16,
    pub radius: u16,
}

impl RectStyle {
    pub fn filled(radius: u16) -> Self {
        RectStyle { width: 0, radius }
    }

    pub fn outline(width: u16, radius: u16) -> Self {
        RectStyle { width, radius }
    }
}

pub trait Host {
    /// Never fails: a missing or unreadable asset yields a placeholder of `size`.
    fn load_image(&mut self, path: &Path, size: (i32, i32)) -> ImageHandle;
    /// Never fails: a missing asset yields a silent clip.
    fn load_sound(&mut self, path: &Path, volume: f32) -> SoundHandle;

    fn play_sound(&mut self, sound: SoundHandle);
    fn play_music_looping(&mut self, path: &Path, volume: f32);
    fn fade_out_music(&mut self, duration_ms: u32);

    /// Drains every pending event in arrival order.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;
    fn pressed_keys(&self) -> HeldKeys;
    fn pointer_position(&self) -> Point;

    fn fill(&mut self, color: Rgb);
    fn blit_image(&mut self, image: ImageHandle, rect: Rect);
    fn draw_rect(&mut self, rect: Rect, color: Rgb, style: RectStyle);
    fn render_text(&mut self, text: &str, font: Font, color: Rgb, anchor: Anchor);
    fn present(&mut self) -> io::Result<()>;
    fn cap_frame_rate(&mut self, fps: u32);
}
