#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use astro_shooter::assets::AssetRoot;
use astro_shooter::game::Game;
use astro_shooter::host::*;
use astro_shooter::types::{Point, Rect};

/// Host double that records every call the game makes.
#[derive(Default)]
pub struct RecordingHost {
    pub images: Vec<(PathBuf, (i32, i32))>,
    pub sounds: Vec<(PathBuf, f32)>,
    pub played: Vec<SoundHandle>,
    pub music: Vec<PathBuf>,
    pub fades: Vec<u32>,
    pub pending: VecDeque<Vec<InputEvent>>,
    pub held: HeldKeys,
    pub pointer: Point,
    pub texts: Vec<String>,
    pub blits: Vec<(ImageHandle, Rect)>,
    pub rects: Vec<(Rect, Rgb, RectStyle)>,
    pub presented: u64,
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost::default()
    }

    pub fn queue(&mut self, events: Vec<InputEvent>) {
        self.pending.push_back(events);
    }

    pub fn click(&mut self, x: i32, y: i32) {
        self.queue(vec![InputEvent::MouseDown(Point::new(x, y))]);
    }

    pub fn played_count(&self, sound: SoundHandle) -> usize {
        self.played.iter().filter(|&&s| s == sound).count()
    }

    pub fn image_path(&self, image: ImageHandle) -> &Path {
        &self.images[image.0].0
    }

    /// Forgets what was drawn so far, keeping loaded assets.
    pub fn clear_frame(&mut self) {
        self.texts.clear();
        self.blits.clear();
        self.rects.clear();
    }
}

impl Host for RecordingHost {
    fn load_image(&mut self, path: &Path, size: (i32, i32)) -> ImageHandle {
        self.images.push((path.to_path_buf(), size));
        ImageHandle(self.images.len() - 1)
    }

    fn load_sound(&mut self, path: &Path, volume: f32) -> SoundHandle {
        self.sounds.push((path.to_path_buf(), volume));
        SoundHandle(self.sounds.len() - 1)
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        self.played.push(sound);
    }

    fn play_music_looping(&mut self, path: &Path, _volume: f32) {
        self.music.push(path.to_path_buf());
    }

    fn fade_out_music(&mut self, duration_ms: u32) {
        self.fades.push(duration_ms);
    }

    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    fn pressed_keys(&self) -> HeldKeys {
        self.held.clone()
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn fill(&mut self, _color: Rgb) {}

    fn blit_image(&mut self, image: ImageHandle, rect: Rect) {
        self.blits.push((image, rect));
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb, style: RectStyle) {
        self.rects.push((rect, color, style));
    }

    fn render_text(&mut self, text: &str, _font: Font, _color: Rgb, _anchor: Anchor) {
        self.texts.push(text.to_string());
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }

    fn cap_frame_rate(&mut self, _fps: u32) {}
}

pub fn new_game(host: &mut RecordingHost) -> Game {
    Game::new(host, AssetRoot::new("assets"), Some(42))
}

/// Puts a fresh game straight into Playing with the given ship, without running a frame.
pub fn playing_game(host: &mut RecordingHost, ship: usize) -> Game {
    let mut game = new_game(host);
    game.start_mission();
    game.select_ship(host, ship);
    game
}
