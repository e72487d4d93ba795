use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, size, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use log::{debug, error, info, warn};

use crate::audio::{Mixer, SoundClip};
use crate::constants::WINDOW_TITLE;
use crate::host::{Anchor, Font, HeldKeys, Host, ImageHandle, InputEvent, Key, RectStyle, Rgb, SoundHandle};
use crate::rendering::{Canvas, OutputTarget, ScreenBuffer, Sprite, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};
use crate::types::{Point, Rect};

/// Without key-release reporting a key counts as held for this many frames after its
/// last press or repeat. Long enough to bridge the OS key-repeat delay at 60 fps.
pub const HOLD_WINDOW: u64 = 30;

/// Headless runs dump the screen buffer to the log this often.
pub const DEBUG_DUMP_INTERVAL: u64 = 30;

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),
        KeyCode::Char(' ') => Some(Key::Space),
        _ => None,
    }
}

/// Maps a terminal cell to the pixel at its center.
pub fn cell_to_point(column: u16, row: u16) -> Point {
    Point::new(
        column as i32 * CELL_WIDTH + CELL_WIDTH / 2,
        row as i32 * CELL_HEIGHT + CELL_HEIGHT / 2,
    )
}

// --- Held key tracking ---
/// Remembers the frame each movement key was last pressed or repeated.
///
/// Terminal input always expires keys after `HOLD_WINDOW` frames; a release event only
/// drops them sooner. Scripted input keeps a key held until the script releases it.
pub struct KeyTracker {
    last_seen: HashMap<Key, u64>,
    window: Option<u64>,
}

impl KeyTracker {
    pub fn windowed() -> Self {
        KeyTracker { last_seen: HashMap::new(), window: Some(HOLD_WINDOW) }
    }

    pub fn scripted() -> Self {
        KeyTracker { last_seen: HashMap::new(), window: None }
    }

    pub fn press(&mut self, key: Key, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn held(&self, frame: u64) -> HeldKeys {
        self.last_seen
            .iter()
            .filter(|&(_, &seen)| self.window.is_none_or(|window| frame.saturating_sub(seen) <= window))
            .map(|(&key, _)| key)
            .collect()
    }
}

// --- SimulatedInput for debugging ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptedInput {
    Event(InputEvent),
    Press(Key),
    Release(Key),
    Pointer(Point),
}

pub struct SimulatedInput {
    events: HashMap<u64, Vec<ScriptedInput>>,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Vec<ScriptedInput>>) -> Self {
        SimulatedInput { events }
    }

    /// Clicks through the menus, picks the middle ship, then strafes and fires.
    pub fn demo() -> Self {
        let click = |x, y| {
            let p = Point::new(x, y);
            vec![ScriptedInput::Pointer(p), ScriptedInput::Event(InputEvent::MouseDown(p))]
        };
        let mut events = HashMap::new();
        events.insert(2, click(300, 400));
        events.insert(4, click(300, 380));
        events.insert(6, vec![ScriptedInput::Press(Key::Right)]);
        events.insert(30, vec![ScriptedInput::Release(Key::Right), ScriptedInput::Press(Key::A)]);
        events.insert(70, vec![ScriptedInput::Release(Key::A)]);
        for frame in (10..600).step_by(15) {
            events.entry(frame).or_insert_with(Vec::new).push(ScriptedInput::Event(InputEvent::KeyDown(Key::Space)));
        }
        SimulatedInput::new(events)
    }

    pub fn poll(&mut self, frame_count: u64) -> Vec<ScriptedInput> {
        self.events.remove(&frame_count).unwrap_or_default()
    }
}

enum InputSource {
    Terminal,
    Simulated(SimulatedInput),
}

// --- Frame pacing ---
pub struct FramePacer {
    last_frame: Instant,
}

impl FramePacer {
    pub fn new() -> Self {
        FramePacer { last_frame: Instant::now() }
    }

    /// Sleeps away whatever is left of the current frame's time slice.
    pub fn wait(&mut self, fps: u32) {
        let budget = Duration::from_secs(1) / fps.max(1);
        let elapsed = self.last_frame.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
        self.last_frame = Instant::now();
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        FramePacer::new()
    }
}

// --- Terminal host ---
pub struct TerminalHost {
    stdout_target: OutputTarget,
    canvas: Canvas,
    input: InputSource,
    keys: KeyTracker,
    pointer: Point,
    sprites: Vec<Sprite>,
    sounds: Vec<SoundClip>,
    mixer: Mixer,
    pacer: FramePacer,
    frame: u64,
    interactive: bool,
    keyboard_enhanced: bool,
}

impl TerminalHost {
    pub fn interactive() -> io::Result<Self> {
        info!("Attempting to enable raw mode.");
        enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
        let mut stdout_target = OutputTarget::Stdout(io::stdout());
        stdout_target.execute_other_command(EnterAlternateScreen)?;
        stdout_target.execute_other_command(Hide)?;
        stdout_target.execute_other_command(EnableMouseCapture)?;
        stdout_target.execute_other_command(SetTitle(WINDOW_TITLE))?;

        // Key-release reporting is only available on terminals speaking the kitty protocol.
        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if keyboard_enhanced {
            stdout_target
                .execute_other_command(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))?;
        }
        info!("Keyboard enhancement: {}", keyboard_enhanced);

        let (width, height) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
        if width < GRID_WIDTH || height < GRID_HEIGHT {
            warn!("Terminal is {}x{}, playfield needs {}x{}", width, height, GRID_WIDTH, GRID_HEIGHT);
        }

        Ok(TerminalHost::build(stdout_target, InputSource::Terminal, true, keyboard_enhanced))
    }

    pub fn headless(script: SimulatedInput) -> Self {
        info!("Running headless with scripted input.");
        TerminalHost::build(OutputTarget::ScreenBuffer(ScreenBuffer::new()), InputSource::Simulated(script), false, false)
    }

    fn build(stdout_target: OutputTarget, input: InputSource, interactive: bool, keyboard_enhanced: bool) -> Self {
        let keys = match input {
            InputSource::Terminal => KeyTracker::windowed(),
            InputSource::Simulated(_) => KeyTracker::scripted(),
        };
        TerminalHost {
            stdout_target,
            canvas: Canvas::new(GRID_WIDTH, GRID_HEIGHT),
            input,
            keys,
            pointer: Point::default(),
            sprites: Vec::new(),
            sounds: Vec::new(),
            mixer: Mixer::new(),
            pacer: FramePacer::new(),
            frame: 0,
            interactive,
            keyboard_enhanced,
        }
    }

    fn translate(&mut self, event: Event, out: &mut Vec<InputEvent>) {
        match event {
            Event::Key(KeyEvent { code, modifiers, kind, .. }) => {
                let quit = matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
                    || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
                if quit && kind == KeyEventKind::Press {
                    out.push(InputEvent::Quit);
                    return;
                }
                let Some(key) = map_key(code) else { return };
                match kind {
                    KeyEventKind::Press => {
                        self.keys.press(key, self.frame);
                        out.push(InputEvent::KeyDown(key));
                    }
                    KeyEventKind::Repeat => self.keys.press(key, self.frame),
                    KeyEventKind::Release => self.keys.release(key),
                }
            }
            Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                self.pointer = cell_to_point(column, row);
                if kind == MouseEventKind::Down(MouseButton::Left) {
                    out.push(InputEvent::MouseDown(self.pointer));
                }
            }
            Event::Resize(width, height) => info!("Terminal resized to {}x{}", width, height),
            _ => {}
        }
    }

    fn apply_script(&mut self, inputs: Vec<ScriptedInput>, out: &mut Vec<InputEvent>) {
        for input in inputs {
            match input {
                ScriptedInput::Event(event) => out.push(event),
                ScriptedInput::Press(key) => self.keys.press(key, self.frame),
                ScriptedInput::Release(key) => self.keys.release(key),
                ScriptedInput::Pointer(point) => self.pointer = point,
            }
        }
    }
}

impl Host for TerminalHost {
    fn load_image(&mut self, path: &Path, size: (i32, i32)) -> ImageHandle {
        let found = path.is_file();
        if found {
            debug!("Loaded image {} as {}x{}", path.display(), size.0, size.1);
        } else {
            warn!("Missing Image: {} | substituting {}x{} placeholder", path.display(), size.0, size.1);
        }
        self.sprites.push(Sprite::for_path(path, found));
        ImageHandle(self.sprites.len() - 1)
    }

    fn load_sound(&mut self, path: &Path, volume: f32) -> SoundHandle {
        let available = path.is_file();
        if !available {
            warn!("Missing Sound: {} | substituting silence", path.display());
        }
        self.sounds.push(SoundClip { path: path.to_path_buf(), volume, available });
        SoundHandle(self.sounds.len() - 1)
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        if let Some(clip) = self.sounds.get(sound.0) {
            self.mixer.play_effect(clip);
        }
    }

    fn play_music_looping(&mut self, path: &Path, volume: f32) {
        self.mixer.play_music(path, volume);
    }

    fn fade_out_music(&mut self, duration_ms: u32) {
        self.mixer.fade_out(Duration::from_millis(duration_ms as u64), Instant::now());
    }

    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        self.frame += 1;
        self.mixer.tick(Instant::now());

        let mut events = Vec::new();
        if let InputSource::Simulated(script) = &mut self.input {
            let inputs = script.poll(self.frame);
            self.apply_script(inputs, &mut events);
            return Ok(events);
        }

        while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            let raw = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?;
            self.translate(raw, &mut events);
        }
        Ok(events)
    }

    fn pressed_keys(&self) -> HeldKeys {
        self.keys.held(self.frame)
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn fill(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn blit_image(&mut self, image: ImageHandle, rect: Rect) {
        if let Some(sprite) = self.sprites.get(image.0) {
            self.canvas.blit(sprite, rect);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb, style: RectStyle) {
        self.canvas.draw_rect(rect, color, style);
    }

    fn render_text(&mut self, text: &str, font: Font, color: Rgb, anchor: Anchor) {
        self.canvas.text(text, font, color, anchor);
    }

    fn present(&mut self) -> io::Result<()> {
        self.stdout_target.draw(&self.canvas).map_err(|e| { error!("Failed to render canvas: {}", e); e })?;
        if let OutputTarget::ScreenBuffer(sb) = &self.stdout_target {
            if sb.frames_captured % DEBUG_DUMP_INTERVAL == 1 {
                sb.print_to_log();
                info!("{}", self.mixer.status(Instant::now()));
            }
        }
        Ok(())
    }

    fn cap_frame_rate(&mut self, fps: u32) {
        if self.interactive {
            self.pacer.wait(fps);
        }
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        if !self.interactive {
            return;
        }
        info!("Restoring terminal.");
        if self.keyboard_enhanced {
            let _ = self.stdout_target.execute_other_command(PopKeyboardEnhancementFlags);
        }
        let restore = self
            .stdout_target
            .execute_other_command(DisableMouseCapture)
            .and_then(|_| self.stdout_target.execute_other_command(Show))
            .and_then(|_| self.stdout_target.execute_other_command(LeaveAlternateScreen))
            .and_then(|_| disable_raw_mode());
        if let Err(e) = restore {
            error!("Failed to restore terminal: {}", e);
        }
    }
}
