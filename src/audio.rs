//! Bookkeeping stand-in for an audio device: tracks which music is playing, its volume
//! and fade, and logs effect playback. Decoding and output are left to a real backend.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, error, info};

#[derive(Clone, Debug, PartialEq)]
pub struct SoundClip {
    pub path: PathBuf,
    pub volume: f32,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct MusicTrack {
    path: PathBuf,
    volume: f32,
    fade: Option<(Instant, Duration)>,
}

#[derive(Debug, Default)]
pub struct Mixer {
    music: Option<MusicTrack>,
    effects_played: u64,
}

impl Mixer {
    pub fn new() -> Self {
        Mixer::default()
    }

    pub fn play_effect(&mut self, clip: &SoundClip) {
        if !clip.available {
            return;
        }
        self.effects_played += 1;
        debug!("Playing {} at volume {:.1}", clip.path.display(), clip.volume);
    }

    /// Replaces the current track. A missing file stops the music instead.
    pub fn play_music(&mut self, path: &Path, volume: f32) {
        if !path.is_file() {
            error!("Music error: {}", path.display());
            self.music = None;
            return;
        }
        info!("Looping music {} at volume {:.1}", path.display(), volume);
        self.music = Some(MusicTrack { path: path.to_path_buf(), volume, fade: None });
    }

    pub fn fade_out(&mut self, duration: Duration, now: Instant) {
        if let Some(track) = &mut self.music {
            debug!("Fading out {} over {:?}", track.path.display(), duration);
            track.fade = Some((now, duration));
        }
    }

    /// Stops the track once its fade has run its course.
    pub fn tick(&mut self, now: Instant) {
        let finished = self
            .music
            .as_ref()
            .and_then(|t| t.fade)
            .is_some_and(|(start, duration)| now.duration_since(start) >= duration);
        if finished {
            self.music = None;
        }
    }

    pub fn current_track(&self) -> Option<&Path> {
        self.music.as_ref().map(|t| t.path.as_path())
    }

    pub fn volume(&self, now: Instant) -> f32 {
        match &self.music {
            None => 0.0,
            Some(MusicTrack { volume, fade: None, .. }) => *volume,
            Some(MusicTrack { volume, fade: Some((start, duration)), .. }) => {
                let elapsed = now.duration_since(*start).as_secs_f32();
                let total = duration.as_secs_f32().max(f32::EPSILON);
                volume * (1.0 - elapsed / total).max(0.0)
            }
        }
    }

    pub fn effects_played(&self) -> u64 {
        self.effects_played
    }

    /// One-line summary for the headless frame dumps.
    pub fn status(&self, now: Instant) -> String {
        match self.current_track() {
            Some(track) => format!(
                "Audio: {} at volume {:.2}, {} effects played",
                track.display(),
                self.volume(now),
                self.effects_played
            ),
            None => format!("Audio: no music, {} effects played", self.effects_played),
        }
    }
}
