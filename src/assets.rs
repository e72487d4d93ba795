use std::path::{Path, PathBuf};

use log::info;

use crate::constants::*;
use crate::host::{Host, ImageHandle, SoundHandle};

/// Resolves asset paths relative to a root directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRoot(PathBuf);

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetRoot(root.into())
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.0.join(relative)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipSprites {
    pub ship: ImageHandle,
    pub bullet: ImageHandle,
}

pub fn ship_image_path(index: usize) -> String {
    format!("ships/ship{}.png", index + 1)
}

pub fn bullet_image_path(index: usize) -> String {
    format!("projectiles/Pure_{:02}.png", BULLET_IMAGE_NUMBERS[index])
}

pub fn asteroid_frame_path(frame: usize) -> String {
    format!("Asteroids/Asteroid-A-09-{:03}.png", frame)
}

/// Every image and sound the game uses, loaded once at startup.
pub struct Assets {
    pub root: AssetRoot,
    pub menu_background: ImageHandle,
    pub game_background: ImageHandle,
    pub ships: [ShipSprites; SHIP_COUNT],
    pub asteroid_frames: Vec<ImageHandle>,
    pub shoot: SoundHandle,
    pub explosion: SoundHandle,
    pub menu_music: PathBuf,
    pub game_music: PathBuf,
}

impl Assets {
    pub fn load(host: &mut impl Host, root: AssetRoot) -> Self {
        info!("Loading assets from {}", root.path().display());
        let screen = (SCREEN_WIDTH, SCREEN_HEIGHT);

        let menu_background = host.load_image(&root.resolve(MENU_BACKGROUND_PATH), screen);
        let game_background = host.load_image(&root.resolve(GAME_BACKGROUND_PATH), screen);

        let ships = std::array::from_fn(|i| ShipSprites {
            ship: host.load_image(&root.resolve(&ship_image_path(i)), SHIP_SIZE),
            bullet: host.load_image(&root.resolve(&bullet_image_path(i)), BULLET_SIZE),
        });

        let asteroid_frames = (0..ASTEROID_FRAME_COUNT)
            .map(|frame| host.load_image(&root.resolve(&asteroid_frame_path(frame)), ASTEROID_SIZE))
            .collect();

        let shoot = host.load_sound(&root.resolve(SHOOT_SOUND_PATH), SHOOT_VOLUME);
        let explosion = host.load_sound(&root.resolve(EXPLOSION_SOUND_PATH), EXPLOSION_VOLUME);

        Assets {
            menu_music: root.resolve(MENU_MUSIC_PATH),
            game_music: root.resolve(GAME_MUSIC_PATH),
            root,
            menu_background,
            game_background,
            ships,
            asteroid_frames,
            shoot,
            explosion,
        }
    }

    pub fn asteroid_frame(&self, frame: usize) -> ImageHandle {
        self.asteroid_frames[frame % self.asteroid_frames.len()]
    }
}
