use crate::host::Rgb;

// --- Screen ---
pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 700;
pub const WINDOW_TITLE: &str = "Astro Shooter 2: Galaxy War";
pub const TARGET_FPS: u32 = 60;

// --- Colors ---
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const RED: Rgb = Rgb(255, 50, 50);
pub const GREEN: Rgb = Rgb(50, 255, 50);
pub const BLUE: Rgb = Rgb(50, 150, 255);
pub const GOLD: Rgb = Rgb(255, 215, 0);

// --- Fonts ---
pub const FONT_SIZE_REGULAR: u16 = 30;
pub const FONT_SIZE_TITLE: u16 = 70;

// --- Player ---
pub const SHIP_COUNT: usize = 3;
pub const SHIP_SIZE: (i32, i32) = (60, 60);
pub const PLAYER_SPEED: i32 = 8; // px per frame
pub const PLAYER_SPAWN_Y_OFFSET: i32 = 80; // distance of the ship center from the bottom edge

// --- Projectiles ---
pub const BULLET_SIZE: (i32, i32) = (20, 40);
pub const BULLET_SPEED: i32 = 12; // px per frame, upward

// --- Asteroids ---
pub const ASTEROID_SIZE: (i32, i32) = (60, 60);
pub const ASTEROID_FRAME_COUNT: usize = 120;
pub const ASTEROID_MIN_SPEED: i32 = 4;
pub const ASTEROID_MAX_SPEED: i32 = 8;
pub const ASTEROID_SPAWN_MARGIN: i32 = 50;
pub const ASTEROID_SPAWN_Y: i32 = -60;
pub const ASTEROID_SPAWN_INTERVAL: u32 = 25; // spawn once the timer exceeds this many frames

// --- Scoring / pacing ---
pub const SCORE_PER_ASTEROID: u32 = 10;
pub const BACKGROUND_SCROLL_SPEED: i32 = 3;
pub const MUSIC_FADE_MS: u32 = 500;

// --- Audio ---
pub const SHOOT_VOLUME: f32 = 0.3;
pub const EXPLOSION_VOLUME: f32 = 0.5;
pub const MUSIC_VOLUME: f32 = 0.2;

// --- Asset paths (relative to the asset root) ---
pub const MENU_BACKGROUND_PATH: &str = "bg/bg2.png";
pub const GAME_BACKGROUND_PATH: &str = "bg/bg1.jpg";
pub const SHOOT_SOUND_PATH: &str = "sound effect/lasergun.mp3";
pub const EXPLOSION_SOUND_PATH: &str = "sound effect/explod.mp3";
pub const MENU_MUSIC_PATH: &str = "sound effect/bgsound.ogg";
pub const GAME_MUSIC_PATH: &str = "sound effect/bgsound2.mp3";
pub const BULLET_IMAGE_NUMBERS: [u32; SHIP_COUNT] = [1, 6, 11];

// --- Menu layout ---
pub const TITLE_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 200);
pub const START_BUTTON_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 400);
pub const START_BUTTON_SIZE: (i32, i32) = (250, 60);
pub const BUTTON_RADIUS: u16 = 12;
pub const BUTTON_OUTLINE: u16 = 2;

// --- Ship select layout ---
pub const SELECT_HEADING_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 120);
pub const SHIP_TILE_FIRST_X: i32 = 120;
pub const SHIP_TILE_SPACING: i32 = 180;
pub const SHIP_TILE_TOP: i32 = 300;
pub const SHIP_TILE_SIZE: (i32, i32) = (130, 160);
pub const SHIP_TILE_OUTLINE: u16 = 3;
pub const SHIP_TILE_RADIUS: u16 = 15;
pub const SHIP_PREVIEW_Y: i32 = 380;

// --- HUD / game over layout ---
pub const SCORE_TOPLEFT: (i32, i32) = (20, 30);
pub const GAME_OVER_TITLE_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 220);
pub const GAME_OVER_SCORE_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 300);
pub const RETRY_BUTTON_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 400);
pub const MENU_BUTTON_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 480);
pub const GAME_OVER_BUTTON_SIZE: (i32, i32) = (200, 60);
