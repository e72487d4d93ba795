use std::io;

use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::{AssetRoot, Assets};
use crate::constants::*;
use crate::entities::{Asteroid, Player, Projectile};
use crate::host::{Anchor, Font, Host, InputEvent, Key};
use crate::types::{Point, Rect, wrap_offset};
use crate::ui::{
    draw_button, draw_ship_tiles, draw_text, menu_button_rect, retry_button_rect, ship_tile_rect, start_button_rect,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    ShipSelect,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// All mutable game state.
pub struct GameWorld {
    pub state: GameState,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    pub score: u32,
    pub spawn_timer: u32,
    pub background_offset: i32,
    pub selected_ship: usize,
    pub frame_count: u64,
}

impl GameWorld {
    fn clear_round(&mut self) {
        self.projectiles.clear();
        self.asteroids.clear();
        self.score = 0;
        self.spawn_timer = 0;
    }
}

pub struct Game {
    pub world: GameWorld,
    pub assets: Assets,
    rng: StdRng,
}

impl Game {
    /// Loads every asset through the host and starts the menu music.
    pub fn new(host: &mut impl Host, root: AssetRoot, seed: Option<u64>) -> Self {
        let assets = Assets::load(host, root);
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = GameWorld {
            state: GameState::Menu,
            player: Player::new(assets.ships),
            projectiles: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            spawn_timer: 0,
            background_offset: 0,
            selected_ship: 0,
            frame_count: 0,
        };
        host.play_music_looping(&assets.menu_music, MUSIC_VOLUME);
        info!("Game initialised in menu state.");
        Game { world, assets, rng }
    }

    pub fn state(&self) -> GameState {
        self.world.state
    }

    /// Runs frames until a quit event arrives or `max_frames` have elapsed.
    pub fn run(&mut self, host: &mut impl Host, max_frames: Option<u64>) -> io::Result<()> {
        info!("Starting game loop.");
        while max_frames.is_none_or(|max| self.world.frame_count < max) {
            if self.frame(host)? == FrameOutcome::Quit {
                info!("Quit requested after {} frames.", self.world.frame_count);
                return Ok(());
            }
        }
        info!("Frame limit reached after {} frames.", self.world.frame_count);
        Ok(())
    }

    /// One pass of input, update and render, then the frame cap.
    pub fn frame(&mut self, host: &mut impl Host) -> io::Result<FrameOutcome> {
        let events = host.poll_events().map_err(|e| { error!("Failed to poll events: {}", e); e })?;
        if self.handle_input(host, &events) == FrameOutcome::Quit {
            return Ok(FrameOutcome::Quit);
        }

        host.fill(BLACK);
        match self.world.state {
            GameState::Menu => self.render_menu(host),
            GameState::ShipSelect => self.render_ship_select(host),
            GameState::Playing => {
                self.update_playing(host);
                self.render_playing(host);
            }
            GameState::GameOver => self.render_game_over(host),
        }

        host.present().map_err(|e| { error!("Failed to present frame: {}", e); e })?;
        host.cap_frame_rate(TARGET_FPS);
        self.world.frame_count += 1;
        Ok(FrameOutcome::Continue)
    }

    fn handle_input(&mut self, host: &mut impl Host, events: &[InputEvent]) -> FrameOutcome {
        for event in events {
            match *event {
                InputEvent::Quit => return FrameOutcome::Quit,
                InputEvent::MouseDown(pos) => self.handle_click(host, pos),
                InputEvent::KeyDown(Key::Space) if self.state() == GameState::Playing => self.fire(host),
                InputEvent::KeyDown(_) => {}
            }
        }
        FrameOutcome::Continue
    }

    /// Tests a click against the layout of the state that is current when it arrives.
    /// The layout is fixed, so this is the same set of rectangles the frame renders.
    fn handle_click(&mut self, host: &mut impl Host, pos: Point) {
        match self.world.state {
            GameState::Menu => {
                if start_button_rect().contains_point(pos) {
                    self.start_mission();
                }
            }
            GameState::ShipSelect => {
                if let Some(index) = (0..SHIP_COUNT).position(|i| ship_tile_rect(i).contains_point(pos)) {
                    self.select_ship(host, index);
                }
            }
            GameState::GameOver => {
                if retry_button_rect().contains_point(pos) {
                    self.retry(host);
                } else if menu_button_rect().contains_point(pos) {
                    self.return_to_menu(host);
                }
            }
            GameState::Playing => {}
        }
    }

    pub fn start_mission(&mut self) {
        info!("Start pressed. Entering ship selection.");
        self.world.state = GameState::ShipSelect;
    }

    pub fn select_ship(&mut self, host: &mut impl Host, index: usize) {
        self.world.selected_ship = index.min(SHIP_COUNT - 1);
        info!("Ship {} selected.", self.world.selected_ship);
        self.enter_playing(host);
    }

    pub fn retry(&mut self, host: &mut impl Host) {
        info!("Retrying with ship {}.", self.world.selected_ship);
        self.enter_playing(host);
    }

    pub fn return_to_menu(&mut self, host: &mut impl Host) {
        info!("Returning to menu.");
        self.world.state = GameState::Menu;
        host.play_music_looping(&self.assets.menu_music, MUSIC_VOLUME);
    }

    fn enter_playing(&mut self, host: &mut impl Host) {
        self.world.player.reset(self.world.selected_ship);
        self.world.clear_round();
        self.world.state = GameState::Playing;
        host.play_music_looping(&self.assets.game_music, MUSIC_VOLUME);
    }

    fn fire(&mut self, host: &mut impl Host) {
        self.world.projectiles.push(self.world.player.fire());
        host.play_sound(self.assets.shoot);
        debug!("Projectile fired. Live projectiles: {}", self.world.projectiles.len());
    }

    /// Advances one Playing frame. The order of the steps is part of the game's timing.
    pub fn update_playing(&mut self, host: &mut impl Host) {
        let world = &mut self.world;

        world.background_offset = wrap_offset(world.background_offset + BACKGROUND_SCROLL_SPEED, SCREEN_HEIGHT);

        world.player.move_by(&host.pressed_keys());

        world.projectiles.retain_mut(|projectile| {
            projectile.update();
            !projectile.is_off_screen()
        });

        world.spawn_timer += 1;
        if world.spawn_timer > ASTEROID_SPAWN_INTERVAL {
            world.asteroids.push(Asteroid::new(&mut self.rng));
            world.spawn_timer = 0;
        }

        let explosion = self.assets.explosion;
        let player_rect = world.player.rect;
        let projectiles = &mut world.projectiles;
        let score = &mut world.score;
        let mut player_hit = false;

        world.asteroids.retain_mut(|asteroid| {
            asteroid.update();

            if let Some(hit) = projectiles.iter().position(|p| asteroid.rect.intersects(&p.rect)) {
                host.play_sound(explosion);
                projectiles.remove(hit);
                *score += SCORE_PER_ASTEROID;
                debug!("Asteroid destroyed. Score: {}", score);
                return false;
            }

            if !player_hit && asteroid.rect.intersects(&player_rect) {
                host.play_sound(explosion);
                host.fade_out_music(MUSIC_FADE_MS);
                player_hit = true;
            }

            !asteroid.is_off_screen()
        });

        if player_hit {
            info!("Ship destroyed. Final score: {}", world.score);
            world.state = GameState::GameOver;
        }
    }

    fn render_menu(&self, host: &mut impl Host) {
        host.blit_image(self.assets.menu_background, full_screen());
        draw_text(host, "ASTRO SHOOTER 2", Font::Title, GOLD, Anchor::Center(TITLE_CENTER.into()));
        draw_button(host, "START MISSION", START_BUTTON_CENTER.into(), START_BUTTON_SIZE, BLUE);
    }

    fn render_ship_select(&self, host: &mut impl Host) {
        host.blit_image(self.assets.menu_background, full_screen());
        draw_text(host, "CHOOSE YOUR SHIP", Font::Regular, WHITE, Anchor::Center(SELECT_HEADING_CENTER.into()));
        draw_ship_tiles(host, &self.assets.ships);
    }

    fn render_playing(&self, host: &mut impl Host) {
        let world = &self.world;
        let offset = world.background_offset;
        host.blit_image(self.assets.game_background, Rect::new(0, offset, SCREEN_WIDTH, SCREEN_HEIGHT));
        host.blit_image(self.assets.game_background, Rect::new(0, offset - SCREEN_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT));

        host.blit_image(world.player.image, world.player.rect);
        for projectile in &world.projectiles {
            host.blit_image(projectile.image, projectile.rect);
        }
        for asteroid in &world.asteroids {
            host.blit_image(self.assets.asteroid_frame(asteroid.frame), asteroid.rect);
        }

        let score = format!("SCORE: {}", world.score);
        draw_text(host, &score, Font::Regular, WHITE, Anchor::TopLeft(SCORE_TOPLEFT.into()));
    }

    fn render_game_over(&self, host: &mut impl Host) {
        draw_text(host, "MISSION FAILED", Font::Title, RED, Anchor::Center(GAME_OVER_TITLE_CENTER.into()));
        let score = format!("SCORE: {}", self.world.score);
        draw_text(host, &score, Font::Regular, WHITE, Anchor::Center(GAME_OVER_SCORE_CENTER.into()));
        draw_button(host, "RETRY", RETRY_BUTTON_CENTER.into(), GAME_OVER_BUTTON_SIZE, GREEN);
        draw_button(host, "MENU", MENU_BUTTON_CENTER.into(), GAME_OVER_BUTTON_SIZE, BLUE);
    }
}

fn full_screen() -> Rect {
    Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
}
