use crate::assets::ShipSprites;
use crate::constants::*;
use crate::host::{HeldKeys, ImageHandle};
use crate::types::{Point, Rect};
use rand::Rng;
use log::debug;

// --- Player ship ---
pub struct Player {
    pub index: usize,
    pub rect: Rect,
    pub speed: i32,
    pub image: ImageHandle,
    pub bullet_image: ImageHandle,
    sprites: [ShipSprites; SHIP_COUNT],
}

impl Player {
    pub fn new(sprites: [ShipSprites; SHIP_COUNT]) -> Self {
        let mut player = Player {
            index: 0,
            rect: Rect::default(),
            speed: PLAYER_SPEED,
            image: sprites[0].ship,
            bullet_image: sprites[0].bullet,
            sprites,
        };
        player.reset(0);
        player
    }

    pub fn spawn_point() -> Point {
        Point::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT - PLAYER_SPAWN_Y_OFFSET)
    }

    /// Switches to ship `index` (clamped to the available ships) and recenters at the spawn point.
    pub fn reset(&mut self, index: usize) {
        self.index = index.min(SHIP_COUNT - 1);
        self.image = self.sprites[self.index].ship;
        self.bullet_image = self.sprites[self.index].bullet;
        self.rect = Rect::from_center(Player::spawn_point(), SHIP_SIZE);
        self.speed = PLAYER_SPEED;
    }

    /// Left and right are checked independently; holding both cancels out away from the edges.
    pub fn move_by(&mut self, keys: &HeldKeys) {
        if keys.left() && self.rect.left() > 0 {
            self.rect.x = (self.rect.x - self.speed).max(0);
        }
        if keys.right() && self.rect.right() < SCREEN_WIDTH {
            self.rect.x = (self.rect.x + self.speed).min(SCREEN_WIDTH - self.rect.w);
        }
    }

    pub fn fire(&self) -> Projectile {
        Projectile::new(self.rect.midtop(), self.bullet_image)
    }
}

// --- Projectile ---
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub image: ImageHandle,
}

impl Projectile {
    pub fn new(midbottom: Point, image: ImageHandle) -> Self {
        Projectile { rect: Rect::from_midbottom(midbottom, BULLET_SIZE), image }
    }

    pub fn update(&mut self) {
        self.rect.y -= BULLET_SPEED;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() < 0
    }
}

// --- Asteroid ---
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub rect: Rect,
    pub frame: usize,
    pub speed: i32,
}

impl Asteroid {
    pub fn new(rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(ASTEROID_SPAWN_MARGIN..=SCREEN_WIDTH - ASTEROID_SPAWN_MARGIN);
        let frame = rng.gen_range(0..ASTEROID_FRAME_COUNT);
        let speed = rng.gen_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED);
        debug!("Asteroid spawned at x: {}, speed: {}, frame: {}", x, speed, frame);
        Asteroid::at(Point::new(x, ASTEROID_SPAWN_Y), frame, speed)
    }

    pub fn at(center: Point, frame: usize, speed: i32) -> Self {
        Asteroid {
            rect: Rect::from_center(center, ASTEROID_SIZE),
            frame: frame % ASTEROID_FRAME_COUNT,
            speed,
        }
    }

    pub fn update(&mut self) {
        self.rect.y += self.speed;
        self.frame = (self.frame + 1) % ASTEROID_FRAME_COUNT;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.top() > SCREEN_HEIGHT
    }
}
