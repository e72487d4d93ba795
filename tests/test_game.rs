mod common;

use astro_shooter::constants::*;
use astro_shooter::entities::{Asteroid, Projectile};
use astro_shooter::game::{FrameOutcome, GameState};
use astro_shooter::host::{InputEvent, Key, RectStyle};
use astro_shooter::types::{Point, Rect};

use common::{new_game, playing_game, RecordingHost};

// ── Startup ───────────────────────────────────────────────────────────────────

#[test]
fn starts_in_menu_with_menu_music() {
    let mut host = RecordingHost::new();
    let game = new_game(&mut host);
    assert_eq!(game.state(), GameState::Menu);
    assert_eq!(host.music.len(), 1);
    assert!(host.music[0].ends_with(MENU_MUSIC_PATH));
}

#[test]
fn loads_every_asset_once() {
    let mut host = RecordingHost::new();
    let game = new_game(&mut host);
    // two backgrounds, three ships, three bullets, 120 asteroid frames
    assert_eq!(host.images.len(), 2 + 3 + 3 + ASTEROID_FRAME_COUNT);
    assert_eq!(host.sounds.len(), 2);
    assert!(host.image_path(game.assets.ships[1].bullet).ends_with("projectiles/Pure_06.png"));
    assert_eq!(host.images[game.assets.game_background.0].1, (SCREEN_WIDTH, SCREEN_HEIGHT));
    assert_eq!(host.sounds[game.assets.shoot.0].1, SHOOT_VOLUME);
}

// ── Menu flow ─────────────────────────────────────────────────────────────────

#[test]
fn click_through_menu_and_ship_select() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);

    game.frame(&mut host).unwrap();
    assert!(host.texts.contains(&"ASTRO SHOOTER 2".to_string()));

    host.click(300, 400);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::ShipSelect);
    assert!(host.texts.contains(&"CHOOSE YOUR SHIP".to_string()));

    host.click(480, 380);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.world.selected_ship, 2);
    assert_eq!(game.world.player.index, 2);
    assert!(host.music.last().unwrap().ends_with(GAME_MUSIC_PATH));
}

#[test]
fn first_frame_click_hits_the_layout_it_renders() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);

    host.click(300, 400);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::ShipSelect);
    assert!(host.texts.contains(&"CHOOSE YOUR SHIP".to_string()));
    assert!(!host.texts.contains(&"START MISSION".to_string()));
}

#[test]
fn each_click_in_a_batch_tests_the_state_current_when_it_arrives() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);

    // (120, 380) is inside the first ship tile but outside the Start button.
    host.queue(vec![InputEvent::MouseDown(Point::new(120, 380)), InputEvent::MouseDown(Point::new(300, 400))]);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::ShipSelect);

    host.queue(vec![InputEvent::MouseDown(Point::new(300, 400)), InputEvent::MouseDown(Point::new(120, 380))]);
    let mut fresh = new_game(&mut host);
    fresh.frame(&mut host).unwrap();
    assert_eq!(fresh.state(), GameState::Playing);
    assert_eq!(fresh.world.selected_ship, 0);
}

#[test]
fn clicks_outside_buttons_do_nothing() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    game.frame(&mut host).unwrap();

    host.click(10, 10);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::Menu);
}

#[test]
fn hovered_button_is_highlighted() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    let start = Rect::from_center(START_BUTTON_CENTER.into(), START_BUTTON_SIZE);

    game.frame(&mut host).unwrap();
    assert!(host.rects.contains(&(start, BLUE, RectStyle::filled(BUTTON_RADIUS))));

    host.clear_frame();
    host.pointer = Point::new(300, 400);
    game.frame(&mut host).unwrap();
    assert!(host.rects.contains(&(start, WHITE, RectStyle::filled(BUTTON_RADIUS))));
    assert!(host.rects.contains(&(start, BLACK, RectStyle::outline(BUTTON_OUTLINE, BUTTON_RADIUS))));
}

#[test]
fn hovered_ship_tile_turns_gold() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    game.start_mission();
    host.pointer = Point::new(120, 350);
    game.frame(&mut host).unwrap();

    let gold: Vec<_> = host.rects.iter().filter(|(_, color, _)| *color == GOLD).collect();
    assert_eq!(gold.len(), 1);
    assert_eq!(gold[0].0, Rect::new(55, 300, 130, 160));
    assert_eq!(host.rects.iter().filter(|(_, color, _)| *color == BLUE).count(), 2);
}

// ── Playing ───────────────────────────────────────────────────────────────────

#[test]
fn first_asteroid_spawns_on_the_26th_update() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    assert_eq!(game.world.spawn_timer, 0);

    for _ in 0..25 {
        game.update_playing(&mut host);
    }
    assert!(game.world.asteroids.is_empty());

    game.update_playing(&mut host);
    assert_eq!(game.world.asteroids.len(), 1);
    assert_eq!(game.world.spawn_timer, 0);
    let asteroid = &game.world.asteroids[0];
    assert_eq!(asteroid.rect.center().y, ASTEROID_SPAWN_Y + asteroid.speed);
}

#[test]
fn fire_key_spawns_one_projectile() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 1);
    let nose = game.world.player.rect.midtop();

    host.queue(vec![InputEvent::KeyDown(Key::Space)]);
    game.frame(&mut host).unwrap();

    assert_eq!(game.world.projectiles.len(), 1);
    let shot = &game.world.projectiles[0];
    // fired at the nose, then advanced once in the same frame
    assert_eq!(shot.rect.midbottom(), Point::new(nose.x, nose.y - BULLET_SPEED));
    assert_eq!(shot.image, game.assets.ships[1].bullet);
    assert_eq!(host.played_count(game.assets.shoot), 1);

    game.update_playing(&mut host);
    assert_eq!(game.world.projectiles[0].rect.midbottom().y, nose.y - 2 * BULLET_SPEED);
}

#[test]
fn fire_key_is_ignored_outside_playing() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    host.queue(vec![InputEvent::KeyDown(Key::Space)]);
    game.frame(&mut host).unwrap();
    assert!(game.world.projectiles.is_empty());
    assert!(host.played.is_empty());
}

#[test]
fn held_keys_move_the_player_each_update() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    host.held.press(Key::Right);
    game.update_playing(&mut host);
    game.update_playing(&mut host);
    assert_eq!(game.world.player.rect.x, 270 + 2 * PLAYER_SPEED);
}

#[test]
fn projectile_and_asteroid_destroy_each_other() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    let bullet = game.world.player.bullet_image;
    game.world.asteroids.push(Asteroid::at(Point::new(300, 300), 0, 4));
    game.world.projectiles.push(Projectile::new(Point::new(300, 340), bullet));

    game.update_playing(&mut host);

    assert!(game.world.asteroids.is_empty());
    assert!(game.world.projectiles.is_empty());
    assert_eq!(game.world.score, SCORE_PER_ASTEROID);
    assert_eq!(host.played_count(game.assets.explosion), 1);
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn first_overlapping_projectile_wins() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    let bullet = game.world.player.bullet_image;
    game.world.asteroids.push(Asteroid::at(Point::new(300, 300), 0, 4));
    game.world.projectiles.push(Projectile::new(Point::new(290, 340), bullet));
    game.world.projectiles.push(Projectile::new(Point::new(310, 340), bullet));

    game.update_playing(&mut host);

    assert!(game.world.asteroids.is_empty());
    assert_eq!(game.world.projectiles.len(), 1);
    assert_eq!(game.world.projectiles[0].rect.midbottom().x, 310);
    assert_eq!(game.world.score, SCORE_PER_ASTEROID);
    assert_eq!(host.played_count(game.assets.explosion), 1);
}

#[test]
fn off_screen_entities_are_culled() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    let bullet = game.world.player.bullet_image;
    game.world.projectiles.push(Projectile::new(Point::new(50, 5), bullet));
    game.world.asteroids.push(Asteroid::at(Point::new(50, 728), 0, 4));

    game.update_playing(&mut host);

    assert!(game.world.projectiles.is_empty());
    assert!(game.world.asteroids.is_empty());
    assert_eq!(game.world.score, 0);
}

#[test]
fn background_scroll_wraps() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    game.world.background_offset = SCREEN_HEIGHT - 4;
    game.update_playing(&mut host);
    assert_eq!(game.world.background_offset, SCREEN_HEIGHT - 1);
    game.update_playing(&mut host);
    assert_eq!(game.world.background_offset, 0);
}

#[test]
fn playing_frame_draws_two_background_tiles_and_score() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    game.frame(&mut host).unwrap();

    let bg = game.assets.game_background;
    let tiles: Vec<_> = host.blits.iter().filter(|(img, _)| *img == bg).map(|(_, r)| r.y).collect();
    assert_eq!(tiles, vec![BACKGROUND_SCROLL_SPEED, BACKGROUND_SCROLL_SPEED - SCREEN_HEIGHT]);
    assert!(host.texts.contains(&"SCORE: 0".to_string()));
}

#[test]
fn score_only_grows_in_steps_of_ten() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    let mut last = 0;
    for frame in 0..3_000 {
        if game.state() != GameState::Playing {
            game.retry(&mut host);
            last = 0;
        }
        if frame % 4 == 0 {
            host.queue(vec![InputEvent::KeyDown(Key::Space)]);
        }
        game.frame(&mut host).unwrap();
        let score = game.world.score;
        if game.state() == GameState::Playing {
            assert!(score >= last);
        }
        assert_eq!(score % SCORE_PER_ASTEROID, 0);
        last = score;
    }
}

// ── Game over ─────────────────────────────────────────────────────────────────

fn crash(host: &mut RecordingHost, ship: usize) -> astro_shooter::game::Game {
    let mut game = playing_game(host, ship);
    let player = game.world.player.rect.center();
    game.world.asteroids.push(Asteroid::at(Point::new(player.x, player.y - 4), 0, 4));
    game.frame(host).unwrap();
    game
}

#[test]
fn asteroid_hitting_the_ship_ends_the_round() {
    let mut host = RecordingHost::new();
    let mut game = crash(&mut host, 0);

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(host.fades, vec![MUSIC_FADE_MS]);
    assert_eq!(host.played_count(game.assets.explosion), 1);
    // the colliding asteroid is kept
    assert_eq!(game.world.asteroids.len(), 1);
    // and the collision frame still shows the playfield
    assert!(host.texts.contains(&"SCORE: 0".to_string()));
    assert!(!host.texts.contains(&"MISSION FAILED".to_string()));

    host.clear_frame();
    game.frame(&mut host).unwrap();
    assert!(host.texts.contains(&"MISSION FAILED".to_string()));
    assert_eq!(game.world.asteroids.len(), 1);
}

#[test]
fn two_asteroids_on_the_ship_resolve_one_hit() {
    let mut host = RecordingHost::new();
    let mut game = playing_game(&mut host, 0);
    let player = game.world.player.rect.center();
    game.world.asteroids.push(Asteroid::at(Point::new(player.x, player.y - 4), 0, 4));
    game.world.asteroids.push(Asteroid::at(Point::new(player.x + 10, player.y - 4), 0, 4));

    game.update_playing(&mut host);

    assert_eq!(host.fades.len(), 1);
    assert_eq!(host.played_count(game.assets.explosion), 1);
    assert_eq!(game.world.asteroids.len(), 2);
}

#[test]
fn retry_keeps_the_selected_ship_and_clears_the_round() {
    let mut host = RecordingHost::new();
    let mut game = crash(&mut host, 2);
    game.world.score = 70;

    host.click(300, 400);
    game.frame(&mut host).unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.world.player.index, 2);
    assert_eq!(game.world.player.rect, Rect::new(270, 590, 60, 60));
    assert!(game.world.asteroids.is_empty());
    assert_eq!(game.world.score, 0);
    assert!(host.music.last().unwrap().ends_with(GAME_MUSIC_PATH));
}

#[test]
fn menu_button_returns_to_menu_music() {
    let mut host = RecordingHost::new();
    let mut game = crash(&mut host, 1);

    host.click(300, 480);
    game.frame(&mut host).unwrap();

    assert_eq!(game.state(), GameState::Menu);
    assert!(host.music.last().unwrap().ends_with(MENU_MUSIC_PATH));
}

#[test]
fn game_over_buttons_respond_before_their_first_render() {
    let mut host = RecordingHost::new();
    let mut game = crash(&mut host, 0);
    assert!(!host.texts.contains(&"RETRY".to_string()));

    host.click(300, 400);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn click_between_game_over_buttons_does_nothing() {
    let mut host = RecordingHost::new();
    let mut game = crash(&mut host, 0);

    host.click(300, 440);
    game.frame(&mut host).unwrap();
    assert_eq!(game.state(), GameState::GameOver);
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[test]
fn quit_event_stops_the_loop() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    host.queue(vec![]);
    host.queue(vec![InputEvent::Quit]);

    game.run(&mut host, None).unwrap();
    assert_eq!(game.world.frame_count, 1);
    assert_eq!(host.presented, 1);
}

#[test]
fn quit_wins_over_later_events_in_the_batch() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    host.queue(vec![InputEvent::Quit, InputEvent::KeyDown(Key::Space)]);
    assert_eq!(game.frame(&mut host).unwrap(), FrameOutcome::Quit);
    assert_eq!(host.presented, 0);
}

#[test]
fn frame_limit_stops_the_loop() {
    let mut host = RecordingHost::new();
    let mut game = new_game(&mut host);
    game.run(&mut host, Some(5)).unwrap();
    assert_eq!(game.world.frame_count, 5);
    assert_eq!(host.presented, 5);
}
