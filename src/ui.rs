//! Immediate-mode menu widgets plus the fixed layout they are drawn at. Click handling
//! tests against the same layout functions the render pass draws with.

use crate::assets::ShipSprites;
use crate::constants::*;
use crate::host::{Anchor, Font, Host, RectStyle, Rgb};
use crate::types::{Point, Rect};

pub fn draw_text(host: &mut impl Host, text: &str, font: Font, color: Rgb, anchor: Anchor) {
    host.render_text(text, font, color, anchor);
}

pub fn draw_button(host: &mut impl Host, text: &str, center: Point, size: (i32, i32), color: Rgb) -> Rect {
    let rect = Rect::from_center(center, size);
    let hovered = rect.contains_point(host.pointer_position());
    let fill = if hovered { WHITE } else { color };
    let label = if hovered { BLACK } else { WHITE };

    host.draw_rect(rect, fill, RectStyle::filled(BUTTON_RADIUS));
    host.draw_rect(rect, BLACK, RectStyle::outline(BUTTON_OUTLINE, BUTTON_RADIUS));
    draw_text(host, text, Font::Regular, label, Anchor::Center(center));
    rect
}

pub fn start_button_rect() -> Rect {
    Rect::from_center(START_BUTTON_CENTER.into(), START_BUTTON_SIZE)
}

pub fn retry_button_rect() -> Rect {
    Rect::from_center(RETRY_BUTTON_CENTER.into(), GAME_OVER_BUTTON_SIZE)
}

pub fn menu_button_rect() -> Rect {
    Rect::from_center(MENU_BUTTON_CENTER.into(), GAME_OVER_BUTTON_SIZE)
}

pub fn ship_tile_rect(index: usize) -> Rect {
    let x = ship_tile_x(index);
    Rect::new(x - SHIP_TILE_SIZE.0 / 2, SHIP_TILE_TOP, SHIP_TILE_SIZE.0, SHIP_TILE_SIZE.1)
}

fn ship_tile_x(index: usize) -> i32 {
    SHIP_TILE_FIRST_X + index as i32 * SHIP_TILE_SPACING
}

/// Draws one selectable tile per ship and returns their rectangles in ship order.
pub fn draw_ship_tiles(host: &mut impl Host, ships: &[ShipSprites]) -> Vec<Rect> {
    let pointer = host.pointer_position();
    ships
        .iter()
        .enumerate()
        .map(|(i, sprites)| {
            let tile = ship_tile_rect(i);
            let color = if tile.contains_point(pointer) { GOLD } else { BLUE };
            host.draw_rect(tile, color, RectStyle::outline(SHIP_TILE_OUTLINE, SHIP_TILE_RADIUS));

            let preview = Rect::from_center(Point::new(ship_tile_x(i), SHIP_PREVIEW_Y), SHIP_SIZE);
            host.blit_image(sprites.ship, preview);
            tile
        })
        .collect()
}
