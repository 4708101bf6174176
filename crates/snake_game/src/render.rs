use crate::font::{self, GLYPH_HEIGHT};
use crate::game::{Game, Scene};
use crate::grid::Cell;
use crate::{
    BACKGROUND_COLOR, BODY_COLOR, FIELD_COLOR, FOOD_COLOR, GRID_LINE_COLOR, HEAD_COLOR,
    TEXT_COLOR,
};
use snake_common::Color;

const HUD_TEXT_SCALE: u32 = 4;
const TITLE_TEXT_SCALE: u32 = 12;
const BANNER_TEXT_SCALE: u32 = 10;
const HINT_TEXT_SCALE: u32 = 5;

/// An RGB24 framebuffer with simple clipped drawing primitives.
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 3) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(3) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 3) as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = self.index(x, y);
        Color::new_rgb(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// Clips `(x, y, w, h)` to the frame, returning pixel ranges.
    fn clip(&self, x: i32, y: i32, w: u32, h: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for row in y0..y1 {
            let start = self.index(x0, row);
            let end = self.index(x1, row);
            for px in self.pixels[start..end].chunks_exact_mut(3) {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
        }
    }

    /// Blends the area towards `color` by `amount`.
    pub fn shade_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color, amount: f32) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for row in y0..y1 {
            let start = self.index(x0, row);
            let end = self.index(x1, row);
            for px in self.pixels[start..end].chunks_exact_mut(3) {
                let blended = Color::new_rgb(px[0], px[1], px[2]).lerp(color, amount);
                px[0] = blended.r;
                px[1] = blended.g;
                px[2] = blended.b;
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Color) {
        let mut pen = x;
        for c in text.chars() {
            if let Some(rows) = font::glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (0b100 >> col) != 0 {
                            self.fill_rect(
                                pen + (col * scale) as i32,
                                y + (row as u32 * scale) as i32,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            pen += (font::ADVANCE * scale) as i32;
        }
    }

    pub fn draw_text_centered(&mut self, text: &str, y: i32, scale: u32, color: Color) {
        let x = (self.width as i32 - font::text_width(text, scale) as i32) / 2;
        self.draw_text(text, x, y, scale, color);
    }
}

/// Draws the whole game into `screen`.
///
/// `fps` is shown in the top right corner when given.
pub fn render(game: &Game, fps: Option<u32>, screen: &mut [u8]) {
    let config = game.config();
    let mut frame = Frame::new(screen, config.screen_width, config.screen_height);
    frame.clear(BACKGROUND_COLOR);

    draw_field(&mut frame, game);
    draw_hud(&mut frame, game, fps);

    let (_, oy) = config.field_origin();
    let field = config.field_pixels();
    let middle = (oy + field / 2) as i32;
    match game.scene() {
        Scene::Play => {}
        Scene::Menu => {
            dim_field(&mut frame, game);
            let title_h = (GLYPH_HEIGHT * TITLE_TEXT_SCALE) as i32;
            frame.draw_text_centered("SNAKE", middle - title_h, TITLE_TEXT_SCALE, HEAD_COLOR);
            frame.draw_text_centered("PRESS ENTER", middle + 20, HINT_TEXT_SCALE, TEXT_COLOR);
        }
        Scene::Pause => {
            dim_field(&mut frame, game);
            let banner_h = (GLYPH_HEIGHT * BANNER_TEXT_SCALE) as i32;
            let y = middle - banner_h / 2;
            frame.draw_text_centered("PAUSED", y, BANNER_TEXT_SCALE, HEAD_COLOR);
        }
        Scene::GameOver => {
            dim_field(&mut frame, game);
            let banner_h = (GLYPH_HEIGHT * BANNER_TEXT_SCALE) as i32;
            let y = middle - banner_h;
            frame.draw_text_centered("GAME OVER", y, BANNER_TEXT_SCALE, FOOD_COLOR);
            let score = format!("SCORE: {}", game.score());
            frame.draw_text_centered(&score, middle + 20, HINT_TEXT_SCALE, HEAD_COLOR);
            frame.draw_text_centered("PRESS ENTER", middle + 60, HINT_TEXT_SCALE, TEXT_COLOR);
        }
    }
}

/// Top-left pixel of `cell`.
fn cell_origin(game: &Game, cell: Cell) -> (i32, i32) {
    let config = game.config();
    let (ox, oy) = config.field_origin();
    let size = config.cell_size as i32;
    (ox as i32 + cell.x * size, oy as i32 + cell.y * size)
}

fn fill_cell(frame: &mut Frame, game: &Game, cell: Cell, inset: u32, color: Color) {
    let size = game.config().cell_size;
    let inset = inset.min(size / 2);
    let (x, y) = cell_origin(game, cell);
    frame.fill_rect(
        x + inset as i32,
        y + inset as i32,
        size - inset * 2,
        size - inset * 2,
        color,
    );
}

fn draw_field(frame: &mut Frame, game: &Game) {
    let config = game.config();
    let (ox, oy) = config.field_origin();
    let (ox, oy) = (ox as i32, oy as i32);
    let field = config.field_pixels();
    frame.fill_rect(ox, oy, field, field, FIELD_COLOR);

    for i in 0..=config.grid_size {
        let offset = (i * config.cell_size) as i32;
        frame.fill_rect(ox + offset, oy, 1, field, GRID_LINE_COLOR);
        frame.fill_rect(ox, oy + offset, field, 1, GRID_LINE_COLOR);
    }

    let food = game.food();
    if food.alive {
        fill_cell(frame, game, food.position, 4, FOOD_COLOR);
    }

    // Fade the body towards the tail.
    let segments = game.body().segments();
    let len = segments.len().max(1) as f32;
    for (i, segment) in segments.iter().enumerate() {
        let color = BODY_COLOR.lerp(GRID_LINE_COLOR, i as f32 / len * 0.6);
        fill_cell(frame, game, segment.position, 2, color);
    }

    let head = game.player().position;
    if head.in_bounds(config.grid_size) {
        fill_cell(frame, game, head, 1, HEAD_COLOR);
    }
}

fn draw_hud(frame: &mut Frame, game: &Game, fps: Option<u32>) {
    let (ox, oy) = game.config().field_origin();
    let text_h = GLYPH_HEIGHT * HUD_TEXT_SCALE;
    let y = (oy.saturating_sub(text_h) / 2) as i32;

    let score = format!("SCORE: {}", game.score());
    frame.draw_text(&score, ox as i32, y, HUD_TEXT_SCALE, TEXT_COLOR);

    if let Some(fps) = fps {
        let text = format!("FPS: {fps}");
        let right = (game.config().screen_width - ox) as i32;
        let x = right - font::text_width(&text, HUD_TEXT_SCALE) as i32;
        frame.draw_text(&text, x, y, HUD_TEXT_SCALE, TEXT_COLOR);
    }
}

fn dim_field(frame: &mut Frame, game: &Game) {
    let (ox, oy) = game.config().field_origin();
    let field = game.config().field_pixels();
    frame.shade_rect(ox as i32, oy as i32, field, field, Color::BLACK, 0.55);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::food::Food;

    fn screen(config: &GameConfig) -> Vec<u8> {
        vec![0u8; (config.screen_width * config.screen_height * 3) as usize]
    }

    fn cell_centre(game: &Game, cell: Cell) -> (u32, u32) {
        let (x, y) = cell_origin(game, cell);
        let half = (game.config().cell_size / 2) as i32;
        ((x + half) as u32, (y + half) as u32)
    }

    #[test]
    fn fill_rect_clips_to_frame() {
        let mut pixels = vec![0u8; 4 * 4 * 3];
        let mut frame = Frame::new(&mut pixels, 4, 4);
        frame.fill_rect(-2, 2, 10, 10, Color::WHITE);
        assert_eq!(frame.pixel(0, 1), Color::BLACK);
        assert_eq!(frame.pixel(0, 2), Color::WHITE);
        assert_eq!(frame.pixel(3, 3), Color::WHITE);
        frame.fill_rect(5, 5, 3, 3, Color::RED);
    }

    #[test]
    fn text_lights_glyph_pixels() {
        let mut pixels = vec![0u8; 16 * 8 * 3];
        let mut frame = Frame::new(&mut pixels, 16, 8);
        frame.draw_text("T", 0, 0, 1, Color::WHITE);
        assert_eq!(frame.pixel(0, 0), Color::WHITE);
        assert_eq!(frame.pixel(1, 4), Color::WHITE);
        assert_eq!(frame.pixel(0, 4), Color::BLACK);
    }

    #[test]
    fn play_frame_shows_head_body_and_food() {
        let config = GameConfig::builder().start(Cell::new(5, 5)).build();
        let mut game = Game::with_seed(config.clone(), 9).unwrap();
        game.set_food(Food {
            position: Cell::new(6, 5),
            alive: true,
        });
        game.step();
        game.step();

        let mut pixels = screen(&config);
        render(&game, Some(60), &mut pixels);
        let frame = Frame::new(&mut pixels, config.screen_width, config.screen_height);

        let (hx, hy) = cell_centre(&game, game.player().position);
        assert_eq!(frame.pixel(hx, hy), HEAD_COLOR);
        let (bx, by) = cell_centre(&game, game.body().segments()[0].position);
        assert_eq!(frame.pixel(bx, by), BODY_COLOR);
        assert_eq!(frame.pixel(0, config.screen_height - 1), BACKGROUND_COLOR);
    }

    #[test]
    fn dead_food_is_not_drawn() {
        let config = GameConfig::default();
        let mut game = Game::with_seed(config.clone(), 9).unwrap();
        game.set_food(Food {
            position: Cell::new(2, 2),
            alive: false,
        });
        let mut pixels = screen(&config);
        render(&game, None, &mut pixels);
        let frame = Frame::new(&mut pixels, config.screen_width, config.screen_height);
        let (fx, fy) = cell_centre(&game, Cell::new(2, 2));
        assert_eq!(frame.pixel(fx, fy), FIELD_COLOR);
    }

    #[test]
    fn game_over_dims_the_field() {
        let config = GameConfig::builder().start(Cell::new(19, 10)).build();
        let mut game = Game::with_seed(config.clone(), 9).unwrap();
        game.step();
        assert_eq!(game.scene(), Scene::GameOver);
        let mut pixels = screen(&config);
        render(&game, None, &mut pixels);
        let frame = Frame::new(&mut pixels, config.screen_width, config.screen_height);
        let (ox, oy) = config.field_origin();
        // Just inside a cell, away from the grid lines.
        let dimmed = frame.pixel(ox + 3, oy + 3);
        assert_eq!(dimmed, FIELD_COLOR.lerp(Color::BLACK, 0.55));
    }
}
