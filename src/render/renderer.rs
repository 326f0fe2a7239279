use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::game::{cell_origin, GameState, Position, CELL_COUNT, CELL_SIZE, GRID_OFFSET};
use crate::metrics::SessionStats;

/// Light green playfield background
const FIELD_GREEN: Color = Color::new(173.0 / 255.0, 204.0 / 255.0, 96.0 / 255.0, 1.0);
/// Dark green used for the snake, the frame and all text
const DARK_GREEN: Color = Color::new(43.0 / 255.0, 51.0 / 255.0, 24.0 / 255.0, 1.0);

pub struct Renderer {
    food_texture: Texture2D,
}

impl Renderer {
    pub fn new() -> Self {
        let food_texture = Texture2D::from_image(&food_image());
        food_texture.set_filter(FilterMode::Nearest);

        Self { food_texture }
    }

    /// Draw one full frame: background, frame, HUD, food, snake
    pub fn draw(&self, state: &GameState, stats: &SessionStats) {
        clear_background(FIELD_GREEN);

        self.draw_frame();
        self.draw_hud(state.score, stats.high_score);
        self.draw_food(state.food.position);
        self.draw_snake(state.snake.body());
    }

    fn draw_frame(&self) {
        let corner = (GRID_OFFSET - 5) as f32;
        let side = (CELL_SIZE * CELL_COUNT + 10) as f32;
        draw_rectangle_lines(corner, corner, side, side, 5.0, DARK_GREEN);
    }

    fn draw_hud(&self, score: u32, high_score: u32) {
        // draw_text takes the baseline, not the top of the line
        draw_text("Snake Game", 70.0, 57.0, 40.0, DARK_GREEN);
        draw_text("Press Esc to exit", 70.0, 735.0, 40.0, DARK_GREEN);
        draw_text(&format!("Score: {}", score), 550.0, 60.0, 40.0, DARK_GREEN);
        draw_text(&format!("Best: {}", high_score), 550.0, 735.0, 40.0, DARK_GREEN);
    }

    fn draw_food(&self, position: Position) {
        let (x, y) = cell_origin(position);
        draw_texture(&self.food_texture, x, y, WHITE);
    }

    fn draw_snake(&self, body: &VecDeque<Position>) {
        for &segment in body {
            let (x, y) = cell_origin(segment);
            draw_rounded_rectangle(
                x,
                y,
                CELL_SIZE as f32,
                CELL_SIZE as f32,
                CELL_SIZE as f32 * 0.25,
                DARK_GREEN,
            );
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded rectangle built from two rects and four corner circles;
/// macroquad has no rounded primitive of its own.
fn draw_rounded_rectangle(x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
    draw_rectangle(x + radius, y, w - 2.0 * radius, h, color);
    draw_rectangle(x, y + radius, w, h - 2.0 * radius, color);
    draw_circle(x + radius, y + radius, radius, color);
    draw_circle(x + w - radius, y + radius, radius, color);
    draw_circle(x + radius, y + h - radius, radius, color);
    draw_circle(x + w - radius, y + h - radius, radius, color);
}

/// Paint the food sprite pixel by pixel: a red apple with a stem,
/// drawn on a transparent cell-sized canvas.
fn food_image() -> Image {
    let apple_red = Color::from_rgba(230, 41, 55, 255);
    let stem_brown = Color::from_rgba(101, 67, 33, 255);

    let mut image = Image::gen_image_color(CELL_SIZE as u16, CELL_SIZE as u16, BLANK);

    let (center_x, center_y) = (12.0, 14.0);
    let radius = 9.0;
    for y in 0..CELL_SIZE as u32 {
        for x in 0..CELL_SIZE as u32 {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            if dx * dx + dy * dy <= radius * radius {
                image.set_pixel(x, y, apple_red);
            }
        }
    }

    for y in 2..=5 {
        for x in 11..=13 {
            image.set_pixel(x, y, stem_brown);
        }
    }

    image
}
