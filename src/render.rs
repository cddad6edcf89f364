use std::f32::consts::TAU;

use crossterm::style::Color;

use crate::grid::Cell;
use crate::snake::Snake;

const START_COLOR: (u8, u8, u8) = (0, 255, 0);
const END_COLOR: (u8, u8, u8) = (255, 255, 0);
const TEXT_COLOR: Color = Color::White;
const FOOD_COLOR: Color = Color::Red;

/// How far the colour cycle moves per simulated tick, as a fraction of a full cycle
pub const COLOR_TRANSITION_SPEED: f32 = 0.05;
/// Segment wobble, as a fraction of the cell size
const WAVE_AMPLITUDE: f32 = 0.25;
const WAVE_FREQUENCY: f32 = 0.1;

/// Rows at the bottom of the surface kept for the score line, outside the play area
pub const SCORE_ROWS: u16 = 1;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '●';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A rectangular pixel area that can be drawn on in immediate mode.
/// Anything drawn outside of `size()` is clipped.
pub trait Surface {
    fn size(&self) -> (u16, u16);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, glyph: char, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, align: Align, color: Color);
}

/// Everything needed to draw a live (or frozen) game.
pub struct Scene<'a> {
    pub snake: &'a Snake,
    pub food: Cell,
    pub score: u32,
    pub color_progress: f32,
    pub cell_size: u16,
    pub debug_overlay: bool,
}

pub fn interpolate_color(start: (u8, u8, u8), end: (u8, u8, u8), factor: f32) -> Color {
    let lerp = |a: u8, b: u8| (a as f32 + factor * (b as f32 - a as f32)).round() as u8;
    Color::Rgb { r: lerp(start.0, end.0), g: lerp(start.1, end.1), b: lerp(start.2, end.2) }
}

/// Pixel offset of the `index`-th segment for the current animation phase.
pub fn segment_offset(index: usize, color_progress: f32, cell_size: u16) -> (i32, i32) {
    let amplitude = WAVE_AMPLITUDE * cell_size as f32;
    let phase = WAVE_FREQUENCY * index as f32 + color_progress * TAU;
    ((amplitude * phase.sin()).round() as i32, (amplitude * phase.cos()).round() as i32)
}

pub fn draw_start_screen<S: Surface>(surface: &mut S) {
    surface.clear();
    let (width, height) = surface.size();
    let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);

    surface.draw_text(cx, cy, "Press any key to start", Align::Center, TEXT_COLOR);
    surface.draw_text(cx, cy + 2, "Arrow keys or WASD to move", Align::Center, Color::Grey);
    surface.draw_text(cx, cy + 3, "Esc to pause, Ctrl+C to quit", Align::Center, Color::Grey);
}

pub fn draw_game_over_screen<S: Surface>(surface: &mut S, score: u32) {
    surface.clear();
    let (width, height) = surface.size();
    let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);

    surface.draw_text(cx, cy - 1, &format!("Game Over! Final Score: {}", score), Align::Center, TEXT_COLOR);
    surface.draw_text(cx, cy + 1, "Press any key to restart", Align::Center, TEXT_COLOR);
}

pub fn draw_paused_screen<S: Surface>(surface: &mut S, scene: &Scene) {
    draw_scene(surface, scene);
    let (width, height) = surface.size();
    let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);

    surface.draw_text(cx, cy, "Paused", Align::Center, TEXT_COLOR);
    surface.draw_text(cx, cy + 1, "Press Esc to resume", Align::Center, TEXT_COLOR);
}

/// Text goes down first so food and snake are never hidden behind it.
pub fn draw_scene<S: Surface>(surface: &mut S, scene: &Scene) {
    surface.clear();

    let (width, height) = surface.size();
    surface.draw_text(
        (width / 2) as i32,
        height as i32 - 1,
        &format!("Score: {}", scene.score),
        Align::Center,
        TEXT_COLOR,
    );

    if scene.debug_overlay {
        let head = scene.snake.head();
        surface.draw_text(1, 0, &format!("Snake head: ({}, {})", head.x, head.y), Align::Left, TEXT_COLOR);
        surface.draw_text(1, 1, &format!("Food: ({}, {})", scene.food.x, scene.food.y), Align::Left, TEXT_COLOR);
    }

    let size = scene.cell_size;
    let px = |v: i32| v * size as i32;

    surface.fill_rect(px(scene.food.x), px(scene.food.y), size, size, FOOD_CHAR, FOOD_COLOR);

    let color = interpolate_color(START_COLOR, END_COLOR, scene.color_progress);
    for (i, segment) in scene.snake.body().enumerate() {
        let (ox, oy) = segment_offset(i, scene.color_progress, size);
        let glyph = if i == 0 { scene.snake.head_char() } else { SNAKE_BODY_CHAR };
        surface.fill_rect(px(segment.x) + ox, px(segment.y) + oy, size, size, glyph, color);
    }
}
