use crate::game::{Cell, GameConfig, GameState};
use macroquad::prelude::{
    BLACK, Color, DrawTextureParams, MouseButton, Rect, Texture2D, Vec2, WHITE, clear_background,
    draw_circle, draw_rectangle, draw_text, draw_texture_ex, is_mouse_button_pressed, load_texture,
    measure_text, mouse_position, screen_width, vec2,
};
use rand::Rng;

pub const APPLE_SPRITE_PATH: &str = "assets/apple.png";

const HEAD_COLOR: Color = Color::new(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, 220.0 / 255.0);
const APPLE_COLOR: Color = Color::new(204.0 / 255.0, 0.0, 0.0, 220.0 / 255.0);
const TEXT_COLOR: Color = APPLE_COLOR;
const BUTTON_COLOR: Color = Color::new(0.85, 0.85, 0.85, 1.0);

const LARGE_FONT: u16 = 75;
const MEDIUM_FONT: u16 = 40;
const BUTTON_FONT: u16 = 20;

const BUTTON_WIDTH: f32 = 150.0;
const BUTTON_HEIGHT: f32 = 50.0;

pub struct Renderer {
    apple_sprite: Option<Texture2D>,
}

impl Renderer {
    pub async fn load(sprite_path: &str) -> Self {
        let apple_sprite = match load_texture(sprite_path).await {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("unable to load apple sprite {sprite_path}: {err:?}");
                None
            }
        };
        Self { apple_sprite }
    }

    pub fn draw<R: Rng>(&self, state: &GameState<R>) {
        clear_background(BLACK);
        if state.is_running() {
            self.draw_board(state);
        } else {
            draw_game_over(state);
        }
    }

    fn draw_board<R: Rng>(&self, state: &GameState<R>) {
        let config = state.config();
        let size = config.cell_size as f32;

        let apple = pixel_origin(state.apple(), config);
        match &self.apple_sprite {
            Some(sprite) => draw_texture_ex(
                sprite,
                apple.x,
                apple.y,
                WHITE,
                DrawTextureParams { dest_size: Some(vec2(size, size)), ..Default::default() },
            ),
            None => draw_circle(apple.x + size / 2.0, apple.y + size / 2.0, size / 2.0, APPLE_COLOR),
        }

        // Draw tail first so the head stays on top while segments are stacked.
        for (i, segment) in state.snake().iter().enumerate().rev() {
            let color = if i == 0 { HEAD_COLOR } else { random_body_color() };
            let at = pixel_origin(*segment, config);
            draw_rectangle(at.x, at.y, size, size, color);
        }

        draw_centered_text(&format!("Score: {}", state.score()), MEDIUM_FONT, MEDIUM_FONT as f32);
    }
}

fn draw_game_over<R: Rng>(state: &GameState<R>) {
    let config = state.config();
    let top = config.screen_height as f32 / 3.0;
    draw_centered_text("Game Over", LARGE_FONT, top);
    draw_centered_text(
        &format!("High Score: {}", state.high_score()),
        MEDIUM_FONT,
        top + LARGE_FONT as f32,
    );
    draw_centered_text(
        &format!("Score: {}", state.score()),
        MEDIUM_FONT,
        top + LARGE_FONT as f32 + MEDIUM_FONT as f32 + 20.0,
    );

    let button = replay_button(config);
    draw_rectangle(button.x, button.y, button.w, button.h, BUTTON_COLOR);
    let label = "Replay";
    let m = measure_text(label, None, BUTTON_FONT, 1.0);
    draw_text(
        label,
        button.x + (button.w - m.width) / 2.0,
        button.y + (button.h + m.offset_y) / 2.0,
        BUTTON_FONT as f32,
        BLACK,
    );
}

/// Where the replay button sits on the game-over screen.
pub fn replay_button(config: &GameConfig) -> Rect {
    Rect::new(
        (config.screen_width as f32 - BUTTON_WIDTH) / 2.0,
        config.screen_height as f32 - 120.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// True on the frame the replay button is clicked.
pub fn replay_clicked(config: &GameConfig) -> bool {
    is_mouse_button_pressed(MouseButton::Left) && replay_button(config).contains(mouse_position().into())
}

fn pixel_origin(cell: Cell, config: &GameConfig) -> Vec2 {
    let (x, y) = cell.to_pixels(config.cell_size);
    vec2(x as f32, y as f32)
}

fn random_body_color() -> Color {
    Color::from_rgba(
        macroquad::rand::gen_range(0, 255),
        macroquad::rand::gen_range(0, 255),
        macroquad::rand::gen_range(0, 255),
        220,
    )
}

fn draw_centered_text(text: &str, font_size: u16, y: f32) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (screen_width() - m.width) / 2.0, y, font_size as f32, TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_button_is_centred_near_the_bottom() {
        let config = GameConfig::default();
        let button = replay_button(&config);
        assert_eq!(button.x, 225.0);
        assert_eq!(button.y, 480.0);
        assert!(button.contains(vec2(300.0, 500.0)));
        assert!(!button.contains(vec2(300.0, 300.0)));
    }

    #[test]
    fn cells_map_to_pixel_corners() {
        let config = GameConfig::default();
        assert_eq!(pixel_origin(Cell::new(2, 3), &config), vec2(50.0, 75.0));
    }
}
