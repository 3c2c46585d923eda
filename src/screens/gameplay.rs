//! Gameplay Screen
//!
//! A player moving over a grid, a time-derived score, and a pause
//! overlay. Escape opens options and records this screen as the return
//! target so "Back" comes home.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::input::{InputEvent, InputState, Key};
use crate::player::Player;
use crate::render::RenderSurface;
use crate::screen::{Screen, ScreenContext, ScreenId};
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

const GRID_STEP: u32 = 50;
const SCORE_PER_SECOND: f32 = 10.0;

pub struct GameplayScreen {
    player: Player,
    game_time: f32,
    score: u32,
    paused: bool,
}

impl GameplayScreen {
    pub fn new() -> Self {
        GameplayScreen {
            player: Player::new(400.0, 300.0),
            game_time: 0.0,
            score: 0,
            paused: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}

impl Screen for GameplayScreen {
    fn enter(&mut self, _ctx: &mut ScreenContext) {
        self.player = Player::new(400.0, 300.0);
        self.game_time = 0.0;
        self.score = 0;
        self.paused = false;
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ScreenContext) {
        match event {
            InputEvent::KeyDown(Key::Escape) => {
                ctx.set_return_target(ScreenId::Game);
                ctx.goto(ScreenId::Options);
            }
            InputEvent::KeyDown(Key::P) => self.paused = !self.paused,
            _ => {}
        }
    }

    fn update(&mut self, dt: f32, input: &InputState, _ctx: &mut ScreenContext) {
        // Time, score, and movement all freeze while paused; rendering
        // continues.
        if self.paused {
            return;
        }
        self.game_time += dt;
        self.player
            .update(dt, input, (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32));
        self.score = (self.game_time * SCORE_PER_SECOND) as u32;
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        surface.clear(Color::RGB(20, 40, 20));

        let (width, height) = surface.size();
        let grid_color = Color::RGB(0, 60, 0);
        for x in (0..width).step_by(GRID_STEP as usize) {
            surface.line(x as i32, 0, x as i32, height as i32, grid_color)?;
        }
        for y in (0..height).step_by(GRID_STEP as usize) {
            surface.line(0, y as i32, width as i32, y as i32, grid_color)?;
        }

        self.player.draw(surface)?;

        let white = Color::RGB(255, 255, 255);
        let gray = Color::RGB(200, 200, 200);
        surface.text(&format!("Score: {}", self.score), 10, 10, white, 2)?;
        surface.text(&format!("Time: {:.1}s", self.game_time), 10, 40, white, 2)?;

        let hints = ["WASD/Arrow Keys: Move", "ESC: Options", "P: Pause"];
        for (i, hint) in hints.iter().enumerate() {
            surface.text(hint, 10, height as i32 - 50 + i as i32 * 15, gray, 1)?;
        }

        if self.paused {
            surface.fill_rect(
                Rect::new(0, 0, width, height),
                Color::RGBA(0, 0, 0, 128),
            )?;
            let center_x = width as i32 / 2;
            surface.text_centered("PAUSED", center_x, 270, white, 3)?;
            surface.text_centered("Press P to resume", center_x, 310, gray, 2)?;
        }
        Ok(())
    }
}
