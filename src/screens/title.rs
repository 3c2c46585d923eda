//! Title Screen
//!
//! Static main menu: New Game, Options, Quit. Quit is modeled as a
//! termination request the application loop observes, so shutdown stays
//! orderly.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::gui::Button;
use crate::input::{InputEvent, InputState};
use crate::render::RenderSurface;
use crate::screen::{Screen, ScreenContext, ScreenId};

const GAME_TITLE: &str = "YOUR GAME";

const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 60;
const BUTTON_X: i32 = 300;

const NEW_GAME: usize = 0;
const OPTIONS: usize = 1;
const QUIT: usize = 2;

/// Button rectangles, top to bottom: New Game, Options, Quit.
pub(crate) fn layout() -> [Rect; 3] {
    [
        Rect::new(BUTTON_X, 250, BUTTON_WIDTH, BUTTON_HEIGHT),
        Rect::new(BUTTON_X, 330, BUTTON_WIDTH, BUTTON_HEIGHT),
        Rect::new(BUTTON_X, 410, BUTTON_WIDTH, BUTTON_HEIGHT),
    ]
}

pub struct TitleScreen {
    buttons: Vec<Button>,
}

impl TitleScreen {
    pub fn new() -> Self {
        TitleScreen {
            buttons: Vec::new(),
        }
    }
}

impl Screen for TitleScreen {
    fn enter(&mut self, _ctx: &mut ScreenContext) {
        let [new_game, options, quit] = layout();
        self.buttons = vec![
            Button::new(new_game, "New Game"),
            Button::new(options, "Options"),
            Button::new(quit, "Quit"),
        ];
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ScreenContext) {
        for (i, button) in self.buttons.iter_mut().enumerate() {
            if button.handle_event(event) {
                match i {
                    NEW_GAME => ctx.goto(ScreenId::Character),
                    OPTIONS => {
                        ctx.set_return_target(ScreenId::Title);
                        ctx.goto(ScreenId::Options);
                    }
                    QUIT => ctx.request_quit(),
                    _ => {}
                }
            }
        }
    }

    fn update(&mut self, _dt: f32, _input: &InputState, _ctx: &mut ScreenContext) {}

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        surface.clear(Color::RGB(20, 20, 40));

        let (width, _) = surface.size();
        surface.text_centered(
            GAME_TITLE,
            width as i32 / 2,
            100,
            Color::RGB(255, 255, 255),
            5,
        )?;

        for button in &self.buttons {
            button.draw(surface)?;
        }
        Ok(())
    }
}
