//! Splash Screen
//!
//! Time-driven and self-terminating: fades the studio name in, holds it,
//! fades it out, then hands off to the title screen. Any key or pointer
//! button skips straight to the title.

use sdl2::pixels::Color;

use crate::input::{InputEvent, InputState};
use crate::render::RenderSurface;
use crate::screen::{Screen, ScreenContext, ScreenId};

const FADE_IN: f32 = 2.0;
const HOLD: f32 = 1.0;
const FADE_OUT: f32 = 2.0;

const STUDIO_NAME: &str = "YOUR GAME STUDIO";
const TEXT_SCALE: u32 = 4;

pub struct SplashScreen {
    fade_in: f32,
    hold: f32,
    fade_out: f32,
    elapsed: f32,
    alpha: u8,
    done: bool,
}

impl SplashScreen {
    pub fn new() -> Self {
        SplashScreen {
            fade_in: FADE_IN,
            hold: HOLD,
            fade_out: FADE_OUT,
            elapsed: 0.0,
            alpha: 0,
            done: false,
        }
    }

    fn total(&self) -> f32 {
        self.fade_in + self.hold + self.fade_out
    }

    /// The opacity envelope as a pure function of elapsed time: linear
    /// ramp up, hold at full, linear ramp down, zero past the end.
    pub fn alpha_at(&self, t: f32) -> u8 {
        if t < self.fade_in {
            (255.0 * t / self.fade_in) as u8
        } else if t < self.fade_in + self.hold {
            255
        } else if t < self.total() {
            let progress = (t - self.fade_in - self.hold) / self.fade_out;
            (255.0 * (1.0 - progress)) as u8
        } else {
            0
        }
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }
}

impl Screen for SplashScreen {
    fn enter(&mut self, _ctx: &mut ScreenContext) {
        self.elapsed = 0.0;
        self.alpha = 0;
        self.done = false;
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ScreenContext) {
        // Any key or pointer button skips the splash.
        match event {
            InputEvent::KeyDown(_) | InputEvent::MouseButtonDown { .. } => {
                ctx.goto(ScreenId::Title);
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: f32, _input: &InputState, ctx: &mut ScreenContext) {
        self.elapsed += dt;
        self.alpha = self.alpha_at(self.elapsed);

        // Request the hand-off once; the alpha is only a rendering hint
        // and never delays the transition.
        if self.elapsed >= self.total() && !self.done {
            self.done = true;
            ctx.goto(ScreenId::Title);
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        surface.clear(Color::RGB(0, 0, 0));

        let (width, height) = surface.size();
        let text_y = height as i32 / 2 - crate::text::text_height(TEXT_SCALE) as i32 / 2;
        surface.text_centered(
            STUDIO_NAME,
            width as i32 / 2,
            text_y,
            Color::RGBA(255, 255, 255, self.alpha),
            TEXT_SCALE,
        )
    }
}
