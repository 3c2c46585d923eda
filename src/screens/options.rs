//! Options Screen
//!
//! Volume sliders, a fullscreen toggle, and Apply/Back. Slider values
//! mirror into the [`Settings`] snapshot every update tick; Apply commits
//! the snapshot through the stubbed audio/display boundary. Back (or
//! Escape) returns to whichever screen opened options.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::gui::{Button, Slider};
use crate::input::{InputEvent, InputState, Key};
use crate::render::RenderSurface;
use crate::screen::{Screen, ScreenContext};
use crate::settings::Settings;

const SLIDER_X: i32 = 300;
const SLIDER_WIDTH: u32 = 200;

const FULLSCREEN: usize = 0;
const BACK: usize = 1;
const APPLY: usize = 2;

/// Button rectangles: fullscreen toggle, back, apply.
pub(crate) fn layout() -> [Rect; 3] {
    [
        Rect::new(300, 440, 200, 50),
        Rect::new(250, 520, 100, 40),
        Rect::new(450, 520, 100, 40),
    ]
}

fn fullscreen_label(settings: &Settings) -> &'static str {
    if settings.fullscreen {
        "Windowed"
    } else {
        "Fullscreen"
    }
}

pub struct OptionsScreen {
    settings: Settings,
    sliders: Vec<Slider>,
    buttons: Vec<Button>,
}

impl OptionsScreen {
    pub fn new() -> Self {
        OptionsScreen {
            settings: Settings::default(),
            sliders: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Screen for OptionsScreen {
    fn enter(&mut self, _ctx: &mut ScreenContext) {
        // Widgets are rebuilt from the surviving snapshot, so values
        // persist across visits within the process.
        self.sliders = vec![
            Slider::new(
                SLIDER_X,
                200,
                SLIDER_WIDTH,
                self.settings.master_volume,
                "Master Volume",
            ),
            Slider::new(
                SLIDER_X,
                280,
                SLIDER_WIDTH,
                self.settings.sfx_volume,
                "SFX Volume",
            ),
            Slider::new(
                SLIDER_X,
                360,
                SLIDER_WIDTH,
                self.settings.music_volume,
                "Music Volume",
            ),
        ];
        let [fullscreen, back, apply] = layout();
        self.buttons = vec![
            Button::new(fullscreen, fullscreen_label(&self.settings)),
            Button::new(back, "Back"),
            Button::new(apply, "Apply"),
        ];
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ScreenContext) {
        for slider in &mut self.sliders {
            slider.handle_event(event);
        }

        for i in 0..self.buttons.len() {
            if self.buttons[i].handle_event(event) {
                match i {
                    FULLSCREEN => {
                        self.settings.fullscreen = !self.settings.fullscreen;
                        self.buttons[i].set_label(fullscreen_label(&self.settings));
                    }
                    BACK => ctx.goto(ctx.return_target()),
                    APPLY => self.settings.apply(),
                    _ => {}
                }
            }
        }

        if let InputEvent::KeyDown(Key::Escape) = event {
            ctx.goto(ctx.return_target());
        }
    }

    fn update(&mut self, _dt: f32, _input: &InputState, _ctx: &mut ScreenContext) {
        // Mirror slider values continuously, not only on release.
        self.settings.master_volume = self.sliders[0].value();
        self.settings.sfx_volume = self.sliders[1].value();
        self.settings.music_volume = self.sliders[2].value();
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        surface.clear(Color::RGB(20, 20, 40));

        let (width, _) = surface.size();
        surface.text_centered("OPTIONS", width as i32 / 2, 50, Color::RGB(255, 255, 255), 3)?;

        let hint_color = Color::RGB(180, 180, 180);
        surface.text("Drag sliders to adjust audio levels", 50, 100, hint_color, 1)?;
        surface.text("Changes take effect immediately", 50, 120, hint_color, 1)?;

        for slider in &self.sliders {
            slider.draw(surface)?;
        }
        for button in &self.buttons {
            button.draw(surface)?;
        }
        Ok(())
    }
}
