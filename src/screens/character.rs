//! Character Creation Screen
//!
//! Editable character name (bounded length) and a cyclic class selector.
//! The preview block and description are pure functions of the selected
//! class.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::gui::Button;
use crate::input::{InputEvent, InputState, Key};
use crate::render::RenderSurface;
use crate::screen::{Screen, ScreenContext, ScreenId};

pub const CLASSES: [&str; 4] = ["Warrior", "Mage", "Rogue", "Archer"];
pub const MAX_NAME_LEN: usize = 12;

const NAME_BUTTON: usize = 0;
const PREV_CLASS: usize = 1;
const NEXT_CLASS: usize = 2;
const START_GAME: usize = 3;
const BACK: usize = 4;

/// Button rectangles: name toggle, previous class, next class, start, back.
pub(crate) fn layout() -> [Rect; 5] {
    [
        Rect::new(200, 200, 150, 40),
        Rect::new(450, 200, 40, 40),
        Rect::new(650, 200, 40, 40),
        Rect::new(250, 450, 120, 50),
        Rect::new(430, 450, 120, 50),
    ]
}

fn class_color(class: &str) -> Color {
    match class {
        "Warrior" => Color::RGB(200, 100, 100),
        "Mage" => Color::RGB(100, 100, 200),
        "Rogue" => Color::RGB(100, 200, 100),
        "Archer" => Color::RGB(200, 200, 100),
        _ => Color::RGB(150, 150, 150),
    }
}

fn class_description(class: &str) -> &'static str {
    match class {
        "Warrior" => "Strong melee fighter with high defense",
        "Mage" => "Casts powerful spells from a distance",
        "Rogue" => "Quick and sneaky with critical strikes",
        "Archer" => "Ranged attacks with bow and arrow",
        _ => "",
    }
}

pub struct CharacterScreen {
    name: String,
    class_index: usize,
    editing_name: bool,
    cursor_timer: f32,
    buttons: Vec<Button>,
}

impl CharacterScreen {
    pub fn new() -> Self {
        CharacterScreen {
            name: String::from("Hero"),
            class_index: 0,
            editing_name: false,
            cursor_timer: 0.0,
            buttons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_name(&self) -> &'static str {
        CLASSES[self.class_index]
    }

    fn next_class(&mut self) {
        self.class_index = (self.class_index + 1) % CLASSES.len();
    }

    fn prev_class(&mut self) {
        self.class_index = (self.class_index + CLASSES.len() - 1) % CLASSES.len();
    }

    fn append_text(&mut self, text: &str) {
        for c in text.chars() {
            if self.name.chars().count() >= MAX_NAME_LEN {
                break;
            }
            if !c.is_control() {
                self.name.push(c);
            }
        }
    }
}

impl Screen for CharacterScreen {
    fn enter(&mut self, _ctx: &mut ScreenContext) {
        let [name, prev, next, start, back] = layout();
        self.buttons = vec![
            Button::new(name, "Name"),
            Button::new(prev, "<"),
            Button::new(next, ">"),
            Button::new(start, "Start Game"),
            Button::new(back, "Back"),
        ];
        self.editing_name = false;
        self.cursor_timer = 0.0;
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ScreenContext) {
        for i in 0..self.buttons.len() {
            if self.buttons[i].handle_event(event) {
                match i {
                    NAME_BUTTON => self.editing_name = !self.editing_name,
                    PREV_CLASS => self.prev_class(),
                    NEXT_CLASS => self.next_class(),
                    START_GAME => ctx.goto(ScreenId::Game),
                    BACK => ctx.goto(ScreenId::Title),
                    _ => {}
                }
            }
        }

        if self.editing_name {
            match event {
                InputEvent::KeyDown(Key::Return) | InputEvent::KeyDown(Key::Escape) => {
                    self.editing_name = false;
                }
                InputEvent::KeyDown(Key::Backspace) => {
                    self.name.pop();
                }
                InputEvent::TextInput(text) => self.append_text(text),
                _ => {}
            }
        }
    }

    fn update(&mut self, dt: f32, _input: &InputState, _ctx: &mut ScreenContext) {
        self.cursor_timer += dt;
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        surface.clear(Color::RGB(40, 20, 60));

        let (width, _) = surface.size();
        let center_x = width as i32 / 2;
        let white = Color::RGB(255, 255, 255);

        surface.text_centered("CHARACTER CREATION", center_x, 50, white, 3)?;

        let [name_box, ..] = layout();
        surface.text("Name:", name_box.x(), name_box.y() - 40, white, 2)?;

        // Name input box, highlighted while editing.
        let box_fill = if self.editing_name {
            Color::RGB(100, 100, 100)
        } else {
            Color::RGB(70, 70, 70)
        };
        surface.fill_rect(name_box, box_fill)?;
        surface.outline_rect(name_box, Color::RGB(200, 200, 200), 2)?;

        // Blinking cursor at 2 Hz while editing.
        let mut name_text = self.name.clone();
        if self.editing_name && (self.cursor_timer * 2.0) as i32 % 2 == 1 {
            name_text.push('|');
        }
        surface.text(&name_text, name_box.x() + 5, name_box.y() + 13, white, 2)?;

        surface.text("Class:", 450, 160, white, 2)?;
        surface.text_centered(self.class_name(), 570, 213, white, 2)?;

        // Preview block is a pure function of the selected class.
        let preview = Rect::new(300, 280, 200, 120);
        surface.fill_rect(preview, class_color(self.class_name()))?;
        surface.outline_rect(preview, white, 3)?;

        surface.text_centered(
            class_description(self.class_name()),
            center_x,
            420,
            Color::RGB(200, 200, 200),
            1,
        )?;

        for button in &self.buttons {
            button.draw(surface)?;
        }
        Ok(())
    }
}
