//! Input Event Abstraction
//!
//! Translates raw SDL2 events into the small set of [`InputEvent`]s the
//! screens understand. This decouples screen logic from SDL2 event
//! plumbing: screens never see `sdl2::event::Event`, and tests construct
//! `InputEvent`s directly.
//!
//! Held directional keys are not event-driven; the game loop polls them
//! each frame into an [`InputState`] snapshot, the same way gameplay
//! movement reads the keyboard in most SDL2 games.

use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::mouse::MouseButton;

/// Discrete keys the screens react to individually.
///
/// Everything else maps to [`Key::Other`], which still counts as "any key"
/// for the splash screen skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Return,
    Backspace,
    P,
    Other,
}

/// Pointer button identity for click handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Other,
}

/// A discrete input event, forwarded to the active screen once per event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window close or other external termination request.
    Quit,
    KeyDown(Key),
    /// Committed text from the OS text-input pipeline (name editing).
    TextInput(String),
    MouseMotion { x: i32, y: i32 },
    MouseButtonDown { x: i32, y: i32, button: PointerButton },
    MouseButtonUp { x: i32, y: i32, button: PointerButton },
}

/// Per-frame snapshot of the held directional keys (WASD or arrows).
///
/// Diagonals are simply two flags set at once; the player applies them as
/// an unconstrained vector sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Reads the current directional state from the SDL2 keyboard.
    pub fn from_keyboard(keyboard: &KeyboardState) -> Self {
        InputState {
            up: keyboard.is_scancode_pressed(Scancode::W)
                || keyboard.is_scancode_pressed(Scancode::Up),
            down: keyboard.is_scancode_pressed(Scancode::S)
                || keyboard.is_scancode_pressed(Scancode::Down),
            left: keyboard.is_scancode_pressed(Scancode::A)
                || keyboard.is_scancode_pressed(Scancode::Left),
            right: keyboard.is_scancode_pressed(Scancode::D)
                || keyboard.is_scancode_pressed(Scancode::Right),
        }
    }
}

fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Escape => Key::Escape,
        Keycode::Return | Keycode::KpEnter => Key::Return,
        Keycode::Backspace => Key::Backspace,
        Keycode::P => Key::P,
        _ => Key::Other,
    }
}

fn map_mouse_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}

/// Translates an SDL2 event into an [`InputEvent`].
///
/// Returns `None` for event kinds the screens have no use for (key
/// releases, window events, mouse wheel, ...).
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::KeyDown(map_keycode(*keycode))),
        Event::TextInput { text, .. } => Some(InputEvent::TextInput(text.clone())),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMotion { x: *x, y: *y }),
        Event::MouseButtonDown {
            x, y, mouse_btn, ..
        } => Some(InputEvent::MouseButtonDown {
            x: *x,
            y: *y,
            button: map_mouse_button(*mouse_btn),
        }),
        Event::MouseButtonUp {
            x, y, mouse_btn, ..
        } => Some(InputEvent::MouseButtonUp {
            x: *x,
            y: *y,
            button: map_mouse_button(*mouse_btn),
        }),
        _ => None,
    }
}
